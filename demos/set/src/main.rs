use anyhow::Result;
use clap::Parser;
use sets::{set, Set};
use std::time::Instant;

/// Builds a few sets and prints them along with the results of the set algebra.
#[derive(Parser, Debug)]
#[clap(about = "Demonstration of finite sets")]
struct Opt {
    /// Logging level to use: one of "error", "warn", "info", "debug", "trace"
    #[clap(short, long, default_value = "info")]
    log_level: tracing::Level,

    /// Size of the range `0..count` used for the membership demonstration
    #[clap(short = 'n', long, default_value = "10")]
    count: u64,
}

/// A value outside of the range `0..count`.
fn absent_value(count: u64) -> u64 {
    count.saturating_add(3)
}

fn main() -> Result<()> {
    // Terminate the process if a thread panics.
    let orig_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        orig_hook(panic_info);
        std::process::exit(1);
    }));

    let opt = Opt::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_timer(tracing_subscriber::fmt::time::Uptime::from(Instant::now()))
        .with_thread_ids(true)
        .with_max_level(opt.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut s = Set::new();
    s.add([1, 2, 3, 4, 4]);
    println!("{}", s);
    println!("{}", s.len());
    s.clear();
    println!("{}", s);
    println!("{}", s.len());

    let a = set![1, 2];
    let b = set![2, 3];
    println!("{} {}", a, b);
    let c = a.try_union(Some(&b))?;
    println!("{} {}", a, b);
    println!("{}", c);
    let d = a.try_intersect(Some(&b))?;
    println!("{} {}", a, b);
    println!("{}", d);
    let e = a.try_difference(Some(&b))?;
    println!("{} {}", a, b);
    println!("{}", e);

    let n = opt.count;
    let mut range = Set::from_values(0..n);
    tracing::info!("built the range 0..{} with {} elements", n, range.len());
    println!("has({}): {}", 2, range.has(&2));
    let absent = absent_value(n);
    println!("has({}): {}", absent, range.has(&absent));
    println!("add_if_not_exist({}): {}", absent, range.add_if_not_exist(absent));
    println!("add_if_not_exist({}): {}", absent, range.add_if_not_exist(absent));
    println!("size: {}", range.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_value() {
        assert_eq!(absent_value(10), 13);
        assert_eq!(absent_value(0), 3);
        // does not overflow for the largest counts
        assert_eq!(absent_value(u64::MAX - 1), u64::MAX);
        assert_eq!(absent_value(u64::MAX), u64::MAX);
    }
}
