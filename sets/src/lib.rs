//! Finite sets of hashable values with the usual set algebra.
//!
//! ```
//! use sets::set;
//!
//! let a = set![1, 2, 3];
//! let b = set![3, 4, 5];
//! assert_eq!(a.union(&b), set![1, 2, 3, 4, 5]);
//! assert_eq!(a.intersect(&b), set![3]);
//! assert_eq!(a.difference(&b), set![1, 2]);
//! ```

mod error;
mod ops;
pub mod params;
mod set;

pub use error::{SetError, SetOp};
pub use set::Set;

/// Builds a [`Set`] from a list of values, duplicates being collapsed.
/// With no argument, builds an empty set.
#[macro_export]
macro_rules! set {
    () => {
        $crate::Set::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Set::from_values([$($value),+])
    };
}
