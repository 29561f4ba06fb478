//! Global tuning parameters that can be overridden through environment variables.
//!
//! An [`EnvParam`] couples the name of an environment variable with the textual form of its
//! default value. It is meant to be declared as a `static` and read wherever the tuned code needs it.
//! Such parameters are for knobs that do not deserve a command line option, e.g., the initial
//! capacity of a container.
//!
//! ```
//! use env_param::EnvParam;
//! static CAPACITY: EnvParam<usize> = EnvParam::new("DOC_CAPACITY", "16");
//!
//! fn main() {
//!   // DOC_CAPACITY is not set: the default is parsed and cached
//!   assert_eq!(CAPACITY.get(), 16);
//! }
//! ```
//!
//! The value is resolved once, on first access, and cached for the lifetime of the program.
//! Changing the environment afterwards has no effect. A value can also be forced before the first read:
//!
//! ```
//! use env_param::{EnvParam, ParamError};
//! static LIMIT: EnvParam<u32> = EnvParam::new("DOC_LIMIT", "0");
//!
//! fn main() {
//!   LIMIT.set(10).unwrap();
//!   assert_eq!(LIMIT.get(), 10);
//!   assert_eq!(LIMIT.set(11), Err(ParamError::AlreadyInitialized("DOC_LIMIT")));
//! }
//! ```

use once_cell::sync::OnceCell;
use std::env::VarError;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    #[error("parameter {name}: invalid default value \"{default}\"")]
    InvalidDefault { name: &'static str, default: &'static str },
    #[error("parameter {0} is already initialized (i.e. was previously accessed)")]
    AlreadyInitialized(&'static str),
}

pub struct EnvParam<T> {
    value: OnceCell<T>,
    env: &'static str,
    default: &'static str,
}

impl<T> EnvParam<T> {
    /// Creates a parameter read from the environment variable `env`, falling back to `default`.
    pub const fn new(env: &'static str, default: &'static str) -> EnvParam<T> {
        EnvParam {
            value: OnceCell::new(),
            env,
            default,
        }
    }

    /// Name of the environment variable backing this parameter.
    pub fn name(&self) -> &'static str {
        self.env
    }

    pub fn default_text(&self) -> &'static str {
        self.default
    }

    /// Returns true if the value was already resolved (read or set).
    pub fn is_initialized(&self) -> bool {
        self.value.get().is_some()
    }
}

impl<T: FromStr> EnvParam<T> {
    fn parse_default(&self) -> Result<T, ParamError> {
        T::from_str(self.default).map_err(|_| ParamError::InvalidDefault {
            name: self.env,
            default: self.default,
        })
    }

    fn resolve(&self) -> Result<T, ParamError> {
        match std::env::var(self.env) {
            Ok(text) => match T::from_str(&text) {
                Ok(value) => Ok(value),
                Err(_) => {
                    tracing::warn!(
                        "could not parse \"{}\" for environment variable {}, using default \"{}\"",
                        text,
                        self.env,
                        self.default
                    );
                    self.parse_default()
                }
            },
            Err(VarError::NotPresent) => self.parse_default(),
            Err(err) => {
                tracing::warn!("{}: {}, using default \"{}\"", self.env, err, self.default);
                self.parse_default()
            }
        }
    }

    /// Returns the value of the parameter, resolving it on the first call.
    ///
    /// An unparsable environment value is reported as a warning and replaced by the default.
    /// An unparsable default is an error.
    pub fn try_get_ref(&self) -> Result<&T, ParamError> {
        self.value.get_or_try_init(|| self.resolve())
    }

    /// Same as [`EnvParam::try_get_ref`].
    ///
    /// # Panic
    /// Panics if the default value cannot be parsed, which is a programming error in the declaration.
    pub fn get_ref(&self) -> &T {
        match self.try_get_ref() {
            Ok(value) => value,
            Err(err) => panic!("[env_param] {err}"),
        }
    }

    pub fn get(&self) -> T
    where
        T: Copy,
    {
        *self.get_ref()
    }

    /// Forces the parameter to `value`. Fails if it was already read or set.
    pub fn set(&self, value: T) -> Result<(), ParamError> {
        self.value
            .set(value)
            .map_err(|_| ParamError::AlreadyInitialized(self.env))
    }
}
