use env_param::EnvParam;

/// Number of elements a set created with [`Set::new`](crate::Set::new) can hold before reallocating.
pub static DEFAULT_CAPACITY: EnvParam<usize> = EnvParam::new("SETS_DEFAULT_CAPACITY", "0");
