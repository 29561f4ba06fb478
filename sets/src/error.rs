use derive_more::derive::Display;
use thiserror::Error;

/// Binary operations of the set algebra.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
pub enum SetOp {
    #[display("union")]
    Union,
    #[display("intersect")]
    Intersect,
    #[display("difference")]
    Difference,
}

/// Failure of an operation on sets.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SetError {
    /// The second operand of a binary operation was not provided.
    #[error("missing second operand for {0}")]
    MissingOperand(SetOp),
}
