//! Error types for decimal big integer arithmetic.

/// Errors reported by fallible [`DecInt`](crate::DecInt) operations.
///
/// Every error is synchronous: the failing operation returns immediately
/// and its operands are left unmodified, because preconditions are checked
/// before any mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    /// A character outside `0`-`9`, or an empty string, was given to the
    /// parser.
    #[error("invalid digit in decimal string")]
    InvalidDigit,

    /// A subtraction or decrement would produce a negative result.
    #[error("arithmetic underflow")]
    Underflow,

    /// The divisor of a division or modulo was zero.
    #[error("division by zero")]
    DivideByZero,

    /// A digit position past the most significant digit was requested.
    #[error("digit index {0} out of range")]
    IndexOutOfRange(usize),
}

pub type Result<T> = std::result::Result<T, ArithmeticError>;
