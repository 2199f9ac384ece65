//! Error types for tnorm.
//!
//! A single `thiserror`-derived enum covers the whole workspace. The
//! `ensure!` and `fail!` macros are the preferred way to report argument
//! and runtime errors from fallible entry points.

use thiserror::Error;

/// The top-level error type used throughout tnorm.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A vector or matrix argument does not match the sampler dimension.
    #[error("dimension mismatch: expected {expected}, got {found}")]
    DimensionMismatch {
        /// The dimension required by the receiving object.
        expected: usize,
        /// The dimension of the offending argument.
        found: usize,
    },

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An iterative routine exhausted its iteration limit without
    /// producing a result.
    #[error("failed to converge: {0}")]
    NonConvergence(String),
}

impl Error {
    /// Build a [`Error::DimensionMismatch`] after comparing two dimensions.
    ///
    /// Returns `Ok(())` when they agree, so callers can use `?` directly.
    pub fn check_dimension(expected: usize, found: usize) -> Result<()> {
        if expected == found {
            Ok(())
        } else {
            Err(Error::DimensionMismatch { expected, found })
        }
    }
}

/// Shorthand `Result` type used throughout tnorm.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use tn_core::ensure;
/// fn positive(x: f64) -> tn_core::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use tn_core::fail;
/// fn always_err() -> tn_core::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
