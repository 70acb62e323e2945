//! Error types shared by all operations.

use thiserror::Error;

/// Result type alias for FE1 operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The two observable failure kinds of encryption and decryption.
///
/// No other kinds exist, no partial results are ever produced, and failures
/// are deterministic: retrying with identical inputs fails identically.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    /// A caller-supplied input violates the documented contract. Raised
    /// before any cryptographic work happens.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The inputs are well formed but the algorithm cannot proceed, such as
    /// a modulus that turns out to be prime.
    #[error("FPE failure: {0}")]
    Fpe(&'static str),
}
