//! Error handling.

use core::fmt;

use crate::alloc::String;

/// Errors that can occur when signing a message or verifying its signature.
///
/// Both errors are terminal for the call that raised them; the caller should reject
/// the token on any error.
///
/// # Examples
///
/// ```
/// use jwt_alg::{Alg, Error, Key, NONE};
///
/// let err = NONE.verify(b"header.payload", &[1], Key::from(b"")).unwrap_err();
/// assert_eq!(err, Error::InvalidSignature);
/// assert_eq!(err.to_string(), "invalid token signature");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Token signature has failed verification.
    InvalidSignature,
    /// Key has a type or shape not supported by the algorithm (e.g., an RSA key
    /// supplied to an `HS*` algorithm, or an RSA key with a modulus that is too short).
    InvalidKey,
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::InvalidSignature => "invalid token signature",
            Self::InvalidKey => "invalid key",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Error returned when parsing an algorithm from an unknown name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgError {
    name: String,
}

impl UnknownAlgError {
    pub(crate) fn new(name: &str) -> Self {
        Self { name: name.into() }
    }

    /// Returns the name that failed to parse.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for UnknownAlgError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Unknown JWT signing algorithm: {}", self.name)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownAlgError {}
