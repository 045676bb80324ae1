//! The algorithm trait and the key type shared by all algorithms.

use core::fmt;

#[cfg(feature = "rsa")]
use crate::alg::{RsaPrivateKey, RsaPublicKey};
use crate::{alg::SecretBytes, alloc::Vec, Error};

/// JWT signing algorithm.
///
/// Implementations are stateless, so a single instance (e.g., one of the singletons
/// exported from the crate root) can be shared across threads.
pub trait Alg: Send + Sync + fmt::Debug {
    /// Returns the name of this algorithm, as mentioned in the `alg` field of the JWT header.
    fn name(&self) -> &'static str;

    /// Signs `header_and_payload` with the `key` and returns raw signature bytes
    /// (i.e., not base64-encoded).
    ///
    /// `header_and_payload` must be the exact byte string placed in the token before
    /// the signature segment: the base64url-encoded header, `.`, and the base64url-encoded
    /// payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if the key is not usable for signing with this algorithm.
    fn sign(&self, header_and_payload: &[u8], key: Key<'_>) -> Result<Vec<u8>, Error>;

    /// Verifies the raw (base64-decoded) `signature` of `header_and_payload`
    /// against the `key`.
    ///
    /// # Errors
    ///
    /// - Returns [`Error::InvalidKey`] if the key is not usable for verification
    ///   with this algorithm. This check precedes signature verification.
    /// - Returns [`Error::InvalidSignature`] if the signature does not match.
    fn verify(
        &self,
        header_and_payload: &[u8],
        signature: &[u8],
        key: Key<'_>,
    ) -> Result<(), Error>;
}

/// Key supplied to an [`Alg`] for a single signing or verification call.
///
/// The key is borrowed; algorithms never retain key material.
///
/// | Algorithm | Signing | Verification |
/// |-----------|---------|--------------|
/// | `none` | any (ignored) | any (ignored) |
/// | `HS*` | [`Secret`](Self::Secret) | [`Secret`](Self::Secret) |
/// | `RS*` | [`RsaPrivate`](Self::RsaPrivate) | [`RsaPublic`](Self::RsaPublic) or [`RsaPrivate`](Self::RsaPrivate) |
#[derive(Clone, Copy)]
pub enum Key<'a> {
    /// Shared secret for `HS*` algorithms. May have any length.
    Secret(&'a [u8]),
    /// RSA private key. Since it contains the public key, it may be used for verification
    /// as well.
    #[cfg(feature = "rsa")]
    #[cfg_attr(docsrs, doc(cfg(feature = "rsa")))]
    RsaPrivate(&'a RsaPrivateKey),
    /// RSA public key.
    #[cfg(feature = "rsa")]
    #[cfg_attr(docsrs, doc(cfg(feature = "rsa")))]
    RsaPublic(&'a RsaPublicKey),
}

impl fmt::Debug for Key<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Secret(bytes) => formatter
                .debug_struct("Secret")
                .field("len", &bytes.len())
                .finish(),
            #[cfg(feature = "rsa")]
            Self::RsaPrivate(_) => formatter.debug_tuple("RsaPrivate").field(&"_").finish(),
            #[cfg(feature = "rsa")]
            Self::RsaPublic(key) => formatter.debug_tuple("RsaPublic").field(key).finish(),
        }
    }
}

impl<'a> From<&'a [u8]> for Key<'a> {
    fn from(secret: &'a [u8]) -> Self {
        Self::Secret(secret)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Key<'a> {
    fn from(secret: &'a [u8; N]) -> Self {
        Self::Secret(secret)
    }
}

impl<'a> From<&'a Vec<u8>> for Key<'a> {
    fn from(secret: &'a Vec<u8>) -> Self {
        Self::Secret(secret)
    }
}

impl<'a> From<&'a SecretBytes<'_>> for Key<'a> {
    fn from(secret: &'a SecretBytes<'_>) -> Self {
        Self::Secret(secret)
    }
}

#[cfg(feature = "rsa")]
impl<'a> From<&'a RsaPrivateKey> for Key<'a> {
    fn from(key: &'a RsaPrivateKey) -> Self {
        Self::RsaPrivate(key)
    }
}

#[cfg(feature = "rsa")]
impl<'a> From<&'a RsaPublicKey> for Key<'a> {
    fn from(key: &'a RsaPublicKey) -> Self {
        Self::RsaPublic(key)
    }
}
