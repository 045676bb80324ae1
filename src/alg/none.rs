//! `none` algorithm for unsecured JWTs.

use crate::{alloc::Vec, Alg, Error, Key};

/// `none` algorithm producing unsecured tokens, which carry an empty signature.
///
/// The key is ignored both during signing and verification. A non-empty signature
/// fails verification, since it cannot originate from this algorithm.
///
/// See [RFC 7518] for the algorithm specification.
///
/// [RFC 7518]: https://www.rfc-editor.org/rfc/rfc7518.html#section-3.6
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Unsecured;

impl Alg for Unsecured {
    fn name(&self) -> &'static str {
        "none"
    }

    fn sign(&self, _header_and_payload: &[u8], _key: Key<'_>) -> Result<Vec<u8>, Error> {
        Ok(Vec::new())
    }

    fn verify(
        &self,
        _header_and_payload: &[u8],
        signature: &[u8],
        _key: Key<'_>,
    ) -> Result<(), Error> {
        if signature.is_empty() {
            Ok(())
        } else {
            Err(reject!(self.name(), Error::InvalidSignature))
        }
    }
}
