//! JWT algorithms based on HMACs.

use hmac::{
    digest::{InvalidLength, KeyInit},
    Mac,
};
use rand_core::{CryptoRng, RngCore};
use sha2::{Sha256, Sha384, Sha512};
use subtle::ConstantTimeEq;

use core::str::FromStr;

use crate::{
    alg::{HashAlg, SecretBytes},
    alloc::{vec, Vec},
    Alg, Error, Key, UnknownAlgError,
};

/// Computes HMAC of the `message` with the specified hash function and `key`.
fn compute_hmac(
    hash_alg: HashAlg,
    key: &[u8],
    message: &[u8],
) -> Result<Vec<u8>, InvalidLength> {
    fn compute<M: Mac + KeyInit>(
        key: &[u8],
        message: &[u8],
    ) -> Result<Vec<u8>, InvalidLength> {
        let mut mac = <M as Mac>::new_from_slice(key)?;
        mac.update(message);
        Ok(mac.finalize().into_bytes().to_vec())
    }

    match hash_alg {
        HashAlg::Sha256 => compute::<hmac::Hmac<Sha256>>(key, message),
        HashAlg::Sha384 => compute::<hmac::Hmac<Sha384>>(key, message),
        HashAlg::Sha512 => compute::<hmac::Hmac<Sha512>>(key, message),
    }
}

/// Integrity algorithm using HMAC with one of the hash functions from the SHA-2 family:
/// `HS256`, `HS384` or `HS512`.
///
/// The key is a shared secret of any length supplied as [`Key::Secret`]; other keys
/// are rejected with [`Error::InvalidKey`]. Signatures are compared in constant time.
///
/// See [RFC 7518] for the algorithm specification.
///
/// [RFC 7518]: https://tools.ietf.org/html/rfc7518#section-3.2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hmac {
    hash_alg: HashAlg,
}

impl Hmac {
    /// HMAC with the specified hash function.
    pub const fn new(hash_alg: HashAlg) -> Self {
        Self { hash_alg }
    }

    /// HMAC with SHA-256.
    pub const fn hs256() -> Self {
        Self::new(HashAlg::Sha256)
    }

    /// HMAC with SHA-384.
    pub const fn hs384() -> Self {
        Self::new(HashAlg::Sha384)
    }

    /// HMAC with SHA-512.
    pub const fn hs512() -> Self {
        Self::new(HashAlg::Sha512)
    }

    /// Returns the hash function used by this algorithm.
    pub const fn hash_alg(&self) -> HashAlg {
        self.hash_alg
    }

    /// Generates a random key using a cryptographically secure RNG. The key length
    /// is equal to the block size of the hash function (64 bytes for `HS256`,
    /// 128 bytes for `HS384` and `HS512`).
    pub fn generate_key<R: CryptoRng + RngCore>(&self, rng: &mut R) -> SecretBytes<'static> {
        let mut bytes = vec![0_u8; self.hash_alg.block_size()];
        rng.fill_bytes(&mut bytes);
        SecretBytes::owned(bytes)
    }

    fn secret<'a>(&self, key: Key<'a>) -> Result<&'a [u8], Error> {
        match key {
            Key::Secret(secret) => Ok(secret),
            #[allow(unreachable_patterns)]
            _ => Err(reject!(self.name(), Error::InvalidKey)),
        }
    }
}

impl Alg for Hmac {
    fn name(&self) -> &'static str {
        match self.hash_alg {
            HashAlg::Sha256 => "HS256",
            HashAlg::Sha384 => "HS384",
            HashAlg::Sha512 => "HS512",
        }
    }

    fn sign(&self, header_and_payload: &[u8], key: Key<'_>) -> Result<Vec<u8>, Error> {
        let secret = self.secret(key)?;
        compute_hmac(self.hash_alg, secret, header_and_payload)
            .map_err(|_| reject!(self.name(), Error::InvalidKey))
    }

    fn verify(
        &self,
        header_and_payload: &[u8],
        signature: &[u8],
        key: Key<'_>,
    ) -> Result<(), Error> {
        let secret = self.secret(key)?;
        let expected = compute_hmac(self.hash_alg, secret, header_and_payload)
            .map_err(|_| reject!(self.name(), Error::InvalidKey))?;
        // `ct_eq` is constant-time for slices of equal length; the length is not secret.
        if bool::from(expected.ct_eq(signature)) {
            Ok(())
        } else {
            Err(reject!(self.name(), Error::InvalidSignature))
        }
    }
}

impl FromStr for Hmac {
    type Err = UnknownAlgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("HS")
            .and_then(HashAlg::from_suffix)
            .map(Self::new)
            .ok_or_else(|| UnknownAlgError::new(s))
    }
}
