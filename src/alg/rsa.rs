//! RSA-based JWT schemes: `RS256`, `RS384` and `RS512`.

pub use rsa::{RsaPrivateKey, RsaPublicKey};

use rand_core::{CryptoRng, OsRng, RngCore};
use rsa::{traits::PublicKeyParts, Pkcs1v15Sign};
use sha2::{Sha256, Sha384, Sha512};

use core::{fmt, str::FromStr};

use crate::{alg::HashAlg, alloc::Vec, Alg, Error, Key, UnknownAlgError};

/// Minimum supported bit length of the RSA modulus, as per [RFC 7518].
///
/// [RFC 7518]: https://www.rfc-editor.org/rfc/rfc7518.html#section-3.3
const MIN_MODULUS_BITS: usize = 2_048;

/// Bit length of an RSA key modulus (aka RSA key length).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[non_exhaustive]
#[cfg_attr(docsrs, doc(cfg(feature = "rsa")))]
pub enum ModulusBits {
    /// 2048 bits. This is the minimum recommended key length as of 2020.
    TwoKibibytes,
    /// 3072 bits.
    ThreeKibibytes,
    /// 4096 bits.
    FourKibibytes,
}

impl ModulusBits {
    /// Converts this length to the numeric value.
    pub fn bits(self) -> usize {
        match self {
            Self::TwoKibibytes => 2_048,
            Self::ThreeKibibytes => 3_072,
            Self::FourKibibytes => 4_096,
        }
    }
}

impl TryFrom<usize> for ModulusBits {
    type Error = ModulusBitsError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            2_048 => Ok(Self::TwoKibibytes),
            3_072 => Ok(Self::ThreeKibibytes),
            4_096 => Ok(Self::FourKibibytes),
            _ => Err(ModulusBitsError(())),
        }
    }
}

/// Error type returned when a conversion of an integer into `ModulusBits` fails.
#[derive(Debug)]
#[cfg_attr(docsrs, doc(cfg(feature = "rsa")))]
pub struct ModulusBitsError(());

impl fmt::Display for ModulusBitsError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(
            "Unsupported bit length of RSA modulus; only lengths 2048, 3072 and 4096 \
            are supported.",
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ModulusBitsError {}

/// Integrity algorithm using [RSA] digital signatures with PKCS#1 v1.5 padding
/// and one of the hash functions from the SHA-2 family: `RS256`, `RS384` or `RS512`.
///
/// Signing requires [`Key::RsaPrivate`]. Verification accepts [`Key::RsaPublic`]
/// or [`Key::RsaPrivate`] (in which case, the public part of the key is used).
/// Keys with a modulus shorter than 2048 bits are rejected with [`Error::InvalidKey`],
/// as required by [RFC 7518].
///
/// Signing uses blinding; since PKCS#1 v1.5 padding is deterministic, signing the same
/// message with the same key always yields the same signature.
///
/// [RSA]: https://en.wikipedia.org/wiki/RSA_(cryptosystem)
/// [RFC 7518]: https://www.rfc-editor.org/rfc/rfc7518.html#section-3.3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(docsrs, doc(cfg(feature = "rsa")))]
pub struct Rsa {
    hash_alg: HashAlg,
}

impl Rsa {
    /// RSA with PKCS#1 v1.5 padding and the specified hash function.
    pub const fn new(hash_alg: HashAlg) -> Self {
        Self { hash_alg }
    }

    /// RSA with SHA-256 and PKCS#1 v1.5 padding.
    pub const fn rs256() -> Self {
        Self::new(HashAlg::Sha256)
    }

    /// RSA with SHA-384 and PKCS#1 v1.5 padding.
    pub const fn rs384() -> Self {
        Self::new(HashAlg::Sha384)
    }

    /// RSA with SHA-512 and PKCS#1 v1.5 padding.
    pub const fn rs512() -> Self {
        Self::new(HashAlg::Sha512)
    }

    /// Returns the hash function used by this algorithm.
    pub const fn hash_alg(&self) -> HashAlg {
        self.hash_alg
    }

    /// Generates a new key pair with the specified modulus bit length (aka key length).
    pub fn generate<R: CryptoRng + RngCore>(
        rng: &mut R,
        modulus_bits: ModulusBits,
    ) -> rsa::errors::Result<(RsaPrivateKey, RsaPublicKey)> {
        let signing_key = RsaPrivateKey::new(rng, modulus_bits.bits())?;
        let verifying_key = signing_key.to_public_key();
        Ok((signing_key, verifying_key))
    }

    fn padding_scheme(self) -> Pkcs1v15Sign {
        match self.hash_alg {
            HashAlg::Sha256 => Pkcs1v15Sign::new::<Sha256>(),
            HashAlg::Sha384 => Pkcs1v15Sign::new::<Sha384>(),
            HashAlg::Sha512 => Pkcs1v15Sign::new::<Sha512>(),
        }
    }

    fn ensure_strong(self, key: &impl PublicKeyParts) -> Result<(), Error> {
        if key.n().bits() < MIN_MODULUS_BITS {
            Err(reject!(self.name(), Error::InvalidKey))
        } else {
            Ok(())
        }
    }
}

impl Alg for Rsa {
    fn name(&self) -> &'static str {
        match self.hash_alg {
            HashAlg::Sha256 => "RS256",
            HashAlg::Sha384 => "RS384",
            HashAlg::Sha512 => "RS512",
        }
    }

    fn sign(&self, header_and_payload: &[u8], key: Key<'_>) -> Result<Vec<u8>, Error> {
        let Key::RsaPrivate(signing_key) = key else {
            return Err(reject!(self.name(), Error::InvalidKey));
        };
        self.ensure_strong(signing_key)?;

        let digest = self.hash_alg.digest(header_and_payload);
        signing_key
            .sign_with_rng(&mut OsRng, self.padding_scheme(), &digest)
            .map_err(|_| reject!(self.name(), Error::InvalidKey))
    }

    fn verify(
        &self,
        header_and_payload: &[u8],
        signature: &[u8],
        key: Key<'_>,
    ) -> Result<(), Error> {
        let derived_key;
        let verifying_key = match key {
            Key::RsaPublic(verifying_key) => verifying_key,
            Key::RsaPrivate(signing_key) => {
                derived_key = signing_key.to_public_key();
                &derived_key
            }
            Key::Secret(_) => return Err(reject!(self.name(), Error::InvalidKey)),
        };
        self.ensure_strong(verifying_key)?;

        let digest = self.hash_alg.digest(header_and_payload);
        verifying_key
            .verify(self.padding_scheme(), &digest, signature)
            .map_err(|_| reject!(self.name(), Error::InvalidSignature))
    }
}

impl FromStr for Rsa {
    type Err = UnknownAlgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("RS")
            .and_then(HashAlg::from_suffix)
            .map(Self::new)
            .ok_or_else(|| UnknownAlgError::new(s))
    }
}
