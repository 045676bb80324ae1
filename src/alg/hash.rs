//! Hash functions from the SHA-2 family used by `HS*` and `RS*` algorithms.

use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::alloc::Vec;

/// Hash function parameterizing an `HS*` or `RS*` algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlg {
    /// SHA-256.
    Sha256,
    /// SHA-384.
    Sha384,
    /// SHA-512.
    Sha512,
}

impl HashAlg {
    /// Returns the byte length of the hash output.
    pub const fn output_size(self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// Returns the block size of the hash function in bytes.
    pub const fn block_size(self) -> usize {
        match self {
            Self::Sha256 => 64,
            Self::Sha384 | Self::Sha512 => 128,
        }
    }

    /// Parses the numeric suffix of a JWT algorithm name (e.g., `256` in `HS256`).
    pub(crate) fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "256" => Some(Self::Sha256),
            "384" => Some(Self::Sha384),
            "512" => Some(Self::Sha512),
            _ => None,
        }
    }

    #[cfg_attr(not(feature = "rsa"), allow(dead_code))]
    pub(crate) fn digest(self, message: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha256 => Sha256::digest(message).to_vec(),
            Self::Sha384 => Sha384::digest(message).to_vec(),
            Self::Sha512 => Sha512::digest(message).to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_sizes_match_digests() {
        for hash_alg in [HashAlg::Sha256, HashAlg::Sha384, HashAlg::Sha512] {
            assert_eq!(hash_alg.digest(b"").len(), hash_alg.output_size());
        }
        assert_eq!(HashAlg::from_suffix("384"), Some(HashAlg::Sha384));
        assert_eq!(HashAlg::from_suffix("1"), None);
    }
}
