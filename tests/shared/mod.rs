//! Functionality shared by `algorithms` and `rsa` tests.

use assert_matches::assert_matches;
use base64ct::{Base64UrlUnpadded, Encoding};
use rand::{seq::index::sample as sample_indexes, thread_rng};

use jwt_alg::{Alg, Error, Key};

/// Header and payload of a token signed in tests: `{"alg":"HS256"}.{"sub":"1234567890"}`.
pub const SIGNED_DATA: &[u8] = b"eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0";

/// Splits a token into the signed data (header and payload) and decoded signature bytes.
pub fn split_token(token: &str) -> (&[u8], Vec<u8>) {
    let signature_start = token.rfind('.').unwrap();
    let signature = Base64UrlUnpadded::decode_vec(&token[(signature_start + 1)..]).unwrap();
    (token[..signature_start].as_bytes(), signature)
}

/// Returns bit positions to flip in a byte string of the specified length. Short strings
/// (e.g., HMAC tags) are mangled in every bit; for longer ones (e.g., RSA signatures),
/// positions are sampled.
fn mangled_bits(len: usize) -> Box<dyn Iterator<Item = usize>> {
    // Maximum number of bits mangled exhaustively; fits `HS512` tags.
    const MAX_EXHAUSTIVE_BITS: usize = 512;
    // Number of sampled bits for longer strings.
    const SAMPLED_BITS: usize = 128;

    let bits = len * 8;
    if bits <= MAX_EXHAUSTIVE_BITS {
        Box::new(0..bits)
    } else {
        let indexes = sample_indexes(&mut thread_rng(), bits, SAMPLED_BITS);
        Box::new(indexes.into_iter())
    }
}

pub fn test_algorithm(algorithm: &dyn Alg, signing_key: Key<'_>, verifying_key: Key<'_>) {
    let messages: [&[u8]; 3] = [b"", b"a", SIGNED_DATA];
    for message in messages {
        let signature = algorithm.sign(message, signing_key).unwrap();
        algorithm.verify(message, &signature, verifying_key).unwrap();
        // Signing is deterministic.
        assert_eq!(algorithm.sign(message, signing_key).unwrap(), signature);
    }

    let signature = algorithm.sign(SIGNED_DATA, signing_key).unwrap();

    // Mutate signature bits.
    for i in mangled_bits(signature.len()) {
        let mut mangled_signature = signature.clone();
        mangled_signature[i / 8] ^= 1 << (i % 8) as u8;
        let err = algorithm
            .verify(SIGNED_DATA, &mangled_signature, verifying_key)
            .unwrap_err();
        assert_matches!(err, Error::InvalidSignature);
    }

    // Mutate message bits.
    for i in mangled_bits(SIGNED_DATA.len()) {
        let mut mangled_message = SIGNED_DATA.to_vec();
        mangled_message[i / 8] ^= 1 << (i % 8) as u8;
        let err = algorithm
            .verify(&mangled_message, &signature, verifying_key)
            .unwrap_err();
        assert_matches!(err, Error::InvalidSignature);
    }

    // Truncate / extend the signature.
    let err = algorithm
        .verify(SIGNED_DATA, &signature[..signature.len() - 1], verifying_key)
        .unwrap_err();
    assert_matches!(err, Error::InvalidSignature);
    let mut extended_signature = signature.clone();
    extended_signature.push(0);
    let err = algorithm
        .verify(SIGNED_DATA, &extended_signature, verifying_key)
        .unwrap_err();
    assert_matches!(err, Error::InvalidSignature);
    let err = algorithm.verify(SIGNED_DATA, &[], verifying_key).unwrap_err();
    assert_matches!(err, Error::InvalidSignature);
}
