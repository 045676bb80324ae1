//! Signing algorithms for [JSON web tokens (JWT)][JWT] behind a common interface.
//!
//! # Design choices
//!
//! - All algorithms implement the object-safe [`Alg`] trait, so a token assembler can pick
//!   an algorithm by the [`alg` field] of the token header and use it as `&dyn Alg`.
//! - Signing and verification operate on the exact bytes supplied by the caller
//!   (the base64url-encoded header, `.`, and the base64url-encoded payload). The algorithms
//!   never re-encode their input; re-serialization could break signatures.
//! - Keys are passed per call as a borrowed [`Key`]. The key variant is checked against
//!   the algorithm, and a mismatch is reported as [`Error::InvalidKey`].
//! - Failures are reported as one of two sentinel [`Error`]s, which can be compared
//!   with `==`.
//!
//! ## Supported algorithms
//!
//! | Algorithm(s) | Singleton(s) | Feature | Description |
//! |--------------|--------------|---------|-------------|
//! | `none` | [`NONE`] | - | Unsecured tokens with an empty signature |
//! | `HS256`, `HS384`, `HS512` | [`HS256`], [`HS384`], [`HS512`] | - | Uses pure Rust [`hmac`] and [`sha2`] crates |
//! | `RS256`, `RS384`, `RS512` | [`RS256`], [`RS384`], [`RS512`] | `rsa` | Uses pure Rust [`rsa`] crate with blinding |
//!
//! # Crate features
//!
//! - `std` (on by default) implements the standard `Error` trait for error types.
//!   Without it, the crate is `no_std` (it still requires `alloc`).
//! - `rsa` (on by default) enables `RS*` algorithms.
//! - `tracing` emits a `debug` [`tracing`] event for each rejected signing or verification
//!   call. Key material and signatures are never logged.
//!
//! [JWT]: https://jwt.io/
//! [`alg` field]: https://tools.ietf.org/html/rfc7515#section-4.1.1
//! [`hmac`]: https://docs.rs/hmac/
//! [`sha2`]: https://docs.rs/sha2/
//! [`rsa`]: https://docs.rs/rsa/
//! [`tracing`]: https://docs.rs/tracing/
//!
//! # Examples
//!
//! Selecting an algorithm by name and using it:
//!
//! ```
//! use jwt_alg::{Alg, Error, Key};
//!
//! let alg = jwt_alg::by_name("HS256").unwrap();
//! let signed_data = b"eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0";
//! let key = Key::from(b"super_secret_key_donut_steel");
//!
//! let signature = alg.sign(signed_data, key)?;
//! assert_eq!(signature.len(), 32);
//! alg.verify(signed_data, &signature, key)?;
//!
//! // Another key fails verification.
//! let err = alg.verify(signed_data, &signature, Key::from(b"other")).unwrap_err();
//! assert_eq!(err, Error::InvalidSignature);
//! # Ok::<_, Error>(())
//! ```
//!
//! RSA signing:
//!
//! ```
//! # #[cfg(feature = "rsa")] {
//! use jwt_alg::{alg::{ModulusBits, Rsa}, Alg, Error, Key, RS256};
//!
//! let (private_key, public_key) =
//!     Rsa::generate(&mut rand::thread_rng(), ModulusBits::TwoKibibytes).unwrap();
//! let signed_data = b"eyJhbGciOiJSUzI1NiJ9.eyJzdWIiOiJhbGljZSJ9";
//! let signature = RS256.sign(signed_data, Key::from(&private_key)).unwrap();
//! RS256.verify(signed_data, &signature, Key::from(&public_key)).unwrap();
//!
//! // Public keys cannot be used for signing.
//! let err = RS256.sign(signed_data, Key::from(&public_key)).unwrap_err();
//! assert_eq!(err, Error::InvalidKey);
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(html_root_url = "https://docs.rs/jwt-alg/0.1.0")]
#![warn(missing_debug_implementations, missing_docs, bare_trait_objects)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

/// Reports a rejected operation (if the `tracing` feature is on) and returns the error.
macro_rules! reject {
    ($alg:expr, $err:expr) => {{
        let err: $crate::Error = $err;
        #[cfg(feature = "tracing")]
        tracing::debug!(alg = $alg, error = %err, "JWT signing operation rejected");
        #[cfg(not(feature = "tracing"))]
        let _ = $alg;
        err
    }};
}

pub mod alg;
mod error;
mod traits;

// Polyfill for `alloc` types.
mod alloc {
    #[cfg(not(feature = "std"))]
    extern crate alloc;

    #[cfg(not(feature = "std"))]
    pub use alloc::{borrow::Cow, string::String, vec, vec::Vec};
    #[cfg(feature = "std")]
    pub use std::{borrow::Cow, string::String, vec, vec::Vec};
}

pub use crate::{
    alg::{all, by_name, HS256, HS384, HS512, NONE},
    error::{Error, UnknownAlgError},
    traits::{Alg, Key},
};

#[cfg(feature = "rsa")]
pub use crate::alg::{RS256, RS384, RS512};
