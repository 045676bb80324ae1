//! Implementations of JWT signing / verification algorithms and the registry
//! of built-in algorithm instances.

use crate::Alg;

mod hash;
mod hmacs;
mod none;
// RSA implementation.
#[cfg(feature = "rsa")]
mod rsa;
mod secret;

pub use self::hash::HashAlg;
pub use self::hmacs::Hmac;
pub use self::none::Unsecured;
pub use self::secret::SecretBytes;
#[cfg(feature = "rsa")]
#[cfg_attr(docsrs, doc(cfg(feature = "rsa")))]
pub use self::rsa::{ModulusBits, ModulusBitsError, Rsa, RsaPrivateKey, RsaPublicKey};

/// `none` algorithm for unsecured tokens.
///
/// An unsecured token may be fit for client-side use, e.g., if it only carries
/// a hard-to-guess session ID and display data, which a malicious user gains nothing
/// from modifying.
pub static NONE: Unsecured = Unsecured;
/// `HS256` algorithm (HMAC with SHA-256).
pub static HS256: Hmac = Hmac::hs256();
/// `HS384` algorithm (HMAC with SHA-384).
pub static HS384: Hmac = Hmac::hs384();
/// `HS512` algorithm (HMAC with SHA-512).
pub static HS512: Hmac = Hmac::hs512();
/// `RS256` algorithm (RSASSA-PKCS1-v1_5 with SHA-256).
#[cfg(feature = "rsa")]
#[cfg_attr(docsrs, doc(cfg(feature = "rsa")))]
pub static RS256: Rsa = Rsa::rs256();
/// `RS384` algorithm (RSASSA-PKCS1-v1_5 with SHA-384).
#[cfg(feature = "rsa")]
#[cfg_attr(docsrs, doc(cfg(feature = "rsa")))]
pub static RS384: Rsa = Rsa::rs384();
/// `RS512` algorithm (RSASSA-PKCS1-v1_5 with SHA-512).
#[cfg(feature = "rsa")]
#[cfg_attr(docsrs, doc(cfg(feature = "rsa")))]
pub static RS512: Rsa = Rsa::rs512();

#[cfg(feature = "rsa")]
static ALGORITHMS: [&dyn Alg; 7] = [&NONE, &HS256, &HS384, &HS512, &RS256, &RS384, &RS512];
#[cfg(not(feature = "rsa"))]
static ALGORITHMS: [&dyn Alg; 4] = [&NONE, &HS256, &HS384, &HS512];

/// Iterates over all built-in algorithms: `none`, then `HS*`, then `RS*`
/// (if the `rsa` feature is enabled).
pub fn all() -> impl Iterator<Item = &'static dyn Alg> {
    ALGORITHMS.iter().copied()
}

/// Looks up a built-in algorithm by its name, as mentioned in the `alg` field
/// of the JWT header. The comparison is case-sensitive.
///
/// # Examples
///
/// ```
/// let alg = jwt_alg::by_name("HS384").unwrap();
/// assert_eq!(alg.name(), "HS384");
/// assert!(jwt_alg::by_name("hs384").is_none());
/// assert!(jwt_alg::by_name("ES256").is_none());
/// ```
pub fn by_name(name: &str) -> Option<&'static dyn Alg> {
    all().find(|alg| alg.name() == name)
}
