//! Container for shared secrets.

use zeroize::Zeroize;

use core::{fmt, ops};

use crate::alloc::{Cow, Vec};

/// Secret bytes (e.g., an `HS*` key), which can be either owned or borrowed.
/// If owned, bytes are zeroized on drop.
///
/// Comparisons on `SecretBytes` are constant-time. A reference to `SecretBytes` converts
/// into a [`Key`](crate::Key), so the secret can be passed to an algorithm without copying.
///
/// # Examples
///
/// ```
/// use jwt_alg::{alg::SecretBytes, Alg, Key, HS256};
///
/// let secret = SecretBytes::owned(b"super_secret_key_donut_steel".to_vec());
/// let signature = HS256.sign(b"header.payload", Key::from(&secret)).unwrap();
/// assert_eq!(signature.len(), 32);
///
/// let borrowed = SecretBytes::borrowed(b"super_secret_key_donut_steel");
/// assert!(borrowed.is_borrowed());
/// assert_eq!(borrowed, secret);
/// ```
#[derive(Clone)]
pub struct SecretBytes<'a>(Cow<'a, [u8]>);

impl<'a> SecretBytes<'a> {
    /// Creates secret bytes from a borrowed slice.
    pub fn borrowed(bytes: &'a [u8]) -> Self {
        Self(Cow::Borrowed(bytes))
    }

    /// Creates secret bytes from an owned `Vec`.
    pub fn owned(bytes: Vec<u8>) -> Self {
        Self(Cow::Owned(bytes))
    }

    /// Checks whether the bytes are borrowed.
    pub fn is_borrowed(&self) -> bool {
        matches!(self.0, Cow::Borrowed(_))
    }

    /// Returns the length of the secret in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks whether the secret is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretBytes<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SecretBytes")
            .field("len", &self.0.len())
            .finish()
    }
}

impl Drop for SecretBytes<'_> {
    fn drop(&mut self) {
        // Borrowed bytes are owned (and cleaned up) elsewhere.
        if let Cow::Owned(bytes) = &mut self.0 {
            bytes.zeroize();
        }
    }
}

impl From<Vec<u8>> for SecretBytes<'_> {
    fn from(bytes: Vec<u8>) -> Self {
        Self::owned(bytes)
    }
}

impl<'a> From<&'a [u8]> for SecretBytes<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::borrowed(bytes)
    }
}

impl ops::Deref for SecretBytes<'_> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[u8]> for SecretBytes<'_> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq for SecretBytes<'_> {
    fn eq(&self, other: &Self) -> bool {
        subtle::ConstantTimeEq::ct_eq(self.as_ref(), other.as_ref()).into()
    }
}

impl Eq for SecretBytes<'_> {}
