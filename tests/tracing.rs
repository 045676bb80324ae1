//! Tests for `debug` events emitted on rejected operations.

use base64ct::{Base64UrlUnpadded, Encoding};
use tracing::subscriber::with_default;

use std::{
    io,
    sync::{Arc, Mutex},
};

use jwt_alg::{Alg, Error, Key, HS256, NONE};

const SIGNED_DATA: &[u8] = b"eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0";
const SECRET: &[u8] = b"super_secret_key_donut_steel";

/// Writer collecting formatted events in memory.
#[derive(Debug, Clone, Default)]
struct CapturedEvents(Arc<Mutex<Vec<u8>>>);

impl CapturedEvents {
    fn take_lines(&self) -> Vec<String> {
        let mut buffer = self.0.lock().unwrap();
        let output = String::from_utf8(buffer.split_off(0)).unwrap();
        output.lines().map(str::to_owned).collect()
    }
}

impl io::Write for CapturedEvents {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<T>(action: impl FnOnce(&CapturedEvents) -> T) -> T {
    let events = CapturedEvents::default();
    let writer = events.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();
    with_default(subscriber, || action(&events))
}

fn assert_rejection_event(line: &str, alg: &str, error: Error) {
    assert!(line.contains("DEBUG"), "{line}");
    assert!(line.contains("JWT signing operation rejected"), "{line}");
    assert!(line.contains(&format!("alg=\"{alg}\"")), "{line}");
    assert!(line.contains(&format!("error={error}")), "{line}");
}

#[test]
fn hmac_rejections_are_logged() {
    capture(|events| {
        let signature = HS256.sign(SIGNED_DATA, Key::from(SECRET)).unwrap();
        assert!(events.take_lines().is_empty());

        let err = HS256
            .verify(SIGNED_DATA, &signature, Key::from(b"other_secret"))
            .unwrap_err();
        assert_eq!(err, Error::InvalidSignature);
        let lines = events.take_lines();
        assert_eq!(lines.len(), 1, "{lines:?}");
        assert_rejection_event(&lines[0], "HS256", Error::InvalidSignature);

        let mut mangled_signature = signature.clone();
        mangled_signature[0] ^= 1;
        let err = HS256
            .verify(SIGNED_DATA, &mangled_signature, Key::from(SECRET))
            .unwrap_err();
        assert_eq!(err, Error::InvalidSignature);
        let lines = events.take_lines();
        assert_eq!(lines.len(), 1, "{lines:?}");
        assert_rejection_event(&lines[0], "HS256", Error::InvalidSignature);

        let encoded_signature = Base64UrlUnpadded::encode_string(&signature);
        for line in &lines {
            assert!(!line.contains("super_secret"), "{line}");
            assert!(!line.contains(&encoded_signature), "{line}");
        }
    });
}

#[cfg(feature = "rsa")]
#[test]
fn key_mismatches_are_logged() {
    use jwt_alg::{alg::RsaPrivateKey, RS256};

    // Key size does not matter; the key type is checked first.
    let rsa_key = RsaPrivateKey::new(&mut rand::thread_rng(), 512).unwrap();

    capture(|events| {
        let err = HS256.sign(SIGNED_DATA, Key::from(&rsa_key)).unwrap_err();
        assert_eq!(err, Error::InvalidKey);
        let lines = events.take_lines();
        assert_eq!(lines.len(), 1, "{lines:?}");
        assert_rejection_event(&lines[0], "HS256", Error::InvalidKey);

        let err = RS256.sign(SIGNED_DATA, Key::from(SECRET)).unwrap_err();
        assert_eq!(err, Error::InvalidKey);
        let lines = events.take_lines();
        assert_eq!(lines.len(), 1, "{lines:?}");
        assert_rejection_event(&lines[0], "RS256", Error::InvalidKey);
        assert!(!lines[0].contains("super_secret"), "{}", lines[0]);
    });
}

#[test]
fn none_rejection_is_logged() {
    capture(|events| {
        NONE.verify(SIGNED_DATA, &[], Key::from(SECRET)).unwrap();
        assert!(events.take_lines().is_empty());

        let err = NONE
            .verify(SIGNED_DATA, &[1], Key::from(SECRET))
            .unwrap_err();
        assert_eq!(err, Error::InvalidSignature);
        let lines = events.take_lines();
        assert_eq!(lines.len(), 1, "{lines:?}");
        assert_rejection_event(&lines[0], "none", Error::InvalidSignature);
    });
}
