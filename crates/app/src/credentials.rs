//! Generated secrets, one-time codes, and the one-way credential digest.

use std::fmt;

use rand::{Rng, distributions::Alphanumeric, rngs::OsRng};
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

/// Number of characters in a generated secret.
pub const SECRET_LENGTH: usize = 12;

/// Number of digits in a one-time code.
pub const OTP_LENGTH: usize = 6;

/// Plain secret generated for a new record. Only its digest is ever stored.
pub struct GeneratedSecret {
    value: String,
}

impl GeneratedSecret {
    #[must_use]
    pub fn from_plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.value.as_bytes()
    }
}

impl fmt::Debug for GeneratedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GeneratedSecret(**redacted**)")
    }
}

impl Drop for GeneratedSecret {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

/// Stored, hashed credential. Write-only: there is no verification path and
/// it never appears in an outward-facing model.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    #[must_use]
    pub fn from_digest(digest: String) -> Self {
        Self(digest)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(**redacted**)")
    }
}

/// Deterministic one-way transform from a generated secret to a stored credential.
pub trait CredentialHasher: Send + Sync + fmt::Debug {
    fn digest(&self, secret: &GeneratedSecret) -> Credential;
}

/// SHA-256, rendered as lower-case hex.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl CredentialHasher for Sha256Hasher {
    fn digest(&self, secret: &GeneratedSecret) -> Credential {
        Credential::from_digest(format!("{:x}", Sha256::digest(secret.as_bytes())))
    }
}

#[must_use]
pub fn generate_secret() -> GeneratedSecret {
    let value = OsRng
        .sample_iter(&Alphanumeric)
        .take(SECRET_LENGTH)
        .map(char::from)
        .collect::<String>();

    GeneratedSecret::from_plain(value)
}

#[must_use]
pub fn generate_otp() -> String {
    let mut rng = OsRng;

    (0..OTP_LENGTH)
        .map(|_| char::from(b'0' + rng.gen_range(0..10_u8)))
        .collect()
}

/// Generate a fresh secret and return only its digest.
#[must_use]
pub fn issue_credential(hasher: &dyn CredentialHasher) -> Credential {
    hasher.digest(&generate_secret())
}
