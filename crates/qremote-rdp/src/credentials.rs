//! Decrypt-by-reference contract for stored secrets.
//!
//! Profiles persist passwords as opaque ciphertext references; plaintext
//! only exists transiently as the return value of a [`SecretCipher`]
//! call made at compile time. The compiler treats every failure mode the
//! same way: empty credential, never the raw ciphertext, never a panic.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::ProfileError;

pub trait SecretCipher {
    /// Recover the plaintext for a stored ciphertext reference.
    fn decrypt(&self, ciphertext: &str) -> Result<String, ProfileError>;
}

/// Reversible base64 obfuscation used by portable (vault-less)
/// installs. Keeps secrets out of casual sight in the JSON file; the
/// real vault backend implements the same trait.
#[derive(Debug, Default, Clone, Copy)]
pub struct Base64Cipher;

impl Base64Cipher {
    pub fn encrypt(&self, plaintext: &str) -> String {
        STANDARD.encode(plaintext.as_bytes())
    }
}

impl SecretCipher for Base64Cipher {
    fn decrypt(&self, ciphertext: &str) -> Result<String, ProfileError> {
        let decoded = STANDARD
            .decode(ciphertext.as_bytes())
            .map_err(|e| ProfileError::Decrypt(e.to_string()))?;
        String::from_utf8(decoded).map_err(|e| ProfileError::Decrypt(e.to_string()))
    }
}

/// The "encryption subsystem unavailable" case as a cipher.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCipher;

impl SecretCipher for NoCipher {
    fn decrypt(&self, _ciphertext: &str) -> Result<String, ProfileError> {
        Err(ProfileError::Decrypt("no cipher configured".to_string()))
    }
}
