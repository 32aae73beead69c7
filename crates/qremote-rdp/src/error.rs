//! Error types for the RDP profile crate.

use std::fmt;

#[derive(Debug, Clone)]
pub enum ProfileError {
    /// File I/O error
    Io(String),
    /// Secret could not be decrypted
    Decrypt(String),
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "I/O error: {}", msg),
            Self::Decrypt(msg) => write!(f, "Decryption error: {}", msg),
        }
    }
}

impl std::error::Error for ProfileError {}

pub type ProfileResult<T> = Result<T, ProfileError>;

impl From<std::io::Error> for ProfileError {
    fn from(e: std::io::Error) -> Self { Self::Io(e.to_string()) }
}
