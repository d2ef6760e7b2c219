// ---------------------------------------------------------------------------
// SaveError: error types for cart storage operations
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors that can occur while reading or writing the stored cart.
#[derive(Debug)]
pub enum SaveError {
    /// I/O error (permission denied, disk full, etc.)
    Io(std::io::Error),
    /// Serializing the cart failed.
    Encode(String),
    /// Stored text is not a valid cart.
    Decode(String),
    /// The storage backend cannot be reached (e.g. no `window.localStorage`).
    Unavailable(String),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "I/O error: {e}"),
            SaveError::Encode(msg) => write!(f, "Encoding error: {msg}"),
            SaveError::Decode(msg) => write!(f, "Decoding error: {msg}"),
            SaveError::Unavailable(msg) => write!(f, "Storage unavailable: {msg}"),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaveError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            SaveError::Encode(e.to_string())
        } else {
            SaveError::Decode(e.to_string())
        }
    }
}
