//! Unified error types for the preference and notification core.

use std::fmt;

// ---------------------------------------------------------------------------
// StorageError
// ---------------------------------------------------------------------------

/// Errors from the key-value persistence layer.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    /// The backing file exists but is not parseable key/value data.
    Malformed(String),
    /// Persistence is not available in this execution context.
    Unavailable(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Malformed(msg) => write!(f, "malformed store: {msg}"),
            Self::Unavailable(msg) => write!(f, "storage unavailable: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// PreferenceError
// ---------------------------------------------------------------------------

/// Errors when reading or mutating user preferences.
#[derive(Debug)]
pub enum PreferenceError {
    /// The supplied accent color is not a `#rrggbb` value.
    InvalidColorFormat(String),
    Storage(StorageError),
}

impl fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColorFormat(value) => {
                write!(f, "invalid accent color `{value}` (expected #rrggbb)")
            }
            Self::Storage(e) => write!(f, "storage: {e}"),
        }
    }
}

impl std::error::Error for PreferenceError {}

impl From<StorageError> for PreferenceError {
    fn from(e: StorageError) -> Self {
        Self::Storage(e)
    }
}

// ---------------------------------------------------------------------------
// SubmitError
// ---------------------------------------------------------------------------

/// Errors from the contact-form submission endpoint.
#[derive(Debug)]
pub enum SubmitError {
    /// Network / reqwest-level error.
    Http(reqwest::Error),
    /// Non-2xx status from the endpoint.
    Status(u16, String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "http: {e}"),
            Self::Status(code, body) => write!(f, "status {code}: {body}"),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<reqwest::Error> for SubmitError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}
