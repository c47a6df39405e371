//! Settings persistence SPI.
//!
//! # Responsibility
//! - Declare load/save over the host-owned settings blob.
//! - Define the transport error taxonomy for those two calls.
//!
//! # Invariants
//! - `load` merges over defaults: a blob missing keys still yields a
//!   complete `TintSettings`.
//! - The core never touches the blob medium directly.

use crate::model::settings::TintSettings;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Settings load/save transport failures.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying medium failed (file, plugin data API).
    Io(std::io::Error),
    /// Blob could not be encoded or decoded.
    Serialization(String),
    /// Host-specific backend failure.
    Backend(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "settings io failure: {err}"),
            Self::Serialization(message) => write!(f, "settings blob is invalid: {message}"),
            Self::Backend(message) => write!(f, "settings backend failure: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialization(_) => None,
            Self::Backend(_) => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Host-owned settings persistence.
pub trait SettingsStore {
    /// Loads the current settings snapshot.
    fn load(&self) -> StoreResult<TintSettings>;

    /// Persists one settings snapshot.
    fn save(&self, settings: &TintSettings) -> StoreResult<()>;
}
