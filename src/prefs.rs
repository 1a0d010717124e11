//! Persisted user preferences.
//!
//! [`PreferenceStore`] is the single owner and writer of the two preference
//! keys. Reads never fail: unavailable or malformed storage degrades to the
//! compiled-in defaults so the page keeps working, at the cost of the
//! preference not being remembered.

use crate::error::PreferenceError;
use crate::settings::{KEY_ACCENT_COLOR, KEY_DARK_MODE};
use crate::storage::KeyValueStore;
use crate::theme::palette::{HexColor, DEFAULT_ACCENT};

/// Snapshot of persisted preference values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    /// Dark theme requested by the user.
    pub dark_mode: bool,
    /// Accent color, `None` when nothing valid was persisted.
    pub accent_color: Option<HexColor>,
}

impl Preferences {
    /// Accent color as persisted, if any. Used at startup to decide whether
    /// to touch the host stylesheet at all.
    pub fn persisted_accent(&self) -> Option<HexColor> {
        self.accent_color
    }

    /// Effective accent color, falling back to the compiled-in default.
    pub fn accent(&self) -> HexColor {
        self.accent_color.unwrap_or(DEFAULT_ACCENT)
    }
}

/// Owner of the persisted preference keys.
pub struct PreferenceStore<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read both preference keys.
    ///
    /// Missing keys, malformed values, and storage failures all resolve to
    /// the default for that key; failures are logged, never raised.
    pub fn load(&self) -> Preferences {
        let dark_mode = match self.storage.get(KEY_DARK_MODE) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(err) => {
                tracing::warn!(error = %err, "dark mode preference unreadable, using default");
                false
            }
        };

        let accent_color = match self.storage.get(KEY_ACCENT_COLOR) {
            Ok(Some(value)) => match HexColor::parse(&value) {
                Ok(color) => Some(color),
                Err(err) => {
                    tracing::warn!(error = %err, "stored accent color is malformed, ignoring");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(error = %err, "accent color preference unreadable, using default");
                None
            }
        };

        Preferences {
            dark_mode,
            accent_color,
        }
    }

    /// Persist the dark mode flag as its string form.
    pub fn set_dark_mode(&mut self, enabled: bool) -> Result<(), PreferenceError> {
        let value = if enabled { "true" } else { "false" };
        self.storage
            .set(KEY_DARK_MODE, value)
            .map_err(PreferenceError::Storage)
    }

    /// Validate and persist an accent color.
    ///
    /// Malformed input fails with [`PreferenceError::InvalidColorFormat`]
    /// before anything is written.
    pub fn set_accent_color(&mut self, color: &str) -> Result<(), PreferenceError> {
        let parsed = HexColor::parse(color)?;
        self.storage
            .set(KEY_ACCENT_COLOR, &parsed.to_string())
            .map_err(PreferenceError::Storage)
    }

    /// Delete both keys, returning the store to default state.
    pub fn reset(&mut self) -> Result<(), PreferenceError> {
        self.storage
            .remove(KEY_DARK_MODE)
            .map_err(PreferenceError::Storage)?;
        self.storage
            .remove(KEY_ACCENT_COLOR)
            .map_err(PreferenceError::Storage)?;
        Ok(())
    }
}
