//! Settings-panel event handlers.
//!
//! This module owns the wiring between panel interactions, the preference
//! store, and theme application so hosts only translate UI events. Storage
//! failures never block the visual change: the selection applies for the
//! current session and simply is not remembered.

use crate::error::PreferenceError;
use crate::prefs::{PreferenceStore, Preferences};
use crate::storage::KeyValueStore;
use crate::theme::{self, HexColor, StyleSurface};
use crate::toast::ToastNotifier;

/// Load persisted preferences and apply them in one startup pass.
///
/// Returns the snapshot so the host can sync its toggle and swatch widgets.
pub fn startup<S: KeyValueStore>(
    store: &PreferenceStore<S>,
    surface: &mut dyn StyleSurface,
) -> Preferences {
    let prefs = store.load();
    theme::initialize(surface, &prefs);
    prefs
}

/// Handle the dark mode toggle switch.
pub fn handle_dark_mode_toggle<S: KeyValueStore>(
    store: &mut PreferenceStore<S>,
    surface: &mut dyn StyleSurface,
    enabled: bool,
) {
    if let Err(err) = store.set_dark_mode(enabled) {
        tracing::warn!(error = %err, "dark mode preference not persisted");
    }
    theme::apply_dark_mode(surface, enabled);
}

/// Handle a color swatch selection.
///
/// Malformed values fail with [`PreferenceError::InvalidColorFormat`] and
/// change nothing.
pub fn handle_accent_selection<S: KeyValueStore>(
    store: &mut PreferenceStore<S>,
    surface: &mut dyn StyleSurface,
    value: &str,
) -> Result<(), PreferenceError> {
    let accent = HexColor::parse(value)?;
    match store.set_accent_color(value) {
        Ok(()) => {}
        Err(err @ PreferenceError::InvalidColorFormat(_)) => return Err(err),
        Err(err @ PreferenceError::Storage(_)) => {
            tracing::warn!(error = %err, "accent color preference not persisted");
        }
    }
    theme::apply_accent_color(surface, accent);
    Ok(())
}

/// Handle the reset button.
pub fn handle_reset<S: KeyValueStore>(
    store: &mut PreferenceStore<S>,
    surface: &mut dyn StyleSurface,
    notifier: &mut ToastNotifier,
) {
    theme::reset_to_default(surface, store, notifier);
}
