//! Theme application over an injected style surface.
//!
//! All root-level styling this crate owns flows through [`StyleSurface`] so
//! hosts and tests can supply their own document root. The applier itself is
//! stateless: preferences live in the store, styling lives in the surface.

pub mod palette;

pub use palette::{DerivedPalette, HexColor};

use crate::prefs::{PreferenceStore, Preferences};
use crate::settings::{MSG_SETTINGS_RESET, VAR_PRIMARY, VAR_PRIMARY_DARK, VAR_PRIMARY_LIGHT};
use crate::storage::KeyValueStore;
use crate::toast::{ToastKind, ToastNotifier};

/// Capability handle on the document-wide style root.
pub trait StyleSurface {
    /// Write one custom style variable, replacing any prior value.
    fn set_variable(&mut self, name: &str, value: &str);

    /// Add or remove the dark theme marker. Must be idempotent.
    fn set_theme_marker(&mut self, enabled: bool);
}

/// Toggle the dark theme marker.
pub fn apply_dark_mode(surface: &mut dyn StyleSurface, enabled: bool) {
    tracing::debug!(enabled, "applying dark mode marker");
    surface.set_theme_marker(enabled);
}

/// Derive the palette from `accent` and write all three style variables.
pub fn apply_accent_color(surface: &mut dyn StyleSurface, accent: HexColor) {
    let palette = DerivedPalette::from_accent(accent);
    tracing::debug!(accent = %palette.base, "applying accent palette");
    surface.set_variable(VAR_PRIMARY, &palette.base.to_string());
    surface.set_variable(VAR_PRIMARY_DARK, &palette.dark.to_string());
    surface.set_variable(VAR_PRIMARY_LIGHT, &palette.light.to_string());
}

/// Apply persisted preferences in one startup pass.
///
/// The accent variables are only written when a color was actually
/// persisted; otherwise the host stylesheet defaults stay untouched.
pub fn initialize(surface: &mut dyn StyleSurface, prefs: &Preferences) {
    apply_dark_mode(surface, prefs.dark_mode);
    if let Some(accent) = prefs.persisted_accent() {
        apply_accent_color(surface, accent);
    }
}

/// Clear persisted preferences, restore the default look, and confirm with
/// a success toast.
///
/// The store reset is best-effort: a persistence failure is logged and the
/// visual reset still happens.
pub fn reset_to_default<S: KeyValueStore>(
    surface: &mut dyn StyleSurface,
    store: &mut PreferenceStore<S>,
    notifier: &mut ToastNotifier,
) {
    if let Err(err) = store.reset() {
        tracing::warn!(error = %err, "preference reset did not persist");
    }
    apply_accent_color(surface, palette::DEFAULT_ACCENT);
    apply_dark_mode(surface, false);
    notifier.notify(MSG_SETTINGS_RESET, ToastKind::Success);
}
