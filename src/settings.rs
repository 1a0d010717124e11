//! Centralized, hardcoded settings for the preference and notification core.
//!
//! This is the single place to tweak storage keys, style variable names,
//! shading percentages, toast timing, and user-facing message copy.

// ---------------------------------------------------------------------------
// Storage keys / locations
// ---------------------------------------------------------------------------

pub const KEY_DARK_MODE: &str = "dark_mode";
pub const KEY_ACCENT_COLOR: &str = "accent_color";

pub const PREFERENCES_DIR: &str = "arlo";
pub const PREFERENCES_FILE: &str = "preferences.toml";
pub const PREFERENCES_SECTION: &str = "preferences";

// ---------------------------------------------------------------------------
// Style surface
// ---------------------------------------------------------------------------

pub const VAR_PRIMARY: &str = "primary-color";
pub const VAR_PRIMARY_DARK: &str = "primary-dark";
pub const VAR_PRIMARY_LIGHT: &str = "primary-light";

// ---------------------------------------------------------------------------
// Palette shading
// ---------------------------------------------------------------------------

pub const SHADE_DARK_PERCENT: i32 = -20;
pub const SHADE_LIGHT_PERCENT: i32 = 40;

// ---------------------------------------------------------------------------
// Toast lifecycle
// ---------------------------------------------------------------------------

/// Delay before the shown state is set, so the host transition can register.
pub const TOAST_SHOW_DELAY_MS: u64 = 10;
pub const TOAST_VISIBLE_MS: u64 = 5_000;
pub const TOAST_FADE_MS: u64 = 500;

// ---------------------------------------------------------------------------
// Message copy
// ---------------------------------------------------------------------------

pub const MSG_SETTINGS_RESET: &str = "Settings have been reset to default!";

pub const CONTACT_FALLBACK_NAME: &str = "User";

pub fn contact_success_message(name: &str) -> String {
    format!("Thank you {name}! Your message has been sent. I'll respond soon.")
}

pub fn contact_failure_message(name: &str) -> String {
    format!("Sorry {name}, there was an error. Please email me directly.")
}
