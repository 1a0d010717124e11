//! Arlo — preference, theme, and notification core for a portfolio UI shell.
//!
//! This crate owns the persisted user preferences (dark mode flag, accent
//! color), derives the accent palette, applies both to an injected style
//! surface, and drives the single-slot toast notification lifecycle. Hosts
//! plug in their own persistence and rendering through the `KeyValueStore`,
//! `StyleSurface`, and `ToastSurface` traits.
//!
//! # Quick start
//!
//! ```no_run
//! use arlo::panel;
//! use arlo::prefs::PreferenceStore;
//! use arlo::storage::MemoryStore;
//! use arlo::theme::StyleSurface;
//!
//! struct Root;
//!
//! impl StyleSurface for Root {
//!     fn set_variable(&mut self, _name: &str, _value: &str) {}
//!     fn set_theme_marker(&mut self, _enabled: bool) {}
//! }
//!
//! let store = PreferenceStore::new(MemoryStore::new());
//! let mut root = Root;
//! let prefs = panel::startup(&store, &mut root);
//! assert!(!prefs.dark_mode);
//! ```

pub mod error;
pub mod form;
pub mod panel;
pub mod prefs;
pub mod settings;
pub mod storage;
#[cfg(test)]
pub mod testsupport;
pub mod theme;
pub mod toast;
