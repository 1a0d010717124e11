//! File-backed preference storage.
//!
//! Preferences live as one `[preferences]` table in a small TOML file under
//! the per-user config directory. Writes are intentionally narrow line-level
//! upserts so unrelated content a user added by hand survives every update.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::StorageError;
use crate::settings::{PREFERENCES_DIR, PREFERENCES_FILE, PREFERENCES_SECTION};

use super::KeyValueStore;

/// Return the default per-user preferences path (`~/.config/arlo/preferences.toml`).
pub fn default_preferences_path() -> Option<PathBuf> {
    config_root_dir().map(|dir| dir.join(PREFERENCES_DIR).join(PREFERENCES_FILE))
}

/// Resolve the base config directory from env/home conventions.
fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}

/// Deserialized shape of the preferences file.
#[derive(Debug, Default, Deserialize)]
struct PreferencesFile {
    #[serde(default)]
    preferences: BTreeMap<String, String>,
}

/// Key-value store persisted as a `[preferences]` TOML table.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open the store at the default per-user location.
    ///
    /// Fails with [`StorageError::Unavailable`] when no home or config
    /// directory can be resolved on this platform.
    pub fn at_default_location() -> Result<Self, StorageError> {
        let path = default_preferences_path().ok_or_else(|| {
            StorageError::Unavailable(
                "unable to resolve a preferences path for this platform".to_string(),
            )
        })?;
        Ok(Self::new(path))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StorageError::Io(err)),
        };
        let parsed: PreferencesFile =
            toml::from_str(&text).map_err(|err| StorageError::Malformed(err.to_string()))?;
        Ok(parsed.preferences.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let existing = std::fs::read_to_string(&self.path).unwrap_or_default();
        let updated = upsert_entry(&existing, key, value);
        std::fs::write(&self.path, updated)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let existing = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(err) => return Err(StorageError::Io(err)),
        };
        let updated = remove_entry(&existing, key);
        std::fs::write(&self.path, updated)?;
        Ok(())
    }
}

/// Upsert one `[preferences]` entry while preserving unrelated file contents.
fn upsert_entry(input: &str, key: &str, value: &str) -> String {
    let mut lines = if input.is_empty() {
        Vec::new()
    } else {
        input.lines().map(str::to_string).collect::<Vec<_>>()
    };

    if let Some(start) = section_header_index(&lines) {
        let end = section_end_index(&lines, start);

        for idx in (start + 1)..end {
            if is_assignment_key(&lines[idx], key) {
                lines[idx] = format!("{key} = \"{value}\"");
                return ensure_trailing_newline(lines.join("\n"));
            }
        }

        lines.insert(start + 1, format!("{key} = \"{value}\""));
        return ensure_trailing_newline(lines.join("\n"));
    }

    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!("[{PREFERENCES_SECTION}]"));
    lines.push(format!("{key} = \"{value}\""));
    ensure_trailing_newline(lines.join("\n"))
}

/// Remove one `[preferences]` entry, leaving everything else untouched.
fn remove_entry(input: &str, key: &str) -> String {
    let mut lines = input.lines().map(str::to_string).collect::<Vec<_>>();

    let Some(start) = section_header_index(&lines) else {
        return input.to_string();
    };
    let end = section_end_index(&lines, start);

    for idx in (start + 1)..end {
        if is_assignment_key(&lines[idx], key) {
            lines.remove(idx);
            return ensure_trailing_newline(lines.join("\n"));
        }
    }
    input.to_string()
}

/// Index of the `[preferences]` section header, if present.
fn section_header_index(lines: &[String]) -> Option<usize> {
    let header = format!("[{PREFERENCES_SECTION}]");
    lines
        .iter()
        .position(|line| line.trim().eq_ignore_ascii_case(&header))
}

/// Index one past the last line belonging to the section starting at `start`.
fn section_end_index(lines: &[String], start: usize) -> usize {
    for (idx, line) in lines.iter().enumerate().skip(start + 1) {
        let trimmed = line.trim();
        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            return idx;
        }
    }
    lines.len()
}

/// Return true when `line` assigns a value to `key` (e.g., `key = ...`).
fn is_assignment_key(line: &str, key: &str) -> bool {
    let trimmed = line.trim_start();
    let Some(rest) = trimmed.strip_prefix(key) else {
        return false;
    };
    rest.trim_start().starts_with('=')
}

fn ensure_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
