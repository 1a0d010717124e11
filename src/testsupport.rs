//! Shared test fixtures for storage, theme, and toast test modules.
//!
//! Keeping tiny reusable doubles here prevents each test module from
//! rebuilding ad-hoc temp dir and recording-surface code.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::StorageError;
use crate::storage::KeyValueStore;
use crate::theme::StyleSurface;
use crate::toast::{Toast, ToastKind, ToastSurface};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
///
/// This helper is intentionally simple and std-only so unit tests can use it
/// without introducing new dependencies.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("arlo-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Root directory path for this fixture.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Store whose operations always fail, for degraded-path tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("disabled in test".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disabled in test".to_string()))
    }

    fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disabled in test".to_string()))
    }
}

/// Style root double that records variable writes and the theme marker.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub variables: BTreeMap<String, String>,
    pub marker: bool,
    pub writes: Vec<(String, String)>,
}

impl StyleSurface for RecordingSurface {
    fn set_variable(&mut self, name: &str, value: &str) {
        self.writes.push((name.to_string(), value.to_string()));
        self.variables.insert(name.to_string(), value.to_string());
    }

    fn set_theme_marker(&mut self, enabled: bool) {
        self.marker = enabled;
    }
}

/// Toast slot double that records the mounted toast and lifecycle events.
#[derive(Debug, Default)]
pub struct RecordingToastSurface {
    pub mounted: Option<(String, ToastKind)>,
    pub visible: bool,
    pub events: Vec<String>,
}

impl ToastSurface for RecordingToastSurface {
    fn mount(&mut self, toast: &Toast) {
        self.mounted = Some((toast.text.clone(), toast.kind));
        self.visible = false;
        self.events
            .push(format!("mount {} {}", toast.kind.as_str(), toast.text));
    }

    fn set_visible(&mut self, visible: bool) {
        if self.mounted.is_none() {
            return;
        }
        self.visible = visible;
        self.events.push(format!("visible {visible}"));
    }

    fn unmount(&mut self) {
        if self.mounted.take().is_none() {
            return;
        }
        self.visible = false;
        self.events.push("unmount".to_string());
    }
}
