//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use arlo::theme::StyleSurface;
use arlo::toast::{Toast, ToastKind, ToastSurface};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory with best-effort cleanup.
#[derive(Debug)]
pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("arlo-it-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Style root double that records variable writes and the theme marker.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub variables: BTreeMap<String, String>,
    pub marker: bool,
}

impl RecordingSurface {
    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }
}

impl StyleSurface for RecordingSurface {
    fn set_variable(&mut self, name: &str, value: &str) {
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
