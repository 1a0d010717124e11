//! Single-slot toast notification queue.
//!
//! At most one toast is live at a time. A new notification replaces the
//! current one immediately, with no exit transition, and restarts the
//! lifecycle clock: a short delay before the shown state (so the host's
//! entry transition can register), a fixed visible window, then a fade-out
//! before the element is destroyed.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::settings::{TOAST_FADE_MS, TOAST_SHOW_DELAY_MS, TOAST_VISIBLE_MS};

/// Visual style of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    /// Stable identifier used by host styling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// One transient notification message.
#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    pub kind: ToastKind,
    pub created_at: Instant,
}

impl Toast {
    pub fn new(text: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            text: text.into(),
            kind,
            created_at: Instant::now(),
        }
    }
}

/// Host-side rendering slot for the single live toast.
///
/// Stale lifecycle callbacks are filtered before they reach the surface, but
/// implementations must still treat `set_visible`/`unmount` with nothing
/// mounted as a no-op.
pub trait ToastSurface: Send {
    /// Create and attach the toast element.
    fn mount(&mut self, toast: &Toast);

    /// Toggle the fully-shown state so host transitions can run.
    fn set_visible(&mut self, visible: bool);

    /// Detach and destroy the toast element.
    fn unmount(&mut self);
}

/// Owner of the single toast slot and its lifecycle timers.
///
/// Each notification runs one spawned lifecycle task; superseding a toast
/// aborts the previous task, and every surface mutation from a task is
/// generation-checked so a timer that already lost its slot can never touch
/// the replacement.
pub struct ToastNotifier {
    surface: Arc<Mutex<dyn ToastSurface>>,
    current: Arc<AtomicU64>,
    lifecycle: Option<JoinHandle<()>>,
}

impl ToastNotifier {
    pub fn new(surface: Arc<Mutex<dyn ToastSurface>>) -> Self {
        Self {
            surface,
            current: Arc::new(AtomicU64::new(0)),
            lifecycle: None,
        }
    }

    /// Show `text`, replacing any live toast immediately. Newest wins.
    ///
    /// Must be called from within a tokio runtime; the lifecycle timers run
    /// as one spawned task per toast.
    pub fn notify(&mut self, text: &str, kind: ToastKind) {
        if let Some(previous) = self.lifecycle.take() {
            previous.abort();
        }
        let generation = self.current.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!(generation, kind = kind.as_str(), "showing toast");

        let toast = Toast::new(text, kind);
        if let Ok(mut surface) = self.surface.lock() {
            surface.unmount();
            surface.mount(&toast);
        }

        self.lifecycle = Some(tokio::spawn(run_lifecycle(
            Arc::clone(&self.surface),
            Arc::clone(&self.current),
            generation,
        )));
    }
}

impl Drop for ToastNotifier {
    fn drop(&mut self) {
        if let Some(lifecycle) = self.lifecycle.take() {
            lifecycle.abort();
        }
    }
}

/// Drive one toast from mounted to destroyed.
async fn run_lifecycle(
    surface: Arc<Mutex<dyn ToastSurface>>,
    current: Arc<AtomicU64>,
    generation: u64,
) {
    sleep(Duration::from_millis(TOAST_SHOW_DELAY_MS)).await;
    if !apply_if_live(&surface, &current, generation, |s| s.set_visible(true)) {
        return;
    }
    sleep(Duration::from_millis(TOAST_VISIBLE_MS)).await;
    if !apply_if_live(&surface, &current, generation, |s| s.set_visible(false)) {
        return;
    }
    sleep(Duration::from_millis(TOAST_FADE_MS)).await;
    apply_if_live(&surface, &current, generation, |s| s.unmount());
}

/// Mutate the surface only while `generation` still owns the slot.
fn apply_if_live(
    surface: &Arc<Mutex<dyn ToastSurface>>,
    current: &AtomicU64,
    generation: u64,
    mutate: impl FnOnce(&mut dyn ToastSurface),
) -> bool {
    let Ok(mut surface) = surface.lock() else {
        return false;
    };
    if current.load(Ordering::Relaxed) != generation {
        return false;
    }
    mutate(&mut *surface);
    true
}
