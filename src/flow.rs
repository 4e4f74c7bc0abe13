//! Per-screen submission state
//!
//! Each screen drives one [`FlowState`] per request it can issue. Error
//! banners expire on their own after a fixed display window; any delayed
//! work is dropped once the owning screen unmounts.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Lifecycle of one screen-level flow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FlowStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

/// Tagged submission state with self-expiring error banners.
///
/// Every transition bumps an epoch, so a pending expiry from an earlier
/// error cannot clear a newer one.
#[derive(Clone, Copy)]
pub struct FlowState {
    status: RwSignal<FlowStatus>,
    epoch: StoredValue<u64>,
}

impl FlowState {
    /// Must be created during component setup.
    pub fn new() -> Self {
        Self {
            status: RwSignal::new(FlowStatus::Idle),
            epoch: StoredValue::new(0),
        }
    }

    pub fn status(&self) -> Signal<FlowStatus> {
        self.status.into()
    }

    /// Text of the current error banner; empty while no error is showing.
    pub fn error_message(&self) -> Signal<String> {
        let status = self.status;
        Signal::derive(move || match status.get() {
            FlowStatus::Error(message) => message,
            _ => String::new(),
        })
    }

    pub fn is_loading(&self) -> bool {
        self.status
            .try_with_untracked(|status| matches!(status, FlowStatus::Loading))
            .unwrap_or(false)
    }

    pub fn set(&self, status: FlowStatus) {
        self.epoch.try_update_value(|epoch| *epoch += 1);
        self.status.try_set(status);
    }

    /// Enters `Error` for a fixed display window, then falls back to `Idle`.
    ///
    /// A later transition supersedes the pending expiry, and unmounting the
    /// screen drops it.
    pub fn fail_for(&self, message: impl Into<String>, window_ms: u32) {
        let Some(shown_at) = self.epoch.try_update_value(|epoch| {
            *epoch += 1;
            *epoch
        }) else {
            return;
        };
        self.status.try_set(FlowStatus::Error(message.into()));

        let status = self.status;
        let epoch = self.epoch;
        spawn_local(async move {
            TimeoutFuture::new(window_ms).await;
            if epoch.try_get_value() == Some(shown_at) {
                status.try_set(FlowStatus::Idle);
            }
        });
    }
}

impl Default for FlowState {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracks whether the creating component is still mounted, so delayed
/// side effects can be dropped after teardown.
#[derive(Clone, Copy)]
pub struct MountHandle {
    alive: StoredValue<bool>,
}

impl MountHandle {
    /// Must be created during component setup, not inside a spawned task.
    pub fn new() -> Self {
        let alive = StoredValue::new(true);
        on_cleanup(move || {
            alive.try_set_value(false);
        });
        Self { alive }
    }

    pub fn is_mounted(&self) -> bool {
        self.alive.try_get_value().unwrap_or(false)
    }

    /// Waits `ms`, then reports whether the component survived the wait.
    pub async fn sleep(&self, ms: u32) -> bool {
        TimeoutFuture::new(ms).await;
        self.is_mounted()
    }
}
