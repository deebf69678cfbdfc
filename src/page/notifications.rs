//! Toast notifications shown in the bottom-right corner.

use std::time::{Duration, Instant};

/// Fade-in and fade-out time.
pub const TOAST_FADE: Duration = Duration::from_millis(300);
/// Time a toast stays before it starts fading out.
pub const TOAST_VISIBLE: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created: Instant,
}

impl Toast {
    /// Opacity in [0, 1]: fades in, holds, fades out.
    pub fn opacity(&self, now: Instant) -> f64 {
        let age = now.saturating_duration_since(self.created);
        let fade = TOAST_FADE.as_secs_f64();
        if age < TOAST_FADE {
            age.as_secs_f64() / fade
        } else if age < TOAST_VISIBLE {
            1.0
        } else {
            let out = (age - TOAST_VISIBLE).as_secs_f64() / fade;
            (1.0 - out).max(0.0)
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created) >= TOAST_VISIBLE + TOAST_FADE
    }
}

/// Stack of live toasts, oldest first.
#[derive(Debug, Clone, Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) {
        self.items.push(Toast {
            message: message.into(),
            kind,
            created: now,
        });
    }

    pub fn success(&mut self, message: impl Into<String>, now: Instant) {
        self.push(message, ToastKind::Success, now);
    }

    pub fn error(&mut self, message: impl Into<String>, now: Instant) {
        self.push(message, ToastKind::Error, now);
    }

    /// Remove toasts whose fade-out has finished.
    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|toast| !toast.is_expired(now));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
