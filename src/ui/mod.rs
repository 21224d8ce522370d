//! Seams between the intake logic and whatever front end renders it.
//!
//! Notifications replace browser toasts, the navigator replaces router calls
//! (including the delayed redirect after a submission), and [`Confirm`]
//! replaces the blocking confirmation dialog. Recording implementations are
//! provided for tests and scripted runs.

pub mod recording;

use std::sync::Arc;
use std::time::Duration;

use crate::routes::Route;

pub use recording::{RecordingNavigator, RecordingNotifier, ScriptedConfirm, Visit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// A transient, dismissible message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);

    fn info(&self, message: &str) {
        self.notify(Notice {
            kind: NoticeKind::Info,
            message: message.to_string(),
        });
    }

    fn success(&self, message: &str) {
        self.notify(Notice {
            kind: NoticeKind::Success,
            message: message.to_string(),
        });
    }

    fn error(&self, message: &str) {
        self.notify(Notice {
            kind: NoticeKind::Error,
            message: message.to_string(),
        });
    }
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);

    /// Schedules a navigation; the front end decides how to wait.
    fn navigate_after(&self, route: Route, delay: Duration);
}

/// Yes/no prompt shown before destructive actions.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Notification and navigation handles shared by the view models.
#[derive(Clone)]
pub struct UiContext {
    pub notifier: Arc<dyn Notifier>,
    pub navigator: Arc<dyn Navigator>,
}

impl UiContext {
    pub fn new(notifier: Arc<dyn Notifier>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            notifier,
            navigator,
        }
    }

    /// Context backed by recorders, returned alongside so callers can inspect
    /// what was emitted.
    pub fn recording() -> (Self, Arc<RecordingNotifier>, Arc<RecordingNavigator>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let navigator = Arc::new(RecordingNavigator::default());
        let context = Self::new(notifier.clone(), navigator.clone());
        (context, notifier, navigator)
    }
}
