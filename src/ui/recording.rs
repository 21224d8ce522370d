use std::sync::Mutex;
use std::time::Duration;

use crate::routes::Route;

use super::{Confirm, Navigator, Notice, NoticeKind, Notifier};

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn messages(&self, kind: NoticeKind) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter(|notice| notice.kind == kind)
            .map(|notice| notice.message)
            .collect()
    }

    pub fn clear(&self) {
        if let Ok(mut guard) = self.notices.lock() {
            guard.clear();
        }
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        if let Ok(mut guard) = self.notices.lock() {
            guard.push(notice);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    pub route: Route,
    pub delay: Option<Duration>,
}

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<Visit>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<Visit> {
        self.visits
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn last_route(&self) -> Option<Route> {
        self.visits().last().map(|visit| visit.route)
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        if let Ok(mut guard) = self.visits.lock() {
            guard.push(Visit { route, delay: None });
        }
    }

    fn navigate_after(&self, route: Route, delay: Duration) {
        if let Ok(mut guard) = self.visits.lock() {
            guard.push(Visit {
                route,
                delay: Some(delay),
            });
        }
    }
}

/// Answers every prompt the same way and remembers what was asked.
#[derive(Debug)]
pub struct ScriptedConfirm {
    answer: bool,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        if let Ok(mut guard) = self.prompts.lock() {
            guard.push(prompt.to_string());
        }
        self.answer
    }
}
