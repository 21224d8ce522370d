//! Terminal implementations of the UI seams.

use std::thread;
use std::time::Duration;

use dialoguer::theme::ColorfulTheme;

use crate::routes::Route;
use crate::ui::{Confirm, Navigator, Notice, Notifier};

use super::output;

pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        // Multi-line notices (the submission banner) print one line each.
        for line in notice.message.lines() {
            output::print(notice.kind.into(), line);
        }
    }
}

/// Prints route changes; a delayed navigation blocks for the delay first.
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(route = %route, "navigate");
        output::hint(format!("-> {}", route));
    }

    fn navigate_after(&self, route: Route, delay: Duration) {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        self.navigate(route);
    }
}

pub struct DialoguerConfirm {
    theme: ColorfulTheme,
}

impl DialoguerConfirm {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerConfirm {
    fn default() -> Self {
        Self::new()
    }
}

impl Confirm for DialoguerConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        dialoguer::Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}
