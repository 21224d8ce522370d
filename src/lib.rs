#![doc(test(attr(deny(warnings))))]

//! Visa intake: the application form state machine, its validation rules,
//! the REST client it submits through and the admin dashboard view model,
//! with a terminal front end on top.

pub mod api;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod errors;
pub mod form;
pub mod reference;
pub mod routes;
pub mod session;
pub mod ui;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("visa intake tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
