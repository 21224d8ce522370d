#![allow(dead_code)]

use std::sync::Arc;

use visa_intake::api::{ApiClient, ScriptedTransport};
use visa_intake::domain::{Country, FileHandle, VisaType};
use visa_intake::form::IntakeForm;
use visa_intake::session::SessionContext;
use visa_intake::ui::{RecordingNavigator, RecordingNotifier, UiContext};

pub const BASE_URL: &str = "https://api.example.test/api";
pub const TOKEN: &str = "token-123";

/// A client wired to a scripted transport and recording UI seams.
pub struct Harness {
    pub transport: ScriptedTransport,
    pub session: Arc<SessionContext>,
    pub client: ApiClient,
    pub ui: UiContext,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<RecordingNavigator>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_session(Arc::new(SessionContext::in_memory()))
    }

    pub fn signed_in() -> Self {
        let harness = Self::new();
        harness
            .session
            .sign_in(TOKEN, "admin@example.com")
            .expect("sign in");
        harness
    }

    pub fn with_session(session: Arc<SessionContext>) -> Self {
        let transport = ScriptedTransport::new();
        let (ui, notifier, navigator) = UiContext::recording();
        let client = ApiClient::new(
            BASE_URL,
            Box::new(transport.clone()),
            session.clone(),
            ui.navigator.clone(),
        );
        Self {
            transport,
            session,
            client,
            ui,
            notifier,
            navigator,
        }
    }
}

pub fn pdf(name: &str) -> FileHandle {
    FileHandle::from_bytes(name, b"%PDF-1.4 test".to_vec())
}

pub fn sized(name: &str, size: usize) -> FileHandle {
    FileHandle::from_bytes(name, vec![0u8; size])
}

/// Form with valid personal details, still on the first step.
pub fn personal_details(visa_type: VisaType) -> IntakeForm {
    let mut form = IntakeForm::new(visa_type);
    form.set_name("Aisha Khan");
    form.set_email("aisha@example.com");
    form.set_phone("+971501234567");
    form.select_nationality(&Country::new("7", "Pakistan"));
    form
}
