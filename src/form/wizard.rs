use std::time::Duration;

use serde_json::Value;
use uuid::Uuid;

use crate::api::{endpoints, ApiClient, MultipartForm};
use crate::domain::{phone, Country, DocumentSlot, FileHandle, Relationship, VisaType};
use crate::errors::{ApiError, FileError};
use crate::routes::Route;
use crate::ui::{Notifier, UiContext};

use super::draft::{ApplicationDraft, MAX_DEPENDENTS, MIN_DEPENDENTS};
use super::fields::{FieldKey, ValidationErrors};
use super::review::ReviewSummary;
use super::validation::validate_step;
use super::Step;

pub const FIX_ERRORS: &str = "Please fix the errors before submitting";
pub const SUBMITTED: &str =
    "Application Submitted Successfully! 🎉\nWe will contact you within 2-3 hours";
pub const SUBMIT_FAILED: &str = "Something went wrong. Please try again.";

/// Where the one-shot submission currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Editing,
    Submitting,
    Submitted,
    Failed,
}

impl SubmissionState {
    /// A new attempt is only allowed before the first send or after a failure.
    pub fn accepts_attempt(&self) -> bool {
        matches!(self, SubmissionState::Editing | SubmissionState::Failed)
    }
}

/// Result of [`IntakeForm::begin_submit`].
#[derive(Debug)]
pub enum SubmitAttempt {
    /// Payload to upload; the form is now `Submitting`.
    Ready(MultipartForm),
    /// Already in flight or done, or not on the review step.
    Ignored,
    /// Validation failed; errors are populated.
    Invalid,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Submitted,
    Ignored,
    Invalid,
    Failed(ApiError),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted)
    }
}

/// The application form state machine.
#[derive(Debug, Clone)]
pub struct IntakeForm {
    id: Uuid,
    draft: ApplicationDraft,
    step: Step,
    errors: ValidationErrors,
    submission: SubmissionState,
}

impl IntakeForm {
    pub fn new(visa_type: VisaType) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(form = %id, visa_type = %visa_type, "application form opened");
        Self {
            id,
            draft: ApplicationDraft::new(visa_type),
            step: Step::Personal,
            errors: ValidationErrors::new(),
            submission: SubmissionState::Editing,
        }
    }

    /// Form for the `type` query parameter; unknown or missing values select
    /// the default visa.
    pub fn from_param(raw: Option<&str>) -> Self {
        Self::new(VisaType::from_param(raw))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn visa_type(&self) -> VisaType {
        self.draft.visa_type
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, key: FieldKey) -> Option<&str> {
        self.errors.get(key)
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::Submitting
    }

    // Edits. Each one clears the error recorded for the field it touches.

    pub fn set_name(&mut self, name: &str) {
        self.draft.contact.name = name.to_string();
        self.errors.remove(FieldKey::Name);
    }

    pub fn set_email(&mut self, email: &str) {
        self.draft.contact.email = email.to_string();
        self.errors.remove(FieldKey::Email);
    }

    pub fn set_phone(&mut self, phone: &str) {
        self.draft.contact.phone = phone.to_string();
        self.errors.remove(FieldKey::Phone);
    }

    /// Switches the calling code and rewrites the number's prefix to match.
    pub fn select_calling_code(&mut self, code: &str) -> bool {
        let code = code.trim();
        if !phone::is_valid_code(code) {
            return false;
        }
        let contact = &mut self.draft.contact;
        contact.phone = phone::swap_prefix(&contact.phone, &contact.calling_code, code);
        contact.calling_code = code.to_string();
        self.errors.remove(FieldKey::Phone);
        true
    }

    pub fn select_nationality(&mut self, country: &Country) {
        self.draft.contact.nationality_id = Some(country.id.clone());
        self.draft.contact.nationality_name = Some(country.name.clone());
        self.errors.remove(FieldKey::Nationality);
    }

    /// Sets how many dependents are sponsored. Resets every relationship.
    pub fn set_dependent_count(&mut self, count: u8) -> bool {
        let Some(dependents) = self.draft.dependents.as_mut() else {
            return false;
        };
        if !(MIN_DEPENDENTS..=MAX_DEPENDENTS).contains(&count) {
            self.errors.insert(
                FieldKey::PeopleCount,
                format!(
                    "Number of dependents must be between {} and {}",
                    MIN_DEPENDENTS, MAX_DEPENDENTS
                ),
            );
            return false;
        }
        dependents.set_count(count);
        self.errors.remove(FieldKey::PeopleCount);
        true
    }

    pub fn set_relationship(&mut self, index: usize, relationship: Relationship) -> bool {
        let Some(slot) = self
            .draft
            .dependents
            .as_mut()
            .and_then(|dependents| dependents.relationships.get_mut(index))
        else {
            return false;
        };
        *slot = Some(relationship);
        self.errors.remove(FieldKey::Person(index));
        true
    }

    /// Attaches a file to a slot after checking type then size. A rejected
    /// file leaves the slot unchanged and records the reason on the field.
    pub fn attach_document(&mut self, slot: DocumentSlot, file: FileHandle) -> Result<(), FileError> {
        let key = FieldKey::Document(slot);
        if let Err(err) = slot.check(&file) {
            tracing::debug!(form = %self.id, slot = %slot, error = %err, "document rejected");
            self.errors.insert(key, err.to_string());
            return Err(err);
        }
        self.draft.documents.insert(slot, file);
        self.errors.remove(key);
        Ok(())
    }

    pub fn remove_document(&mut self, slot: DocumentSlot) -> Option<FileHandle> {
        self.draft.documents.remove(&slot)
    }

    // Navigation.

    /// Validates the current step and advances when it passes. On the last
    /// step this is a no-op.
    pub fn next_step(&mut self) -> bool {
        let Some(next) = self.step.next() else {
            return false;
        };
        if !self.validate_current() {
            return false;
        }
        self.step = next;
        true
    }

    /// Goes back one step without validating; recorded errors are kept.
    pub fn prev_step(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                true
            }
            None => false,
        }
    }

    /// Replaces the error map with the result of validating the current step.
    pub fn validate_current(&mut self) -> bool {
        self.errors = validate_step(&self.draft, self.step);
        self.errors.is_empty()
    }

    // Submission.

    /// Claims the one-shot submission and produces the payload.
    pub fn begin_submit(&mut self, notifier: &dyn Notifier) -> SubmitAttempt {
        if !self.submission.accepts_attempt() {
            tracing::debug!(form = %self.id, state = ?self.submission, "submit ignored");
            return SubmitAttempt::Ignored;
        }
        if self.step != Step::Review {
            return SubmitAttempt::Ignored;
        }
        self.errors = validate_step(&self.draft, Step::Review);
        if !self.errors.is_empty() {
            notifier.error(FIX_ERRORS);
            return SubmitAttempt::Invalid;
        }
        self.submission = SubmissionState::Submitting;
        SubmitAttempt::Ready(self.build_payload())
    }

    /// Settles an in-flight submission with the server's answer.
    pub fn complete_submit(
        &mut self,
        result: Result<Value, ApiError>,
        ui: &UiContext,
        redirect_delay: Duration,
    ) -> SubmitOutcome {
        if self.submission != SubmissionState::Submitting {
            return SubmitOutcome::Ignored;
        }
        match result {
            Ok(_) => {
                self.submission = SubmissionState::Submitted;
                tracing::info!(form = %self.id, visa_type = %self.draft.visa_type, "application submitted");
                ui.notifier.success(SUBMITTED);
                ui.navigator.navigate_after(Route::Home, redirect_delay);
                SubmitOutcome::Submitted
            }
            Err(err) => {
                self.submission = SubmissionState::Failed;
                tracing::warn!(form = %self.id, error = %err, "application submission failed");
                ui.notifier.error(SUBMIT_FAILED);
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Validates, uploads and settles in one call.
    pub fn submit(
        &mut self,
        client: &ApiClient,
        ui: &UiContext,
        redirect_delay: Duration,
    ) -> SubmitOutcome {
        match self.begin_submit(ui.notifier.as_ref()) {
            SubmitAttempt::Ready(payload) => {
                let result = client.upload(endpoints::VISA_REQUESTS, payload);
                self.complete_submit(result, ui, redirect_delay)
            }
            SubmitAttempt::Ignored => SubmitOutcome::Ignored,
            SubmitAttempt::Invalid => SubmitOutcome::Invalid,
        }
    }

    /// Multipart payload: text fields first, then one file part per filled
    /// slot in upload order.
    pub fn build_payload(&self) -> MultipartForm {
        let contact = &self.draft.contact;
        let mut form = MultipartForm::new()
            .text("name", contact.name.trim())
            .text("email", contact.email.trim())
            .text("phone", contact.phone.trim())
            .text("type", self.draft.visa_type.as_str())
            .text("country_id", contact.nationality_id.clone().unwrap_or_default());

        if let Some(dependents) = self.draft.dependents.as_ref() {
            if let Some(count) = dependents.count {
                form.push_text("people_count", count.to_string());
            }
            for (index, relationship) in dependents.relationships.iter().enumerate() {
                if let Some(relationship) = relationship {
                    form.push_text(format!("people[{}]", index), relationship.as_str());
                }
            }
        }

        for slot in DocumentSlot::SUBMISSION_ORDER {
            if let Some(file) = self.draft.document(slot) {
                form.push_file(slot.multipart_name(), file.clone());
            }
        }
        form
    }

    pub fn review(&self) -> ReviewSummary {
        ReviewSummary::from_draft(&self.draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{NoticeKind, RecordingNotifier};

    fn pdf(name: &str) -> FileHandle {
        FileHandle::from_bytes(name, b"%PDF-1.4".to_vec())
    }

    fn filled(visa_type: VisaType) -> IntakeForm {
        let mut form = IntakeForm::new(visa_type);
        form.set_name("Aisha Khan");
        form.set_email("aisha@example.com");
        form.set_phone("+971501234567");
        form.select_nationality(&Country::new("7", "Pakistan"));
        form
    }

    #[test]
    fn next_step_blocks_on_errors_and_keeps_step() {
        let mut form = IntakeForm::new(VisaType::TenYears);
        assert!(!form.next_step());
        assert_eq!(form.step(), Step::Personal);
        assert_eq!(form.error(FieldKey::Name), Some("Name is required"));
        assert_eq!(form.error(FieldKey::Phone), Some("Phone number is required"));
    }

    #[test]
    fn edits_clear_their_own_error_only() {
        let mut form = IntakeForm::new(VisaType::TenYears);
        form.next_step();
        form.set_name("A");
        assert!(form.error(FieldKey::Name).is_none());
        assert!(form.error(FieldKey::Email).is_some());
    }

    #[test]
    fn calling_code_swap_rewrites_prefix() {
        let mut form = IntakeForm::new(VisaType::TenYears);
        form.set_phone("+971501234567");
        assert!(form.select_calling_code("+44"));
        assert_eq!(form.draft().contact.phone, "+44501234567");
        assert!(!form.select_calling_code("44"));
        assert_eq!(form.draft().contact.calling_code, "+44");
    }

    #[test]
    fn rejected_document_leaves_slot_empty() {
        let mut form = IntakeForm::new(VisaType::TenYears);
        let err = form
            .attach_document(DocumentSlot::PassportCopy, FileHandle::from_bytes("p.png", vec![0; 4]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Passport copy must be a PDF file");
        assert!(form.draft().document(DocumentSlot::PassportCopy).is_none());
        assert_eq!(
            form.error(FieldKey::Document(DocumentSlot::PassportCopy)),
            Some("Passport copy must be a PDF file")
        );

        form.attach_document(DocumentSlot::PassportCopy, pdf("p.pdf")).unwrap();
        assert!(form.error(FieldKey::Document(DocumentSlot::PassportCopy)).is_none());
    }

    #[test]
    fn dependent_count_resets_relationships_and_clears_error() {
        let mut form = filled(VisaType::Family);
        form.next_step();
        assert_eq!(
            form.error(FieldKey::PeopleCount),
            Some("Number of dependents is required")
        );
        assert!(form.set_dependent_count(2));
        assert!(form.error(FieldKey::PeopleCount).is_none());
        assert!(form.set_relationship(0, Relationship::Husband));
        assert!(form.set_dependent_count(3));
        let dependents = form.draft().dependents.as_ref().unwrap();
        assert_eq!(dependents.relationships, vec![None, None, None]);
        assert!(!form.set_dependent_count(11));
        assert!(!form.set_relationship(5, Relationship::Children));
    }

    #[test]
    fn non_family_forms_have_no_dependents() {
        let mut form = IntakeForm::new(VisaType::RealEstate);
        assert!(!form.set_dependent_count(1));
    }

    #[test]
    fn prev_step_floors_at_first_and_keeps_errors() {
        let mut form = filled(VisaType::TenYears);
        assert!(form.next_step());
        assert!(!form.next_step());
        assert!(form.prev_step());
        assert!(!form.prev_step());
        assert_eq!(form.step(), Step::Personal);
        assert!(form
            .error(FieldKey::Document(DocumentSlot::PassportCopy))
            .is_some());
    }

    #[test]
    fn begin_submit_outside_review_is_ignored() {
        let notifier = RecordingNotifier::default();
        let mut form = filled(VisaType::TenYears);
        assert!(matches!(form.begin_submit(&notifier), SubmitAttempt::Ignored));
        assert_eq!(form.submission(), SubmissionState::Editing);
    }

    #[test]
    fn payload_orders_text_then_files() {
        let mut form = filled(VisaType::Family);
        form.set_dependent_count(2);
        form.set_relationship(0, Relationship::Husband);
        form.set_relationship(1, Relationship::Children);
        form.attach_document(DocumentSlot::VisaCopy, pdf("visa.pdf")).unwrap();
        form.attach_document(DocumentSlot::PassportCopy, pdf("passport.pdf")).unwrap();

        let payload = form.build_payload();
        assert_eq!(
            payload.names(),
            vec![
                "name",
                "email",
                "phone",
                "type",
                "country_id",
                "people_count",
                "people[0]",
                "people[1]",
                "passport",
                "visa_copy",
            ]
        );
        assert_eq!(payload.text_value("type"), Some("family"));
        assert_eq!(payload.text_value("people[1]"), Some("children"));
    }

    #[test]
    fn review_step_validation_notifies_once() {
        let notifier = RecordingNotifier::default();
        let mut form = filled(VisaType::TenYears);
        form.attach_document(DocumentSlot::PassportCopy, pdf("p.pdf")).unwrap();
        assert!(form.next_step());
        assert!(form.next_step());
        form.set_name(" ");

        assert!(matches!(form.begin_submit(&notifier), SubmitAttempt::Invalid));
        assert_eq!(notifier.messages(NoticeKind::Error), vec![FIX_ERRORS.to_string()]);
        assert_eq!(form.submission(), SubmissionState::Editing);
    }
}
