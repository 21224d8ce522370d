//! Three-step application form: personal details, documents, review.
//!
//! The draft lives only in memory. Validation is pure ([`validation`]) and
//! the state machine in [`wizard`] decides when a step may advance and when a
//! submission may go out.

pub mod draft;
pub mod fields;
pub mod review;
pub mod validation;
pub mod wizard;

use std::fmt;

pub use draft::{ApplicationDraft, Contact, Dependents, MAX_DEPENDENTS, MIN_DEPENDENTS};
pub use fields::{FieldKey, ValidationErrors};
pub use review::{ReviewDocument, ReviewSummary};
pub use validation::validate_step;
pub use wizard::{IntakeForm, SubmissionState, SubmitAttempt, SubmitOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Personal,
    Documents,
    Review,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Personal, Step::Documents, Step::Review];

    pub fn number(&self) -> u8 {
        match self {
            Step::Personal => 1,
            Step::Documents => 2,
            Step::Review => 3,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Step::ALL.into_iter().find(|step| step.number() == number)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Personal => "Personal Information",
            Step::Documents => "Document Upload",
            Step::Review => "Review & Submit",
        }
    }

    pub fn next(&self) -> Option<Self> {
        Step::from_number(self.number() + 1)
    }

    pub fn previous(&self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Step::from_number)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} of 3: {}", self.number(), self.title())
    }
}
