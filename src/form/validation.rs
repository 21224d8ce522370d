//! Pure validation rules: each function maps the draft to an error map.

use crate::domain::{phone, DocumentSlot};

use super::draft::ApplicationDraft;
use super::fields::{FieldKey, ValidationErrors};
use super::Step;

pub fn validate_step(draft: &ApplicationDraft, step: Step) -> ValidationErrors {
    match step {
        Step::Personal => validate_personal(draft),
        Step::Documents => validate_documents(draft),
        Step::Review => {
            let mut errors = validate_personal(draft);
            errors.merge(validate_documents(draft));
            errors
        }
    }
}

pub fn validate_personal(draft: &ApplicationDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    let contact = &draft.contact;

    if contact.name.trim().is_empty() {
        errors.insert(FieldKey::Name, "Name is required");
    }

    if contact.email.trim().is_empty() {
        errors.insert(FieldKey::Email, "Email is required");
    } else if !is_plausible_email(&contact.email) {
        errors.insert(FieldKey::Email, "Email is invalid");
    }

    if let Some(message) = phone_error(&contact.calling_code, &contact.phone) {
        errors.insert(FieldKey::Phone, message);
    }

    if contact
        .nationality_id
        .as_deref()
        .map_or(true, |id| id.trim().is_empty())
    {
        errors.insert(FieldKey::Nationality, "Nationality is required");
    }

    if draft.visa_type.is_family() {
        let dependents = draft.dependents.as_ref();
        match dependents.and_then(|dependents| dependents.count) {
            None => errors.insert(FieldKey::PeopleCount, "Number of dependents is required"),
            Some(count) => {
                for index in 0..count as usize {
                    let selected = dependents
                        .and_then(|dependents| dependents.relationships.get(index))
                        .is_some_and(|slot| slot.is_some());
                    if !selected {
                        errors.insert(
                            FieldKey::Person(index),
                            format!("Please select relationship for person {}", index + 1),
                        );
                    }
                }
            }
        }
    }

    errors
}

pub fn validate_documents(draft: &ApplicationDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for slot in DocumentSlot::ALL {
        if slot.is_required(draft.visa_type) && draft.document(slot).is_none() {
            errors.insert(FieldKey::Document(slot), slot.required_message());
        }
    }
    errors
}

/// Permissive `text@text.text` shape check.
pub fn is_plausible_email(value: &str) -> bool {
    value.split_whitespace().any(|token| {
        token.char_indices().any(|(at, ch)| {
            if ch != '@' || at == 0 {
                return false;
            }
            let domain = &token[at + 1..];
            domain
                .char_indices()
                .any(|(dot, ch)| ch == '.' && dot > 0 && dot + 1 < domain.len())
        })
    })
}

/// Checks a full phone number against the selected calling code's rule.
pub fn phone_error(calling_code: &str, value: &str) -> Option<String> {
    let trimmed = value.trim();
    let calling_code = calling_code.trim();
    if trimmed.is_empty() || trimmed == calling_code || trimmed == "+" {
        return Some("Phone number is required".into());
    }

    let code = if !calling_code.is_empty() && trimmed.starts_with(calling_code) {
        calling_code
    } else if let Some(entry) = phone::detect(trimmed) {
        entry.code
    } else {
        return Some("Phone number must start with the country calling code".into());
    };

    let national: String = trimmed[code.len()..]
        .chars()
        .filter(|ch| !matches!(ch, ' ' | '-'))
        .collect();
    if national.is_empty() {
        return Some("Phone number is required".into());
    }
    if !national.chars().all(|ch| ch.is_ascii_digit()) {
        return Some("Phone number may only contain digits".into());
    }

    let range = phone::digit_range(code);
    if range.contains(&national.len()) {
        return None;
    }
    let expected = if range.start() == range.end() {
        range.start().to_string()
    } else {
        format!("{}-{}", range.start(), range.end())
    };
    Some(format!(
        "Please enter a complete phone number ({} digits after {})",
        expected, code
    ))
}
