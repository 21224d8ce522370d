use std::fmt;

use crate::domain::DocumentSlot;

use super::draft::ApplicationDraft;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDocument {
    pub slot: DocumentSlot,
    pub file_name: Option<String>,
    pub required: bool,
}

/// Read-only summary shown on the last step before submitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSummary {
    pub visa_title: String,
    pub details: Vec<(String, String)>,
    pub documents: Vec<ReviewDocument>,
}

impl ReviewSummary {
    pub fn from_draft(draft: &ApplicationDraft) -> Self {
        let contact = &draft.contact;
        let mut details = vec![
            ("Name".to_string(), or_dash(&contact.name)),
            ("Email".to_string(), or_dash(&contact.email)),
            ("Phone".to_string(), or_dash(&contact.phone)),
            (
                "Nationality".to_string(),
                contact
                    .nationality_name
                    .clone()
                    .or_else(|| contact.nationality_id.clone())
                    .unwrap_or_else(|| "-".into()),
            ),
        ];

        if let Some(dependents) = draft.dependents.as_ref() {
            details.push((
                "Dependents".to_string(),
                dependents
                    .count
                    .map(|count| count.to_string())
                    .unwrap_or_else(|| "-".into()),
            ));
            for (index, relationship) in dependents.relationships.iter().enumerate() {
                details.push((
                    format!("Person {}", index + 1),
                    relationship
                        .map(|relationship| relationship.label().to_string())
                        .unwrap_or_else(|| "-".into()),
                ));
            }
        }

        let documents = DocumentSlot::ALL
            .into_iter()
            .filter(|slot| slot.is_required(draft.visa_type) || draft.document(*slot).is_some())
            .map(|slot| ReviewDocument {
                slot,
                file_name: draft.document(slot).map(|file| file.file_name.clone()),
                required: slot.is_required(draft.visa_type),
            })
            .collect();

        Self {
            visa_title: draft.visa_type.title().to_string(),
            details,
            documents,
        }
    }

    pub fn missing_documents(&self) -> impl Iterator<Item = DocumentSlot> + '_ {
        self.documents
            .iter()
            .filter(|doc| doc.required && doc.file_name.is_none())
            .map(|doc| doc.slot)
    }
}

fn or_dash(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        "-".into()
    } else {
        trimmed.to_string()
    }
}

impl fmt::Display for ReviewSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.visa_title)?;
        let width = self
            .details
            .iter()
            .map(|(label, _)| label.len())
            .chain(self.documents.iter().map(|doc| doc.slot.label().len()))
            .max()
            .unwrap_or(0);

        for (label, value) in &self.details {
            writeln!(f, "  {:<width$}  {}", label, value, width = width)?;
        }
        if !self.documents.is_empty() {
            writeln!(f, "Documents")?;
            for doc in &self.documents {
                let value = match (&doc.file_name, doc.required) {
                    (Some(name), _) => name.clone(),
                    (None, true) => "missing (required)".to_string(),
                    (None, false) => "-".to_string(),
                };
                writeln!(f, "  {:<width$}  {}", doc.slot.label(), value, width = width)?;
            }
        }
        Ok(())
    }
}
