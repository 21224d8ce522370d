use std::collections::BTreeMap;

use crate::domain::phone::DEFAULT_CALLING_CODE;
use crate::domain::{DocumentSlot, FileHandle, Relationship, VisaType};

pub const MIN_DEPENDENTS: u8 = 1;
pub const MAX_DEPENDENTS: u8 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub email: String,
    /// Selected calling code, e.g. `+971`.
    pub calling_code: String,
    /// Full number including the calling code.
    pub phone: String,
    pub nationality_id: Option<String>,
    pub nationality_name: Option<String>,
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            calling_code: DEFAULT_CALLING_CODE.into(),
            phone: DEFAULT_CALLING_CODE.into(),
            nationality_id: None,
            nationality_name: None,
        }
    }
}

/// Sponsored family members; only present for the family visa.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dependents {
    pub count: Option<u8>,
    /// One slot per dependent, `None` until a relationship is picked.
    pub relationships: Vec<Option<Relationship>>,
}

impl Dependents {
    pub fn set_count(&mut self, count: u8) {
        self.count = Some(count);
        self.relationships = vec![None; count as usize];
    }

    pub fn is_complete(&self) -> bool {
        match self.count {
            Some(count) => (0..count as usize).all(|index| {
                self.relationships
                    .get(index)
                    .is_some_and(|slot| slot.is_some())
            }),
            None => false,
        }
    }
}

/// In-memory application being filled in. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationDraft {
    pub visa_type: VisaType,
    pub contact: Contact,
    pub dependents: Option<Dependents>,
    pub documents: BTreeMap<DocumentSlot, FileHandle>,
}

impl ApplicationDraft {
    pub fn new(visa_type: VisaType) -> Self {
        Self {
            visa_type,
            contact: Contact::default(),
            dependents: visa_type.is_family().then(Dependents::default),
            documents: BTreeMap::new(),
        }
    }

    pub fn document(&self, slot: DocumentSlot) -> Option<&FileHandle> {
        self.documents.get(&slot)
    }

    pub fn missing_required_documents(&self) -> Vec<DocumentSlot> {
        DocumentSlot::ALL
            .into_iter()
            .filter(|slot| slot.is_required(self.visa_type) && !self.documents.contains_key(slot))
            .collect()
    }
}
