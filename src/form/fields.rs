use std::collections::BTreeMap;
use std::fmt;

use crate::domain::DocumentSlot;

/// Identifies an input of the application form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    Name,
    Email,
    Phone,
    Nationality,
    PeopleCount,
    Person(usize),
    Document(DocumentSlot),
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKey::Name => f.write_str("name"),
            FieldKey::Email => f.write_str("email"),
            FieldKey::Phone => f.write_str("phone"),
            FieldKey::Nationality => f.write_str("country_id"),
            FieldKey::PeopleCount => f.write_str("peopleCount"),
            FieldKey::Person(index) => write!(f, "people[{}]", index),
            FieldKey::Document(slot) => f.write_str(slot.key()),
        }
    }
}

/// Field-scoped messages; empty means the checked step passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: BTreeMap<FieldKey, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: FieldKey, message: impl Into<String>) {
        self.entries.insert(key, message.into());
    }

    pub fn remove(&mut self, key: FieldKey) -> Option<String> {
        self.entries.remove(&key)
    }

    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> + '_ {
        self.entries
            .iter()
            .map(|(key, message)| (*key, message.as_str()))
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        self.entries.extend(other.entries);
    }
}
