use crate::domain::FileHandle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartValue {
    Text(String),
    File(FileHandle),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPart {
    pub name: String,
    pub value: PartValue,
}

/// Ordered multipart body; the transport picks the boundary when encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    parts: Vec<FormPart>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_text(name, value);
        self
    }

    pub fn file(mut self, name: impl Into<String>, file: FileHandle) -> Self {
        self.push_file(name, file);
        self
    }

    pub fn push_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.parts.push(FormPart {
            name: name.into(),
            value: PartValue::Text(value.into()),
        });
    }

    pub fn push_file(&mut self, name: impl Into<String>, file: FileHandle) {
        self.parts.push(FormPart {
            name: name.into(),
            value: PartValue::File(file),
        });
    }

    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    pub fn names(&self) -> Vec<&str> {
        self.parts.iter().map(|part| part.name.as_str()).collect()
    }

    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|part| match &part.value {
            PartValue::Text(value) if part.name == name => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn file_value(&self, name: &str) -> Option<&FileHandle> {
        self.parts.iter().find_map(|part| match &part.value {
            PartValue::File(file) if part.name == name => Some(file),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
