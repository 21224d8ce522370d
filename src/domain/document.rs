use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::VisaType;
use crate::errors::FileError;

/// Upper bound for any uploaded document, inclusive.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Named upload field of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentSlot {
    PropertyCopy,
    PassportCopy,
    EidCopy,
    VisaCopy,
    StudioPhoto,
    HealthInsurance,
}

impl DocumentSlot {
    pub const ALL: [DocumentSlot; 6] = [
        DocumentSlot::PropertyCopy,
        DocumentSlot::PassportCopy,
        DocumentSlot::EidCopy,
        DocumentSlot::VisaCopy,
        DocumentSlot::StudioPhoto,
        DocumentSlot::HealthInsurance,
    ];

    /// Order in which file parts are appended to the submission.
    pub const SUBMISSION_ORDER: [DocumentSlot; 6] = [
        DocumentSlot::PropertyCopy,
        DocumentSlot::PassportCopy,
        DocumentSlot::StudioPhoto,
        DocumentSlot::HealthInsurance,
        DocumentSlot::EidCopy,
        DocumentSlot::VisaCopy,
    ];

    /// Form field key, used for validation error lookups.
    pub fn key(&self) -> &'static str {
        match self {
            DocumentSlot::PropertyCopy => "propertyCopy",
            DocumentSlot::PassportCopy => "passportCopy",
            DocumentSlot::EidCopy => "eidCopy",
            DocumentSlot::VisaCopy => "visaCopy",
            DocumentSlot::StudioPhoto => "studioPhoto",
            DocumentSlot::HealthInsurance => "healthInsurance",
        }
    }

    /// Multipart part name expected by the backend; differs from [`key`](Self::key).
    pub fn multipart_name(&self) -> &'static str {
        match self {
            DocumentSlot::PropertyCopy => "property",
            DocumentSlot::PassportCopy => "passport",
            DocumentSlot::EidCopy => "eid",
            DocumentSlot::VisaCopy => "visa_copy",
            DocumentSlot::StudioPhoto => "studio_photo",
            DocumentSlot::HealthInsurance => "health_insurance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentSlot::PropertyCopy => "Property copy",
            DocumentSlot::PassportCopy => "Passport copy",
            DocumentSlot::EidCopy => "Emirates ID copy",
            DocumentSlot::VisaCopy => "Visa copy",
            DocumentSlot::StudioPhoto => "Studio photo",
            DocumentSlot::HealthInsurance => "Health insurance",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        DocumentSlot::ALL.into_iter().find(|slot| {
            slot.key().eq_ignore_ascii_case(trimmed)
                || slot.multipart_name().eq_ignore_ascii_case(trimmed)
        })
    }

    /// Whether the slot must be filled before the documents step can pass.
    pub fn is_required(&self, visa_type: VisaType) -> bool {
        match self {
            DocumentSlot::PassportCopy => true,
            DocumentSlot::PropertyCopy => !visa_type.is_family(),
            DocumentSlot::VisaCopy => visa_type.is_family(),
            DocumentSlot::EidCopy | DocumentSlot::StudioPhoto | DocumentSlot::HealthInsurance => {
                false
            }
        }
    }

    pub fn required_message(&self) -> String {
        match self {
            DocumentSlot::VisaCopy => "Visa copy is required for Family Visa".into(),
            other => format!("{} is required", other.label()),
        }
    }

    pub fn accepted_formats(&self) -> &'static [FileFormat] {
        match self {
            DocumentSlot::PropertyCopy
            | DocumentSlot::PassportCopy
            | DocumentSlot::HealthInsurance => &[FileFormat::Pdf],
            DocumentSlot::EidCopy | DocumentSlot::VisaCopy | DocumentSlot::StudioPhoto => {
                &[FileFormat::Pdf, FileFormat::Jpeg, FileFormat::Png]
            }
        }
    }

    pub fn accepted_description(&self) -> &'static str {
        if matches!(self.accepted_formats(), [FileFormat::Pdf]) {
            "a PDF file"
        } else {
            "a PDF, JPG or PNG file"
        }
    }

    /// Checks a candidate file against this slot's type and size constraints.
    pub fn check(&self, file: &FileHandle) -> Result<(), FileError> {
        if !self.accepted_formats().contains(&file.format) {
            return Err(FileError::WrongType { slot: *self });
        }
        if file.size > MAX_UPLOAD_BYTES {
            return Err(FileError::TooLarge { size: file.size });
        }
        Ok(())
    }
}

impl fmt::Display for DocumentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// File formats recognised by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileFormat {
    Pdf,
    Jpeg,
    Png,
    Gif,
    Other,
}

impl FileFormat {
    pub fn from_file_name(name: &str) -> Self {
        let extension = Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("pdf") => FileFormat::Pdf,
            Some("jpg") | Some("jpeg") => FileFormat::Jpeg,
            Some("png") => FileFormat::Png,
            Some("gif") => FileFormat::Gif,
            _ => FileFormat::Other,
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            FileFormat::Pdf => "application/pdf",
            FileFormat::Jpeg => "image/jpeg",
            FileFormat::Png => "image/png",
            FileFormat::Gif => "image/gif",
            FileFormat::Other => "application/octet-stream",
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, FileFormat::Jpeg | FileFormat::Png | FileFormat::Gif)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

/// A file picked by the user, not yet uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    pub file_name: String,
    pub format: FileFormat,
    pub size: u64,
    pub source: FileSource,
}

impl FileHandle {
    /// Describes a file on disk. Only metadata is read; contents are loaded at
    /// upload time.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FileError> {
        let path = path.as_ref();
        let metadata = fs::metadata(path)
            .map_err(|err| FileError::Unreadable(format!("{}: {}", path.display(), err)))?;
        if !metadata.is_file() {
            return Err(FileError::Unreadable(format!(
                "{} is not a file",
                path.display()
            )));
        }
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload")
            .to_string();
        Ok(Self {
            format: FileFormat::from_file_name(&file_name),
            file_name,
            size: metadata.len(),
            source: FileSource::Path(path.to_path_buf()),
        })
    }

    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        Self {
            format: FileFormat::from_file_name(&file_name),
            size: bytes.len() as u64,
            file_name,
            source: FileSource::Bytes(bytes),
        }
    }

    pub fn content_type(&self) -> &'static str {
        self.format.mime()
    }

    pub fn read_bytes(&self) -> Result<Vec<u8>, FileError> {
        match &self.source {
            FileSource::Bytes(bytes) => Ok(bytes.clone()),
            FileSource::Path(path) => fs::read(path)
                .map_err(|err| FileError::Unreadable(format!("{}: {}", path.display(), err))),
        }
    }
}
