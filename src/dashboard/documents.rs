use crate::api::endpoints::storage_url;
use crate::domain::{Application, DocumentSlot, FileFormat};

pub const FILE_NOT_AVAILABLE: &str = "File not available";

/// How a stored upload should be presented to the admin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentView {
    Image { url: String },
    Pdf { url: String },
    Download { url: String, file_name: String },
    Unavailable,
}

impl DocumentView {
    pub fn for_path(storage_base: &str, path: Option<&str>) -> Self {
        let Some(path) = path.map(str::trim).filter(|path| !path.is_empty()) else {
            return DocumentView::Unavailable;
        };
        let url = storage_url(storage_base, path);
        match FileFormat::from_file_name(path) {
            FileFormat::Pdf => DocumentView::Pdf { url },
            format if format.is_image() => DocumentView::Image { url },
            _ => DocumentView::Download {
                url,
                file_name: path.rsplit('/').next().unwrap_or(path).to_string(),
            },
        }
    }

    /// Every slot of an application, filled or not.
    pub fn for_application(storage_base: &str, application: &Application) -> Vec<(DocumentSlot, Self)> {
        DocumentSlot::ALL
            .into_iter()
            .map(|slot| (slot, Self::for_path(storage_base, application.document_path(slot))))
            .collect()
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            DocumentView::Image { url }
            | DocumentView::Pdf { url }
            | DocumentView::Download { url, .. } => Some(url),
            DocumentView::Unavailable => None,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            DocumentView::Image { url } => format!("image {}", url),
            DocumentView::Pdf { url } => format!("pdf {}", url),
            DocumentView::Download { url, file_name } => format!("download {} ({})", file_name, url),
            DocumentView::Unavailable => FILE_NOT_AVAILABLE.to_string(),
        }
    }
}
