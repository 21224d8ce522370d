pub mod application;
pub mod country;
pub mod document;
pub mod phone;
pub mod visa;

pub use application::Application;
pub use country::{flag_for, Country};
pub use document::{DocumentSlot, FileFormat, FileHandle, FileSource, MAX_UPLOAD_BYTES};
pub use phone::CallingCode;
pub use visa::{Relationship, VisaType};
