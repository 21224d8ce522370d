mod common;

use common::{pdf, personal_details};
use insta::assert_snapshot;
use visa_intake::domain::{DocumentSlot, FileHandle, Relationship, VisaType};

#[test]
fn family_review_lists_details_and_attached_files() {
    let mut form = personal_details(VisaType::Family);
    form.set_dependent_count(2);
    form.set_relationship(0, Relationship::Husband);
    form.set_relationship(1, Relationship::Children);
    form.attach_document(DocumentSlot::PassportCopy, pdf("passport.pdf"))
        .unwrap();
    form.attach_document(DocumentSlot::VisaCopy, pdf("visa.pdf"))
        .unwrap();
    form.attach_document(
        DocumentSlot::StudioPhoto,
        FileHandle::from_bytes("photo.jpg", vec![0xFF, 0xD8]),
    )
    .unwrap();

    let summary = form.review();
    assert_snapshot!("family_review", summary.to_string());
}

#[test]
fn review_flags_missing_required_documents() {
    let form = personal_details(VisaType::RealEstate);
    let summary = form.review();
    let missing: Vec<_> = summary.missing_documents().collect();
    assert_eq!(
        missing,
        vec![DocumentSlot::PropertyCopy, DocumentSlot::PassportCopy]
    );
    assert!(summary.to_string().contains("missing (required)"));
}
