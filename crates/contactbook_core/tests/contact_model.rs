use contactbook_core::{Contact, ContactDraft, ContactValidationError, DraftField, GroupSet};
use uuid::Uuid;

#[test]
fn draft_validation_reports_first_failing_field() {
    let groups = GroupSet::default();

    let err = ContactDraft::default().validate(&groups).unwrap_err();
    assert_eq!(err, ContactValidationError::EmptyFirstName);
    assert_eq!(err.field(), DraftField::FirstName);

    let err = ContactDraft::new("Anna", "Berg", "555", "Other")
        .validate(&groups)
        .unwrap_err();
    assert_eq!(err.field(), DraftField::Group);
    assert_eq!(err.to_string(), "group is not configured: `Other`");

    assert!(ContactDraft::new("Anna", "Berg", "555", "Female")
        .validate(&groups)
        .is_ok());
}

#[test]
fn phone_accepts_free_form_text() {
    let groups = GroupSet::default();
    for phone in ["+43 (1) 234-56", "ext. 12", "call me maybe"] {
        assert!(ContactDraft::new("Anna", "Berg", phone, "Female")
            .validate(&groups)
            .is_ok());
    }
}

#[test]
fn contact_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let contact = Contact {
        id,
        first_name: "Anna".to_string(),
        last_name: "Berg".to_string(),
        phone: "555-0100".to_string(),
        group: "Female".to_string(),
    };

    let json = serde_json::to_value(&contact).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["firstName"], "Anna");
    assert_eq!(json["lastName"], "Berg");
    assert_eq!(json["phone"], "555-0100");
    assert_eq!(json["group"], "Female");

    let decoded: Contact = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, contact);
}

#[test]
fn draft_from_contact_copies_editable_fields() {
    let contact = Contact {
        id: Uuid::from_u128(3),
        first_name: "Andrew".to_string(),
        last_name: "Cole".to_string(),
        phone: "555-0101".to_string(),
        group: "Male".to_string(),
    };
    let draft = ContactDraft::from_contact(&contact);
    assert_eq!(draft, ContactDraft::new("Andrew", "Cole", "555-0101", "Male"));
}
