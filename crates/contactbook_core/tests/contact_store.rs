use contactbook_core::{
    ContactDraft, ContactQuery, ContactRepository, ContactService, ContactValidationError,
    GroupSet, InMemoryContactRepository, RepoError, SequentialIdGenerator,
};
use std::collections::HashSet;
use uuid::Uuid;

type TestService = ContactService<InMemoryContactRepository<SequentialIdGenerator>>;

fn service() -> TestService {
    ContactService::new(InMemoryContactRepository::with_id_generator(
        GroupSet::default(),
        SequentialIdGenerator::default(),
    ))
}

fn draft(first: &str, last: &str, group: &str) -> ContactDraft {
    ContactDraft::new(first, last, "555-0100", group)
}

#[test]
fn added_contacts_have_unique_ids_and_keep_insertion_order() {
    let mut service = service();
    let names = ["Anna", "Bea", "Carl", "Dora", "Emil"];
    let mut created = Vec::new();
    for (index, name) in names.iter().enumerate() {
        let group = if index % 2 == 0 { "Female" } else { "Male" };
        created.push(service.add(&draft(name, "Doe", group)).unwrap());
    }

    let ids: HashSet<_> = created.iter().map(|contact| contact.id).collect();
    assert_eq!(ids.len(), names.len());

    let listed = service.query(&ContactQuery::new("", ""));
    assert_eq!(listed, created);
}

#[test]
fn sequential_ids_are_deterministic() {
    let mut service = service();
    let first = service.add(&draft("Anna", "Berg", "Female")).unwrap();
    let second = service.add(&draft("Andrew", "Cole", "Male")).unwrap();
    assert_eq!(first.id, Uuid::from_u128(1));
    assert_eq!(second.id, Uuid::from_u128(2));
}

#[test]
fn add_then_remove_restores_previous_state() {
    let mut service = service();
    service.add(&draft("Anna", "Berg", "Female")).unwrap();
    service.add(&draft("Bea", "Lind", "Female")).unwrap();
    let before = service.list_all();

    let added = service.add(&draft("Carl", "Moss", "Male")).unwrap();
    assert!(service.remove(added.id));

    assert_eq!(service.list_all(), before);
}

#[test]
fn update_keeps_id_and_position() {
    let mut service = service();
    let first = service.add(&draft("Anna", "Berg", "Female")).unwrap();
    let middle = service.add(&draft("Bea", "Lind", "Female")).unwrap();
    let last = service.add(&draft("Carl", "Moss", "Male")).unwrap();

    let replacement = ContactDraft::new("Bert", "Lindqvist", "+46 70 000", "Male");
    let updated = service.update(middle.id, &replacement).unwrap();
    assert_eq!(updated.id, middle.id);
    assert_eq!(ContactDraft::from_contact(&updated), replacement);

    let listed = service.list_all();
    assert_eq!(listed.len(), 3);
    assert_eq!(listed[0], first);
    assert_eq!(listed[1], updated);
    assert_eq!(listed[2], last);
}

#[test]
fn update_missing_id_returns_not_found_and_changes_nothing() {
    let mut service = service();
    service.add(&draft("Anna", "Berg", "Female")).unwrap();
    let before = service.list_all();

    let missing = Uuid::from_u128(999);
    let err = service
        .update(missing, &draft("Ghost", "User", "Male"))
        .unwrap_err();
    assert_eq!(err, RepoError::NotFound(missing));
    assert_eq!(service.list_all(), before);
}

#[test]
fn update_with_invalid_draft_is_rejected_before_lookup() {
    let mut service = service();
    let anna = service.add(&draft("Anna", "Berg", "Female")).unwrap();

    let err = service
        .update(anna.id, &ContactDraft::new("Anna", "", "555", "Female"))
        .unwrap_err();
    assert_eq!(
        err,
        RepoError::Validation(ContactValidationError::EmptyLastName)
    );
    assert_eq!(service.get(anna.id), Some(anna));
}

#[test]
fn remove_is_idempotent() {
    let mut service = service();
    let anna = service.add(&draft("Anna", "Berg", "Female")).unwrap();
    service.add(&draft("Andrew", "Cole", "Male")).unwrap();

    assert!(service.remove(anna.id));
    let after_once = service.list_all();

    assert!(!service.remove(anna.id));
    assert_eq!(service.list_all(), after_once);
    assert_eq!(service.len(), 1);
}

#[test]
fn remove_unknown_id_is_noop() {
    let mut service = service();
    service.add(&draft("Anna", "Berg", "Female")).unwrap();
    assert!(!service.remove(Uuid::from_u128(42)));
    assert_eq!(service.len(), 1);
}

#[test]
fn add_with_empty_phone_fails_and_store_is_unchanged() {
    let mut service = service();
    service.add(&draft("Anna", "Berg", "Female")).unwrap();
    let before = service.query(&ContactQuery::new("", ""));

    let err = service
        .add(&ContactDraft::new("Bea", "Lind", "", "Female"))
        .unwrap_err();
    assert_eq!(err, RepoError::Validation(ContactValidationError::EmptyPhone));
    assert_eq!(service.query(&ContactQuery::new("", "")), before);
}

#[test]
fn add_rejects_each_missing_field_and_unknown_group() {
    let mut service = service();
    let cases = [
        (
            ContactDraft::new("", "Berg", "555", "Female"),
            ContactValidationError::EmptyFirstName,
        ),
        (
            ContactDraft::new("Anna", "  ", "555", "Female"),
            ContactValidationError::EmptyLastName,
        ),
        (
            ContactDraft::new("Anna", "Berg", "555", ""),
            ContactValidationError::EmptyGroup,
        ),
        (
            ContactDraft::new("Anna", "Berg", "555", "female"),
            ContactValidationError::UnknownGroup("female".to_string()),
        ),
    ];

    for (draft, expected) in cases {
        let err = service.add(&draft).unwrap_err();
        assert_eq!(err, RepoError::Validation(expected));
    }
    assert!(service.is_empty());
}

#[test]
fn configured_groups_replace_defaults() {
    let groups = contactbook_core::ContactBookConfig {
        groups: vec!["Family".to_string(), "Work".to_string()],
    }
    .group_set()
    .unwrap();
    let mut repo = InMemoryContactRepository::new(groups);

    assert!(repo.add(&draft("Anna", "Berg", "Work")).is_ok());
    let err = repo.add(&draft("Bea", "Lind", "Female")).unwrap_err();
    assert_eq!(
        err,
        RepoError::Validation(ContactValidationError::UnknownGroup("Female".to_string()))
    );
    assert_eq!(repo.len(), 1);
}

#[test]
fn update_stores_draft_values_verbatim() {
    let mut service = service();
    let anna = service.add(&draft("Anna", "Berg", "Female")).unwrap();

    let padded = ContactDraft::new("Anna ", " Berg", " 555 ", "Female");
    let updated = service.update(anna.id, &padded).unwrap();
    assert_eq!(ContactDraft::from_contact(&updated), padded);
    assert_eq!(
        ContactDraft::from_contact(&service.list_all()[0]),
        padded
    );
}

#[test]
fn whitespace_only_phone_is_rejected() {
    let mut service = service();
    let err = service
        .add(&ContactDraft::new("Anna", "Berg", " ", "Female"))
        .unwrap_err();
    assert_eq!(err, RepoError::Validation(ContactValidationError::EmptyPhone));
    assert!(service.is_empty());
}
