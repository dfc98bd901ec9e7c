use contact_book_core::{AddressBook, BookError, MemoryStore, Record};

fn record(name: &str, birthday: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name, birthday).unwrap();
    for phone in phones {
        record.add_phone(phone).unwrap();
    }
    record
}

#[test]
fn open_on_never_written_store_yields_empty_book() {
    let store = MemoryStore::new();
    let book = AddressBook::open(&store).unwrap();
    assert!(book.is_empty());
    assert!(!store.is_written());
}

#[test]
fn add_record_persists_and_returns_inserted_record() {
    let store = MemoryStore::new();
    let mut book = AddressBook::open(&store).unwrap();

    let inserted = book
        .add_record(record("Ann", "15.03.1990", &["1234567890"]))
        .unwrap();
    assert_eq!(inserted.name.as_str(), "Ann");
    assert!(store.is_written());

    let reopened = AddressBook::open(&store).unwrap();
    assert_eq!(reopened.len(), 1);
    assert!(reopened.get("Ann").is_some());
}

#[test]
fn add_record_rejects_duplicate_name_and_keeps_first() {
    let store = MemoryStore::new();
    let mut book = AddressBook::open(&store).unwrap();

    book.add_record(record("Ann", "", &["1234567890"])).unwrap();
    let err = book
        .add_record(record("Ann", "", &["5551234567"]))
        .unwrap_err();
    assert!(matches!(err, BookError::DuplicateName(name) if name == "Ann"));

    assert_eq!(book.len(), 1);
    let kept = book.get("Ann").unwrap();
    assert_eq!(kept.phones[0].as_str(), "1234567890");
}

#[test]
fn delete_removes_record_and_persists() {
    let store = MemoryStore::new();
    let mut book = AddressBook::open(&store).unwrap();

    book.add_record(record("Ann", "", &[])).unwrap();
    book.add_record(record("Bob", "", &[])).unwrap();
    book.delete("Ann").unwrap();

    assert!(book.get("Ann").is_none());
    assert_eq!(book.len(), 1);

    let reopened = AddressBook::open(&store).unwrap();
    assert!(reopened.get("Ann").is_none());
    assert!(reopened.get("Bob").is_some());
}

#[test]
fn delete_unknown_name_is_not_found() {
    let store = MemoryStore::new();
    let mut book = AddressBook::open(&store).unwrap();

    let err = book.delete("Nobody").unwrap_err();
    assert!(matches!(err, BookError::NotFound(name) if name == "Nobody"));
}

#[test]
fn search_matches_name_case_insensitively_then_phones() {
    let store = MemoryStore::new();
    let mut book = AddressBook::open(&store).unwrap();

    book.add_record(record("Ann", "15.03.1990", &["1234567890"]))
        .unwrap();

    let by_name = book.find_by_name_or_phone("ann");
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name.as_str(), "Ann");

    let by_upper_name = book.find_by_name_or_phone("ANN");
    assert_eq!(by_upper_name.len(), 1);

    let by_phone = book.find_by_name_or_phone("123");
    assert_eq!(by_phone.len(), 1);
    assert_eq!(by_phone[0].name.as_str(), "Ann");

    book.delete("Ann").unwrap();
    assert!(book.find_by_name_or_phone("ann").is_empty());
}

#[test]
fn search_includes_record_once_even_with_multiple_matching_phones() {
    let store = MemoryStore::new();
    let mut book = AddressBook::open(&store).unwrap();

    book.add_record(record("Bob", "", &["5550001111", "5550002222"]))
        .unwrap();

    let results = book.find_by_name_or_phone("5550");
    assert_eq!(results.len(), 1);
}

#[test]
fn search_preserves_insertion_order() {
    let store = MemoryStore::new();
    let mut book = AddressBook::open(&store).unwrap();

    book.add_record(record("Zoe Marsh", "", &[])).unwrap();
    book.add_record(record("Adam Marsh", "", &[])).unwrap();

    let names: Vec<&str> = book
        .find_by_name_or_phone("marsh")
        .into_iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, ["Zoe Marsh", "Adam Marsh"]);
}

#[test]
fn edit_phone_scenario_on_stored_record() {
    let store = MemoryStore::new();
    let mut book = AddressBook::open(&store).unwrap();
    book.add_record(record("Bob", "", &["5551234567"])).unwrap();

    let mut bob = book.get("Bob").unwrap().clone();
    bob.edit_phone("5551234567", "5559876543").unwrap();
    assert!(bob.find_phone("5559876543").is_some());
    assert!(bob.find_phone("5551234567").is_none());

    assert!(bob.edit_phone("0000000000", "1111111111").is_err());
}
