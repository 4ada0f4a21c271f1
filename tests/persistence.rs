use contact_card::prelude::{
    ContactCard, Field, JsonFileStore, KeyValueStore, SubmitOutcome,
};

fn filled_card(store: JsonFileStore) -> ContactCard {
    let mut card = ContactCard::new(Box::new(store));
    card.update_field(Field::FirstName, "Jane");
    card.update_field(Field::LastName, "Doe");
    card.update_field(Field::MobileNumber, "5551234567");
    card.update_field(Field::Email, "jane@example.com");
    card
}

#[tokio::test]
async fn saved_card_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contact.json");

    let mut card = filled_card(JsonFileStore::new(&path));
    assert_eq!(card.submit().await, SubmitOutcome::Saved);

    // A fresh card over the same file stands in for a new process.
    let mut restarted = ContactCard::new(Box::new(JsonFileStore::new(&path)));
    restarted.load().await;

    assert_eq!(restarted.fields(), card.fields());
}

#[tokio::test]
async fn partially_stored_card_fills_only_stored_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contact.json");

    let store = JsonFileStore::new(&path);
    store.set_item("firstName", "Jane").await.unwrap();
    store.set_item("email", "jane@example.com").await.unwrap();

    let mut card = ContactCard::new(Box::new(JsonFileStore::new(&path)));
    card.load().await;

    assert_eq!(card.fields().first_name, "Jane");
    assert_eq!(card.fields().email, "jane@example.com");
    assert_eq!(card.fields().last_name, "");
    assert_eq!(card.fields().mobile_number, "");
}

#[tokio::test]
async fn rejected_submit_never_creates_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contact.json");

    let mut card = filled_card(JsonFileStore::new(&path));
    card.update_field(Field::FirstName, "");

    assert!(matches!(card.submit().await, SubmitOutcome::Invalid(_)));
    assert!(!path.exists());
}

#[tokio::test]
async fn resubmit_overwrites_previous_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contact.json");

    let mut card = filled_card(JsonFileStore::new(&path));
    assert_eq!(card.submit().await, SubmitOutcome::Saved);

    card.update_field(Field::Email, "jane.doe@example.com");
    assert_eq!(card.submit().await, SubmitOutcome::Saved);

    let mut reloaded = ContactCard::new(Box::new(JsonFileStore::new(&path)));
    reloaded.load().await;

    assert_eq!(reloaded.fields().email, "jane.doe@example.com");
    assert_eq!(reloaded.fields().first_name, "Jane");
}
