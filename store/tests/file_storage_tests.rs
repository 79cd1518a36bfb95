//! File backend tests
//!
//! The on-device substrate: one JSON file per collection under a data
//! directory. Exercised through the record store to cover persistence
//! across re-opens.

use std::str::FromStr;

use rust_decimal::Decimal;

use myfish_store::{CreatePondInput, FileStorage, KeyValueStorage, RecordStore};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn pond_input(name: &str) -> CreatePondInput {
    CreatePondInput {
        name: name.to_string(),
        dimensions: "8x4x1.5".to_string(),
        capacity: dec("80"),
        status: "Activo".to_string(),
    }
}

#[tokio::test]
async fn open_creates_the_data_directory() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("nested").join("data");

    let storage = FileStorage::open(&root).await.unwrap();
    assert!(root.is_dir());

    assert_eq!(storage.get("ponds").await.unwrap(), None);
}

#[tokio::test]
async fn records_survive_a_reopen_from_the_same_directory() {
    let dir = tempfile::tempdir().unwrap();

    let created = {
        let storage = FileStorage::open(dir.path()).await.unwrap();
        let store = RecordStore::new(storage);
        store.save_pond(pond_input("A1")).await.unwrap()
    };

    let storage = FileStorage::open(dir.path()).await.unwrap();
    let store = RecordStore::new(storage);
    let ponds = store.ponds().await;
    assert_eq!(ponds, vec![created]);
}

#[tokio::test]
async fn each_collection_gets_its_own_file() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::open(dir.path()).await.unwrap();

    storage.set("ponds", "[]").await.unwrap();
    storage.set("tasks", "[]").await.unwrap();

    assert!(dir.path().join("ponds.json").is_file());
    assert!(dir.path().join("tasks.json").is_file());
}

#[tokio::test]
async fn set_overwrites_the_previous_value() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::open(dir.path()).await.unwrap();

    storage.set("ponds", "[1]").await.unwrap();
    storage.set("ponds", "[1,2]").await.unwrap();

    assert_eq!(storage.get("ponds").await.unwrap().as_deref(), Some("[1,2]"));
}

#[tokio::test]
async fn corrupt_file_lists_as_empty_but_blocks_mutation() {
    let dir = tempfile::tempdir().unwrap();
    tokio::fs::write(dir.path().join("ponds.json"), "not json at all")
        .await
        .unwrap();

    let storage = FileStorage::open(dir.path()).await.unwrap();
    let store = RecordStore::new(storage);

    assert!(store.ponds().await.is_empty());
    assert!(store.save_pond(pond_input("A1")).await.is_err());

    // Original bytes are untouched
    let raw = tokio::fs::read_to_string(dir.path().join("ponds.json"))
        .await
        .unwrap();
    assert_eq!(raw, "not json at all");
}
