//! Integration tests for the SecureVault vault module.

use std::fs;

use securevault::errors::VaultError;
use securevault::vault::{load_entries, CorruptPolicy, FileStore, KeyValueStore, Vault};
use tempfile::TempDir;

const SLOT: &str = "passwordVault";

/// Helper: a file store inside a fresh temp dir.
fn file_store() -> (TempDir, FileStore) {
    let dir = TempDir::new().expect("create temp dir");
    let store = FileStore::open(dir.path()).expect("open store");
    (dir, store)
}

// ---------------------------------------------------------------------------
// Save then load
// ---------------------------------------------------------------------------

#[test]
fn save_then_load_puts_new_entry_first() {
    let (_dir, store) = file_store();

    let mut vault = Vault::load(store.clone(), SLOT).unwrap();
    vault.save("older", "Bank").unwrap();
    let saved = vault.save("Ab3x!k9Q", "Email").unwrap();

    let loaded = load_entries(&store, SLOT).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0], saved);
    assert_eq!(loaded[0].secret, "Ab3x!k9Q");
    assert_eq!(loaded[0].label, "Email");
    assert_ne!(loaded[0].id, loaded[1].id);
}

#[test]
fn reopen_sees_persisted_entries() {
    let (_dir, store) = file_store();

    let mut vault = Vault::load(store.clone(), SLOT).unwrap();
    vault.save("pw1", "One").unwrap();
    vault.save("pw2", "Two").unwrap();
    drop(vault);

    let vault = Vault::load(store, SLOT).unwrap();
    let labels: Vec<&str> = vault.entries().iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["Two", "One"]);
}

// ---------------------------------------------------------------------------
// Round-trip through the persisted form
// ---------------------------------------------------------------------------

#[test]
fn load_save_load_prepends_and_is_byte_stable() {
    let (_dir, mut store) = file_store();

    let seeded = r#"[{"id":"11111111-2222-4333-8444-555555555555","secret":"x","label":"Old","createdAt":"2023-01-02T03:04:05.678Z"}]"#;
    store.set(SLOT, seeded).unwrap();

    let before = load_entries(&store, SLOT).unwrap();
    assert_eq!(serde_json::to_string(&before).unwrap(), seeded);

    let mut vault = Vault::load(store.clone(), SLOT).unwrap();
    let added = vault.save("new-secret", "New").unwrap();

    let after = load_entries(&store, SLOT).unwrap();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after[0], added);
    assert_eq!(&after[1..], &before[..]);

    // The stored text is exactly what serializing the collection gives.
    let raw = store.get(SLOT).unwrap().unwrap();
    assert_eq!(serde_json::to_string(&after).unwrap(), raw);
}

#[test]
fn reads_store_written_with_legacy_field_names() {
    let (_dir, mut store) = file_store();
    store
        .set(
            SLOT,
            r#"[{"id":"a","password":"pw","account":"Email","createdAt":"2024-02-03T04:05:06.007Z"}]"#,
        )
        .unwrap();

    let vault = Vault::load(store, SLOT).unwrap();
    assert_eq!(vault.entries()[0].secret, "pw");
    assert_eq!(vault.search("ema").len(), 1);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_removes_exactly_one() {
    let (_dir, store) = file_store();
    let mut vault = Vault::load(store.clone(), SLOT).unwrap();
    let a = vault.save("a", "A").unwrap();
    let b = vault.save("b", "B").unwrap();
    let c = vault.save("c", "C").unwrap();

    assert!(vault.delete(&b.id).unwrap());

    let ids: Vec<String> = load_entries(&store, SLOT)
        .unwrap()
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec![c.id, a.id]);
}

#[test]
fn delete_absent_id_changes_nothing() {
    let (_dir, store) = file_store();
    let mut vault = Vault::load(store.clone(), SLOT).unwrap();
    vault.save("a", "A").unwrap();
    let before = store.get(SLOT).unwrap();

    assert!(!vault.delete("does-not-exist").unwrap());
    assert_eq!(vault.len(), 1);
    assert_eq!(store.get(SLOT).unwrap(), before);
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[test]
fn save_email_then_search_finds_it() {
    let (_dir, store) = file_store();
    let mut vault = Vault::load(store, SLOT).unwrap();
    vault.save("hunter2", "Bank").unwrap();
    let email = vault.save("Ab3x...", "Email").unwrap();
    vault.save("p@ss", "Gaming").unwrap();

    let hits = vault.search("ema");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0], &email);
}

#[test]
fn empty_search_returns_full_collection() {
    let (_dir, store) = file_store();
    let mut vault = Vault::load(store, SLOT).unwrap();
    vault.save("1", "A").unwrap();
    vault.save("2", "B").unwrap();

    let all: Vec<_> = vault.entries().iter().collect();
    assert_eq!(vault.search(""), all);
}

// ---------------------------------------------------------------------------
// Malformed persisted state
// ---------------------------------------------------------------------------

#[test]
fn malformed_slot_surfaces_read_error() {
    let (dir, mut store) = file_store();
    store.set(SLOT, "[{\"id\": 1").unwrap();

    match Vault::load(store, SLOT) {
        Err(VaultError::PersistenceReadError(msg)) => assert!(msg.contains(SLOT)),
        Err(e) => panic!("unexpected error: {e}"),
        Ok(_) => panic!("malformed slot should not load"),
    }

    // Nothing was discarded.
    let raw = fs::read_to_string(dir.path().join(format!("{SLOT}.json"))).unwrap();
    assert_eq!(raw, "[{\"id\": 1");
}

#[test]
fn reset_policy_keeps_a_backup() {
    let (dir, mut store) = file_store();
    store.set(SLOT, "garbage").unwrap();

    let mut vault = Vault::load_with_policy(store, SLOT, CorruptPolicy::Reset).unwrap();
    assert!(vault.is_empty());
    vault.save("pw", "Fresh").unwrap();

    let backups: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .filter(|name| name.starts_with(&format!("{SLOT}.corrupt-")))
        .collect();
    assert_eq!(backups.len(), 1);
    assert_eq!(
        fs::read_to_string(dir.path().join(&backups[0])).unwrap(),
        "garbage"
    );
}

/// Names of the backup files next to the vault slot, sorted.
fn backup_files(dir: &TempDir) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .filter(|name| name.starts_with(&format!("{SLOT}.corrupt-")))
        .collect();
    names.sort();
    names
}

#[test]
fn non_utf8_slot_is_a_read_error_and_resets_with_exact_backup() {
    let raw = [0xff, 0xfe, b'[', b']'];
    let (dir, store) = file_store();
    let slot_file = dir.path().join(format!("{SLOT}.json"));
    fs::write(&slot_file, raw).unwrap();

    assert!(matches!(
        Vault::load(store.clone(), SLOT),
        Err(VaultError::PersistenceReadError(_))
    ));
    assert_eq!(fs::read(&slot_file).unwrap(), raw);

    let vault = Vault::load_with_policy(store, SLOT, CorruptPolicy::Reset).unwrap();
    assert!(vault.is_empty());
    assert!(!slot_file.exists());

    let backups = backup_files(&dir);
    assert_eq!(backups.len(), 1);
    assert_eq!(fs::read(dir.path().join(&backups[0])).unwrap(), raw);
}

#[test]
fn back_to_back_resets_keep_every_backup() {
    let (dir, mut store) = file_store();

    store.set(SLOT, "first").unwrap();
    let mut store = Vault::load_with_policy(store, SLOT, CorruptPolicy::Reset)
        .unwrap()
        .into_store();
    store.set(SLOT, "second").unwrap();
    Vault::load_with_policy(store, SLOT, CorruptPolicy::Reset).unwrap();

    let mut contents: Vec<String> = backup_files(&dir)
        .iter()
        .map(|name| fs::read_to_string(dir.path().join(name)).unwrap())
        .collect();
    contents.sort();
    assert_eq!(contents, vec!["first".to_string(), "second".to_string()]);
}
