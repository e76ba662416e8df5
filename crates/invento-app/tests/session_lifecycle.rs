//! Session persistence across logins, logouts and reloads.

#![allow(clippy::unwrap_used)]

use invento_app::{AppConfig, SessionStore};
use invento_core::effects::StorageEffects;
use invento_core::Actor;
use invento_effects::{FilesystemStorageHandler, MemoryStorageHandler};
use invento_testkit::{actor_with, arb_actor, corrupt, wildcard_actor, FaultyStorage};
use proptest::prelude::*;

const KEY: &str = "invento-user";

#[test]
fn test_login_twice_equals_login_once() {
    let once = MemoryStorageHandler::new();
    let twice = MemoryStorageHandler::new();
    let actor = actor_with(&["inventory.read"]);

    let mut a = SessionStore::init(once.clone(), KEY);
    a.login(actor.clone());
    let mut b = SessionStore::init(twice.clone(), KEY);
    b.login(actor.clone());
    b.login(actor.clone());

    assert_eq!(a.current_actor(), b.current_actor());
    assert_eq!(once.retrieve(KEY).unwrap(), twice.retrieve(KEY).unwrap());
}

#[test]
fn test_relogin_replaces_actor() {
    let mut store = SessionStore::init(MemoryStorageHandler::new(), KEY);
    store.login(actor_with(&["inventory.read"]));
    store.login(wildcard_actor());

    let reloaded = SessionStore::init(store.dispose(), KEY);
    assert_eq!(reloaded.current_actor(), Some(&wildcard_actor()));
}

#[test]
fn test_logout_then_reload_is_unauthenticated() {
    let storage = MemoryStorageHandler::new();
    let mut store = SessionStore::init(storage.clone(), KEY);
    store.login(wildcard_actor());
    store.logout();

    assert!(!store.is_authenticated());
    assert!(storage.is_empty());
    assert!(!SessionStore::init(storage, KEY).is_authenticated());
}

#[test]
fn test_logout_without_session_is_harmless() {
    let mut store = SessionStore::init(MemoryStorageHandler::new(), KEY);
    store.logout();
    assert!(!store.is_authenticated());
}

#[test]
fn test_reload_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        storage_dir: dir.path().to_path_buf(),
        ..AppConfig::default()
    };
    let actor = actor_with(&["sales.read", "sales.write"]);

    let mut store =
        SessionStore::from_config(FilesystemStorageHandler::new(&config.storage_dir), &config);
    store.login(actor.clone());
    drop(store);

    assert!(dir.path().join("invento-user.dat").exists());
    let restored =
        SessionStore::from_config(FilesystemStorageHandler::new(&config.storage_dir), &config);
    assert_eq!(restored.current_actor(), Some(&actor));
}

#[test]
fn test_corrupted_record_is_discarded() {
    let storage = MemoryStorageHandler::new();
    corrupt(&storage, KEY);

    let store = SessionStore::init(storage.clone(), KEY);
    assert!(!store.is_authenticated());
    assert!(!storage.exists(KEY).unwrap());
}

#[test]
fn test_non_utf8_record_is_discarded() {
    let storage = MemoryStorageHandler::new();
    storage.store(KEY, vec![0xff, 0xfe, 0x00]).unwrap();

    assert!(!SessionStore::init(storage.clone(), KEY).is_authenticated());
    assert!(storage.is_empty());
}

#[test]
fn test_unreadable_storage_starts_unauthenticated() {
    let storage = FaultyStorage::new();
    storage.backing().store(KEY, serde_json::to_vec(&wildcard_actor()).unwrap()).unwrap();
    storage.fail_reads(true);

    let store = SessionStore::init(storage.clone(), KEY);
    assert!(!store.is_authenticated());
    // Read failures are not corruption; the record survives for the next start.
    assert!(storage.backing().exists(KEY).unwrap());
}

#[test]
fn test_write_failure_still_logs_in() {
    let storage = FaultyStorage::new();
    storage.fail_writes(true);

    let mut store = SessionStore::init(storage.clone(), KEY);
    store.login(wildcard_actor());

    assert_eq!(store.current_actor(), Some(&wildcard_actor()));
    assert!(storage.backing().is_empty());
}

#[test]
fn test_delete_failure_still_logs_out() {
    let storage = FaultyStorage::new();
    let mut store = SessionStore::init(storage.clone(), KEY);
    store.login(wildcard_actor());

    storage.fail_deletes(true);
    store.logout();

    assert!(!store.is_authenticated());
    assert!(storage.backing().exists(KEY).unwrap());
}

proptest! {
    #[test]
    fn prop_reload_restores_exact_actor(actor in arb_actor()) {
        let storage = MemoryStorageHandler::new();
        SessionStore::init(storage.clone(), KEY).login(actor.clone());

        let restored = SessionStore::init(storage, KEY);
        let current: Option<&Actor> = restored.current_actor();
        prop_assert_eq!(current, Some(&actor));
    }
}
