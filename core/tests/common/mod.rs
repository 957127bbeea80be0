// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use std::sync::Arc;

use storefront::{MemoryStore, NewItem, NewUser, SqliteStore, Store};
use tracing::Level;

// --- Store Builders ---

/// Fresh in-memory SQLite database with the schema applied.
/// One connection only: each `sqlite::memory:` connection is its own database.
pub async fn sqlite_memory_store() -> Arc<dyn Store> {
  let store = SqliteStore::connect("sqlite::memory:", 1)
    .await
    .expect("in-memory SQLite should open");
  store.migrate().await.expect("migrations should apply");
  Arc::new(store)
}

pub fn memory_store() -> Arc<dyn Store> {
  Arc::new(MemoryStore::new())
}

/// Both gateway implementations, labelled for assertion messages.
pub async fn all_stores() -> Vec<(&'static str, Arc<dyn Store>)> {
  vec![("sqlite", sqlite_memory_store().await), ("memory", memory_store())]
}

// --- Fixtures ---

pub fn new_user(username: &str, password: &str) -> NewUser {
  NewUser {
    username: username.to_string(),
    password: password.to_string(),
  }
}

pub fn new_item(name: &str, status: &str) -> NewItem {
  NewItem {
    name: name.to_string(),
    status: status.to_string(),
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
