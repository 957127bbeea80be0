// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test;
use async_trait::async_trait;
use serde_json::Value;
use storefront::{
  Cart, Item, MemoryStore, NewCart, NewItem, NewOrder, NewUser, Order, SqliteStore, Store, StoreError, StoreResult,
  User,
};
use storefront_server::{AppConfig, AppState};
use tracing::Level;

/// Builds the full service (state, CORS, routes) the way `main` does.
macro_rules! init_app {
  ($state:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(actix_web::web::Data::new($state))
        .wrap(storefront_server::web::Cors)
        .configure(storefront_server::web::configure_app_routes),
    )
    .await
  };
}

// --- State Builders ---

pub fn state_with(store: Arc<dyn Store>) -> AppState {
  let config = AppConfig::from_lookup(|_| None).expect("default config should be valid");
  AppState::new(store, Arc::new(config))
}

pub fn memory_state() -> AppState {
  state_with(Arc::new(MemoryStore::new()))
}

pub async fn sqlite_state() -> AppState {
  let store = SqliteStore::connect("sqlite::memory:", 1)
    .await
    .expect("in-memory SQLite should open");
  store.migrate().await.expect("migrations should apply");
  state_with(Arc::new(store))
}

// --- Request Helpers ---

/// Sends `req` and returns the status plus the JSON body (`Null` when empty).
pub async fn send<S, R, B>(app: &S, req: R) -> (StatusCode, Value)
where
  S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
  B: MessageBody,
{
  let resp = test::call_service(app, req).await;
  let status = resp.status();
  let bytes = test::read_body(resp).await;
  if bytes.is_empty() {
    return (status, Value::Null);
  }
  let body = serde_json::from_slice(&bytes).expect("response body should be JSON");
  (status, body)
}

pub fn post_json(uri: &str, body: Value) -> test::TestRequest {
  test::TestRequest::post().uri(uri).set_json(body)
}

pub fn post_json_with_token(uri: &str, token: &str, body: Value) -> test::TestRequest {
  post_json(uri, body).insert_header(("token", token))
}

// --- Failing Store Double ---

/// Every operation fails as if the pool had been shut down.
pub struct FailingStore;

fn closed<T>() -> StoreResult<T> {
  Err(StoreError::Database(sqlx::Error::PoolClosed))
}

#[async_trait]
impl Store for FailingStore {
  async fn create_user(&self, _new_user: NewUser) -> StoreResult<User> {
    closed()
  }
  async fn list_users(&self) -> StoreResult<Vec<User>> {
    closed()
  }
  async fn find_user_by_credentials(&self, _username: &str, _password: &str) -> StoreResult<Option<User>> {
    closed()
  }
  async fn find_user_by_token(&self, _token: &str) -> StoreResult<Option<User>> {
    closed()
  }
  async fn save_user(&self, _user: &User) -> StoreResult<()> {
    closed()
  }
  async fn create_item(&self, _new_item: NewItem) -> StoreResult<Item> {
    closed()
  }
  async fn list_items(&self) -> StoreResult<Vec<Item>> {
    closed()
  }
  async fn find_item(&self, _item_id: i64) -> StoreResult<Option<Item>> {
    closed()
  }
  async fn find_or_create_cart(&self, _new_cart: NewCart) -> StoreResult<(Cart, bool)> {
    closed()
  }
  async fn append_cart_item(&self, _cart_id: i64, _item_id: i64) -> StoreResult<()> {
    closed()
  }
  async fn list_carts(&self) -> StoreResult<Vec<Cart>> {
    closed()
  }
  async fn create_order(&self, _new_order: NewOrder) -> StoreResult<Order> {
    closed()
  }
  async fn list_orders(&self) -> StoreResult<Vec<Order>> {
    closed()
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
