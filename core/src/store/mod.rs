// core/src/store/mod.rs

//! The storage gateway: the only way handlers reach persisted state.
//!
//! Every method returns a [`StoreResult`]; a miss on a lookup is `Ok(None)`,
//! never an error. No method opens a transaction, so multi-step flows built
//! on top of the gateway are not atomic.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::{Cart, Item, NewCart, NewItem, NewOrder, NewUser, Order, User};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

#[async_trait]
pub trait Store: Send + Sync {
  async fn create_user(&self, new_user: NewUser) -> StoreResult<User>;

  /// All users ordered by id.
  async fn list_users(&self) -> StoreResult<Vec<User>>;

  /// First user (lowest id) whose username and password both match exactly.
  async fn find_user_by_credentials(&self, username: &str, password: &str) -> StoreResult<Option<User>>;

  /// First user (lowest id) whose stored token equals `token`.
  async fn find_user_by_token(&self, token: &str) -> StoreResult<Option<User>>;

  /// Upsert by primary key.
  async fn save_user(&self, user: &User) -> StoreResult<()>;

  async fn create_item(&self, new_item: NewItem) -> StoreResult<Item>;

  async fn list_items(&self) -> StoreResult<Vec<Item>>;

  async fn find_item(&self, item_id: i64) -> StoreResult<Option<Item>>;

  /// Returns the cart owned by `new_cart.user_id`, inserting `new_cart` first
  /// if that user has none. The boolean is `true` when this call inserted it.
  ///
  /// The existence check and the insert happen as one operation, so
  /// concurrent callers for the same user end up with the same cart.
  async fn find_or_create_cart(&self, new_cart: NewCart) -> StoreResult<(Cart, bool)>;

  /// Appends `item_id` to the cart's item list without checking membership
  /// or whether either id exists.
  async fn append_cart_item(&self, cart_id: i64, item_id: i64) -> StoreResult<()>;

  /// All carts ordered by id, each with its items loaded in append order.
  async fn list_carts(&self) -> StoreResult<Vec<Cart>>;

  async fn create_order(&self, new_order: NewOrder) -> StoreResult<Order>;

  async fn list_orders(&self) -> StoreResult<Vec<Order>>;
}
