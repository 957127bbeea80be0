// core/src/store/sqlite.rs

//! SQLite-backed storage gateway.

use std::collections::HashMap;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;
use tracing::{debug, info, instrument};

use super::Store;
use crate::error::StoreResult;
use crate::models::{Cart, Item, NewCart, NewItem, NewOrder, NewUser, Order, User};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const USER_COLUMNS: &str = "id, username, password, token, cart_id, created_at";
const ITEM_COLUMNS: &str = "id, name, status, created_at";
const CART_COLUMNS: &str = "id, user_id, name, status, created_at";
const ORDER_COLUMNS: &str = "id, cart_id, user_id, created_at";

// One row of the cart/item join used to eager-load cart contents.
#[derive(FromRow)]
struct CartItemRow {
  cart_id: i64,
  #[sqlx(flatten)]
  item: Item,
}

#[derive(Debug, Clone)]
pub struct SqliteStore {
  pool: SqlitePool,
}

impl SqliteStore {
  /// Opens a pool against `database_url`, creating the database file if it
  /// does not exist yet. Call [`SqliteStore::migrate`] before serving.
  ///
  /// `sqlite::memory:` gives every pooled connection its own database, so
  /// pass `max_connections = 1` for in-memory use.
  pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
      .max_connections(max_connections)
      .connect_with(options)
      .await?;
    info!(max_connections, "SQLite pool opened.");
    Ok(Self { pool })
  }

  pub fn from_pool(pool: SqlitePool) -> Self {
    Self { pool }
  }

  pub fn pool(&self) -> &SqlitePool {
    &self.pool
  }

  /// Creates or upgrades the users, items, carts, orders and cart_items tables.
  pub async fn migrate(&self) -> StoreResult<()> {
    MIGRATOR.run(&self.pool).await?;
    info!("Database schema is up to date.");
    Ok(())
  }
}

#[async_trait]
impl Store for SqliteStore {
  #[instrument(name = "store::create_user", skip(self, new_user), err(Display))]
  async fn create_user(&self, new_user: NewUser) -> StoreResult<User> {
    let user: User = sqlx::query_as(&format!(
      "INSERT INTO users (username, password, token, cart_id, created_at) VALUES (?, ?, NULL, NULL, ?) RETURNING {USER_COLUMNS}"
    ))
    .bind(new_user.username)
    .bind(new_user.password)
    .bind(Utc::now())
    .fetch_one(&self.pool)
    .await?;

    debug!(user_id = user.id, "User row inserted.");
    Ok(user)
  }

  async fn list_users(&self) -> StoreResult<Vec<User>> {
    let users = sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY id"))
      .fetch_all(&self.pool)
      .await?;
    Ok(users)
  }

  async fn find_user_by_credentials(&self, username: &str, password: &str) -> StoreResult<Option<User>> {
    let user = sqlx::query_as(&format!(
      "SELECT {USER_COLUMNS} FROM users WHERE username = ? AND password = ? ORDER BY id LIMIT 1"
    ))
    .bind(username)
    .bind(password)
    .fetch_optional(&self.pool)
    .await?;
    Ok(user)
  }

  async fn find_user_by_token(&self, token: &str) -> StoreResult<Option<User>> {
    // `=` on TEXT is case-sensitive in SQLite (BINARY collation), and NULL tokens never match.
    let user = sqlx::query_as(&format!(
      "SELECT {USER_COLUMNS} FROM users WHERE token = ? ORDER BY id LIMIT 1"
    ))
    .bind(token)
    .fetch_optional(&self.pool)
    .await?;
    Ok(user)
  }

  #[instrument(name = "store::save_user", skip(self, user), fields(user_id = user.id), err(Display))]
  async fn save_user(&self, user: &User) -> StoreResult<()> {
    sqlx::query(
      "INSERT INTO users (id, username, password, token, cart_id, created_at) VALUES (?, ?, ?, ?, ?, ?) \
       ON CONFLICT(id) DO UPDATE SET username = excluded.username, password = excluded.password, \
       token = excluded.token, cart_id = excluded.cart_id",
    )
    .bind(user.id)
    .bind(&user.username)
    .bind(&user.password)
    .bind(&user.token)
    .bind(user.cart_id)
    .bind(user.created_at)
    .execute(&self.pool)
    .await?;

    debug!("User row saved.");
    Ok(())
  }

  #[instrument(name = "store::create_item", skip(self, new_item), err(Display))]
  async fn create_item(&self, new_item: NewItem) -> StoreResult<Item> {
    let item: Item = sqlx::query_as(&format!(
      "INSERT INTO items (name, status, created_at) VALUES (?, ?, ?) RETURNING {ITEM_COLUMNS}"
    ))
    .bind(new_item.name)
    .bind(new_item.status)
    .bind(Utc::now())
    .fetch_one(&self.pool)
    .await?;

    debug!(item_id = item.id, "Item row inserted.");
    Ok(item)
  }

  async fn list_items(&self) -> StoreResult<Vec<Item>> {
    let items = sqlx::query_as(&format!("SELECT {ITEM_COLUMNS} FROM items ORDER BY id"))
      .fetch_all(&self.pool)
      .await?;
    Ok(items)
  }

  async fn find_item(&self, item_id: i64) -> StoreResult<Option<Item>> {
    let item = sqlx::query_as(&format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = ?"))
      .bind(item_id)
      .fetch_optional(&self.pool)
      .await?;
    Ok(item)
  }

  #[instrument(name = "store::find_or_create_cart", skip(self, new_cart), fields(user_id = new_cart.user_id), err(Display))]
  async fn find_or_create_cart(&self, new_cart: NewCart) -> StoreResult<(Cart, bool)> {
    // Single statement: SQLite takes the write lock before evaluating NOT EXISTS,
    // so two first-adds for the same user cannot both insert.
    let inserted = sqlx::query(
      "INSERT INTO carts (user_id, name, status, created_at) \
       SELECT ?, ?, ?, ? WHERE NOT EXISTS (SELECT 1 FROM carts WHERE user_id = ?)",
    )
    .bind(new_cart.user_id)
    .bind(&new_cart.name)
    .bind(&new_cart.status)
    .bind(Utc::now())
    .bind(new_cart.user_id)
    .execute(&self.pool)
    .await?
    .rows_affected()
      == 1;

    let cart: Cart = sqlx::query_as(&format!(
      "SELECT {CART_COLUMNS} FROM carts WHERE user_id = ? ORDER BY id LIMIT 1"
    ))
    .bind(new_cart.user_id)
    .fetch_one(&self.pool)
    .await?;

    debug!(cart_id = cart.id, inserted, "Cart resolved for user.");
    Ok((cart, inserted))
  }

  async fn append_cart_item(&self, cart_id: i64, item_id: i64) -> StoreResult<()> {
    sqlx::query("INSERT INTO cart_items (cart_id, item_id) VALUES (?, ?)")
      .bind(cart_id)
      .bind(item_id)
      .execute(&self.pool)
      .await?;

    debug!(cart_id, item_id, "Item appended to cart.");
    Ok(())
  }

  async fn list_carts(&self) -> StoreResult<Vec<Cart>> {
    let mut carts: Vec<Cart> = sqlx::query_as(&format!("SELECT {CART_COLUMNS} FROM carts ORDER BY id"))
      .fetch_all(&self.pool)
      .await?;

    let rows: Vec<CartItemRow> = sqlx::query_as(
      "SELECT ci.cart_id, i.id, i.name, i.status, i.created_at \
       FROM cart_items ci JOIN items i ON i.id = ci.item_id ORDER BY ci.id",
    )
    .fetch_all(&self.pool)
    .await?;

    let mut items_by_cart: HashMap<i64, Vec<Item>> = HashMap::new();
    for row in rows {
      items_by_cart.entry(row.cart_id).or_default().push(row.item);
    }
    for cart in &mut carts {
      cart.items = items_by_cart.remove(&cart.id).unwrap_or_default();
    }

    Ok(carts)
  }

  #[instrument(name = "store::create_order", skip(self, new_order), err(Display))]
  async fn create_order(&self, new_order: NewOrder) -> StoreResult<Order> {
    let order: Order = sqlx::query_as(&format!(
      "INSERT INTO orders (cart_id, user_id, created_at) VALUES (?, ?, ?) RETURNING {ORDER_COLUMNS}"
    ))
    .bind(new_order.cart_id)
    .bind(new_order.user_id)
    .bind(Utc::now())
    .fetch_one(&self.pool)
    .await?;

    debug!(order_id = order.id, "Order row inserted.");
    Ok(order)
  }

  async fn list_orders(&self) -> StoreResult<Vec<Order>> {
    let orders = sqlx::query_as(&format!("SELECT {ORDER_COLUMNS} FROM orders ORDER BY id"))
      .fetch_all(&self.pool)
      .await?;
    Ok(orders)
  }
}
