// core/src/store/memory.rs

//! In-process storage gateway backed by plain vectors.
//!
//! Mirrors the SQLite gateway's observable behavior (sequential ids from 1,
//! id ordering, duplicate association entries) and is used as the store
//! double in handler tests.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;

use super::Store;
use crate::error::StoreResult;
use crate::models::{Cart, Item, NewCart, NewItem, NewOrder, NewUser, Order, User};

#[derive(Debug, Default)]
struct Tables {
  users: Vec<User>,
  items: Vec<Item>,
  carts: Vec<Cart>,
  orders: Vec<Order>,
  // (cart_id, item_id) in append order.
  cart_items: Vec<(i64, i64)>,
  next_user_id: i64,
  next_item_id: i64,
  next_cart_id: i64,
  next_order_id: i64,
}

fn next_id(counter: &mut i64) -> i64 {
  *counter += 1;
  *counter
}

/// Every method takes the lock once and releases it before returning; no
/// guard is ever held across an `.await`.
#[derive(Debug, Default)]
pub struct MemoryStore {
  tables: Mutex<Tables>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl Store for MemoryStore {
  async fn create_user(&self, new_user: NewUser) -> StoreResult<User> {
    let mut tables = self.tables.lock();
    let user = User {
      id: next_id(&mut tables.next_user_id),
      username: new_user.username,
      password: new_user.password,
      token: None,
      cart_id: None,
      created_at: Utc::now(),
    };
    tables.users.push(user.clone());
    Ok(user)
  }

  async fn list_users(&self) -> StoreResult<Vec<User>> {
    Ok(self.tables.lock().users.clone())
  }

  async fn find_user_by_credentials(&self, username: &str, password: &str) -> StoreResult<Option<User>> {
    let tables = self.tables.lock();
    Ok(
      tables
        .users
        .iter()
        .find(|u| u.username == username && u.password == password)
        .cloned(),
    )
  }

  async fn find_user_by_token(&self, token: &str) -> StoreResult<Option<User>> {
    let tables = self.tables.lock();
    Ok(tables.users.iter().find(|u| u.token.as_deref() == Some(token)).cloned())
  }

  async fn save_user(&self, user: &User) -> StoreResult<()> {
    let mut tables = self.tables.lock();
    let tables = &mut *tables;
    match tables.users.iter_mut().find(|u| u.id == user.id) {
      Some(existing) => *existing = user.clone(),
      None => {
        tables.next_user_id = tables.next_user_id.max(user.id);
        tables.users.push(user.clone());
        tables.users.sort_by_key(|u| u.id);
      }
    }
    Ok(())
  }

  async fn create_item(&self, new_item: NewItem) -> StoreResult<Item> {
    let mut tables = self.tables.lock();
    let item = Item {
      id: next_id(&mut tables.next_item_id),
      name: new_item.name,
      status: new_item.status,
      created_at: Utc::now(),
    };
    tables.items.push(item.clone());
    Ok(item)
  }

  async fn list_items(&self) -> StoreResult<Vec<Item>> {
    Ok(self.tables.lock().items.clone())
  }

  async fn find_item(&self, item_id: i64) -> StoreResult<Option<Item>> {
    Ok(self.tables.lock().items.iter().find(|i| i.id == item_id).cloned())
  }

  async fn find_or_create_cart(&self, new_cart: NewCart) -> StoreResult<(Cart, bool)> {
    let mut tables = self.tables.lock();
    if let Some(existing) = tables.carts.iter().find(|c| c.user_id == new_cart.user_id) {
      return Ok((existing.clone(), false));
    }

    let cart = Cart {
      id: next_id(&mut tables.next_cart_id),
      user_id: new_cart.user_id,
      name: new_cart.name,
      status: new_cart.status,
      created_at: Utc::now(),
      items: Vec::new(),
    };
    tables.carts.push(cart.clone());
    Ok((cart, true))
  }

  async fn append_cart_item(&self, cart_id: i64, item_id: i64) -> StoreResult<()> {
    self.tables.lock().cart_items.push((cart_id, item_id));
    Ok(())
  }

  async fn list_carts(&self) -> StoreResult<Vec<Cart>> {
    let tables = self.tables.lock();
    let carts = tables
      .carts
      .iter()
      .map(|cart| {
        // Inner-join semantics: association rows pointing at unknown items are skipped.
        let items = tables
          .cart_items
          .iter()
          .filter(|(cid, _)| *cid == cart.id)
          .filter_map(|(_, iid)| tables.items.iter().find(|i| i.id == *iid).cloned())
          .collect();
        Cart { items, ..cart.clone() }
      })
      .collect();
    Ok(carts)
  }

  async fn create_order(&self, new_order: NewOrder) -> StoreResult<Order> {
    let mut tables = self.tables.lock();
    let order = Order {
      id: next_id(&mut tables.next_order_id),
      cart_id: new_order.cart_id,
      user_id: new_order.user_id,
      created_at: Utc::now(),
    };
    tables.orders.push(order.clone());
    Ok(order)
  }

  async fn list_orders(&self) -> StoreResult<Vec<Order>> {
    Ok(self.tables.lock().orders.clone())
  }
}
