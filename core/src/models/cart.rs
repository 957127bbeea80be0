// core/src/models/cart.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::item::Item;

/// Name given to carts created implicitly on a user's first add-to-cart.
pub const DEFAULT_CART_NAME: &str = "My Cart";
/// Status given to implicitly created carts. Never transitioned afterwards.
pub const ACTIVE_CART_STATUS: &str = "active";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Cart {
  pub id: i64,
  pub user_id: i64,
  pub name: String,
  pub status: String,
  pub created_at: DateTime<Utc>,
  /// Items appended to this cart, in append order. May contain the same item
  /// more than once. Only populated by `Store::list_carts`.
  #[sqlx(skip)]
  #[serde(default)]
  pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCart {
  pub user_id: i64,
  pub name: String,
  pub status: String,
}

impl NewCart {
  /// The cart created for a user that does not have one yet.
  pub fn active_for(user_id: i64) -> Self {
    Self {
      user_id,
      name: DEFAULT_CART_NAME.to_string(),
      status: ACTIVE_CART_STATUS.to_string(),
    }
  }
}
