// core/src/models/order.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Reference record tying a user to a cart id.
///
/// `cart_id` is taken from the request as-is: it may point at a cart that does
/// not exist or that belongs to someone else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Order {
  pub id: i64,
  pub cart_id: i64,
  pub user_id: i64,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
  pub cart_id: i64,
  pub user_id: i64,
}
