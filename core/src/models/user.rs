// core/src/models/user.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered account.
///
/// `password` is stored and serialized as plaintext, and `token` is whatever
/// the last successful login issued. Both show up in `GET /users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
  pub id: i64,
  pub username: String,
  pub password: String,
  // None until the first login.
  pub token: Option<String>,
  // None until the first add-to-cart creates a cart for this user.
  pub cart_id: Option<i64>,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
  pub username: String,
  pub password: String,
}
