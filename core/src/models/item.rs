// core/src/models/item.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Catalog entry. `status` is an opaque label set at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Item {
  pub id: i64,
  pub name: String,
  pub status: String,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
  pub name: String,
  pub status: String,
}
