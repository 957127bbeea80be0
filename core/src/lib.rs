// src/lib.rs

//! Storefront: the domain core of a small cart/order backend.
//!
//! The crate provides:
//!  - Plain records for users, items, carts and orders (`models`).
//!  - The [`Store`] gateway trait with a SQLite implementation and an
//!    in-memory one for tests.
//!  - The [`Authenticator`] trait and the opaque-token scheme behind login.
//!
//! HTTP concerns live in the `storefront_server` crate; everything here is
//! framework-agnostic and takes its collaborators as `Arc<dyn ...>` handles.

pub mod auth;
pub mod error;
pub mod models;
pub mod store;

pub use crate::auth::{generate_token, Authenticator, LoginGrant, TokenAuthenticator};
pub use crate::error::{StoreError, StoreResult};
pub use crate::models::{Cart, Item, NewCart, NewItem, NewOrder, NewUser, Order, User};
pub use crate::store::{MemoryStore, SqliteStore, Store};
