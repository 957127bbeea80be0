// core/src/models/mod.rs

//! Records persisted by the storage gateway, plus the input shapes used to create them.

pub mod cart;
pub mod item;
pub mod order;
pub mod user;

pub use cart::{Cart, NewCart, ACTIVE_CART_STATUS, DEFAULT_CART_NAME};
pub use item::{Item, NewItem};
pub use order::{NewOrder, Order};
pub use user::{NewUser, User};
