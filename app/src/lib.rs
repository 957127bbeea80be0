// app/src/lib.rs

//! HTTP surface of the storefront backend: actix-web handlers, routing, CORS,
//! configuration and the shared application state.

pub mod config;
pub mod errors;
pub mod state;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
