// app/src/state.rs
use crate::config::AppConfig;
use std::sync::Arc;
use storefront::{Authenticator, Store, TokenAuthenticator};

#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn Store>,
  pub authenticator: Arc<dyn Authenticator>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  /// Wires the opaque-token authenticator over `store`.
  pub fn new(store: Arc<dyn Store>, config: Arc<AppConfig>) -> Self {
    let authenticator: Arc<dyn Authenticator> = Arc::new(TokenAuthenticator::new(store.clone()));
    Self {
      store,
      authenticator,
      config,
    }
  }
}
