// core/src/auth.rs

//! Credential verification and opaque-token authentication.
//!
//! Handlers only see the [`Authenticator`] trait. [`TokenAuthenticator`] is the
//! scheme in use today: plaintext credential match at login, then a random
//! 10-letter token compared by exact equality on every authenticated request.
//! Tokens do not expire; a later login overwrites them.

use std::sync::Arc;

use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::StoreResult;
use crate::models::User;
use crate::store::Store;

/// Characters a token is drawn from: `a-z` then `A-Z`.
pub const TOKEN_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const TOKEN_LENGTH: usize = 10;

/// Returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginGrant {
  pub token: String,
  pub user_id: i64,
}

#[async_trait]
pub trait Authenticator: Send + Sync {
  /// Verifies credentials and, on success, issues fresh authentication
  /// evidence. `Ok(None)` means the credentials did not match.
  async fn login(&self, username: &str, password: &str) -> StoreResult<Option<LoginGrant>>;

  /// Resolves previously issued evidence to its user. `Ok(None)` means the
  /// token is unknown or has been superseded.
  async fn authenticate(&self, token: &str) -> StoreResult<Option<User>>;
}

/// Draws [`TOKEN_LENGTH`] characters uniformly from [`TOKEN_ALPHABET`].
pub fn generate_token<R: Rng + ?Sized>(rng: &mut R) -> String {
  (0..TOKEN_LENGTH)
    .filter_map(|_| TOKEN_ALPHABET.choose(&mut *rng).map(|&b| char::from(b)))
    .collect()
}

pub struct TokenAuthenticator {
  store: Arc<dyn Store>,
}

impl TokenAuthenticator {
  pub fn new(store: Arc<dyn Store>) -> Self {
    Self { store }
  }
}

#[async_trait]
impl Authenticator for TokenAuthenticator {
  #[instrument(name = "auth::login", skip(self, password), err(Display))]
  async fn login(&self, username: &str, password: &str) -> StoreResult<Option<LoginGrant>> {
    let Some(mut user) = self.store.find_user_by_credentials(username, password).await? else {
      debug!("No user matched the supplied credentials.");
      return Ok(None);
    };

    // ThreadRng is !Send; keep it out of scope before the next await.
    let token = generate_token(&mut rand::thread_rng());
    user.token = Some(token.clone());
    self.store.save_user(&user).await?;

    info!(user_id = user.id, "Issued new token.");
    Ok(Some(LoginGrant { token, user_id: user.id }))
  }

  async fn authenticate(&self, token: &str) -> StoreResult<Option<User>> {
    // Users that never logged in hold no token; an empty string must not match them.
    if token.is_empty() {
      return Ok(None);
    }
    self.store.find_user_by_token(token).await
  }
}
