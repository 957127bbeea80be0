// app/src/web/extractors.rs

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::errors::AppError;
use crate::state::AppState;
use storefront::User;

/// Header carrying the opaque token issued by `POST /users/login`.
pub const TOKEN_HEADER: &str = "token";

const LOGIN_REQUIRED: &str = "please login";

/// The user resolved from the request's `token` header.
///
/// Extraction fails with `401` when the header is missing, empty, not valid
/// header text, or does not match any user's current token.
#[derive(Debug)]
pub struct AuthenticatedUser {
  pub user: User,
}

impl FromRequest for AuthenticatedUser {
  type Error = AppError;
  type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    let token = req
      .headers()
      .get(TOKEN_HEADER)
      .and_then(|value| value.to_str().ok())
      .map(str::to_owned);
    let app_state = req.app_data::<web::Data<AppState>>().cloned();

    Box::pin(async move {
      let app_state =
        app_state.ok_or_else(|| AppError::Internal("Application state is not configured.".to_string()))?;

      let token = match token {
        Some(token) if !token.is_empty() => token,
        _ => {
          warn!("AuthenticatedUser extractor: missing or empty token header.");
          return Err(AppError::Unauthorized(LOGIN_REQUIRED.to_string()));
        }
      };

      match app_state.authenticator.authenticate(&token).await? {
        Some(user) => Ok(AuthenticatedUser { user }),
        None => {
          warn!("AuthenticatedUser extractor: token did not match any user.");
          Err(AppError::Unauthorized(LOGIN_REQUIRED.to_string()))
        }
      }
    })
  }
}
