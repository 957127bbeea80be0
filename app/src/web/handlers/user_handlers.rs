// app/src/web/handlers/user_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;
use storefront::NewUser;

// --- Request DTOs ---

/// Body of `POST /users` and `POST /users/login`. Missing fields default to
/// empty strings; unknown fields are ignored.
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct CredentialsPayload {
  pub username: String,
  pub password: String,
}

// --- Handler Implementations ---

#[instrument(name = "handler::create_user", skip(app_state, req_payload), fields(username = %req_payload.username))]
pub async fn create_user_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<CredentialsPayload>,
) -> Result<HttpResponse, AppError> {
  let CredentialsPayload { username, password } = req_payload.into_inner();

  // Stored verbatim: no uniqueness check and no hashing.
  let user = app_state.store.create_user(NewUser { username, password }).await?;

  info!(user_id = user.id, "User created.");
  Ok(HttpResponse::Ok().json(user))
}

#[instrument(name = "handler::list_users", skip(app_state))]
pub async fn list_users_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let users = app_state.store.list_users().await?;
  info!("Listing {} users.", users.len());
  Ok(HttpResponse::Ok().json(users))
}

#[instrument(name = "handler::login", skip(app_state, req_payload), fields(username = %req_payload.username))]
pub async fn login_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<CredentialsPayload>,
) -> Result<HttpResponse, AppError> {
  let grant = app_state
    .authenticator
    .login(&req_payload.username, &req_payload.password)
    .await?
    .ok_or_else(|| {
      warn!("Login rejected: credentials did not match.");
      AppError::Unauthorized("invalid creds".to_string())
    })?;

  info!(user_id = grant.user_id, "Login successful.");
  Ok(HttpResponse::Ok().json(grant))
}
