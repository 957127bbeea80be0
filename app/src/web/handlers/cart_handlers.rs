// app/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;
use storefront::NewCart;

// --- Request DTO ---
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct AddToCartPayload {
  pub item_id: i64,
}

// --- Handler Implementations ---

/// Appends an item to the caller's cart, creating the cart on first use.
///
/// Nothing here is transactional. If the item lookup fails after a cart was
/// just created, that empty cart stays (and stays linked from the user).
#[instrument(
    name = "handler::add_to_cart",
    skip(app_state, auth_user, req_payload),
    fields(user_id = auth_user.user.id, item_id = req_payload.item_id)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
  req_payload: web::Json<AddToCartPayload>,
) -> Result<HttpResponse, AppError> {
  let AuthenticatedUser { mut user } = auth_user;
  let item_id = req_payload.item_id;

  // 1. Resolve the user's cart (single conditional insert in the store)
  let (cart, created) = app_state.store.find_or_create_cart(NewCart::active_for(user.id)).await?;
  if created {
    user.cart_id = Some(cart.id);
    app_state.store.save_user(&user).await?;
    info!(cart_id = cart.id, "Created cart for user.");
  }

  // 2. The item must exist; appending a phantom id would leave a dangling association
  let item = app_state.store.find_item(item_id).await?.ok_or_else(|| {
    warn!("Add to cart rejected: item {} does not exist.", item_id);
    AppError::NotFound(format!("item {} not found", item_id))
  })?;

  // 3. Append (duplicates allowed)
  app_state.store.append_cart_item(cart.id, item.id).await?;

  info!(cart_id = cart.id, "Item added to cart.");
  Ok(HttpResponse::Ok().json(json!({
      "message": "item added",
      "cart_id": cart.id,
  })))
}

#[instrument(name = "handler::list_carts", skip(app_state))]
pub async fn list_carts_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let carts = app_state.store.list_carts().await?;
  info!("Listing {} carts.", carts.len());
  Ok(HttpResponse::Ok().json(carts))
}
