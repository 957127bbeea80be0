// app/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;
use storefront::NewOrder;

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct CreateOrderPayload {
  pub cart_id: i64,
}

// The cart id is recorded as given: it is not checked for existence or ownership.
#[instrument(
    name = "handler::create_order",
    skip(app_state, auth_user, req_payload),
    fields(user_id = auth_user.user.id, cart_id = req_payload.cart_id)
)]
pub async fn create_order_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
  req_payload: web::Json<CreateOrderPayload>,
) -> Result<HttpResponse, AppError> {
  let order = app_state
    .store
    .create_order(NewOrder {
      cart_id: req_payload.cart_id,
      user_id: auth_user.user.id,
    })
    .await?;

  info!(order_id = order.id, "Order created.");
  Ok(HttpResponse::Ok().json(json!({
      "message": "Order successful",
      "order_id": order.id,
  })))
}

#[instrument(name = "handler::list_orders", skip(app_state))]
pub async fn list_orders_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let orders = app_state.store.list_orders().await?;
  info!("Listing {} orders.", orders.len());
  Ok(HttpResponse::Ok().json(orders))
}
