// app/src/web/handlers/item_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;
use storefront::NewItem;

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct CreateItemPayload {
  pub name: String,
  pub status: String,
}

#[instrument(name = "handler::create_item", skip(app_state, req_payload), fields(name = %req_payload.name))]
pub async fn create_item_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<CreateItemPayload>,
) -> Result<HttpResponse, AppError> {
  let CreateItemPayload { name, status } = req_payload.into_inner();
  let item = app_state.store.create_item(NewItem { name, status }).await?;

  info!(item_id = item.id, "Item created.");
  Ok(HttpResponse::Ok().json(item))
}

#[instrument(name = "handler::list_items", skip(app_state))]
pub async fn list_items_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let items = app_state.store.list_items().await?;
  info!("Listing {} items.", items.len());
  Ok(HttpResponse::Ok().json(items))
}
