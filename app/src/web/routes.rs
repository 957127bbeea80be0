// app/src/web/routes.rs

use actix_web::{error, web, HttpRequest};

use crate::errors::AppError;
use crate::web::handlers::{cart_handlers, item_handlers, order_handlers, user_handlers};

// Liveness only; does not touch the store.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// JSON body settings shared by every route: any `Content-Type` is accepted
/// and parse failures become `400 {"error": <parser message>}`.
pub fn json_config() -> web::JsonConfig {
  web::JsonConfig::default()
    .content_type_required(false)
    .error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
      AppError::BadRequest(err.to_string()).into()
    })
}

// Login answers every unparseable body with the same terse message.
fn login_json_config() -> web::JsonConfig {
  web::JsonConfig::default()
    .content_type_required(false)
    .error_handler(|_err: error::JsonPayloadError, _req: &HttpRequest| {
      AppError::BadRequest("bad data".to_string()).into()
    })
}

// This function is called in `main.rs` (and the HTTP tests) to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(json_config())
    .route("/health", web::get().to(health_check_handler))
    // Users
    .service(
      web::resource("/users")
        .route(web::get().to(user_handlers::list_users_handler))
        .route(web::post().to(user_handlers::create_user_handler)),
    )
    .service(
      web::resource("/users/login")
        .app_data(login_json_config())
        .route(web::post().to(user_handlers::login_handler)),
    )
    // Items
    .service(
      web::resource("/items")
        .route(web::get().to(item_handlers::list_items_handler))
        .route(web::post().to(item_handlers::create_item_handler)),
    )
    // Carts (POST requires the `token` header)
    .service(
      web::resource("/carts")
        .route(web::get().to(cart_handlers::list_carts_handler))
        .route(web::post().to(cart_handlers::add_to_cart_handler)),
    )
    // Orders (POST requires the `token` header)
    .service(
      web::resource("/orders")
        .route(web::get().to(order_handlers::list_orders_handler))
        .route(web::post().to(order_handlers::create_order_handler)),
    );
}
