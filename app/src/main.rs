// app/src/main.rs

use std::sync::Arc;

use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;
use storefront::{SqliteStore, Store};
use storefront_server::config::{AppConfig, LogFormat};
use storefront_server::web::{configure_app_routes, Cors};
use storefront_server::AppState;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
  // RUST_LOG overrides the default level
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration

  match format {
    LogFormat::Pretty => builder.init(),
    LogFormat::Json => builder.json().init(),
  }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Configuration first so LOG_FORMAT can pick the subscriber
  let app_config = Arc::new(AppConfig::from_env().context("failed to load application configuration")?);
  init_tracing(app_config.log_format);

  tracing::info!("Starting storefront server...");

  let store = SqliteStore::connect(&app_config.database_url, app_config.database_max_connections)
    .await
    .context("failed to open the database")?;
  store.migrate().await.context("failed to migrate the database schema")?;
  tracing::info!("Database ready.");

  let store: Arc<dyn Store> = Arc::new(store);
  let app_state = AppState::new(store, app_config.clone());

  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(Cors)
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("failed to bind {}", server_address))?
  .run()
  .await
  .context("server terminated with an error")
}
