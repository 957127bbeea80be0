// app/src/web/mod.rs

// Declare child modules
pub mod cors;
pub mod extractors;
pub mod handlers;
pub mod routes;

pub use cors::Cors;
pub use extractors::AuthenticatedUser;
pub use routes::configure_app_routes;
