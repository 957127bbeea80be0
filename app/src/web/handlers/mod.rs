// app/src/web/handlers/mod.rs

// Declare handler modules, one per resource
pub mod cart_handlers;
pub mod item_handlers;
pub mod order_handlers;
pub mod user_handlers;
