//! API Module
//!
//! HTTP handlers and routing for the news and comment REST API.
//!
//! # Endpoints
//! - `/news` - list, search, create, update, read details, delete
//! - `/comment` - create, read, update, delete
//! - `GET /stats` - cache statistics
//! - `GET /health` - health check

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
