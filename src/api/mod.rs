//! API Module
//!
//! HTTP handlers and routing for the profile REST API.
//!
//! # Endpoints
//! - `GET /` - Welcome message
//! - `GET /health` - Health check endpoint
//! - `GET /profile/:ens_name` - Cached profile for an ENS name
//! - `PUT /profile/:ens_name` - Partial profile update
//! - `GET /stats` - Cache statistics

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
