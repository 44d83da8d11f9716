//! crypto.me profile API
//!
//! Serves ENS profiles enriched with social stats, cached behind a one-hour
//! freshness window and persisted in SQLite.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod profile;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use error::{ProfileError, Result};
