//! Request DTOs for the profile API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Request body for a partial profile update (PUT /profile/:ens_name)
///
/// Any JSON object is accepted. Which fields are applied is decided by the
/// cache manager's allow-list; the rest are dropped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ProfileUpdateRequest {
    /// Candidate field names and their new values
    pub fields: Map<String, Value>,
}
