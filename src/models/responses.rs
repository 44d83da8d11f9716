//! Response DTOs for the profile API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::profile::{CacheStats, ProfileDocument};

/// Response body for the root endpoint (GET /)
#[derive(Debug, Clone, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}

impl WelcomeResponse {
    pub fn new() -> Self {
        Self {
            message: "Welcome to the crypto.me API".to_string(),
        }
    }
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Response body for a partial update (PUT /profile/:ens_name)
#[derive(Debug, Clone, Serialize)]
pub struct UpdateProfileResponse {
    /// Success message
    pub message: String,
    /// The profile document after the update
    pub profile: ProfileDocument,
}

impl UpdateProfileResponse {
    pub fn new(profile: ProfileDocument) -> Self {
        Self {
            message: "Profile updated successfully".to_string(),
            profile,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Reads served from a fresh record
    pub hits: u64,
    /// Reads for unknown names
    pub misses: u64,
    /// Reads that refetched a stale record
    pub refreshes: u64,
    /// Successful store writes
    pub writes: u64,
    /// Partial updates applied
    pub updates: u64,
    /// Hit rate (hits / reads)
    pub hit_rate: f64,
    /// Records currently stored
    pub total_records: usize,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: &CacheStats, total_records: usize) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            refreshes: stats.refreshes,
            writes: stats.writes,
            updates: stats.updates,
            hit_rate: stats.hit_rate(),
            total_records,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_welcome_response_serialize() {
        let value = serde_json::to_value(WelcomeResponse::new()).unwrap();
        assert_eq!(value, json!({"message": "Welcome to the crypto.me API"}));
    }

    #[test]
    fn test_update_response_serialize() {
        let mut profile = ProfileDocument::new();
        profile.insert("avatar".to_string(), Value::from("http://x/y.png"));

        let value = serde_json::to_value(UpdateProfileResponse::new(profile)).unwrap();
        assert_eq!(
            value,
            json!({
                "message": "Profile updated successfully",
                "profile": {"avatar": "http://x/y.png"}
            })
        );
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let stats = CacheStats {
            hits: 8,
            misses: 1,
            refreshes: 1,
            writes: 2,
            updates: 0,
        };
        let resp = StatsResponse::new(&stats, 2);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(resp.total_records, 2);
    }

    #[test]
    fn test_health_response_serialize() {
        let value = serde_json::to_value(HealthResponse::healthy()).unwrap();
        assert_eq!(value, json!({"status": "healthy"}));
    }

    #[test]
    fn test_error_response_serialize() {
        let json = serde_json::to_string(&ErrorResponse::new("Something went wrong")).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
