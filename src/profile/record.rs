//! Profile Record Module
//!
//! Defines the cached profile record and the document it carries.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ProfileError, Result};
use crate::profile::cache_ttl;

/// Open-ended profile document as served to clients.
pub type ProfileDocument = Map<String, Value>;

// == Farcaster Stats ==
/// Social stats embedded in a profile document under `farcaster_stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FarcasterStats {
    pub followers: u64,
    pub following: u64,
    pub posts: u64,
}

impl FarcasterStats {
    pub fn to_value(self) -> Value {
        // Three integer fields: serialization cannot fail
        serde_json::to_value(self).unwrap_or_default()
    }
}

// == Profile Record ==
/// Last-known profile for one ENS name.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRecord {
    /// Normalized ENS name, unique per store
    pub ens_name: String,
    /// Document returned to clients
    pub profile_data: ProfileDocument,
    /// Time of the last write
    pub last_updated: DateTime<Utc>,
}

impl ProfileRecord {
    // == Constructor ==
    pub fn new(
        ens_name: impl Into<String>,
        profile_data: ProfileDocument,
        last_updated: DateTime<Utc>,
    ) -> Self {
        Self {
            ens_name: ens_name.into(),
            profile_data,
            last_updated,
        }
    }

    // == Is Fresh ==
    /// Checks whether the record may be served without a refetch.
    ///
    /// Boundary condition: a record exactly one TTL old is stale.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now - self.last_updated < cache_ttl()
    }

    // == Touch ==
    /// Stamps the record as written at `now` without moving `last_updated` backwards.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_updated = self.last_updated.max(now);
    }
}

// == Utility Functions ==
/// Normalizes an ENS name into a store key.
///
/// Names are trimmed and lowercased so case variants share one record.
pub fn normalize_ens_name(ens_name: &str) -> Result<String> {
    let normalized = ens_name.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(ProfileError::InvalidName(
            "ENS name cannot be empty".to_string(),
        ));
    }
    Ok(normalized)
}
