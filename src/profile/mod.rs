//! Profile Module
//!
//! Profile documents, the placeholder profile source, and the TTL-gated
//! cache manager that sits in front of a [`ProfileStore`](crate::store::ProfileStore).

mod clock;
mod manager;
mod record;
mod source;
mod stats;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use manager::CacheManager;
pub use record::{normalize_ens_name, FarcasterStats, ProfileDocument, ProfileRecord};
pub use source::{PlaceholderSource, ProfileSource};
pub use stats::CacheStats;

// == Public Constants ==
/// Freshness window of a cached profile, in seconds.
pub const CACHE_TTL_SECS: i64 = 3600;

/// Document fields a caller may overwrite through a partial update.
pub const ALLOWED_UPDATE_FIELDS: &[&str] = &["avatar"];

/// Freshness window as a chrono duration.
pub fn cache_ttl() -> chrono::Duration {
    chrono::Duration::seconds(CACHE_TTL_SECS)
}
