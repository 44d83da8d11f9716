//! Cache Manager Module
//!
//! Read-through and write-through profile caching over a [`ProfileStore`].
//! A stored record is served while younger than [`CACHE_TTL_SECS`](crate::profile::CACHE_TTL_SECS);
//! otherwise the profile source is asked for a fresh document, which is stored
//! before being returned.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, error, info};

use crate::error::{ProfileError, Result};
use crate::profile::{
    normalize_ens_name, CacheStats, Clock, ProfileDocument, ProfileRecord, ProfileSource,
    SystemClock, ALLOWED_UPDATE_FIELDS,
};
use crate::store::ProfileStore;

// == Cache Manager ==
pub struct CacheManager {
    store: Arc<dyn ProfileStore>,
    source: Arc<dyn ProfileSource>,
    clock: Arc<dyn Clock>,
    stats: Mutex<CacheStats>,
}

impl CacheManager {
    // == Constructor ==
    /// Creates a manager that reads the wall clock.
    pub fn new(store: Arc<dyn ProfileStore>, source: Arc<dyn ProfileSource>) -> Self {
        Self::with_clock(store, source, Arc::new(SystemClock))
    }

    pub fn with_clock(
        store: Arc<dyn ProfileStore>,
        source: Arc<dyn ProfileSource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            source,
            clock,
            stats: Mutex::new(CacheStats::new()),
        }
    }

    // == Get Profile ==
    /// Returns the profile for `ens_name`, refetching it when missing or stale.
    ///
    /// Unknown names are never an error: a fresh document is synthesized and stored.
    pub fn get_profile(&self, ens_name: &str) -> Result<ProfileDocument> {
        let ens_name = normalize_ens_name(ens_name)?;
        let now = self.clock.now();

        let mut record = match self.store.get(&ens_name) {
            Ok(record) if record.is_fresh(now) => {
                debug!("Cache hit for {}", ens_name);
                self.stats.lock().record_hit();
                return Ok(record.profile_data);
            }
            Ok(mut stale) => {
                debug!("Cache stale for {}, refetching", ens_name);
                self.stats.lock().record_refresh();
                stale.profile_data = self.source.synthesize_profile(&ens_name);
                stale
            }
            Err(ProfileError::RecordNotFound(_)) => {
                debug!("Cache miss for {}", ens_name);
                self.stats.lock().record_miss();
                let profile_data = self.source.synthesize_profile(&ens_name);
                ProfileRecord::new(ens_name, profile_data, now)
            }
            Err(e) => return Err(e),
        };

        record.touch(now);
        self.write(&record)?;
        Ok(record.profile_data)
    }

    // == Upsert Profile ==
    /// Returns the stored record, creating a default one if none exists.
    pub fn upsert_profile(&self, ens_name: &str) -> Result<ProfileRecord> {
        let ens_name = normalize_ens_name(ens_name)?;
        match self.store.get(&ens_name) {
            Ok(record) => Ok(record),
            Err(ProfileError::RecordNotFound(_)) => {
                info!("Creating default profile for {}", ens_name);
                let profile_data = self.source.default_profile(&ens_name);
                let record = ProfileRecord::new(ens_name, profile_data, self.clock.now());
                self.write(&record)?;
                Ok(record)
            }
            Err(e) => Err(e),
        }
    }

    // == Apply Partial Update ==
    /// Copies allow-listed fields from `fields` into the stored document.
    ///
    /// Fields outside [`ALLOWED_UPDATE_FIELDS`] are ignored. `last_updated` is
    /// bumped even when nothing changed.
    pub fn apply_partial_update(
        &self,
        ens_name: &str,
        fields: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<ProfileDocument> {
        let mut record = self.upsert_profile(ens_name)?;

        for field in ALLOWED_UPDATE_FIELDS {
            if let Some(value) = fields.get(*field) {
                record
                    .profile_data
                    .insert((*field).to_string(), value.clone());
            }
        }

        record.touch(self.clock.now());
        self.write(&record)?;
        self.stats.lock().record_update();
        info!("Profile updated for {}", record.ens_name);

        Ok(record.profile_data)
    }

    // == Stats ==
    pub fn stats(&self) -> CacheStats {
        self.stats.lock().clone()
    }

    /// Number of records in the underlying store.
    pub fn record_count(&self) -> Result<usize> {
        self.store.len()
    }

    fn write(&self, record: &ProfileRecord) -> Result<()> {
        match self.store.upsert(record) {
            Ok(()) => {
                debug!("Cache updated for {}", record.ens_name);
                self.stats.lock().record_write();
                Ok(())
            }
            Err(e) => {
                error!("Error updating cache for {}: {}", record.ens_name, e);
                Err(e)
            }
        }
    }
}
