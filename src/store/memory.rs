//! In-memory profile store.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::{ProfileError, Result};
use crate::profile::ProfileRecord;
use crate::store::ProfileStore;

// == Memory Profile Store ==
/// Profile records held in a `HashMap`. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    records: RwLock<HashMap<String, ProfileRecord>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for MemoryProfileStore {
    fn get(&self, ens_name: &str) -> Result<ProfileRecord> {
        self.records
            .read()
            .get(ens_name)
            .cloned()
            .ok_or_else(|| ProfileError::RecordNotFound(ens_name.to_string()))
    }

    fn upsert(&self, record: &ProfileRecord) -> Result<()> {
        self.records
            .write()
            .insert(record.ens_name.clone(), record.clone());
        Ok(())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.records.read().len())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileDocument;
    use chrono::Utc;
    use serde_json::Value;

    fn record(name: &str, avatar: &str) -> ProfileRecord {
        let mut doc = ProfileDocument::new();
        doc.insert("avatar".to_string(), Value::from(avatar));
        ProfileRecord::new(name, doc, Utc::now())
    }

    #[test]
    fn test_get_missing_record() {
        let store = MemoryProfileStore::new();
        assert!(matches!(
            store.get("alice.eth"),
            Err(ProfileError::RecordNotFound(_))
        ));
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_upsert_then_get() {
        let store = MemoryProfileStore::new();
        let rec = record("alice.eth", "a.png");

        store.upsert(&rec).unwrap();
        assert_eq!(store.get("alice.eth").unwrap(), rec);
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_upsert_replaces_existing_record() {
        let store = MemoryProfileStore::new();

        store.upsert(&record("alice.eth", "a.png")).unwrap();
        store.upsert(&record("alice.eth", "b.png")).unwrap();

        assert_eq!(store.len().unwrap(), 1);
        assert_eq!(
            store.get("alice.eth").unwrap().profile_data["avatar"],
            "b.png"
        );
    }
}
