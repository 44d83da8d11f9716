//! Profile Source Module
//!
//! Synthesizes profile documents for ENS names. The placeholder source derives
//! the avatar from a hash and returns fixed social stats; a real integration can
//! replace it without touching the cache manager.

use md5::{Digest, Md5};
use serde_json::Value;

use crate::profile::{FarcasterStats, ProfileDocument};

/// Stats served by the fetch path until a real Farcaster client exists.
const PLACEHOLDER_STATS: FarcasterStats = FarcasterStats {
    followers: 1000,
    following: 500,
    posts: 250,
};

/// Produces profile documents. Implementations must be total and side-effect free.
pub trait ProfileSource: Send + Sync {
    /// Fresh document used by the read-through path.
    fn synthesize_profile(&self, ens_name: &str) -> ProfileDocument;

    /// Default document created when a partial update targets an unknown name.
    fn default_profile(&self, ens_name: &str) -> ProfileDocument;
}

/// Deterministic stand-in for on-chain and Farcaster lookups.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderSource;

impl PlaceholderSource {
    /// Identicon gravatar URL keyed by a placeholder address for the name.
    pub fn gravatar_url(ens_name: &str) -> String {
        let email = format!("{}@example.com", ens_name.to_lowercase());
        let hash = {
            let mut hasher = Md5::new();
            hasher.update(email.as_bytes());
            hex::encode(hasher.finalize())
        };
        format!("https://www.gravatar.com/avatar/{}?d=identicon&s=200", hash)
    }

    pub fn identicon_url(ens_name: &str) -> String {
        format!("https://avatars.dicebear.com/api/identicon/{}.svg", ens_name)
    }

    fn fetch_farcaster_stats(&self, _ens_name: &str) -> FarcasterStats {
        PLACEHOLDER_STATS
    }
}

fn document(ens_name: &str, avatar: String, stats: FarcasterStats) -> ProfileDocument {
    let mut doc = ProfileDocument::new();
    doc.insert("ens_name".to_string(), Value::from(ens_name));
    doc.insert("avatar".to_string(), Value::from(avatar));
    doc.insert("farcaster_stats".to_string(), stats.to_value());
    doc
}

impl ProfileSource for PlaceholderSource {
    fn synthesize_profile(&self, ens_name: &str) -> ProfileDocument {
        document(
            ens_name,
            Self::gravatar_url(ens_name),
            self.fetch_farcaster_stats(ens_name),
        )
    }

    fn default_profile(&self, ens_name: &str) -> ProfileDocument {
        document(
            ens_name,
            Self::identicon_url(ens_name),
            FarcasterStats::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_synthesize_profile_shape() {
        let doc = PlaceholderSource.synthesize_profile("alice.eth");

        assert_eq!(doc["ens_name"], "alice.eth");
        assert_eq!(
            doc["farcaster_stats"],
            json!({"followers": 1000, "following": 500, "posts": 250})
        );
        let avatar = doc["avatar"].as_str().unwrap();
        assert!(avatar.starts_with("https://www.gravatar.com/avatar/"));
        assert!(avatar.ends_with("?d=identicon&s=200"));
    }

    #[test]
    fn test_synthesize_profile_is_deterministic() {
        let first = PlaceholderSource.synthesize_profile("bob.eth");
        let second = PlaceholderSource.synthesize_profile("bob.eth");
        assert_eq!(first, second);
    }

    #[test]
    fn test_gravatar_url_is_md5_of_placeholder_email() {
        // md5("alice.eth@example.com")
        assert_eq!(
            PlaceholderSource::gravatar_url("alice.eth"),
            "https://www.gravatar.com/avatar/82f4690193d29f07c58df71886d52e20?d=identicon&s=200"
        );
        assert_eq!(
            PlaceholderSource::gravatar_url("Alice.ETH"),
            PlaceholderSource::gravatar_url("alice.eth")
        );
        assert_ne!(
            PlaceholderSource::gravatar_url("carol.eth"),
            PlaceholderSource::gravatar_url("dave.eth")
        );
    }

    #[test]
    fn test_default_profile_has_zero_stats() {
        let doc = PlaceholderSource.default_profile("alice.eth");

        assert_eq!(doc["ens_name"], "alice.eth");
        assert_eq!(
            doc["avatar"],
            "https://avatars.dicebear.com/api/identicon/alice.eth.svg"
        );
        assert_eq!(
            doc["farcaster_stats"],
            json!({"followers": 0, "following": 0, "posts": 0})
        );
    }
}
