//! In-process response cache for generated messages.
//!
//! Keys hash every prompt-relevant input, so identical requests inside the
//! validity window return the stored message verbatim. Expiry lives in the
//! cache itself (time-to-live on insert); concurrent misses on the same key
//! may both call upstream, which is harmless because values are a pure
//! function of the key.

use std::time::Duration;

use moka::future::Cache;
use sha2::{Digest, Sha256};

use crate::models::message::MessageRequest;

/// How long a generated message stays valid.
pub const MESSAGE_TTL: Duration = Duration::from_secs(24 * 60 * 60);
/// Upper bound on cached entries.
pub const MESSAGE_CAPACITY: u64 = 10_000;

/// Cache handle injected into handlers via `AppState`. Cloning is cheap and
/// shares the underlying store.
#[derive(Clone)]
pub struct MessageCache {
    inner: Cache<String, String>,
}

impl MessageCache {
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(MESSAGE_CAPACITY, MESSAGE_TTL)
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key).await
    }

    pub async fn insert(&self, key: String, message: String) {
        self.inner.insert(key, message).await;
    }
}

/// Cache key builder.
pub struct CacheKey;

impl CacheKey {
    /// Key for a generated message: SHA-256 over the assembled prompt plus
    /// every selector that changes the upstream call.
    pub fn message(prompt: &str, model: &str, request: &MessageRequest) -> String {
        let mut hasher = Sha256::new();
        for part in [
            prompt,
            model,
            request.message_length.as_str(),
            request.message_type.as_str(),
            request.platform.as_str(),
        ] {
            hasher.update(part.as_bytes());
            hasher.update([0u8]);
        }
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::message::{MessageLength, MessagePlatform, MessageType};

    fn request(message_type: MessageType, platform: MessagePlatform) -> MessageRequest {
        MessageRequest {
            linkedin_url: String::new(),
            message_type,
            message_length: MessageLength::Short,
            platform,
            profile_data: None,
            resume_data: None,
            job_post_data: None,
            include_resume: None,
            economy_mode: None,
        }
    }

    #[test]
    fn test_key_is_deterministic() {
        let req = request(MessageType::ColdOutreach, MessagePlatform::Linkedin);
        let a = CacheKey::message("prompt", "gpt-4o", &req);
        let b = CacheKey::message("prompt", "gpt-4o", &req);
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_key_varies_with_prompt_and_selectors() {
        let req = request(MessageType::ColdOutreach, MessagePlatform::Linkedin);
        let base = CacheKey::message("prompt", "gpt-4o", &req);

        assert_ne!(base, CacheKey::message("other prompt", "gpt-4o", &req));
        assert_ne!(base, CacheKey::message("prompt", "gpt-4o-mini", &req));

        let other_type = request(MessageType::ColdEmail, MessagePlatform::Linkedin);
        assert_ne!(base, CacheKey::message("prompt", "gpt-4o", &other_type));

        let other_platform = request(MessageType::ColdOutreach, MessagePlatform::Email);
        assert_ne!(base, CacheKey::message("prompt", "gpt-4o", &other_platform));
    }

    #[tokio::test]
    async fn test_insert_then_get_returns_value() {
        let cache = MessageCache::with_defaults();
        cache.insert("k".to_string(), "hello".to_string()).await;
        assert_eq!(cache.get("k").await.as_deref(), Some("hello"));
        assert_eq!(cache.get("missing").await, None);
    }

    #[tokio::test]
    async fn test_entries_expire_after_ttl() {
        let cache = MessageCache::new(16, Duration::from_millis(50));
        cache.insert("k".to_string(), "hello".to_string()).await;
        assert!(cache.get("k").await.is_some());

        tokio::time::sleep(Duration::from_millis(120)).await;
        assert_eq!(cache.get("k").await, None);
    }
}
