use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use crate::error::Error;

/// Default time-to-live for cached responses.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

#[derive(Debug)]
struct CacheEntry {
    value: Value,
    inserted_at: Instant,
}

/// A short-lived cache for aggregated responses, keyed by request identity.
///
/// Values are stored as serialized JSON so one cache can hold every response
/// shape. An entry is readable while `now - inserted_at < ttl`; past that it is
/// treated as absent and dropped on the next lookup. Concurrent misses on the
/// same key resolve as duplicate upstream calls, last write wins.
#[derive(Debug)]
pub struct ResponseCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::with_ttl(DEFAULT_CACHE_TTL)
    }
}

impl ResponseCache {
    /// Creates a cache with the default 300 second time-to-live.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cache with the given time-to-live.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Reads a live entry, deserialized into the requested type.
    pub fn get<D>(&self, key: &str) -> Option<D>
    where
        D: DeserializeOwned
    {
        let mut entries = self.entries.lock().unwrap();

        match entries.get(key) {
            Some(entry) if entry.inserted_at.elapsed() < self.ttl => {
                serde_json::from_value(entry.value.clone()).ok()
            },
            Some(_) => {
                entries.remove(key);
                None
            },
            None => None,
        }
    }

    /// Stores a value under the given key, replacing any previous entry.
    pub fn insert<S>(&self, key: &str, value: &S) -> Result<(), Error>
    where
        S: Serialize
    {
        let value = serde_json::to_value(value)?;
        let mut entries = self.entries.lock().unwrap();

        entries.insert(key.to_string(), CacheEntry {
            value,
            inserted_at: Instant::now(),
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Payload {
        count: u32,
        name: String,
    }

    #[test]
    fn returns_stored_value_while_live() {
        let cache = ResponseCache::new();
        let payload = Payload {
            count: 3,
            name: String::from("portal"),
        };

        cache.insert("game:620", &payload).unwrap();

        assert_eq!(cache.get::<Payload>("game:620"), Some(payload));
    }

    #[test]
    fn misses_unknown_keys() {
        let cache = ResponseCache::new();

        assert_eq!(cache.get::<Payload>("game:730"), None);
    }

    #[test]
    fn expired_entries_are_treated_as_absent() {
        let cache = ResponseCache::with_ttl(Duration::ZERO);
        let payload = Payload {
            count: 1,
            name: String::from("dota"),
        };

        cache.insert("game:570", &payload).unwrap();

        assert_eq!(cache.get::<Payload>("game:570"), None);
    }

    #[test]
    fn insert_replaces_previous_entry() {
        let cache = ResponseCache::new();

        cache.insert("level", &10u32).unwrap();
        cache.insert("level", &11u32).unwrap();

        assert_eq!(cache.get::<u32>("level"), Some(11));
    }
}
