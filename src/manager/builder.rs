use super::ProfileManager;
use crate::api::{SteamApi, SteamWebAPI};
use crate::cache::{ResponseCache, DEFAULT_CACHE_TTL};
use std::sync::Arc;
use std::time::Duration;

/// Builder for constructing a [`ProfileManager`].
pub struct ProfileManagerBuilder {
    pub(crate) api_key: String,
    pub(crate) api: Option<Arc<dyn SteamApi>>,
    pub(crate) cache_ttl: Duration,
}

impl ProfileManagerBuilder {
    /// Creates a new [`ProfileManagerBuilder`] with the given API key.
    pub fn new<T>(api_key: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            api_key: api_key.into(),
            api: None,
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }

    /// The upstream API implementation to aggregate over. Defaults to a
    /// [`SteamWebAPI`] built from the API key; mainly useful for supplying
    /// canned responses in tests.
    pub fn api(mut self, api: Arc<dyn SteamApi>) -> Self {
        self.api = Some(api);
        self
    }

    /// Time-to-live for cached responses. Defaults to 300 seconds.
    pub fn cache_ttl(mut self, cache_ttl: Duration) -> Self {
        self.cache_ttl = cache_ttl;
        self
    }

    /// Builds the [`ProfileManager`].
    pub fn build(self) -> ProfileManager {
        ProfileManager {
            api: self.api.unwrap_or_else(|| {
                Arc::new(SteamWebAPI::builder().api_key(self.api_key).build())
            }),
            cache: ResponseCache::with_ttl(self.cache_ttl),
        }
    }
}
