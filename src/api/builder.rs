use super::SteamWebAPI;
use crate::helpers::{get_default_middleware, USER_AGENT_STRING};
use crate::types::HttpClient;

/// Builder for constructing a [`SteamWebAPI`].
///
/// An API key is required for all Steam Web API requests.
#[derive(Debug, Default, Clone)]
pub struct SteamWebAPIBuilder {
    /// Your account's API key from <https://steamcommunity.com/dev/apikey>.
    pub(crate) api_key: Option<String>,
    /// Client to use for requests.
    pub(crate) client: Option<HttpClient>,
}

impl SteamWebAPIBuilder {
    /// Creates a new [`SteamWebAPIBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The API key used for requests.
    pub fn api_key<T>(mut self, api_key: T) -> Self
    where
        T: Into<String>,
    {
        self.api_key = Some(api_key.into());
        self
    }

    /// Client to use for requests, replacing the default retrying client.
    pub fn client(mut self, client: HttpClient) -> Self {
        self.client = Some(client);
        self
    }

    /// Builds the [`SteamWebAPI`].
    pub fn build(self) -> SteamWebAPI {
        SteamWebAPI {
            client: self.client
                .unwrap_or_else(|| get_default_middleware(USER_AGENT_STRING)),
            key: self.api_key.unwrap_or_default(),
        }
    }
}
