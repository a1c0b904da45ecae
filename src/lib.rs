//! Aggregates Steam Web API data for comparing two profiles side by side.
//!
//! [`ProfileManager`] is the main entry point: it resolves vanity names or
//! SteamID64s to a canonical [`SteamID`], fans out to the Steam Web API, and
//! reshapes the results for the comparison page, caching them briefly.

mod cache;
mod error;
mod helpers;
mod titles;
pub mod api;
pub mod manager;
pub mod response;
pub mod serializers;
pub mod types;
pub mod web;

pub use api::{SteamApi, SteamWebAPI, SteamWebAPIBuilder};
pub use cache::{ResponseCache, DEFAULT_CACHE_TTL};
pub use error::Error;
pub use manager::{ProfileManager, ProfileManagerBuilder};
pub use titles::SupportedTitle;
pub use steamid_ng::SteamID;
