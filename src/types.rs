//! Types for common values in Steam responses.

use chrono::{DateTime, Utc};
use reqwest_middleware::ClientWithMiddleware;

/// Uniquely identifies an application on Steam. For example: 730 for Counter-Strike 2.
pub type AppId = u32;
/// A point in time reported by Steam as a Unix timestamp.
pub type ServerTime = DateTime<Utc>;

pub(crate) type HttpClient = ClientWithMiddleware;
