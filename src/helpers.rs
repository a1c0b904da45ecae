use std::time::Duration;
use reqwest_middleware::{
    ClientBuilder,
    ClientWithMiddleware
};
use reqwest_retry::{
    RetryTransientMiddleware,
    policies::ExponentialBackoff
};
use reqwest::header;
use serde::de::DeserializeOwned;
use lazy_regex::regex_is_match;
use steamid_ng::SteamID;
use crate::error::Error;

/// Deadline for a single upstream request.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

pub const USER_AGENT_STRING: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/97.0.4692.71 Safari/537.36";

pub fn get_default_middleware(user_agent_string: &'static str) -> ClientWithMiddleware {
    let retry_policy = ExponentialBackoff::builder().build_with_max_retries(3);
    let mut headers = header::HeaderMap::new();

    headers.insert(header::USER_AGENT, header::HeaderValue::from_static(user_agent_string));

    let client = reqwest::ClientBuilder::new()
        .default_headers(headers)
        .timeout(UPSTREAM_TIMEOUT)
        .build()
        .unwrap();

    ClientBuilder::new(client)
        .with(RetryTransientMiddleware::new_with_policy(retry_policy))
        .build()
}

pub async fn check_response(response: reqwest::Response) -> Result<bytes::Bytes, Error> {
    let status = response.status();

    match status.as_u16() {
        400..=599 => Err(Error::Http(status)),
        _ => Ok(response.bytes().await?),
    }
}

pub async fn parses_response<D>(response: reqwest::Response) -> Result<D, Error>
where
    D: DeserializeOwned
{
    let body = check_response(response).await?;
    let body = serde_json::from_slice::<D>(&body)?;

    Ok(body)
}

/// Parses a canonical 17-digit SteamID64 string.
pub fn parse_steam_id(value: &str) -> Result<SteamID, Error> {
    if !regex_is_match!(r"^[0-9]{17}$", value) {
        return Err(Error::Parameter("Expected a 17-digit numeric Steam ID"));
    }

    let id = value.parse::<u64>()
        .map_err(|_| Error::Parameter("Expected a 17-digit numeric Steam ID"))?;

    Ok(SteamID::from(id))
}

/// Rounds to the given number of decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);

    (value * factor).round() / factor
}
