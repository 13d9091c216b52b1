//! External Call Adapter
//!
//! One outbound GET per logical operation, with a fixed identifying
//! User-Agent and a 30-second timeout. Each call builds a fresh client so no
//! connection state is shared between calls. Every failure mode (connect,
//! timeout, non-2xx status, undecodable payload) collapses into `FetchError`;
//! callers treat it as a single "no data" signal.

use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Identifying header sent with every outbound request.
pub const USER_AGENT: &str = "aerodoc-weather/0.2";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default upstream endpoints. Overridable per `WeatherService` instance.
pub mod endpoints {
    /// National Weather Service API
    pub const NWS_API: &str = "https://api.weather.gov";

    /// Aviation weather data API (METAR/TAF raw text)
    pub const AVIATION_API: &str = "https://aviationweather.gov/api/data";

    /// Nominatim geocoding API
    pub const GEOCODING_API: &str = "https://nominatim.openstreetmap.org";
}

/// Collapsed outbound failure. No distinction is preserved between transport
/// errors, timeouts, error statuses and malformed payloads.
#[derive(Debug, Error)]
#[error("outbound request failed: {0}")]
pub struct FetchError(#[from] reqwest::Error);

fn fresh_client() -> Result<Client, FetchError> {
    Ok(Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()?)
}

/// GET a GeoJSON payload from the NWS API.
pub async fn fetch_nws_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    debug!(%url, "NWS request");
    let response = fresh_client()?
        .get(url)
        .header(ACCEPT, "application/geo+json")
        .send()
        .await?
        .error_for_status()?;
    Ok(response.json().await?)
}

/// GET a plain JSON payload, with query parameters encoded by the client.
pub async fn fetch_json<T: DeserializeOwned>(
    url: &str,
    query: &[(&str, &str)],
) -> Result<T, FetchError> {
    debug!(%url, "JSON request");
    let response = fresh_client()?
        .get(url)
        .query(query)
        .send()
        .await?
        .error_for_status()?;
    Ok(response.json().await?)
}

/// GET a raw-text payload.
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    debug!(%url, "Text request");
    let response = fresh_client()?.get(url).send().await?.error_for_status()?;
    Ok(response.text().await?)
}
