//! WeatherService
//!
//! One method per tool. Each method validates its argument, performs the
//! outbound calls through the External Call Adapter and renders the result.
//! The contract at this boundary is "always returns a string": upstream
//! failures become the fixed messages below, never errors.

use crate::client::{self, endpoints};
use crate::format;
use crate::schema::{AlertCollection, Forecast, GeocodeHit, GridPoints};
use tracing::debug;

pub const ALERTS_UNAVAILABLE: &str = "Unable to fetch alerts or no alerts found.";
pub const NO_ACTIVE_ALERTS: &str = "No active alerts for this state.";
pub const FORECAST_UNAVAILABLE: &str = "Unable to fetch forecast data for this location.";
pub const DETAILED_FORECAST_UNAVAILABLE: &str = "Unable to fetch detailed forecast.";
pub const LOCATION_REQUIRED: &str = "Please provide a valid location name.";
pub const INVALID_ICAO: &str =
    "Invalid ICAO code. Please provide a 4-letter airport code (e.g., KORD, EGLL, KJFK).";

/// Stateless weather/aviation/geocoding service. Holds only the endpoint
/// bases; every invocation's data is local to that invocation.
pub struct WeatherService {
    nws_base: String,
    aviation_base: String,
    geocode_base: String,
}

impl Default for WeatherService {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherService {
    pub fn new() -> Self {
        Self {
            nws_base: endpoints::NWS_API.to_string(),
            aviation_base: endpoints::AVIATION_API.to_string(),
            geocode_base: endpoints::GEOCODING_API.to_string(),
        }
    }

    /// Create from environment, falling back to the public endpoints.
    pub fn from_env() -> Self {
        let var = |name: &str, fallback: &str| {
            std::env::var(name).unwrap_or_else(|_| fallback.to_string())
        };
        Self {
            nws_base: var("AERODOC_NWS_BASE", endpoints::NWS_API),
            aviation_base: var("AERODOC_AVIATION_BASE", endpoints::AVIATION_API),
            geocode_base: var("AERODOC_GEOCODE_BASE", endpoints::GEOCODING_API),
        }
    }

    /// Create with explicit endpoint bases.
    pub fn with_endpoints(
        nws_base: impl Into<String>,
        aviation_base: impl Into<String>,
        geocode_base: impl Into<String>,
    ) -> Self {
        Self {
            nws_base: nws_base.into(),
            aviation_base: aviation_base.into(),
            geocode_base: geocode_base.into(),
        }
    }

    /// Active weather alerts for a US state.
    pub async fn alerts(&self, state: &str) -> String {
        let url = format!("{}/alerts/active/area/{}", self.nws_base, state);

        match client::fetch_nws_json::<AlertCollection>(&url).await {
            Ok(data) => match data.features {
                Some(features) if features.is_empty() => NO_ACTIVE_ALERTS.to_string(),
                Some(features) => format::format_alerts(&features),
                None => ALERTS_UNAVAILABLE.to_string(),
            },
            Err(err) => {
                debug!(%err, "alert fetch failed");
                ALERTS_UNAVAILABLE.to_string()
            }
        }
    }

    /// Forecast for a location: resolve the grid endpoint, then fetch it.
    pub async fn forecast(&self, latitude: f64, longitude: f64) -> String {
        let points_url = format!("{}/points/{},{}", self.nws_base, latitude, longitude);

        let points = match client::fetch_nws_json::<GridPoints>(&points_url).await {
            Ok(points) => points,
            Err(err) => {
                debug!(%err, "points fetch failed");
                return FORECAST_UNAVAILABLE.to_string();
            }
        };

        match client::fetch_nws_json::<Forecast>(&points.properties.forecast).await {
            Ok(forecast) => format::format_forecast(&forecast.properties.periods),
            Err(err) => {
                debug!(%err, "forecast fetch failed");
                DETAILED_FORECAST_UNAVAILABLE.to_string()
            }
        }
    }

    /// Resolve a free-text location to coordinates via the single best match.
    pub async fn geocode(&self, location: &str) -> String {
        let trimmed = location.trim();
        if trimmed.is_empty() {
            return LOCATION_REQUIRED.to_string();
        }

        let url = format!("{}/search", self.geocode_base);
        let query = [("q", trimmed), ("format", "json"), ("limit", "1")];

        let hits: Vec<GeocodeHit> = match client::fetch_json(&url, &query).await {
            Ok(hits) => hits,
            Err(err) => {
                debug!(%err, "geocode fetch failed");
                return geocode_not_found(location);
            }
        };

        let Some(hit) = hits.into_iter().next() else {
            return geocode_not_found(location);
        };
        let (Ok(latitude), Ok(longitude)) = (hit.lat.parse::<f64>(), hit.lon.parse::<f64>()) else {
            return geocode_not_found(location);
        };

        let display_name = hit.display_name.as_deref().unwrap_or(location);
        format::format_location(display_name, latitude, longitude)
    }

    /// METAR and TAF for an airport. The two feeds are fetched independently
    /// and reported per-feed; only when both fail does the combined message
    /// replace the block.
    pub async fn aviation_weather(&self, icao_code: &str) -> String {
        let icao = icao_code.trim().to_uppercase();
        if icao.len() != 4 || !icao.chars().all(|c| c.is_ascii_alphabetic()) {
            return INVALID_ICAO.to_string();
        }

        let metar_url = format!("{}/metar?ids={}&format=raw", self.aviation_base, icao);
        let metar = client::fetch_text(&metar_url).await.ok();

        let taf_url = format!("{}/taf?ids={}&format=raw", self.aviation_base, icao);
        let taf = client::fetch_text(&taf_url).await.ok();

        // A feed that failed outright or returned an empty body counts as
        // absent for the combined check; whitespace-only still counts as a
        // response (it only downgrades the per-feed line).
        let metar_absent = metar.as_deref().map_or(true, str::is_empty);
        let taf_absent = taf.as_deref().map_or(true, str::is_empty);
        if metar_absent && taf_absent {
            return format!(
                "Unable to fetch aviation weather data for {}. Please check the ICAO code and try again.",
                icao
            );
        }

        format::format_aviation(&icao, metar.as_deref(), taf.as_deref())
    }
}

fn geocode_not_found(location: &str) -> String {
    format!(
        "Unable to find coordinates for '{}'. Please try a more specific location name.",
        location
    )
}
