//! Typed shapes for the upstream payloads
//!
//! Each external response deserializes once into these structs; optional
//! fields carry their placeholder defaults here so the formatting code never
//! has to default ad hoc. A payload that fails to deserialize is treated the
//! same as a failed fetch.

use serde::{Deserialize, Deserializer};

fn text_or<'de, D: Deserializer<'de>>(de: D, fallback: &str) -> Result<String, D::Error> {
    // NWS sends explicit nulls for absent fields, not just missing keys.
    Ok(Option::<String>::deserialize(de)?.unwrap_or_else(|| fallback.to_string()))
}

fn unknown() -> String {
    "Unknown".to_string()
}

fn de_unknown<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    text_or(de, "Unknown")
}

fn no_description() -> String {
    "No description available".to_string()
}

fn de_no_description<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    text_or(de, "No description available")
}

fn no_instructions() -> String {
    "No specific instructions provided".to_string()
}

fn de_no_instructions<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    text_or(de, "No specific instructions provided")
}

/// `GET {nws}/alerts/active/area/{state}`
#[derive(Debug, Deserialize)]
pub struct AlertCollection {
    /// Absent features list means the payload is unusable, distinct from an
    /// empty list (no active alerts).
    #[serde(default)]
    pub features: Option<Vec<AlertFeature>>,
}

#[derive(Debug, Deserialize)]
pub struct AlertFeature {
    pub properties: AlertProperties,
}

#[derive(Debug, Deserialize)]
pub struct AlertProperties {
    #[serde(default = "unknown", deserialize_with = "de_unknown")]
    pub event: String,
    #[serde(
        rename = "areaDesc",
        default = "unknown",
        deserialize_with = "de_unknown"
    )]
    pub area_desc: String,
    #[serde(default = "unknown", deserialize_with = "de_unknown")]
    pub severity: String,
    #[serde(default = "no_description", deserialize_with = "de_no_description")]
    pub description: String,
    #[serde(default = "no_instructions", deserialize_with = "de_no_instructions")]
    pub instruction: String,
}

/// `GET {nws}/points/{lat},{lon}` - resolves a location to its forecast URL.
#[derive(Debug, Deserialize)]
pub struct GridPoints {
    pub properties: PointProperties,
}

#[derive(Debug, Deserialize)]
pub struct PointProperties {
    pub forecast: String,
}

/// `GET <forecast url>` from the points response.
#[derive(Debug, Deserialize)]
pub struct Forecast {
    pub properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
pub struct ForecastProperties {
    pub periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    pub name: String,
    pub temperature: f64,
    pub temperature_unit: String,
    pub wind_speed: String,
    pub wind_direction: String,
    pub detailed_forecast: String,
}

/// One hit from `GET {nominatim}/search?q=…&format=json&limit=1`.
/// Nominatim returns coordinates as strings.
#[derive(Debug, Deserialize)]
pub struct GeocodeHit {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}
