//! Weather Tools
//!
//! MCP tool surface over `WeatherService`. One unit struct per tool, all
//! registered once at startup.

use crate::service::WeatherService;
use aerodoc_mcp::{Tool, ToolRegistry};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub async fn register_all(registry: &ToolRegistry, service: Arc<WeatherService>) -> Result<usize> {
    registry
        .register(Arc::new(GetAlertsTool {
            service: service.clone(),
        }))
        .await?;
    registry
        .register(Arc::new(GetForecastTool {
            service: service.clone(),
        }))
        .await?;
    registry
        .register(Arc::new(GeocodeLocationTool {
            service: service.clone(),
        }))
        .await?;
    registry
        .register(Arc::new(GetAviationWeatherTool { service }))
        .await?;
    Ok(4)
}

pub struct GetAlertsTool {
    service: Arc<WeatherService>,
}

#[async_trait]
impl Tool for GetAlertsTool {
    fn name(&self) -> &str {
        "get_alerts"
    }
    fn description(&self) -> &str {
        "Get weather alerts for a US state."
    }
    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "state": {"type": "string", "description": "Two-letter US state code (e.g. CA, NY)"}
            },
            "required": ["state"]
        })
    }

    async fn execute(&self, input: Value) -> Result<String> {
        let state = input
            .get("state")
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow::anyhow!("Missing state"))?;
        Ok(self.service.alerts(state).await)
    }
}

pub struct GetForecastTool {
    service: Arc<WeatherService>,
}

#[async_trait]
impl Tool for GetForecastTool {
    fn name(&self) -> &str {
        "get_forecast"
    }
    fn description(&self) -> &str {
        "Get weather forecast for a location."
    }
    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "latitude": {"type": "number", "description": "Latitude of the location"},
                "longitude": {"type": "number", "description": "Longitude of the location"}
            },
            "required": ["latitude", "longitude"]
        })
    }

    async fn execute(&self, input: Value) -> Result<String> {
        let latitude = input
            .get("latitude")
            .and_then(|v| v.as_f64())
            .ok_or_else(|| anyhow::anyhow!("Missing latitude"))?;
        let longitude = input
            .get("longitude")
            .and_then(|v| v.as_f64())
            .ok_or_else(|| anyhow::anyhow!("Missing longitude"))?;
        Ok(self.service.forecast(latitude, longitude).await)
    }
}

pub struct GeocodeLocationTool {
    service: Arc<WeatherService>,
}

#[async_trait]
impl Tool for GeocodeLocationTool {
    fn name(&self) -> &str {
        "geocode_location"
    }
    fn description(&self) -> &str {
        "Convert a location name into latitude and longitude coordinates."
    }
    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "location": {
                    "type": "string",
                    "description": "Location name (e.g. \"New York, NY\", \"London, UK\", \"Tokyo, Japan\")"
                }
            },
            "required": ["location"]
        })
    }

    async fn execute(&self, input: Value) -> Result<String> {
        let location = input
            .get("location")
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow::anyhow!("Missing location"))?;
        Ok(self.service.geocode(location).await)
    }
}

pub struct GetAviationWeatherTool {
    service: Arc<WeatherService>,
}

#[async_trait]
impl Tool for GetAviationWeatherTool {
    fn name(&self) -> &str {
        "get_aviation_weather"
    }
    fn description(&self) -> &str {
        "Get METAR and TAF aviation weather data for an airport by ICAO code."
    }
    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "icao_code": {
                    "type": "string",
                    "description": "4-letter ICAO airport code (e.g. KORD, EGLL, KJFK)"
                }
            },
            "required": ["icao_code"]
        })
    }

    async fn execute(&self, input: Value) -> Result<String> {
        let icao_code = input
            .get("icao_code")
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow::anyhow!("Missing icao_code"))?;
        Ok(self.service.aviation_weather(icao_code).await)
    }
}
