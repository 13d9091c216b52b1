//! Formatters
//!
//! Pure conversions from the typed upstream payloads into flat display
//! strings. All fixed wording lives here and in `service`; nothing in this
//! module performs I/O.

use crate::schema::{AlertFeature, ForecastPeriod};

/// Separator between alert entries and forecast periods.
const SEPARATOR: &str = "\n---\n";

/// Forecast output is capped to the next periods only.
pub const FORECAST_PERIOD_LIMIT: usize = 5;

pub fn format_alerts(features: &[AlertFeature]) -> String {
    features
        .iter()
        .map(|feature| {
            let props = &feature.properties;
            format!(
                "Event: {}\nArea: {}\nSeverity: {}\nDescription: {}\nInstructions: {}",
                props.event, props.area_desc, props.severity, props.description, props.instruction
            )
        })
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

pub fn format_forecast(periods: &[ForecastPeriod]) -> String {
    periods
        .iter()
        .take(FORECAST_PERIOD_LIMIT)
        .map(|period| {
            format!(
                "{}:\nTemperature: {}°{}\nWind: {} {}\nForecast: {}",
                period.name,
                period.temperature,
                period.temperature_unit,
                period.wind_speed,
                period.wind_direction,
                period.detailed_forecast
            )
        })
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

pub fn format_location(display_name: &str, latitude: f64, longitude: f64) -> String {
    format!(
        "Location: {}\nLatitude: {}\nLongitude: {}\nCoordinates: {}, {}",
        display_name, latitude, longitude, latitude, longitude
    )
}

/// Format the METAR/TAF block. A feed that failed or came back blank gets its
/// per-feed "no data" line; the caller handles the case where both failed.
pub fn format_aviation(icao: &str, metar: Option<&str>, taf: Option<&str>) -> String {
    let mut parts = Vec::new();

    match metar.map(str::trim).filter(|t| !t.is_empty()) {
        Some(text) => {
            parts.push(format!("METAR for {}:", icao));
            parts.push(text.to_string());
        }
        None => parts.push(format!("METAR for {}: No current METAR data available", icao)),
    }

    match taf.map(str::trim).filter(|t| !t.is_empty()) {
        Some(text) => {
            parts.push(format!("\nTAF for {}:", icao));
            parts.push(text.to_string());
        }
        None => parts.push(format!("\nTAF for {}: No current TAF data available", icao)),
    }

    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::AlertCollection;

    fn period(name: &str) -> ForecastPeriod {
        serde_json::from_str(&format!(
            r#"{{"name": "{}", "temperature": 65, "temperatureUnit": "F",
                "windSpeed": "10 mph", "windDirection": "NW",
                "detailedForecast": "Sunny."}}"#,
            name
        ))
        .unwrap()
    }

    #[test]
    fn alerts_join_with_separator_and_placeholders() {
        let collection: AlertCollection = serde_json::from_str(
            r#"{"features": [
                {"properties": {"event": "Red Flag Warning", "areaDesc": "Larimer County", "severity": "Severe"}},
                {"properties": {}}
            ]}"#,
        )
        .unwrap();
        let text = format_alerts(&collection.features.unwrap());

        let blocks: Vec<&str> = text.split("\n---\n").collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("Event: Red Flag Warning\nArea: Larimer County\nSeverity: Severe"));
        assert!(blocks[1].contains("Instructions: No specific instructions provided"));
    }

    #[test]
    fn forecast_caps_at_five_periods_in_order() {
        let periods: Vec<ForecastPeriod> = (1..=7).map(|i| period(&format!("Day {}", i))).collect();
        let text = format_forecast(&periods);

        let blocks: Vec<&str> = text.split("\n---\n").collect();
        assert_eq!(blocks.len(), 5);
        assert!(blocks[0].starts_with("Day 1:"));
        assert!(blocks[4].starts_with("Day 5:"));
        assert!(!text.contains("Day 6"));
        assert!(blocks[0].contains("Temperature: 65°F"));
    }

    #[test]
    fn location_block_repeats_coordinates() {
        let text = format_location("Chicago, Cook County, Illinois", 41.85, -87.65);
        assert_eq!(
            text,
            "Location: Chicago, Cook County, Illinois\nLatitude: 41.85\nLongitude: -87.65\nCoordinates: 41.85, -87.65"
        );
    }

    #[test]
    fn aviation_reports_each_feed_individually() {
        let text = format_aviation("KORD", Some("KORD 251951Z 25012KT 10SM FEW250\n"), None);
        assert!(text.contains("METAR for KORD:\nKORD 251951Z 25012KT 10SM FEW250"));
        assert!(text.contains("TAF for KORD: No current TAF data available"));
    }

    #[test]
    fn aviation_blank_feed_counts_as_no_data() {
        let text = format_aviation("EGLL", Some("   \n"), Some("TAF EGLL 251700Z"));
        assert!(text.contains("METAR for EGLL: No current METAR data available"));
        assert!(text.contains("\nTAF for EGLL:\nTAF EGLL 251700Z"));
    }
}
