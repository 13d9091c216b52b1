//! aerodoc-weather: weather, aviation and geocoding tools
//!
//! ## Upstream APIs
//!
//! | API | Base URL | Payload |
//! |-----|----------|---------|
//! | NWS alerts/forecast | `https://api.weather.gov` | GeoJSON |
//! | Aviation METAR/TAF | `https://aviationweather.gov/api/data` | raw text |
//! | Nominatim geocoding | `https://nominatim.openstreetmap.org` | JSON |
//!
//! Every handler is a stateless orchestration over one or two outbound GET
//! calls: validate the argument, fetch, format, return a string. Upstream
//! failures collapse to fixed user-facing messages and never propagate.

pub mod client;
pub mod format;
pub mod schema;
pub mod service;
pub mod tools;

pub use service::WeatherService;
