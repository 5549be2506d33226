use formats::DEFAULT_ENDPOINT;
use layers::LineStyle;
use runtime::{DEFAULT_REFRESH_DIVISIONS, DEFAULT_SCROLL_TIME_MULTIPLIER};
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Window property holding a JSON object of overrides.
pub const CONFIG_GLOBAL: &str = "__streetTimelineConfig";

pub const DEFAULT_DEBOUNCE_MS: u32 = 66;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid viewer config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("viewer config must be a JSON string, found a value of type {0}")]
    NotAString(String),
}

/// What the page stored under the config global.
#[derive(Debug, Clone, PartialEq)]
pub enum RawConfig {
    Missing,
    Text(String),
    /// Any non-string value, with its `typeof`.
    Other(String),
}

/// Viewer settings. Every field has a default; the page may override any subset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewerConfig {
    pub endpoint: String,
    pub map_element_id: String,
    pub debounce_ms: u32,
    pub scroll_time_multiplier: f64,
    pub refresh_divisions: u32,
    /// `[lat, lng]`
    pub map_center: [f64; 2],
    pub map_zoom: f64,
    pub tile_url: String,
    pub tile_attribution: String,
    pub tile_min_zoom: u8,
    pub tile_max_zoom: u8,
    pub line_style: LineStyle,
    pub log_filter: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            map_element_id: "map".to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            scroll_time_multiplier: DEFAULT_SCROLL_TIME_MULTIPLIER,
            refresh_divisions: DEFAULT_REFRESH_DIVISIONS,
            map_center: [52.37959297229016, 4.901649844832719],
            map_zoom: 11.0,
            tile_url: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            tile_attribution: "Map data &copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors".to_string(),
            tile_min_zoom: 12,
            tile_max_zoom: 20,
            line_style: LineStyle::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl ViewerConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// A missing property or blank string yields the defaults.
    pub fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        match raw {
            RawConfig::Missing => Ok(Self::default()),
            RawConfig::Text(text) if text.trim().is_empty() => Ok(Self::default()),
            RawConfig::Text(text) => Ok(Self::from_json(text.trim())?),
            RawConfig::Other(kind) => Err(ConfigError::NotAString(kind)),
        }
    }

    /// Read overrides from `window.__streetTimelineConfig` (a JSON string).
    pub fn from_window() -> Result<Self, ConfigError> {
        let Some(window) = web_sys::window() else {
            return Ok(Self::default());
        };
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .unwrap_or(JsValue::UNDEFINED);
        let raw = if value.is_undefined() || value.is_null() {
            RawConfig::Missing
        } else if let Some(text) = value.as_string() {
            RawConfig::Text(text)
        } else {
            RawConfig::Other(value.js_typeof().as_string().unwrap_or_default())
        };
        Self::from_raw(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, RawConfig, ViewerConfig};
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_page_timing() {
        let c = ViewerConfig::default();
        assert_eq!(c.debounce_ms, 66);
        assert_eq!(c.scroll_time_multiplier, 5.0);
        assert_eq!(c.refresh_divisions, 10);
        assert_eq!(c.line_style.color, "#FF4343");
        assert_eq!(c.line_style.weight, 1.0);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let c = ViewerConfig::from_json(
            r##"{ "debounceMs": 120, "lineStyle": { "color": "#00FF00" }, "unknown": true }"##,
        )
        .expect("config");
        assert_eq!(c.debounce_ms, 120);
        assert_eq!(c.line_style.color, "#00FF00");
        assert_eq!(c.line_style.fill_color, "#FF4343");
        assert_eq!(c.map_zoom, 11.0);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(
            ViewerConfig::from_json("{}").expect("config"),
            ViewerConfig::default()
        );
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ViewerConfig::from_json("{ debounceMs: }").is_err());
    }

    #[test]
    fn missing_or_blank_global_is_default() {
        assert_eq!(
            ViewerConfig::from_raw(RawConfig::Missing).expect("config"),
            ViewerConfig::default()
        );
        assert_eq!(
            ViewerConfig::from_raw(RawConfig::Text("  ".into())).expect("config"),
            ViewerConfig::default()
        );
    }

    #[test]
    fn non_string_global_is_reported() {
        let err = ViewerConfig::from_raw(RawConfig::Other("object".into())).unwrap_err();
        assert!(matches!(err, ConfigError::NotAString(ref kind) if kind == "object"));
        assert!(err.to_string().contains("object"));
    }

    #[test]
    fn string_global_is_parsed() {
        let c = ViewerConfig::from_raw(RawConfig::Text(r#" { "mapZoom": 13 } "#.into()))
            .expect("config");
        assert_eq!(c.map_zoom, 13.0);
        assert!(matches!(
            ViewerConfig::from_raw(RawConfig::Text("{".into())),
            Err(ConfigError::Json(_))
        ));
    }
}
