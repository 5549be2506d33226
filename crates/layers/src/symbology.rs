use serde::{Deserialize, Serialize};

/// Stroke style applied to every drawn street.
///
/// Field names serialize in the map library's option casing (`fillColor`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineStyle {
    pub color: String,
    pub fill_color: String,
    pub weight: f64,
}

impl LineStyle {
    pub fn new(color: impl Into<String>, weight: f64) -> Self {
        let color = color.into();
        Self {
            fill_color: color.clone(),
            color,
            weight,
        }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::new("#FF4343", 1.0)
    }
}
