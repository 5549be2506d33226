use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid WKT geometry: {0}")]
    Geometry(String),
    #[error("geometry has no coordinates")]
    EmptyGeometry,
}
