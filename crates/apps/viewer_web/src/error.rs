use formats::FormatError;
use runtime::PlaybackError;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("network request failed: {0}")]
    Network(String),
    #[error("query endpoint returned HTTP {0}")]
    Status(u16),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Playback(#[from] PlaybackError),
    #[error("missing page element: {0}")]
    MissingElement(&'static str),
    #[error("browser API error: {0}")]
    Js(String),
}

impl From<gloo_net::Error> for ViewerError {
    fn from(err: gloo_net::Error) -> Self {
        ViewerError::Network(err.to_string())
    }
}

impl From<JsValue> for ViewerError {
    fn from(value: JsValue) -> Self {
        ViewerError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<serde_wasm_bindgen::Error> for ViewerError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        ViewerError::Js(err.to_string())
    }
}

impl From<ViewerError> for JsValue {
    fn from(err: ViewerError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::ViewerError;
    use pretty_assertions::assert_eq;
    use runtime::{PlaybackController, PlaybackError};

    #[test]
    fn rejected_playback_surfaces_as_viewer_error() {
        let mut controller = PlaybackController::default();
        let err: ViewerError = controller.play(None).unwrap_err().into();
        assert!(matches!(err, ViewerError::Playback(PlaybackError::EmptyTimeline)));
        assert_eq!(err.to_string(), "timeline has no blocks to play through");
        assert!(!controller.is_playing());
    }
}
