use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors surfaced by the engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// No 2D drawing surface could be acquired; the loop does not start
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),
    #[error("frame scheduling failed: {0}")]
    Scheduler(String),
    #[error("event listener failed: {0}")]
    EventListener(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("invalid color `{0}`")]
    InvalidColor(String),
}

impl From<EngineError> for JsValue {
    fn from(err: EngineError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Render a JS exception value for error messages
pub(crate) fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
