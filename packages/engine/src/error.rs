//! Engine error type.
//!
//! Nothing on the per-frame update path can fail; errors only come from
//! config loading, the drawing surface, and browser wiring.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Config JSON failed to parse or validate.
    Config(String),
    /// The drawing surface rejected a call.
    Surface(String),
    /// Window, document, canvas or context missing.
    Host(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Config(msg) => write!(f, "invalid field config: {}", msg),
            EngineError::Surface(msg) => write!(f, "drawing surface error: {}", msg),
            EngineError::Host(msg) => write!(f, "host environment error: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::Config(e.to_string())
    }
}

impl From<EngineError> for wasm_bindgen::JsValue {
    fn from(e: EngineError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
