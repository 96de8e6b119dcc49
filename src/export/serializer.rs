//! Hand-off from a computed layout to file bytes.

use std::fmt;

use super::ExportLayout;

/// Terminal export failure. No partial output is produced.
#[derive(Debug)]
pub enum ExportError {
    Serialization(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Serialization(msg) => write!(f, "failed to serialize export: {}", msg),
        }
    }
}

impl std::error::Error for ExportError {}

/// Turns a layout into a downloadable file.
pub trait LayoutSerializer: Send + Sync {
    fn content_type(&self) -> &'static str;

    fn extension(&self) -> &'static str;

    fn serialize(&self, layout: &ExportLayout) -> Result<Vec<u8>, ExportError>;
}

/// Pretty-printed JSON of the draw instructions.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLayoutSerializer;

impl LayoutSerializer for JsonLayoutSerializer {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn serialize(&self, layout: &ExportLayout) -> Result<Vec<u8>, ExportError> {
        serde_json::to_vec_pretty(layout).map_err(|e| ExportError::Serialization(e.to_string()))
    }
}
