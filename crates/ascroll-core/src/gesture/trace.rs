//! Recorded pointer streams for replay
//!
//! A trace is a TOML or JSON document listing pointer events in delivery
//! order:
//!
//! ```toml
//! name = "drag and release"
//!
//! [[events]]
//! kind = "down"
//! x = 240.0
//! y = 400.0
//! t = 0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::event::PointerEvent;
use crate::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GestureTrace {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub events: Vec<PointerEvent>,
}

impl GestureTrace {
    /// Load a trace, picking the format from the file extension
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("toml") => Self::from_toml(&content),
            Some("json") => Self::from_json(&content),
            other => Err(Error::Trace(format!(
                "unsupported trace format {:?}, expected .toml or .json",
                other.unwrap_or("")
            ))),
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let trace: Self = serde_json::from_str(content)?;
        trace.check_order();
        Ok(trace)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let trace: Self = toml::from_str(content).map_err(|e| Error::Trace(e.to_string()))?;
        trace.check_order();
        Ok(trace)
    }

    /// Timestamp of the last event, zero for an empty trace
    pub fn end_ms(&self) -> u64 {
        self.events.iter().map(|e| e.timestamp_ms).max().unwrap_or(0)
    }

    fn check_order(&self) {
        for pair in self.events.windows(2) {
            if pair[1].timestamp_ms < pair[0].timestamp_ms {
                warn!(
                    previous = pair[0].timestamp_ms,
                    next = pair[1].timestamp_ms,
                    "trace timestamps go backwards"
                );
                break;
            }
        }
    }
}
