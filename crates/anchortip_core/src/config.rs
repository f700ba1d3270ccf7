//! Serializable tooltip style.
//!
//! `TooltipStyle` is everything a tooltip is configured with apart from the
//! views it works on and its dismiss listener, so it can live in a JSON file
//! and be applied to a builder in one call.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AnchorTipError;
use crate::models::{AnimationSpec, Side, Tip};

/// Auto-cancel value meaning "never dismiss on a timer".
pub const NO_AUTO_CANCEL: u64 = 0;

/// Non-view tooltip configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipStyle {
    pub side: Side,
    pub cancelable: bool,
    pub auto_adjust: bool,
    pub padding: i32,
    pub tip: Option<Tip>,
    pub animation: Option<AnimationSpec>,
    /// Delay before automatic dismissal, `0` disables it.
    pub auto_cancel_ms: u64,
    pub wait_for_pre_draw: bool,
    pub debug: bool,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            side: Side::default(),
            cancelable: true,
            auto_adjust: true,
            padding: 0,
            tip: None,
            animation: None,
            auto_cancel_ms: NO_AUTO_CANCEL,
            wait_for_pre_draw: false,
            debug: false,
        }
    }
}

impl TooltipStyle {
    /// Parse a style from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, AnchorTipError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a style from a JSON file.
    pub fn load(path: &Path) -> Result<Self, AnchorTipError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AnchorTipError::config_with_source(format!("cannot read {}", path.display()), e)
        })?;
        let style = Self::from_json(&contents)?;
        tracing::debug!(path = %path.display(), side = %style.side, "Loaded tooltip style");
        Ok(style)
    }
}
