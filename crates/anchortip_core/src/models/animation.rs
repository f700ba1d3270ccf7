//! Animation settings for showing and dismissing a tooltip.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default animation duration in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 400;

/// Kind of transform used when a tooltip appears or goes away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationKind {
    /// No animation.
    None,
    /// Fade in and fade out.
    #[default]
    Fade,
    /// Circular reveal centered on the tip (or the anchor-facing edge).
    Reveal,
    /// Single-axis scale away from the anchor.
    Scale,
    /// Scale and fade together.
    ScaleAndFade,
}

/// Whether a transform shows or hides the tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    In,
    Out,
}

/// Animation configuration for a tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSpec {
    pub kind: AnimationKind,
    pub duration_ms: u64,
    /// Hide the content's children while the transform runs.
    pub hide_content_while_animating: bool,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            kind: AnimationKind::default(),
            duration_ms: DEFAULT_DURATION_MS,
            hide_content_while_animating: false,
        }
    }
}

impl AnimationSpec {
    /// Create a spec of the given kind with the default duration.
    pub fn new(kind: AnimationKind) -> Self {
        Self { kind, ..Self::default() }
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn hide_content_while_animating(mut self, hide: bool) -> Self {
        self.hide_content_while_animating = hide;
        self
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Whether this spec produces any transform at all.
    pub fn is_animated(&self) -> bool {
        self.kind != AnimationKind::None
    }
}
