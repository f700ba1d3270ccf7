//! Maps an animation kind to the concrete transform a host should run.

use std::time::Duration;

use anchortip_core::{AnimationKind, AnimationSpec, Axis, Direction, Point, Side, Size};
use serde::Serialize;

/// Which node a transform applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// The whole overlay, tip included.
    Overlay,
    /// Only the content view.
    Content,
}

/// A transform a host knows how to animate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Transform {
    /// Opacity between `from` and `to`.
    Fade { from: f32, to: f32 },
    /// Circular clip centered at `center`, in overlay coordinates.
    Reveal { center: Point, from_radius: f32, to_radius: f32 },
    /// Scale along one axis around `pivot`, in content coordinates.
    Scale { axis: Axis, pivot: Point, from: f32, to: f32 },
    /// Transforms that run concurrently.
    Together { parts: Vec<Transform> },
}

impl Transform {
    /// Node the transform applies to, `None` for a mixed group.
    pub fn target(&self) -> Option<Target> {
        match self {
            Self::Fade { .. } | Self::Reveal { .. } => Some(Target::Overlay),
            Self::Scale { .. } => Some(Target::Content),
            Self::Together { .. } => None,
        }
    }
}

/// A transform with its timing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animation {
    pub transform: Transform,
    pub direction: Direction,
    pub duration: Duration,
}

/// Build the animation for `spec`, or `None` when nothing should run.
pub fn select_animation(
    spec: &AnimationSpec,
    direction: Direction,
    side: Side,
    anchor_point: Point,
    content: Size,
    reveal_supported: bool,
) -> Option<Animation> {
    let transform =
        select_transform(spec.kind, direction, side, anchor_point, content, reveal_supported)?;
    Some(Animation { transform, direction, duration: spec.duration() })
}

/// Pick the transform for `kind`.
///
/// IN runs from hidden to shown, OUT the other way round. A reveal on a host
/// without circular reveal support degrades to no transform.
pub fn select_transform(
    kind: AnimationKind,
    direction: Direction,
    side: Side,
    anchor_point: Point,
    content: Size,
    reveal_supported: bool,
) -> Option<Transform> {
    let (from, to) = match direction {
        Direction::In => (0.0, 1.0),
        Direction::Out => (1.0, 0.0),
    };

    match kind {
        AnimationKind::None => None,
        AnimationKind::Fade => Some(Transform::Fade { from, to }),
        AnimationKind::Reveal => {
            if !reveal_supported {
                tracing::warn!("Circular reveal is not supported by this host, skipping animation");
                return None;
            }
            let radius = content.max_dimension() as f32;
            Some(Transform::Reveal {
                center: anchor_point,
                from_radius: from * radius,
                to_radius: to * radius,
            })
        }
        AnimationKind::Scale => Some(scale(side, content, from, to)),
        AnimationKind::ScaleAndFade => Some(Transform::Together {
            parts: vec![scale(side, content, from, to), Transform::Fade { from, to }],
        }),
    }
}

/// Scale away from the anchor: the edge facing the anchor stays put.
fn scale(side: Side, content: Size, from: f32, to: f32) -> Transform {
    let (w, h) = (content.width, content.height);
    let (axis, pivot) = match side {
        Side::Bottom => (Axis::Vertical, Point::new(w / 2, 0)),
        Side::Top => (Axis::Vertical, Point::new(w / 2, h)),
        Side::Right => (Axis::Horizontal, Point::new(0, h / 2)),
        Side::Left => (Axis::Horizontal, Point::new(w, h / 2)),
    };
    Transform::Scale { axis, pivot, from, to }
}
