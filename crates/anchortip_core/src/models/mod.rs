//! Value types for anchortip.
//!
//! - `geometry` - Point, Size, Rect
//! - `side` - Side, Axis
//! - `tip` - Tip, Color, TipPath, TipPaint
//! - `animation` - AnimationKind, AnimationSpec, Direction

pub mod animation;
pub mod geometry;
pub mod side;
pub mod tip;

pub use animation::{AnimationKind, AnimationSpec, Direction};
pub use geometry::{Point, Rect, Size};
pub use side::{Axis, Side};
pub use tip::{Color, Tip, TipPaint, TipPath};
