//! Anchor-relative tooltip overlay.
//!
//! - **host**: Capabilities a UI toolkit provides to the overlay
//! - **placement**: Anchor-relative layout and container clamping
//! - **animation**: Enter/exit transform selection
//! - **tooltip**: The overlay controller and its dismissal lifecycle
//! - **builder**: Validated construction and `show()`

pub mod animation;
pub mod builder;
pub mod host;
pub mod placement;
pub mod tooltip;

#[cfg(test)]
pub(crate) mod test_support;

pub use animation::{select_animation, select_transform, Animation, Target, Transform};
pub use builder::TooltipBuilder;
pub use host::{
    AnchorView, AnimationEnd, Canvas, ContentView, Host, OverlayContainer, TimerId, TooltipId,
};
pub use placement::{resolve, Placement, PlacementRequest};
pub use tooltip::{DismissListener, OverlayConfig, Tooltip, TooltipState};
