//! Capabilities the tooltip needs from the host toolkit.
//!
//! The overlay never talks to a concrete UI framework. A host implements these
//! traits over its own view tree, scheduler and animation system. Everything
//! runs on the host's UI thread, so every method takes `&self` and hosts use
//! interior mutability where they need it.
//!
//! Callbacks handed to the host may be invoked synchronously from inside the
//! call that registered them; the overlay never holds a borrow across such a
//! call.

use std::rc::Rc;
use std::time::Duration;

use anchortip_core::{Point, Rect, Size, TipPaint, TipPath};
use serde::Serialize;
use uuid::Uuid;

use crate::animation::Animation;

/// Identity of one overlay node inside its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TooltipId(Uuid);

impl TooltipId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TooltipId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TooltipId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle to a delayed callback, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// How a started animation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEnd {
    Finished,
    Cancelled,
}

/// The view a tooltip points at.
pub trait AnchorView {
    /// Top-left corner in window coordinates.
    fn location_in_window(&self) -> Point;
    fn size(&self) -> Size;
}

/// The view shown inside the tooltip.
pub trait ContentView {
    /// Measure the view given the space available to the overlay.
    fn measure(&self, available: Size) -> Size;
    /// Position the view inside the overlay.
    fn layout(&self, frame: Rect);
    /// Show or hide the view's children without changing its own visibility.
    fn set_children_visible(&self, visible: bool);
}

/// The view group the overlay is inserted into.
///
/// The overlay fills the container, so the container's window location is
/// also the overlay's.
pub trait OverlayContainer {
    fn location_in_window(&self) -> Point;

    /// Insert overlay `id` with `content` as its only child.
    fn add_overlay(&self, id: TooltipId, content: Rc<dyn ContentView>);

    /// Remove `content` from overlay `id`, then the overlay itself.
    ///
    /// `content` is the overlay's last reference to the view.
    fn remove_overlay(&self, id: TooltipId, content: Rc<dyn ContentView>);
}

/// Drawing surface for the tip.
pub trait Canvas {
    fn fill_tip(&mut self, path: &TipPath, paint: &TipPaint);
}

/// Scheduler, frame hooks and animation primitives of the UI thread.
pub trait Host {
    /// Run `callback` once after `delay`.
    fn post_delayed(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId;

    /// Drop a pending delayed callback. Unknown or already fired ids are ignored.
    fn cancel_delayed(&self, timer: TimerId);

    /// Run `callback` once, right before the next frame is drawn.
    fn on_pre_draw(&self, callback: Box<dyn FnOnce()>);

    /// Whether circular reveal transforms can be rendered.
    fn supports_circular_reveal(&self) -> bool;

    /// Start `animation` and report its end through `on_end`, exactly once.
    fn start_animation(&self, animation: Animation, on_end: Box<dyn FnOnce(AnimationEnd)>);
}
