//! Tooltip overlay controller.
//!
//! A [`Tooltip`] fills its container, owns one content view and positions it
//! next to an anchor on every layout pass. It moves through
//! `Building → Attached → (Dismissing) → Dismissed`, and is dismissed at most
//! once no matter how many paths (tap outside, auto-cancel, explicit call,
//! animation end) ask for it.
//!
//! The handle is a cheap clone over shared state. Callbacks registered with
//! the host hold weak references, so a dropped tooltip is never revived.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use anchortip_core::{AnimationSpec, Direction, Point, Rect, Side, Size, Tip, TooltipStyle};

use crate::animation::select_animation;
use crate::host::{AnchorView, Canvas, ContentView, Host, OverlayContainer, TooltipId};
use crate::placement::{resolve, Placement, PlacementRequest};

/// Called once when a tooltip is dismissed.
pub type DismissListener = Box<dyn FnOnce()>;

/// Lifecycle of a tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipState {
    /// Built but not yet inserted into its container.
    Building,
    /// Inserted and receiving layout passes.
    Attached,
    /// An exit animation is running.
    Dismissing,
    /// Removed from the container. Terminal.
    Dismissed,
}

/// Everything a tooltip is constructed from.
pub struct OverlayConfig {
    pub anchor: Rc<dyn AnchorView>,
    pub container: Rc<dyn OverlayContainer>,
    pub content: Rc<dyn ContentView>,
    pub host: Rc<dyn Host>,
    pub style: TooltipStyle,
    /// Runs first on dismissal; owned by whoever arms the auto-cancel timer.
    pub on_dismissed: Option<DismissListener>,
    /// Caller listener, runs after `on_dismissed`.
    pub listener: Option<DismissListener>,
}

/// Whether layout waits for the host's next pre-draw hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PreDrawGate {
    Open,
    Closed,
    /// Subscribed; holds the bounds of the latest layout request.
    Pending(Rect),
}

enum LayoutAction {
    Now,
    Subscribe,
    Wait,
}

struct Inner {
    id: TooltipId,
    anchor: Rc<dyn AnchorView>,
    container: Rc<dyn OverlayContainer>,
    content: Option<Rc<dyn ContentView>>,
    host: Rc<dyn Host>,
    side: Side,
    cancelable: bool,
    auto_adjust: bool,
    padding: i32,
    tip: Option<Tip>,
    animation: Option<AnimationSpec>,
    debug: bool,
    state: TooltipState,
    attached: bool,
    has_laid_out: bool,
    has_animated_in: bool,
    gate: PreDrawGate,
    measured: Option<Size>,
    placement: Option<Placement>,
    on_dismissed: Option<DismissListener>,
    listener: Option<DismissListener>,
}

impl Inner {
    fn animates_by_default(&self) -> bool {
        self.animation.is_some_and(|spec| spec.is_animated())
    }

    fn last_anchor(&self) -> (Point, Size) {
        match self.placement {
            Some(placement) => (placement.anchor_point, placement.content.size()),
            None => (Point::default(), self.measured.unwrap_or_default()),
        }
    }
}

/// A tooltip overlay anchored to another view.
#[derive(Clone)]
pub struct Tooltip {
    inner: Rc<RefCell<Inner>>,
}

/// Non-owning tooltip handle for host callbacks.
#[derive(Clone)]
pub(crate) struct WeakTooltip {
    inner: Weak<RefCell<Inner>>,
}

impl WeakTooltip {
    pub(crate) fn upgrade(&self) -> Option<Tooltip> {
        self.inner.upgrade().map(|inner| Tooltip { inner })
    }
}

impl Tooltip {
    /// Create a tooltip owning `config.content`. It is not attached yet.
    pub fn new(config: OverlayConfig) -> Self {
        let OverlayConfig { anchor, container, content, host, style, on_dismissed, listener } =
            config;
        let id = TooltipId::new();

        if style.debug {
            tracing::debug!(
                tooltip_id = %id,
                side = %style.side,
                show_tip = style.tip.is_some(),
                animation = ?style.animation.map(|spec| spec.kind),
                "Tooltip created"
            );
        }

        let inner = Inner {
            id,
            anchor,
            container,
            content: Some(content),
            host,
            side: style.side,
            cancelable: style.cancelable,
            auto_adjust: style.auto_adjust,
            padding: style.padding,
            tip: style.tip,
            animation: style.animation,
            debug: style.debug,
            state: TooltipState::Building,
            attached: false,
            has_laid_out: false,
            has_animated_in: false,
            gate: if style.wait_for_pre_draw { PreDrawGate::Closed } else { PreDrawGate::Open },
            measured: None,
            placement: None,
            on_dismissed,
            listener,
        };

        Self { inner: Rc::new(RefCell::new(inner)) }
    }

    pub(crate) fn downgrade(&self) -> WeakTooltip {
        WeakTooltip { inner: Rc::downgrade(&self.inner) }
    }

    // ========== Accessors ==========

    pub fn id(&self) -> TooltipId {
        self.inner.borrow().id
    }

    pub fn state(&self) -> TooltipState {
        self.inner.borrow().state
    }

    pub fn side(&self) -> Side {
        self.inner.borrow().side
    }

    pub fn is_cancelable(&self) -> bool {
        self.inner.borrow().cancelable
    }

    pub fn is_attached(&self) -> bool {
        self.inner.borrow().attached
    }

    pub fn is_dismissed(&self) -> bool {
        self.inner.borrow().state == TooltipState::Dismissed
    }

    /// Whether automatic dismissals (tap outside, auto-cancel) animate.
    pub fn animates_by_default(&self) -> bool {
        self.inner.borrow().animates_by_default()
    }

    /// Result of the most recent layout pass.
    pub fn placement(&self) -> Option<Placement> {
        self.inner.borrow().placement
    }

    /// Replace the caller listener. Ignored once dismissed.
    pub fn set_listener(&self, listener: impl FnOnce() + 'static) {
        let mut inner = self.inner.borrow_mut();
        if inner.state != TooltipState::Dismissed {
            inner.listener = Some(Box::new(listener));
        }
    }

    // ========== Host notifications ==========

    /// Insert the overlay into its container.
    pub fn attach(&self) {
        let (container, id, content) = {
            let mut inner = self.inner.borrow_mut();
            if inner.state != TooltipState::Building {
                return;
            }
            let Some(content) = inner.content.clone() else {
                return;
            };
            inner.state = TooltipState::Attached;
            inner.attached = true;
            (inner.container.clone(), inner.id, content)
        };
        container.add_overlay(id, content);
        tracing::debug!(tooltip_id = %id, "Tooltip attached");
    }

    /// The overlay's window became available again.
    pub fn attached_to_window(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.state != TooltipState::Building && inner.state != TooltipState::Dismissed {
            inner.attached = true;
        }
    }

    /// The overlay was removed from its window by the host.
    pub fn detached_from_window(&self) {
        self.inner.borrow_mut().attached = false;
    }

    /// Measure the content against the space available to the overlay.
    pub fn measure(&self, available: Size) -> Size {
        let (content, debug) = {
            let inner = self.inner.borrow();
            (inner.content.clone(), inner.debug)
        };
        let Some(content) = content else {
            return Size::default();
        };

        let size = content.measure(available);
        if debug {
            tracing::debug!(width = size.width, height = size.height, "Content measured");
        }
        self.inner.borrow_mut().measured = Some(size);
        size
    }

    /// Lay out the content within `bounds`, the overlay's own rect.
    ///
    /// With `wait_for_pre_draw` the first pass is deferred to the host's next
    /// pre-draw hook, using the bounds of the latest request.
    pub fn layout(&self, bounds: Rect) {
        let (action, host) = {
            let mut inner = self.inner.borrow_mut();
            if inner.state == TooltipState::Dismissed {
                return;
            }
            let gate = inner.gate;
            let action = match gate {
                PreDrawGate::Open => LayoutAction::Now,
                PreDrawGate::Closed => {
                    inner.gate = PreDrawGate::Pending(bounds);
                    LayoutAction::Subscribe
                }
                PreDrawGate::Pending(_) => {
                    inner.gate = PreDrawGate::Pending(bounds);
                    LayoutAction::Wait
                }
            };
            (action, inner.host.clone())
        };

        match action {
            LayoutAction::Now => self.perform_layout(bounds),
            LayoutAction::Subscribe => {
                let weak = self.downgrade();
                host.on_pre_draw(Box::new(move || {
                    if let Some(tooltip) = weak.upgrade() {
                        tooltip.on_pre_draw();
                    }
                }));
            }
            LayoutAction::Wait => {}
        }
    }

    fn on_pre_draw(&self) {
        let pending = {
            let mut inner = self.inner.borrow_mut();
            let gate = inner.gate;
            match gate {
                PreDrawGate::Pending(bounds) => {
                    inner.gate = PreDrawGate::Open;
                    Some(bounds)
                }
                _ => None,
            }
        };
        if let Some(bounds) = pending {
            tracing::trace!("Pre-draw reached, running deferred layout");
            self.perform_layout(bounds);
        }
    }

    fn perform_layout(&self, bounds: Rect) {
        let (anchor, container, content, measured) = {
            let inner = self.inner.borrow();
            (inner.anchor.clone(), inner.container.clone(), inner.content.clone(), inner.measured)
        };
        let Some(content) = content else {
            return;
        };

        let content_size = match measured {
            Some(size) => size,
            None => self.measure(bounds.size()),
        };

        // anchor and overlay are measured in the same window space
        let anchor_location = anchor.location_in_window();
        let holder_location = container.location_in_window();
        let offset = anchor_location.offset_from(holder_location);
        let anchor_rect = Rect::from_origin_size(offset, anchor.size());

        let placement = {
            let inner = self.inner.borrow();
            let placement = resolve(&PlacementRequest {
                anchor: anchor_rect,
                side: inner.side,
                content: content_size,
                padding: inner.padding,
                tip: inner.tip,
                bounds,
                auto_adjust: inner.auto_adjust,
            });
            if inner.debug {
                tracing::debug!(
                    tooltip_id = %inner.id,
                    anchor = ?anchor_location,
                    holder = ?holder_location,
                    content = ?placement.content,
                    anchor_point = ?placement.anchor_point,
                    "Tooltip laid out"
                );
            }
            placement
        };

        content.layout(placement.content);

        {
            let mut inner = self.inner.borrow_mut();
            inner.placement = Some(placement);
            inner.has_laid_out = true;
        }

        self.animate_in();
    }

    fn animate_in(&self) {
        let (host, content, spec, side, anchor_point, size) = {
            let mut inner = self.inner.borrow_mut();
            if inner.has_animated_in || !inner.animates_by_default() {
                return;
            }
            if !inner.attached {
                if inner.debug {
                    tracing::debug!(tooltip_id = %inner.id, "Not attached, skipping enter animation");
                }
                return;
            }
            let Some(spec) = inner.animation else {
                return;
            };
            inner.has_animated_in = true;
            let (anchor_point, size) = inner.last_anchor();
            (inner.host.clone(), inner.content.clone(), spec, inner.side, anchor_point, size)
        };

        let reveal_supported = host.supports_circular_reveal();
        let Some(animation) =
            select_animation(&spec, Direction::In, side, anchor_point, size, reveal_supported)
        else {
            return;
        };

        let restore = if spec.hide_content_while_animating { content } else { None };
        if let Some(content) = &restore {
            content.set_children_visible(false);
        }
        let restore = restore.map(|content| Rc::downgrade(&content));

        host.start_animation(
            animation,
            Box::new(move |_end| {
                if let Some(content) = restore.and_then(|content| content.upgrade()) {
                    content.set_children_visible(true);
                }
            }),
        );
    }

    /// Paint the tip. Nothing is drawn before the first layout pass.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let tip = {
            let inner = self.inner.borrow();
            if !inner.has_laid_out {
                return;
            }
            match (inner.tip, inner.placement.and_then(|placement| placement.tip)) {
                (Some(tip), Some(path)) => Some((path, tip.paint())),
                _ => None,
            }
        };
        if let Some((path, paint)) = tip {
            canvas.fill_tip(&path, &paint);
        }
    }

    /// Handle a tap at `point` in overlay coordinates.
    ///
    /// Returns `true` if the tap started a dismissal. Taps on the content are
    /// left to the content, and taps arriving while an exit animation runs are
    /// not consumed.
    pub fn handle_tap(&self, point: Point) -> bool {
        let (cancelable, inside, live, animate) = {
            let inner = self.inner.borrow();
            let inside = inner.placement.is_some_and(|placement| placement.content.contains(point));
            // no dismissal starts while detached or already on the way out
            let live = inner.attached && inner.state == TooltipState::Attached;
            (inner.cancelable, inside, live, inner.animates_by_default())
        };
        if !cancelable || inside || !live {
            return false;
        }
        self.dismiss_animated(animate);
        true
    }

    // ========== Dismissal ==========

    /// Dismiss immediately.
    ///
    /// Removes the content and the overlay, then runs the internal and caller
    /// listeners in that order. Does nothing if already dismissed or detached.
    pub fn dismiss(&self) {
        let (container, id, content, on_dismissed, listener) = {
            let mut inner = self.inner.borrow_mut();
            if inner.state == TooltipState::Dismissed {
                return;
            }
            if !inner.attached {
                if inner.debug {
                    tracing::debug!(tooltip_id = %inner.id, "Tooltip is detached, ignoring dismiss");
                }
                return;
            }
            inner.state = TooltipState::Dismissed;
            inner.attached = false;
            (
                inner.container.clone(),
                inner.id,
                inner.content.take(),
                inner.on_dismissed.take(),
                inner.listener.take(),
            )
        };

        if let Some(content) = content {
            container.remove_overlay(id, content);
        }
        tracing::debug!(tooltip_id = %id, "Tooltip dismissed");

        if let Some(on_dismissed) = on_dismissed {
            on_dismissed();
        }
        if let Some(listener) = listener {
            listener();
        }
    }

    /// Dismiss, running the exit animation when `animate` is set and one is
    /// configured.
    ///
    /// Requests made while an exit animation is running are ignored. The
    /// animation's end, finished or cancelled, completes the dismissal.
    pub fn dismiss_animated(&self, animate: bool) {
        let (host, content, spec, side, anchor_point, size) = {
            let inner = self.inner.borrow();
            match inner.state {
                TooltipState::Dismissed | TooltipState::Dismissing => return,
                TooltipState::Building | TooltipState::Attached => {}
            }
            if !inner.attached {
                if inner.debug {
                    tracing::debug!(tooltip_id = %inner.id, "Tooltip is detached, not animating");
                }
                return;
            }
            let spec = inner.animation.filter(|_| animate);
            let (anchor_point, size) = inner.last_anchor();
            (inner.host.clone(), inner.content.clone(), spec, inner.side, anchor_point, size)
        };

        let Some(spec) = spec else {
            self.dismiss();
            return;
        };

        let reveal_supported = host.supports_circular_reveal();
        let Some(animation) =
            select_animation(&spec, Direction::Out, side, anchor_point, size, reveal_supported)
        else {
            self.dismiss();
            return;
        };

        if spec.hide_content_while_animating {
            if let Some(content) = &content {
                content.set_children_visible(false);
            }
        }

        self.inner.borrow_mut().state = TooltipState::Dismissing;

        let weak = self.downgrade();
        host.start_animation(
            animation,
            Box::new(move |_end| {
                if let Some(tooltip) = weak.upgrade() {
                    tooltip.dismiss();
                }
            }),
        );
    }
}

impl std::fmt::Debug for Tooltip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Tooltip")
            .field("id", &inner.id)
            .field("side", &inner.side)
            .field("state", &inner.state)
            .field("attached", &inner.attached)
            .finish_non_exhaustive()
    }
}
