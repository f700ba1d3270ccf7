//! A host with no window: views are fixed rectangles and animations end as
//! soon as they start.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use anchortip_core::{AnchorTipError, Point, Rect, Size};
use anchortip_ui::{
    AnchorView, Animation, AnimationEnd, ContentView, Host, OverlayContainer, Placement, TimerId,
    TooltipBuilder, TooltipId,
};
use serde::Serialize;

use crate::scenario::Scenario;

/// What the preview prints.
#[derive(Debug, Serialize)]
pub struct Report {
    pub tooltip_id: TooltipId,
    pub placement: Placement,
    pub enter: Option<Animation>,
    pub exit: Option<Animation>,
    pub dismissed: bool,
}

#[derive(Default)]
pub struct HeadlessHost {
    next_timer: RefCell<u64>,
    pre_draw: RefCell<Vec<Box<dyn FnOnce()>>>,
    started: RefCell<Vec<Animation>>,
}

impl HeadlessHost {
    /// Run every pending pre-draw hook, as if a frame were about to be drawn.
    pub fn draw_frame(&self) {
        let callbacks = std::mem::take(&mut *self.pre_draw.borrow_mut());
        for callback in callbacks {
            callback();
        }
    }

    pub fn take_started(&self) -> Vec<Animation> {
        std::mem::take(&mut *self.started.borrow_mut())
    }
}

impl Host for HeadlessHost {
    fn post_delayed(&self, delay: Duration, _callback: Box<dyn FnOnce()>) -> TimerId {
        // no clock: timers never fire
        let mut next = self.next_timer.borrow_mut();
        *next += 1;
        tracing::trace!(timer = *next, delay_ms = delay.as_millis() as u64, "Timer dropped");
        TimerId(*next)
    }

    fn cancel_delayed(&self, _timer: TimerId) {}

    fn on_pre_draw(&self, callback: Box<dyn FnOnce()>) {
        self.pre_draw.borrow_mut().push(callback);
    }

    fn supports_circular_reveal(&self) -> bool {
        true
    }

    fn start_animation(&self, animation: Animation, on_end: Box<dyn FnOnce(AnimationEnd)>) {
        self.started.borrow_mut().push(animation);
        on_end(AnimationEnd::Finished);
    }
}

struct FixedView {
    bounds: Rect,
}

impl AnchorView for FixedView {
    fn location_in_window(&self) -> Point {
        self.bounds.origin()
    }

    fn size(&self) -> Size {
        self.bounds.size()
    }
}

impl OverlayContainer for FixedView {
    fn location_in_window(&self) -> Point {
        self.bounds.origin()
    }

    fn add_overlay(&self, id: TooltipId, _content: Rc<dyn ContentView>) {
        tracing::trace!(tooltip_id = %id, "Overlay added");
    }

    fn remove_overlay(&self, id: TooltipId, _content: Rc<dyn ContentView>) {
        tracing::trace!(tooltip_id = %id, "Overlay removed");
    }
}

struct FixedContent {
    size: Size,
}

impl ContentView for FixedContent {
    fn measure(&self, _available: Size) -> Size {
        self.size
    }

    fn layout(&self, _frame: Rect) {}

    fn set_children_visible(&self, _visible: bool) {}
}

/// Show, lay out and dismiss the scenario's tooltip, recording what happened.
pub fn preview(scenario: &Scenario) -> Result<Report, AnchorTipError> {
    scenario.validate()?;
    let host = Rc::new(HeadlessHost::default());
    let container = scenario.container;
    let overlay_bounds = Rect::from_origin_size(Point::default(), container.size());

    let tooltip = TooltipBuilder::new(host.clone())
        .style(scenario.style.clone())
        .anchor(Rc::new(FixedView { bounds: scenario.anchor }), scenario.style.side)
        .container(Rc::new(FixedView { bounds: container }))
        .content(Rc::new(FixedContent { size: scenario.content }))
        .show()?;

    tooltip.measure(overlay_bounds.size());
    tooltip.layout(overlay_bounds);
    host.draw_frame();

    let placement = tooltip
        .placement()
        .ok_or_else(|| AnchorTipError::config("tooltip was never laid out"))?;
    let enter = host.take_started().pop();

    tooltip.dismiss_animated(tooltip.animates_by_default());
    let exit = host.take_started().pop();

    Ok(Report {
        tooltip_id: tooltip.id(),
        placement,
        enter,
        exit,
        dismissed: tooltip.is_dismissed(),
    })
}
