//! In-memory host used by the unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use anchortip_core::{Point, Rect, Size, TipPaint, TipPath};

use crate::animation::Animation;
use crate::host::{
    AnchorView, AnimationEnd, Canvas, ContentView, Host, OverlayContainer, TimerId, TooltipId,
};

type Timer = (TimerId, Duration, Box<dyn FnOnce()>);

/// Host with a manual clock. Nothing happens until the test drives it.
pub(crate) struct FakeHost {
    now: Cell<Duration>,
    next_timer: Cell<u64>,
    timers: RefCell<Vec<Timer>>,
    pre_draw: RefCell<Vec<Box<dyn FnOnce()>>>,
    running: RefCell<Vec<Box<dyn FnOnce(AnimationEnd)>>>,
    started: RefCell<Vec<Animation>>,
    reveal_supported: Cell<bool>,
}

impl FakeHost {
    pub(crate) fn new() -> Self {
        Self {
            now: Cell::new(Duration::ZERO),
            next_timer: Cell::new(1),
            timers: RefCell::new(Vec::new()),
            pre_draw: RefCell::new(Vec::new()),
            running: RefCell::new(Vec::new()),
            started: RefCell::new(Vec::new()),
            reveal_supported: Cell::new(true),
        }
    }

    pub(crate) fn set_reveal_supported(&self, supported: bool) {
        self.reveal_supported.set(supported);
    }

    /// Move the clock forward, firing due timers in deadline order.
    pub(crate) fn advance(&self, by: Duration) {
        let now = self.now.get() + by;
        self.now.set(now);

        loop {
            let due = {
                let mut timers = self.timers.borrow_mut();
                let next = timers
                    .iter()
                    .enumerate()
                    .filter(|(_, (_, deadline, _))| *deadline <= now)
                    .min_by_key(|(_, (_, deadline, _))| *deadline)
                    .map(|(index, _)| index);
                next.map(|index| timers.remove(index))
            };
            match due {
                Some((_, _, callback)) => callback(),
                None => break,
            }
        }
    }

    pub(crate) fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    pub(crate) fn fire_pre_draw(&self) {
        let callbacks = std::mem::take(&mut *self.pre_draw.borrow_mut());
        for callback in callbacks {
            callback();
        }
    }

    pub(crate) fn pending_pre_draw(&self) -> usize {
        self.pre_draw.borrow().len()
    }

    /// End every running animation with `end`.
    pub(crate) fn finish_animations(&self, end: AnimationEnd) {
        let callbacks = std::mem::take(&mut *self.running.borrow_mut());
        for callback in callbacks {
            callback(end);
        }
    }

    pub(crate) fn running_animations(&self) -> usize {
        self.running.borrow().len()
    }

    pub(crate) fn started_animations(&self) -> Vec<Animation> {
        self.started.borrow().clone()
    }
}

impl Host for FakeHost {
    fn post_delayed(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId {
        let id = TimerId(self.next_timer.get());
        self.next_timer.set(id.0 + 1);
        self.timers.borrow_mut().push((id, self.now.get() + delay, callback));
        id
    }

    fn cancel_delayed(&self, timer: TimerId) {
        self.timers.borrow_mut().retain(|(id, _, _)| *id != timer);
    }

    fn on_pre_draw(&self, callback: Box<dyn FnOnce()>) {
        self.pre_draw.borrow_mut().push(callback);
    }

    fn supports_circular_reveal(&self) -> bool {
        self.reveal_supported.get()
    }

    fn start_animation(&self, animation: Animation, on_end: Box<dyn FnOnce(AnimationEnd)>) {
        self.started.borrow_mut().push(animation);
        self.running.borrow_mut().push(on_end);
    }
}

pub(crate) struct FakeAnchor {
    location: Point,
    size: Size,
}

impl FakeAnchor {
    pub(crate) fn new(location: Point, size: Size) -> Self {
        Self { location, size }
    }
}

impl AnchorView for FakeAnchor {
    fn location_in_window(&self) -> Point {
        self.location
    }

    fn size(&self) -> Size {
        self.size
    }
}

/// Content with a fixed measured size that records its last frame.
pub(crate) struct FakeContent {
    size: Size,
    frame: Cell<Option<Rect>>,
    children_visible: Cell<bool>,
}

impl FakeContent {
    pub(crate) fn new(size: Size) -> Self {
        Self { size, frame: Cell::new(None), children_visible: Cell::new(true) }
    }

    pub(crate) fn frame(&self) -> Option<Rect> {
        self.frame.get()
    }

    pub(crate) fn children_visible(&self) -> bool {
        self.children_visible.get()
    }
}

impl ContentView for FakeContent {
    fn measure(&self, _available: Size) -> Size {
        self.size
    }

    fn layout(&self, frame: Rect) {
        self.frame.set(Some(frame));
    }

    fn set_children_visible(&self, visible: bool) {
        self.children_visible.set(visible);
    }
}

/// Container that keeps each overlay's content, like a real view group would.
pub(crate) struct FakeContainer {
    location: Point,
    overlays: RefCell<Vec<(TooltipId, Rc<dyn ContentView>)>>,
}

impl FakeContainer {
    pub(crate) fn at(location: Point) -> Self {
        Self { location, overlays: RefCell::new(Vec::new()) }
    }

    pub(crate) fn overlays(&self) -> Vec<TooltipId> {
        self.overlays.borrow().iter().map(|(id, _)| *id).collect()
    }

    /// The child view inserted with overlay `id`.
    pub(crate) fn content_of(&self, id: TooltipId) -> Option<Rc<dyn ContentView>> {
        self.overlays
            .borrow()
            .iter()
            .find(|(overlay, _)| *overlay == id)
            .map(|(_, content)| content.clone())
    }
}

impl OverlayContainer for FakeContainer {
    fn location_in_window(&self) -> Point {
        self.location
    }

    fn add_overlay(&self, id: TooltipId, content: Rc<dyn ContentView>) {
        self.overlays.borrow_mut().push((id, content));
    }

    fn remove_overlay(&self, id: TooltipId, content: Rc<dyn ContentView>) {
        self.overlays
            .borrow_mut()
            .retain(|(overlay, child)| *overlay != id || !Rc::ptr_eq(child, &content));
    }
}

#[derive(Default)]
pub(crate) struct FakeCanvas {
    pub(crate) tips: Vec<(TipPath, TipPaint)>,
}

impl Canvas for FakeCanvas {
    fn fill_tip(&mut self, path: &TipPath, paint: &TipPaint) {
        self.tips.push((*path, *paint));
    }
}
