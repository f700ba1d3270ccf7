//! Fluent construction of tooltips.
//!
//! ```ignore
//! let tooltip = TooltipBuilder::new(host)
//!     .anchor(button, Side::Bottom)
//!     .container(root)
//!     .content(label)
//!     .padding(8)
//!     .tip(Tip::new(24, 12, Color::WHITE)?)
//!     .animate(AnimationSpec::new(AnimationKind::ScaleAndFade))
//!     .auto_cancel(2000)
//!     .show()?;
//! ```

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use anchortip_core::{AnchorTipError, AnimationSpec, Side, Tip, TooltipStyle};

use crate::host::{AnchorView, ContentView, Host, OverlayContainer, TimerId};
use crate::tooltip::{DismissListener, OverlayConfig, Tooltip};

/// Builder for [`Tooltip`].
///
/// `anchor`, `container` and `content` are required; everything else has a
/// default (see [`TooltipStyle`]).
pub struct TooltipBuilder {
    host: Rc<dyn Host>,
    anchor: Option<Rc<dyn AnchorView>>,
    container: Option<Rc<dyn OverlayContainer>>,
    content: Option<Rc<dyn ContentView>>,
    style: TooltipStyle,
    listener: Option<DismissListener>,
}

/// Auto-cancel timer slot shared by `show()` and the internal listener.
struct AutoCancel {
    host: Rc<dyn Host>,
    timer: Rc<Cell<Option<TimerId>>>,
    delay_ms: u64,
}

impl TooltipBuilder {
    /// Create a builder for tooltips driven by `host`.
    pub fn new(host: Rc<dyn Host>) -> Self {
        Self {
            host,
            anchor: None,
            container: None,
            content: None,
            style: TooltipStyle::default(),
            listener: None,
        }
    }

    /// Anchor the tooltip to `view`, on `side`.
    pub fn anchor(mut self, view: Rc<dyn AnchorView>, side: Side) -> Self {
        self.anchor = Some(view);
        self.style.side = side;
        self
    }

    /// Change the side without changing the anchor.
    pub fn side(mut self, side: Side) -> Self {
        self.style.side = side;
        self
    }

    /// Container the overlay is inserted into.
    pub fn container(mut self, container: Rc<dyn OverlayContainer>) -> Self {
        self.container = Some(container);
        self
    }

    /// View shown inside the tooltip.
    pub fn content(mut self, view: Rc<dyn ContentView>) -> Self {
        self.content = Some(view);
        self
    }

    /// Dismiss when tapping outside the content. Defaults to `true`.
    pub fn cancelable(mut self, cancelable: bool) -> Self {
        self.style.cancelable = cancelable;
        self
    }

    /// Keep the content inside the container. Defaults to `true`.
    pub fn auto_adjust(mut self, auto_adjust: bool) -> Self {
        self.style.auto_adjust = auto_adjust;
        self
    }

    pub fn padding(mut self, padding: i32) -> Self {
        self.style.padding = padding;
        self
    }

    pub fn tip(mut self, tip: Tip) -> Self {
        self.style.tip = Some(tip);
        self
    }

    pub fn animate(mut self, animation: AnimationSpec) -> Self {
        self.style.animation = Some(animation);
        self
    }

    /// Dismiss automatically `millis` after `show()`. `0` disables it.
    pub fn auto_cancel(mut self, millis: u64) -> Self {
        self.style.auto_cancel_ms = millis;
        self
    }

    pub fn with_listener(mut self, listener: impl FnOnce() + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Defer the first layout to the host's next pre-draw hook. Needed when
    /// the anchor sits in a container that is still moving this frame.
    pub fn wait_for_pre_draw(mut self, wait: bool) -> Self {
        self.style.wait_for_pre_draw = wait;
        self
    }

    /// Emit verbose layout traces.
    pub fn debug(mut self, debug: bool) -> Self {
        self.style.debug = debug;
        self
    }

    /// Replace every non-view setting with `style`.
    pub fn style(mut self, style: TooltipStyle) -> Self {
        self.style = style;
        self
    }

    /// Create the tooltip without attaching it.
    ///
    /// Fails if the anchor, container or content is missing.
    pub fn build(self) -> Result<Tooltip, AnchorTipError> {
        self.assemble().map(|(tooltip, _)| tooltip)
    }

    /// Build, attach to the container and arm the auto-cancel timer.
    pub fn show(self) -> Result<Tooltip, AnchorTipError> {
        let (tooltip, auto_cancel) = self.assemble()?;
        tooltip.attach();

        if auto_cancel.delay_ms > 0 {
            let weak = tooltip.downgrade();
            let timer = auto_cancel.host.post_delayed(
                Duration::from_millis(auto_cancel.delay_ms),
                Box::new(move || {
                    if let Some(tooltip) = weak.upgrade() {
                        tracing::debug!(tooltip_id = %tooltip.id(), "Auto-cancel fired");
                        tooltip.dismiss_animated(tooltip.animates_by_default());
                    }
                }),
            );
            auto_cancel.timer.set(Some(timer));
        }

        tracing::info!(
            tooltip_id = %tooltip.id(),
            side = %tooltip.side(),
            auto_cancel_ms = auto_cancel.delay_ms,
            "Tooltip shown"
        );
        Ok(tooltip)
    }

    fn assemble(self) -> Result<(Tooltip, AutoCancel), AnchorTipError> {
        let anchor = self.anchor.ok_or_else(|| AnchorTipError::missing_field("anchor"))?;
        let container = self.container.ok_or_else(|| AnchorTipError::missing_field("container"))?;
        let content = self.content.ok_or_else(|| AnchorTipError::missing_field("content"))?;

        let auto_cancel = AutoCancel {
            host: self.host.clone(),
            timer: Rc::new(Cell::new(None)),
            delay_ms: self.style.auto_cancel_ms,
        };

        // cancels a pending auto-cancel on every dismissal path
        let host = self.host.clone();
        let timer = auto_cancel.timer.clone();
        let on_dismissed: DismissListener = Box::new(move || {
            if let Some(timer) = timer.take() {
                host.cancel_delayed(timer);
            }
        });

        let tooltip = Tooltip::new(OverlayConfig {
            anchor,
            container,
            content,
            host: self.host,
            style: self.style,
            on_dismissed: Some(on_dismissed),
            listener: self.listener,
        });

        Ok((tooltip, auto_cancel))
    }
}
