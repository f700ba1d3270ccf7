//! Anchor-relative placement of the tooltip body and tip.
//!
//! All coordinates are in the overlay's own space: the anchor rect has already
//! been translated by `anchor_window_origin - overlay_window_origin`.

use anchortip_core::{Point, Rect, Side, Size, Tip, TipPath};
use serde::Serialize;

/// Inputs of one layout pass.
#[derive(Debug, Clone, Copy)]
pub struct PlacementRequest {
    /// Anchor bounds in overlay coordinates.
    pub anchor: Rect,
    pub side: Side,
    /// Measured content size.
    pub content: Size,
    pub padding: i32,
    pub tip: Option<Tip>,
    /// Bounds the content is kept within when `auto_adjust` is set.
    pub bounds: Rect,
    pub auto_adjust: bool,
}

/// Result of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// Where the content is laid out.
    pub content: Rect,
    pub tip: Option<TipPath>,
    /// Origin for reveal animations: the tip apex, or the middle of the
    /// content edge facing the anchor.
    pub anchor_point: Point,
}

/// Compute where the content and tip go for `request`.
///
/// The tip is built against the unclamped position and keeps pointing at the
/// anchor even when auto-adjust slides the body sideways, so the tip may end
/// up off-center on the body.
///
/// Without a tip, `anchor_point` is the middle of the content edge facing the
/// anchor on every side. For [`Side::Left`] that is `(right, top + h / 2)`,
/// not the bottom-right corner.
pub fn resolve(request: &PlacementRequest) -> Placement {
    let PlacementRequest { anchor, side, content, padding, tip, bounds, auto_adjust } = *request;
    let (w, h) = (content.width, content.height);
    let tip_depth = tip.map_or(0, |tip| tip.height());
    let gap = padding + tip_depth;

    // centered against the anchor on the secondary axis
    let center_x = anchor.left + (anchor.width() - w) / 2;
    let center_y = anchor.top + (anchor.height() - h) / 2;

    let mut origin = match side {
        Side::Left => Point::new(anchor.left - (w + gap), center_y),
        Side::Right => Point::new(anchor.left + anchor.width() + gap, center_y),
        Side::Top => Point::new(center_x, anchor.top - (h + gap)),
        Side::Bottom => Point::new(center_x, anchor.top + anchor.height() + gap),
    };

    let tip_path = tip.map(|tip| tip_path(side, origin, content, tip));

    if auto_adjust {
        origin = clamp(side, origin, content, bounds, padding);
    }

    let body = Rect::from_origin_size(origin, content);
    let anchor_point = match tip_path {
        Some(path) => path.apex,
        None => edge_midpoint(side, body),
    };

    Placement { content: body, tip: tip_path, anchor_point }
}

/// Triangle for `tip` with its base on the content edge facing the anchor.
fn tip_path(side: Side, origin: Point, content: Size, tip: Tip) -> TipPath {
    let (w, h) = (content.width, content.height);
    let (tw, th) = (tip.width(), tip.height());

    match side {
        Side::Left => {
            let apex = Point::new(origin.x + w + th, origin.y + h / 2);
            TipPath {
                apex,
                base_start: Point::new(apex.x - th, apex.y + tw / 2),
                base_end: Point::new(apex.x - th, apex.y - tw / 2),
            }
        }
        Side::Right => {
            let apex = Point::new(origin.x - th, origin.y + h / 2);
            TipPath {
                apex,
                base_start: Point::new(apex.x + th, apex.y + tw / 2),
                base_end: Point::new(apex.x + th, apex.y - tw / 2),
            }
        }
        Side::Top => {
            let apex = Point::new(origin.x + w / 2, origin.y + h + th);
            TipPath {
                apex,
                base_start: Point::new(apex.x - tw / 2, apex.y - th),
                base_end: Point::new(apex.x + tw / 2, apex.y - th),
            }
        }
        Side::Bottom => {
            let apex = Point::new(origin.x + w / 2, origin.y - th);
            TipPath {
                apex,
                base_start: Point::new(apex.x - tw / 2, apex.y + th),
                base_end: Point::new(apex.x + tw / 2, apex.y + th),
            }
        }
    }
}

/// Slide `origin` along the secondary axis so the content stays in `bounds`.
///
/// The anchor-facing axis is never touched. An overflowing edge is pulled back
/// inside and then `padding` further in.
pub fn clamp(side: Side, origin: Point, content: Size, bounds: Rect, padding: i32) -> Point {
    let mut origin = origin;
    match side {
        Side::Top | Side::Bottom => {
            if origin.x + content.width > bounds.right {
                origin.x = bounds.right - content.width - padding;
            } else if origin.x < bounds.left {
                origin.x = bounds.left + padding;
            }
        }
        Side::Left | Side::Right => {
            if origin.y + content.height > bounds.bottom {
                origin.y = bounds.bottom - content.height - padding;
            } else if origin.y < bounds.top {
                origin.y = bounds.top + padding;
            }
        }
    }
    origin
}

fn edge_midpoint(side: Side, body: Rect) -> Point {
    match side {
        Side::Top => Point::new(body.left + body.width() / 2, body.bottom),
        Side::Bottom => Point::new(body.left + body.width() / 2, body.top),
        Side::Left => Point::new(body.right, body.top + body.height() / 2),
        Side::Right => Point::new(body.left, body.top + body.height() / 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchortip_core::Color;

    const ANCHOR: Rect = Rect::new(100, 200, 150, 220);
    const CONTAINER: Rect = Rect::new(0, 0, 400, 600);
    const CONTENT: Size = Size::new(80, 40);

    fn request(side: Side) -> PlacementRequest {
        PlacementRequest {
            anchor: ANCHOR,
            side,
            content: CONTENT,
            padding: 8,
            tip: None,
            bounds: CONTAINER,
            auto_adjust: false,
        }
    }

    #[test]
    fn test_bottom_placement_example() {
        let placement = resolve(&request(Side::Bottom));
        assert_eq!(placement.content.origin(), Point::new(85, 228));
        assert_eq!(placement.content.size(), CONTENT);
        assert!(placement.tip.is_none());
    }

    #[test]
    fn test_bottom_placement_clamped_to_narrow_container() {
        let mut req = request(Side::Bottom);
        req.bounds = Rect::new(0, 0, 150, 600);
        req.auto_adjust = true;

        let placement = resolve(&req);
        assert_eq!(placement.content.origin(), Point::new(62, 228));
    }

    #[test]
    fn test_every_side_is_adjacent_and_centered() {
        let tip = Tip::new(12, 6, Color::WHITE).unwrap();
        for side in [Side::Left, Side::Top, Side::Right, Side::Bottom] {
            let mut req = request(side);
            req.tip = Some(tip);
            let body = resolve(&req).content;
            let gap = 8 + 6;

            match side {
                Side::Left => {
                    assert_eq!(body.right, ANCHOR.left - gap);
                    assert_eq!(body.top, ANCHOR.top + (20 - 40) / 2);
                }
                Side::Right => {
                    assert_eq!(body.left, ANCHOR.right + gap);
                    assert_eq!(body.top, ANCHOR.top + (20 - 40) / 2);
                }
                Side::Top => {
                    assert_eq!(body.bottom, ANCHOR.top - gap);
                    assert_eq!(body.left, ANCHOR.left + (50 - 80) / 2);
                }
                Side::Bottom => {
                    assert_eq!(body.top, ANCHOR.bottom + gap);
                    assert_eq!(body.left, ANCHOR.left + (50 - 80) / 2);
                }
            }
        }
    }

    #[test]
    fn test_bottom_tip_points_up_from_content_top() {
        let mut req = request(Side::Bottom);
        req.tip = Some(Tip::new(20, 10, Color::WHITE).unwrap());

        let placement = resolve(&req);
        let body = placement.content;
        let tip = placement.tip.unwrap();

        assert_eq!(body.top, 200 + 20 + 8 + 10);
        assert_eq!(tip.apex, Point::new(body.left + 40, body.top - 10));
        assert_eq!(tip.base_start, Point::new(body.left + 30, body.top));
        assert_eq!(tip.base_end, Point::new(body.left + 50, body.top));
        assert!(tip.apex.y < tip.base_start.y);
        assert_eq!(placement.anchor_point, tip.apex);
    }

    #[test]
    fn test_tip_base_faces_anchor_on_each_side() {
        let tip = Tip::new(20, 10, Color::WHITE).unwrap();

        let mut req = request(Side::Top);
        req.tip = Some(tip);
        let placement = resolve(&req);
        let path = placement.tip.unwrap();
        assert_eq!(path.base_start.y, placement.content.bottom);
        assert_eq!(path.apex.y, placement.content.bottom + 10);
        assert_eq!(path.apex, Point::new(125, 192));
        assert_eq!(path.base_start, Point::new(path.apex.x - 10, 182));
        assert_eq!(path.base_end, Point::new(path.apex.x + 10, 182));

        req.side = Side::Left;
        let placement = resolve(&req);
        let path = placement.tip.unwrap();
        assert_eq!(path.base_start.x, placement.content.right);
        assert_eq!(path.apex.x, placement.content.right + 10);
        assert_eq!(path.base_start.y - path.base_end.y, 20);

        req.side = Side::Right;
        let placement = resolve(&req);
        let path = placement.tip.unwrap();
        assert_eq!(path.base_start.x, placement.content.left);
        assert_eq!(path.apex.x, placement.content.left - 10);
        assert_eq!(path.apex, Point::new(158, 210));
        assert_eq!(path.base_start, Point::new(168, 220));
        assert_eq!(path.base_end, Point::new(168, 200));
    }

    #[test]
    fn test_clamp_keeps_tip_at_original_anchor() {
        let mut req = request(Side::Bottom);
        req.tip = Some(Tip::new(20, 10, Color::WHITE).unwrap());
        req.bounds = Rect::new(0, 0, 150, 600);
        req.auto_adjust = true;

        let placement = resolve(&req);
        let tip = placement.tip.unwrap();
        // unclamped left is 85, so the apex stays at 85 + 40
        assert_eq!(tip.apex.x, 125);
        assert_eq!(placement.content.left, 62);
        assert_ne!(tip.apex.x, placement.content.left + 40);
    }

    #[test]
    fn test_clamp_moves_only_secondary_axis() {
        let bounds = Rect::new(0, 0, 100, 100);

        let moved = clamp(Side::Bottom, Point::new(-30, 500), Size::new(40, 40), bounds, 4);
        assert_eq!(moved, Point::new(4, 500));

        let moved = clamp(Side::Top, Point::new(90, -50), Size::new(40, 40), bounds, 4);
        assert_eq!(moved, Point::new(56, -50));

        let moved = clamp(Side::Right, Point::new(-200, 90), Size::new(40, 40), bounds, 4);
        assert_eq!(moved, Point::new(-200, 56));

        let moved = clamp(Side::Left, Point::new(300, -10), Size::new(40, 40), bounds, 4);
        assert_eq!(moved, Point::new(300, 4));
    }

    #[test]
    fn test_clamp_leaves_fitting_content_alone() {
        let origin = Point::new(10, 10);
        let moved = clamp(Side::Top, origin, Size::new(40, 40), Rect::new(0, 0, 100, 100), 8);
        assert_eq!(moved, origin);
    }

    #[test]
    fn test_anchor_point_without_tip() {
        let body = resolve(&request(Side::Top)).content;
        let point = resolve(&request(Side::Top)).anchor_point;
        assert_eq!(point, Point::new(body.left + 40, body.bottom));

        let placement = resolve(&request(Side::Left));
        assert_eq!(
            placement.anchor_point,
            Point::new(placement.content.right, placement.content.top + 20)
        );

        let placement = resolve(&request(Side::Right));
        assert_eq!(
            placement.anchor_point,
            Point::new(placement.content.left, placement.content.top + 20)
        );
    }

    #[test]
    fn test_anchor_point_follows_clamped_body_without_tip() {
        let mut req = request(Side::Bottom);
        req.bounds = Rect::new(0, 0, 150, 600);
        req.auto_adjust = true;

        let placement = resolve(&req);
        assert_eq!(placement.anchor_point, Point::new(62 + 40, 228));
    }

    #[test]
    fn test_zero_sized_anchor_is_finite() {
        let mut req = request(Side::Right);
        req.anchor = Rect::new(50, 50, 50, 50);
        req.auto_adjust = true;

        let placement = resolve(&req);
        assert_eq!(placement.content.left, 58);
        assert_eq!(placement.content.top, 50 - 20);
        assert_eq!(placement.content.size(), CONTENT);
    }

    #[test]
    fn test_negative_padding_overlaps_anchor() {
        let mut req = request(Side::Bottom);
        req.padding = -5;

        let body = resolve(&req).content;
        assert_eq!(body.top, ANCHOR.bottom - 5);
    }
}
