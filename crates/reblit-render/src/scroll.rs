#![forbid(unsafe_code)]

//! Scroll accumulation, clamping, and blit planning.
//!
//! Scrolling is cheap when the viewport can reuse what is already on
//! screen: shift the rendered pixels by the delta and repaint only the
//! strip exposed at the trailing edge. [`ScrollState::resolve`] turns the
//! accumulated request into that plan, or degrades to a full repaint when
//! the delta moves the whole image out of the viewport.
//!
//! A state is *idle* while the accumulated delta is zero and *pending*
//! otherwise. Requests move it to pending; exactly one `resolve()` per
//! coordination pass moves it back to idle. There are no other states.

use reblit_core::geometry::{Delta, Point, Rect, Size};
use smallvec::SmallVec;

#[cfg(feature = "tracing")]
use tracing::trace;

/// One block-copy of already-presented pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlitOp {
    /// Source region, in viewport coordinates.
    pub src: Rect,
    /// Where the source's top-left corner lands.
    pub dst: Point,
}

/// Output of one [`ScrollState::resolve`] pass.
#[derive(Debug, Clone, Default)]
pub struct ScrollPlan {
    /// Block-copies to issue, at most one per axis, in issue order.
    pub blits: SmallVec<[BlitOp; 2]>,
    /// Regions exposed by the pan (or the whole viewport on full repaint).
    pub damage: SmallVec<[Rect; 2]>,
    /// True when the delta exceeded the viewport and panning was pointless.
    pub full_repaint: bool,
    /// The clamped delta actually applied to the offset.
    pub applied: Delta,
}

impl ScrollPlan {
    /// True when the pass moved nothing and exposed nothing.
    pub fn is_noop(&self) -> bool {
        self.blits.is_empty() && self.damage.is_empty() && !self.full_repaint
    }
}

/// Current scroll offset plus the delta accumulated since the last pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    offset: Point,
    requested: Delta,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The applied scroll offset. Always within `[0, max_scroll]` per axis
    /// after a resolve.
    #[inline]
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// The delta accumulated since the last pass.
    #[inline]
    pub fn requested(&self) -> Delta {
        self.requested
    }

    /// True while a resolve is still owed for accumulated requests.
    #[inline]
    pub fn is_pending(&self) -> bool {
        !self.requested.is_zero()
    }

    /// Accumulate a scroll request. Repeated requests before the next pass
    /// add up, saturating at the `i32` extremes.
    pub fn request(&mut self, dx: i32, dy: i32) {
        self.requested += Delta::new(dx, dy);
    }

    /// Clamp the accumulated request so the prospective offset stays within
    /// `[0, max_scroll]` on each axis.
    ///
    /// Called at request time by the coordinator so `is_pending()` reflects
    /// movement that will actually happen; `resolve()` clamps again, so an
    /// unclamped state is still safe.
    pub fn clamp_requested(&mut self, max_scroll: Size) {
        self.requested.dx = clamp_axis(self.requested.dx, self.offset.x, max_scroll.w);
        self.requested.dy = clamp_axis(self.requested.dy, self.offset.y, max_scroll.h);
    }

    /// Drop any accumulated request without applying it.
    pub fn cancel_request(&mut self) {
        self.requested = Delta::ZERO;
    }

    /// Reset the state entirely (content detached).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Force the offset back into `[0, max_scroll]` (content shrank under
    /// us during a reflow).
    pub fn clamp_offset(&mut self, max_scroll: Size) {
        self.offset.x = self.offset.x.max(0).min(max_scroll.w.max(0));
        self.offset.y = self.offset.y.max(0).min(max_scroll.h.max(0));
    }

    /// Resolve the accumulated request into a pan-and-patch plan.
    ///
    /// Clamps the delta, decides pan versus full repaint, applies the delta
    /// to the offset, and returns the state to idle. The caller executes
    /// the plan's blits and merges its damage.
    pub fn resolve(&mut self, viewport: Size, max_scroll: Size) -> ScrollPlan {
        let dx = clamp_axis(self.requested.dx, self.offset.x, max_scroll.w);
        let dy = clamp_axis(self.requested.dy, self.offset.y, max_scroll.h);
        self.requested = Delta::ZERO;

        let mut plan = ScrollPlan::default();
        if dx == 0 && dy == 0 {
            return plan;
        }

        self.offset.x += dx;
        self.offset.y += dy;
        plan.applied = Delta::new(dx, dy);

        if dx.abs() >= viewport.w || dy.abs() >= viewport.h {
            // Nothing on screen survives a pan this large.
            plan.full_repaint = true;
            plan.damage.push(Rect::sized(viewport));
            #[cfg(feature = "tracing")]
            trace!(dx, dy, ?viewport, "scroll exceeds viewport, full repaint");
            return plan;
        }

        if dy > 0 {
            // Content moves up on screen; expose a strip at the bottom.
            plan.blits.push(BlitOp {
                src: Rect::new(0, dy, viewport.w, viewport.h),
                dst: Point::ZERO,
            });
            plan.damage
                .push(Rect::new(0, viewport.h - dy, viewport.w, viewport.h));
        } else if dy < 0 {
            // Content moves down on screen; expose a strip at the top.
            plan.blits.push(BlitOp {
                src: Rect::new(0, 0, viewport.w, viewport.h + dy),
                dst: Point::new(0, -dy),
            });
            plan.damage.push(Rect::new(0, 0, viewport.w, -dy));
        }

        if dx > 0 {
            plan.blits.push(BlitOp {
                src: Rect::new(dx, 0, viewport.w, viewport.h),
                dst: Point::ZERO,
            });
            plan.damage
                .push(Rect::new(viewport.w - dx, 0, viewport.w, viewport.h));
        } else if dx < 0 {
            plan.blits.push(BlitOp {
                src: Rect::new(0, 0, viewport.w + dx, viewport.h),
                dst: Point::new(-dx, 0),
            });
            plan.damage.push(Rect::new(0, 0, -dx, viewport.h));
        }

        #[cfg(feature = "tracing")]
        trace!(
            dx,
            dy,
            blits = plan.blits.len(),
            "scroll resolved as pan-and-patch"
        );
        plan
    }
}

/// Clamp one axis of a delta so `offset + delta` lands in `[0, max]`.
#[inline]
fn clamp_axis(delta: i32, offset: i32, max: i32) -> i32 {
    let max = max.max(0);
    delta.max(-offset).min(max - offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── request accumulation ─────────────────────────────────────────

    #[test]
    fn requests_accumulate_until_resolved() {
        let mut s = ScrollState::new();
        assert!(!s.is_pending());
        s.request(0, 30);
        s.request(0, 30);
        assert!(s.is_pending());
        assert_eq!(s.requested(), Delta::new(0, 60));
    }

    #[test]
    fn extreme_requests_saturate_instead_of_overflowing() {
        let mut s = ScrollState::new();
        s.request(i32::MAX, i32::MAX);
        s.request(i32::MAX, i32::MAX);
        assert_eq!(s.requested(), Delta::new(i32::MAX, i32::MAX));
        let plan = s.resolve(Size::new(800, 600), Size::new(1000, 1400));
        assert!(plan.full_repaint);
        assert_eq!(s.offset(), Point::new(1000, 1400));
        assert!(!s.is_pending());
    }

    #[test]
    fn resolve_returns_to_idle() {
        let mut s = ScrollState::new();
        s.request(10, 20);
        let _ = s.resolve(Size::new(800, 600), Size::new(1000, 1000));
        assert!(!s.is_pending());
        assert_eq!(s.requested(), Delta::ZERO);
    }

    // ── clamping ─────────────────────────────────────────────────────

    #[test]
    fn clamp_blocks_scroll_above_origin() {
        let mut s = ScrollState::new();
        s.request(0, -50);
        let plan = s.resolve(Size::new(800, 600), Size::new(0, 1400));
        assert!(plan.is_noop());
        assert_eq!(s.offset(), Point::ZERO);
    }

    #[test]
    fn clamp_stops_at_max_scroll() {
        let mut s = ScrollState::new();
        s.request(0, 500);
        let _ = s.resolve(Size::new(800, 600), Size::new(0, 1400));
        s.request(0, 2000);
        let _ = s.resolve(Size::new(800, 600), Size::new(0, 1400));
        assert_eq!(s.offset(), Point::new(0, 1400));
    }

    #[test]
    fn clamp_requested_reflects_range() {
        let mut s = ScrollState::new();
        s.request(0, -10);
        s.clamp_requested(Size::new(500, 500));
        assert!(!s.is_pending());
    }

    #[test]
    fn clamp_offset_after_content_shrink() {
        let mut s = ScrollState::new();
        s.request(0, 1000);
        let _ = s.resolve(Size::new(800, 600), Size::new(0, 1400));
        assert_eq!(s.offset().y, 1000);
        s.clamp_offset(Size::new(0, 300));
        assert_eq!(s.offset().y, 300);
    }

    // ── pan plans ────────────────────────────────────────────────────

    #[test]
    fn scroll_down_pans_up_and_exposes_bottom_strip() {
        let mut s = ScrollState::new();
        s.request(0, 50);
        let plan = s.resolve(Size::new(800, 600), Size::new(0, 1400));
        assert!(!plan.full_repaint);
        assert_eq!(plan.applied, Delta::new(0, 50));
        assert_eq!(
            plan.blits.as_slice(),
            &[BlitOp {
                src: Rect::new(0, 50, 800, 600),
                dst: Point::ZERO,
            }]
        );
        assert_eq!(plan.damage.as_slice(), &[Rect::new(0, 550, 800, 600)]);
    }

    #[test]
    fn scroll_up_pans_down_and_exposes_top_strip() {
        let mut s = ScrollState::new();
        s.request(0, 200);
        let _ = s.resolve(Size::new(800, 600), Size::new(0, 1400));
        s.request(0, -50);
        let plan = s.resolve(Size::new(800, 600), Size::new(0, 1400));
        assert_eq!(
            plan.blits.as_slice(),
            &[BlitOp {
                src: Rect::new(0, 0, 800, 550),
                dst: Point::new(0, 50),
            }]
        );
        assert_eq!(plan.damage.as_slice(), &[Rect::new(0, 0, 800, 50)]);
        assert_eq!(s.offset(), Point::new(0, 150));
    }

    #[test]
    fn scroll_right_exposes_right_strip() {
        let mut s = ScrollState::new();
        s.request(30, 0);
        let plan = s.resolve(Size::new(800, 600), Size::new(1000, 0));
        assert_eq!(
            plan.blits.as_slice(),
            &[BlitOp {
                src: Rect::new(30, 0, 800, 600),
                dst: Point::ZERO,
            }]
        );
        assert_eq!(plan.damage.as_slice(), &[Rect::new(770, 0, 800, 600)]);
    }

    #[test]
    fn scroll_left_exposes_left_strip() {
        let mut s = ScrollState::new();
        s.request(100, 0);
        let _ = s.resolve(Size::new(800, 600), Size::new(1000, 0));
        s.request(-40, 0);
        let plan = s.resolve(Size::new(800, 600), Size::new(1000, 0));
        assert_eq!(
            plan.blits.as_slice(),
            &[BlitOp {
                src: Rect::new(0, 0, 760, 600),
                dst: Point::new(40, 0),
            }]
        );
        assert_eq!(plan.damage.as_slice(), &[Rect::new(0, 0, 40, 600)]);
    }

    #[test]
    fn diagonal_scroll_emits_one_blit_per_axis() {
        let mut s = ScrollState::new();
        s.request(20, 30);
        let plan = s.resolve(Size::new(800, 600), Size::new(1000, 1400));
        assert_eq!(plan.blits.len(), 2);
        assert_eq!(plan.damage.len(), 2);
        assert_eq!(s.offset(), Point::new(20, 30));
    }

    // ── full repaint boundary ────────────────────────────────────────

    #[test]
    fn delta_equal_to_viewport_forces_full_repaint() {
        let mut s = ScrollState::new();
        s.request(0, 600);
        let plan = s.resolve(Size::new(800, 600), Size::new(0, 1400));
        assert!(plan.full_repaint);
        assert!(plan.blits.is_empty());
        assert_eq!(plan.damage.as_slice(), &[Rect::new(0, 0, 800, 600)]);
        assert_eq!(s.offset(), Point::new(0, 600));
    }

    #[test]
    fn oversized_delta_still_applies_clamped_offset() {
        let mut s = ScrollState::new();
        s.request(0, 100);
        let _ = s.resolve(Size::new(800, 600), Size::new(0, 1400));
        s.request(0, 700);
        let plan = s.resolve(Size::new(800, 600), Size::new(0, 1400));
        assert!(plan.full_repaint);
        assert_eq!(s.offset(), Point::new(0, 800));
    }

    #[test]
    fn horizontal_overscroll_forces_full_repaint() {
        let mut s = ScrollState::new();
        s.request(800, 0);
        let plan = s.resolve(Size::new(800, 600), Size::new(2000, 0));
        assert!(plan.full_repaint);
        assert!(plan.blits.is_empty());
    }

    #[test]
    fn zero_request_resolves_to_noop() {
        let mut s = ScrollState::new();
        let plan = s.resolve(Size::new(800, 600), Size::new(1000, 1000));
        assert!(plan.is_noop());
        assert_eq!(plan.applied, Delta::ZERO);
    }
}
