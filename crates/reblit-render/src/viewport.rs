#![forbid(unsafe_code)]

//! Per-viewport redraw coordination.
//!
//! A [`Viewport`] is one on-screen rectangle showing externally rendered
//! content — a tab, a frame, a top-level window. It owns the damage slots
//! and scroll state for that rectangle and, once per poll cycle, turns them
//! into an ordered sequence of surface calls: blits first, then one
//! render + present per surviving damage rectangle.
//!
//! The coordinator never touches pixels. It holds the content's extent, not
//! the content: attach/detach is a size update, and a detached viewport is
//! a normal, frequent state in which `tick()` does nothing. Absence of
//! content is not an error.
//!
//! Everything here is single-threaded and poll-driven; `tick()` never
//! blocks and must not be re-entered.

use bitflags::bitflags;
use reblit_core::geometry::{Point, Rect, Size};
use reblit_core::surface::Surface;

#[cfg(feature = "tracing")]
use tracing::trace;

use crate::damage::DamageList;
use crate::scroll::ScrollState;

bitflags! {
    /// Work queued for the next coordination pass.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PendingWork: u8 {
        /// Damage slots hold rectangles to re-render.
        const DAMAGE = 1 << 0;
        /// A clamped, nonzero scroll request awaits resolution.
        const SCROLL = 1 << 1;
        /// The viewport was resized and the embedder has not yet reflowed
        /// the content; redraws are suppressed until it reports back.
        const REFORMAT = 1 << 2;
    }
}

/// Redraw coordinator for one viewport.
#[derive(Debug, Clone)]
pub struct Viewport {
    size: Size,
    content: Option<Size>,
    damage: DamageList,
    scroll: ScrollState,
    pending: PendingWork,
}

impl Viewport {
    /// Create a coordinator for a viewport of `size`, with no content
    /// attached.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            content: None,
            damage: DamageList::new(),
            scroll: ScrollState::new(),
            pending: PendingWork::empty(),
        }
    }

    /// Viewport extent on screen.
    #[inline]
    pub fn viewport_size(&self) -> Size {
        self.size
    }

    /// Extent of the attached content, if any.
    #[inline]
    pub fn content_size(&self) -> Option<Size> {
        self.content
    }

    /// Current scroll offset.
    #[inline]
    pub fn offset(&self) -> Point {
        self.scroll.offset()
    }

    /// Per-axis scroll range: content extent minus viewport extent,
    /// clamped to zero. Zero without content.
    pub fn max_scroll(&self) -> Size {
        match self.content {
            Some(content) => Size::new(content.w - self.size.w, content.h - self.size.h),
            None => Size::ZERO,
        }
    }

    /// The viewport rectangle at the origin.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::sized(self.size)
    }

    /// Pending-work flags, mostly useful for embedder diagnostics.
    #[inline]
    pub fn pending(&self) -> PendingWork {
        self.pending
    }

    /// Attach content of the given extent, replacing any previous content.
    ///
    /// Whatever was on screen is stale now; the whole viewport is damaged
    /// and the scroll offset is pulled back into the new range.
    pub fn set_content(&mut self, content: Size) {
        self.content = Some(content);
        self.scroll.cancel_request();
        self.scroll.clamp_offset(self.max_scroll());
        self.damage.clear();
        self.damage.insert(self.bounds());
        self.pending.remove(PendingWork::SCROLL);
        self.pending.insert(PendingWork::DAMAGE);
    }

    /// Detach the content (empty tab). Drops all pending work and resets
    /// the scroll state.
    pub fn clear_content(&mut self) {
        self.content = None;
        self.damage.clear();
        self.scroll.reset();
        self.pending = PendingWork::empty();
    }

    /// The embedder reflowed the content to a new extent after a resize.
    ///
    /// Lifts the reformat suppression and repaints everything.
    pub fn reformat_complete(&mut self, content: Size) {
        self.content = Some(content);
        self.scroll.clamp_offset(self.max_scroll());
        self.pending.remove(PendingWork::REFORMAT);
        self.damage.insert(self.bounds());
        self.pending.insert(PendingWork::DAMAGE);
    }

    /// The viewport rectangle changed size.
    ///
    /// With content attached, redraws are suppressed until
    /// [`reformat_complete`](Self::reformat_complete) — repainting against
    /// a stale layout would only flicker. Without content there is nothing
    /// to reflow.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
        if self.content.is_some() {
            self.pending.insert(PendingWork::REFORMAT);
        }
    }

    /// Merge an externally reported stale region into the damage slots.
    ///
    /// The rectangle is clipped to the viewport first; a clip that leaves
    /// nothing is a no-op.
    pub fn notify_content_changed(&mut self, rect: Rect) {
        let clipped = rect.intersection(self.bounds());
        if clipped.is_empty() {
            return;
        }
        self.damage.insert(clipped);
        self.pending.insert(PendingWork::DAMAGE);
        #[cfg(feature = "tracing")]
        trace!(%clipped, slots = self.damage.len(), "content damage queued");
    }

    /// Accumulate a scroll request for the next pass.
    ///
    /// Ignored without content, and per axis without scroll range. The
    /// request is clamped immediately, so a request that cannot move the
    /// offset (already at an edge) queues no work.
    pub fn request_scroll(&mut self, dx: i32, dy: i32) {
        if self.content.is_none() {
            return;
        }
        let max = self.max_scroll();
        let dx = if max.w > 0 { dx } else { 0 };
        let dy = if max.h > 0 { dy } else { 0 };
        if dx == 0 && dy == 0 {
            return;
        }
        self.scroll.request(dx, dy);
        self.scroll.clamp_requested(max);
        if self.scroll.is_pending() {
            self.pending.insert(PendingWork::SCROLL);
        }
    }

    /// True when the next `tick()` would issue surface calls.
    ///
    /// False without content and while a reformat is outstanding.
    pub fn redraw_required(&self) -> bool {
        if self.content.is_none() {
            return false;
        }
        if self.pending.contains(PendingWork::REFORMAT) {
            return false;
        }
        !self.damage.is_empty() || self.scroll.is_pending()
    }

    /// Run one coordination pass against `surface`.
    ///
    /// Resolves any pending scroll into blits plus exposed-strip damage,
    /// then drains the damage slots: each rectangle is clipped to the
    /// viewport, empty clips are dropped, and the survivors get one
    /// `render_content` followed by one `present`. Returns `true` iff any
    /// surface call was made.
    pub fn tick<S: Surface>(&mut self, surface: &mut S) -> bool {
        if !self.redraw_required() {
            return false;
        }

        let mut did_work = false;

        if self.scroll.is_pending() {
            let plan = self.scroll.resolve(self.size, self.max_scroll());
            for blit in &plan.blits {
                surface.blit(blit.src, blit.dst);
                did_work = true;
            }
            for &exposed in &plan.damage {
                self.damage.insert(exposed);
            }
            #[cfg(feature = "tracing")]
            trace!(
                applied = ?plan.applied,
                full_repaint = plan.full_repaint,
                "scroll pass"
            );
        }
        self.pending.remove(PendingWork::SCROLL);

        let bounds = self.bounds();
        for rect in self.damage.drain() {
            let clipped = rect.intersection(bounds);
            if clipped.is_empty() {
                continue;
            }
            surface.render_content(clipped);
            surface.present(clipped);
            did_work = true;
        }
        self.pending.remove(PendingWork::DAMAGE);

        did_work
    }
}
