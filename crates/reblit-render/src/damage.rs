#![forbid(unsafe_code)]

//! Bounded dirty-rectangle slots.
//!
//! A [`DamageList`] holds the pending redraw regions for one viewport in a
//! fixed number of slots. Insertion merges rather than coalesces: a new
//! rectangle is unioned into the *first* slot it overlaps and scanning
//! stops there. That can leave two slots whose union would be smaller than
//! the pair, which is fine — the cost is a little over-rendering, never a
//! missed region.
//!
//! When every slot is taken, the incoming rectangle is unioned into the
//! last slot. Precision degrades to a coarser repaint; boundedness holds.
//! Running out of slots is an expected, rare state, not an error.

use reblit_core::geometry::Rect;
use smallvec::SmallVec;

#[cfg(feature = "tracing")]
use tracing::trace;

/// Slot count observed across the original platform ports.
pub const DEFAULT_SLOTS: usize = 8;

/// Pending redraw regions for one viewport.
///
/// Owned exclusively by one coordinator; rectangles are in viewport
/// coordinates. Entries never overlap pairwise after the merge rule has
/// fired for them, but the single-merge policy does not re-scan, so later
/// slots are left untouched when an earlier one absorbs the insert.
#[derive(Debug, Clone)]
pub struct DamageList {
    slots: SmallVec<[Rect; DEFAULT_SLOTS]>,
    capacity: usize,
}

impl DamageList {
    /// Create a list with [`DEFAULT_SLOTS`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_SLOTS)
    }

    /// Create a list with a custom slot count.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; a zero-slot list could not record any
    /// damage and every redraw would be silently lost.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "DamageList needs at least one slot");
        Self {
            slots: SmallVec::new(),
            capacity,
        }
    }

    /// Record `rect` as needing a repaint.
    ///
    /// Degenerate rectangles are dropped. A rectangle already covered by an
    /// existing slot is a no-op; one overlapping an existing slot is merged
    /// into it; otherwise it takes a fresh slot, or coarsens the last slot
    /// when none remain.
    pub fn insert(&mut self, rect: Rect) {
        if rect.is_empty() {
            return;
        }

        for slot in self.slots.iter_mut() {
            if slot.contains(rect) {
                return;
            }
            if slot.intersects(rect) {
                *slot = slot.union(rect);
                return;
            }
        }

        if self.slots.len() < self.capacity {
            self.slots.push(rect);
        } else {
            // Out of slots: merge into the last one instead of dropping
            // the damage. Coarse, but correctness over precision.
            #[cfg(feature = "tracing")]
            trace!(?rect, capacity = self.capacity, "damage slots full, coarsening last");
            if let Some(last) = self.slots.last_mut() {
                *last = last.union(rect);
            }
        }
    }

    /// Drain the pending rectangles in insertion order, leaving the list
    /// empty.
    ///
    /// The iterator is finite and not restartable; an immediate second
    /// `drain()` yields nothing.
    pub fn drain(&mut self) -> smallvec::Drain<'_, [Rect; DEFAULT_SLOTS]> {
        self.slots.drain(..)
    }

    /// Discard all pending rectangles.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// The fixed slot count.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// View the pending rectangles without draining them.
    #[inline]
    pub fn as_slice(&self) -> &[Rect] {
        &self.slots
    }
}

impl Default for DamageList {
    fn default() -> Self {
        Self::new()
    }
}
