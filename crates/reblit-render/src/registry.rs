#![forbid(unsafe_code)]

//! Arena of viewports with stable handles.
//!
//! The original platform ports kept their windows in hand-rolled linked
//! lists behind process-wide globals (`window_list`, `input_window`), with
//! the raw-pointer bookkeeping that entails. The registry replaces that:
//! a dense slot vector, a free list, and generational handles. A handle to
//! a closed viewport goes stale instead of dangling, close is O(1), and
//! focus is registry state rather than a global.

use reblit_core::geometry::Size;
use reblit_core::surface::Surface;

use crate::viewport::Viewport;

/// Stable handle to a viewport in a [`ViewportRegistry`].
///
/// Handles survive arbitrary create/close traffic on other slots. A handle
/// whose viewport has been closed compares unequal to any live handle and
/// resolves to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewportId {
    index: u32,
    generation: u32,
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    viewport: Option<Viewport>,
}

/// Owns every viewport of the embedding application.
#[derive(Debug, Default)]
pub struct ViewportRegistry {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
    focus: Option<ViewportId>,
}

impl ViewportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a viewport of the given size and return its handle.
    pub fn create(&mut self, size: Size) -> ViewportId {
        let viewport = Viewport::new(size);
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.viewport = Some(viewport);
            ViewportId {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                viewport: Some(viewport),
            });
            ViewportId {
                index,
                generation: 0,
            }
        }
    }

    /// Close a viewport. Returns `false` when the handle was already stale.
    ///
    /// Closing the focused viewport clears focus.
    pub fn close(&mut self, id: ViewportId) -> bool {
        let Some(slot) = self.slots.get_mut(id.index as usize) else {
            return false;
        };
        if slot.generation != id.generation || slot.viewport.is_none() {
            return false;
        }
        slot.viewport = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.live -= 1;
        if self.focus == Some(id) {
            self.focus = None;
        }
        true
    }

    /// Resolve a handle. Stale handles yield `None`.
    pub fn get(&self, id: ViewportId) -> Option<&Viewport> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.viewport.as_ref()
    }

    /// Resolve a handle mutably. Stale handles yield `None`.
    pub fn get_mut(&mut self, id: ViewportId) -> Option<&mut Viewport> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.viewport.as_mut()
    }

    /// Number of live viewports.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Iterate over live viewports with their handles.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ViewportId, &mut Viewport)> {
        self.slots.iter_mut().enumerate().filter_map(|(i, slot)| {
            let id = ViewportId {
                index: i as u32,
                generation: slot.generation,
            };
            slot.viewport.as_mut().map(|vp| (id, vp))
        })
    }

    /// Give a viewport input focus. Stale handles clear focus instead.
    pub fn set_focus(&mut self, id: ViewportId) {
        self.focus = if self.get(id).is_some() { Some(id) } else { None };
    }

    /// The focused viewport, if any.
    pub fn focus(&self) -> Option<ViewportId> {
        self.focus
    }

    /// Tick every live viewport against one shared surface.
    ///
    /// Returns how many viewports performed work. This is the per-poll
    /// entry point for embedders rendering all viewports onto one display.
    pub fn poll<S: Surface>(&mut self, surface: &mut S) -> usize {
        let mut worked = 0;
        for (_, viewport) in self.iter_mut() {
            if viewport.tick(surface) {
                worked += 1;
            }
        }
        worked
    }
}
