#![forbid(unsafe_code)]

//! Recording surface for tests without a real display.
//!
//! `RecordingSurface` implements [`Surface`] by logging every call in
//! order. Tests drive a [`Viewport`](crate::viewport::Viewport) against it
//! and assert on the exact operation sequence — which is the whole public
//! behavior of the coordinator.
//!
//! # Example
//!
//! ```
//! use reblit_core::geometry::{Rect, Size};
//! use reblit_render::headless::RecordingSurface;
//! use reblit_render::viewport::Viewport;
//!
//! let mut vp = Viewport::new(Size::new(80, 24));
//! vp.set_content(Size::new(80, 100));
//!
//! let mut surface = RecordingSurface::new();
//! assert!(vp.tick(&mut surface));
//! surface.assert_rendered_exactly(&[Rect::new(0, 0, 80, 24)]);
//! ```

use reblit_core::geometry::{Point, Rect};
use reblit_core::surface::{Surface, SurfaceOp};

/// Spy [`Surface`] recording every call in invocation order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded operations in call order.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// The blit calls, in order.
    pub fn blits(&self) -> Vec<(Rect, Point)> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                SurfaceOp::Blit { src, dst } => Some((src, dst)),
                _ => None,
            })
            .collect()
    }

    /// The rectangles passed to `render_content`, in order.
    pub fn rendered(&self) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                SurfaceOp::Render(rect) => Some(rect),
                _ => None,
            })
            .collect()
    }

    /// The rectangles passed to `present`, in order.
    pub fn presented(&self) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                SurfaceOp::Present(rect) => Some(rect),
                _ => None,
            })
            .collect()
    }

    /// True when nothing has been recorded since the last `clear`.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Assert that no surface call was made.
    ///
    /// # Panics
    ///
    /// Panics with the recorded operations when any call happened.
    pub fn assert_no_calls(&self) {
        assert!(
            self.ops.is_empty(),
            "expected no surface calls, got {:?}",
            self.ops
        );
    }

    /// Assert that exactly `expected` was rendered, in order.
    ///
    /// # Panics
    ///
    /// Panics with both sequences on mismatch.
    pub fn assert_rendered_exactly(&self, expected: &[Rect]) {
        let rendered = self.rendered();
        assert_eq!(
            rendered, expected,
            "rendered rectangles differ from expectation"
        );
    }
}

impl Surface for RecordingSurface {
    fn blit(&mut self, src: Rect, dst: Point) {
        self.ops.push(SurfaceOp::Blit { src, dst });
    }

    fn render_content(&mut self, rect: Rect) {
        self.ops.push(SurfaceOp::Render(rect));
    }

    fn present(&mut self, rect: Rect) {
        self.ops.push(SurfaceOp::Present(rect));
    }
}
