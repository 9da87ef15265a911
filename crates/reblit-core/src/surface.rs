#![forbid(unsafe_code)]

//! The platform surface seam.
//!
//! A [`Surface`] is everything the redraw coordinator knows about the world:
//! it can pan already-presented pixels, ask the external content renderer to
//! repaint a rectangle of the backing buffer, and push a backing-buffer
//! rectangle to the screen. Each platform supplies one implementation over
//! its native blitter; the coordinator supplies the policy of when and with
//! which rectangles these are called.
//!
//! Surfaces are infallible by contract. Real window-system errors are the
//! platform layer's problem to report; from the coordinator's point of view
//! a surface call always "happens".

use crate::geometry::{Point, Rect};

/// Platform operations the coordinator issues during one pass.
///
/// All rectangles are in viewport coordinates and pre-clipped to the
/// viewport bounds. Implementations may clip again; the original platform
/// renderers all did.
pub trait Surface {
    /// Block-copy `src` (already-presented pixels) so its top-left lands at
    /// `dst`. Used to satisfy small scrolls without re-rendering.
    fn blit(&mut self, src: Rect, dst: Point);

    /// Ask the external content renderer to repaint `rect` into the backing
    /// buffer.
    fn render_content(&mut self, rect: Rect);

    /// Push `rect` of the backing buffer to the screen.
    fn present(&mut self, rect: Rect);
}

/// Value-level mirror of one [`Surface`] call.
///
/// Used by the recording spy in `reblit-render` and by trace logs; carries
/// exactly the arguments the trait method received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceOp {
    Blit { src: Rect, dst: Point },
    Render(Rect),
    Present(Rect),
}

impl SurfaceOp {
    /// The damage rectangle this operation touches, for logging.
    pub fn rect(&self) -> Rect {
        match *self {
            SurfaceOp::Blit { src, .. } => src,
            SurfaceOp::Render(rect) | SurfaceOp::Present(rect) => rect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_op_rect_extraction() {
        let r = Rect::new(1, 2, 3, 4);
        assert_eq!(SurfaceOp::Render(r).rect(), r);
        assert_eq!(SurfaceOp::Present(r).rect(), r);
        assert_eq!(
            SurfaceOp::Blit {
                src: r,
                dst: Point::ZERO
            }
            .rect(),
            r
        );
    }
}
