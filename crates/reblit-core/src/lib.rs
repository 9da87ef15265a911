#![forbid(unsafe_code)]

//! Core: geometry, the platform surface seam, and logging plumbing.
//!
//! # Role in Reblit
//! `reblit-core` holds the leaf types every other crate agrees on. It has no
//! opinion about scheduling or merging policy; that lives in `reblit-render`.
//!
//! # Primary responsibilities
//! - **Rect/Point/Size/Delta**: integer geometry with normalizing
//!   constructors and clipping.
//! - **Surface**: the three-method seam a platform implements so the
//!   coordinator can pan, re-render, and present damaged regions.
//! - **logging**: feature-gated `tracing` re-exports and subscriber setup.
//!
//! # How it fits in the system
//! Embedders implement [`surface::Surface`] over their native blitter
//! (framebuffer memmove, GDK draw queue, a test spy). `reblit-render` drives
//! that surface from damage and scroll state expressed in these types.

pub mod geometry;
pub mod logging;
pub mod surface;

pub use geometry::{Delta, Point, Rect, Size};
pub use surface::{Surface, SurfaceOp};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
