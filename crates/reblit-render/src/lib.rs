#![forbid(unsafe_code)]

//! Redraw kernel: damage slots, scroll plans, and viewport coordination.
//!
//! # Role in Reblit
//! `reblit-render` decides which screen regions are stale, whether a scroll
//! can be satisfied by panning already-rendered pixels, and the exact order
//! of blit / render / present calls issued against a platform
//! [`Surface`](reblit_core::surface::Surface).
//!
//! # Primary responsibilities
//! - **DamageList**: bounded dirty-rectangle slots with merge-on-overlap.
//! - **ScrollState**: clamped, accumulated scroll requests and blit plans.
//! - **Viewport**: one coordinator per tab/frame/window; the `tick()` pass.
//! - **ViewportRegistry**: arena of viewports with stable generational
//!   handles and focus tracking.
//! - **RecordingSurface**: a spy surface for deterministic tests.
//!
//! # How it fits in the system
//! The embedding event loop forwards content-change and scroll events to a
//! [`Viewport`] and calls [`Viewport::tick`] once per poll cycle with its
//! platform surface. Everything here is single-threaded and non-blocking:
//! blocking on window-system events is the event loop's job.

pub mod damage;
pub mod headless;
pub mod registry;
pub mod scroll;
pub mod viewport;

pub use damage::DamageList;
pub use headless::RecordingSurface;
pub use registry::{ViewportId, ViewportRegistry};
pub use scroll::{BlitOp, ScrollPlan, ScrollState};
pub use viewport::{PendingWork, Viewport};
