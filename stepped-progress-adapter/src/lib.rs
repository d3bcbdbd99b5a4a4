//! Host glue for the `stepped-progress` crate.
//!
//! The `stepped-progress` crate is UI-agnostic and only does the math and the loop state. This
//! crate provides small, framework-neutral helpers an adapter typically needs:
//!
//! - A frame clock that turns display-refresh timestamps into ease multipliers
//! - An input surface binding that attaches wheel/pointer listeners and releases them on dispose
//! - The slide blend a two-image slider renderer reads on each render notification
//!
//! This crate is intentionally framework-agnostic (no DOM/winit/wgpu bindings).
#![forbid(unsafe_code)]

mod binding;
mod clock;
mod slide;
mod surface;

#[cfg(test)]
mod tests;

pub use binding::Binding;
pub use clock::{DEFAULT_MAX_FRAME_MS, FrameClock, NOMINAL_FRAME_MS};
pub use slide::SlideBlend;
pub use surface::{InputSurface, ManualSurface, SurfaceEvent, SurfaceHandler};
