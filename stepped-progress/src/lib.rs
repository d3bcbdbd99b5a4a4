//! A headless stepped progress controller.
//!
//! For host-side glue (frame clock, input surface binding, slide blending), see the
//! `stepped-progress-adapter` crate.
//!
//! This crate turns raw, high-frequency, unbounded input deltas (wheel ticks, drag offsets) into a
//! smoothly animated, clamped, step-quantized progress value, and tracks whether its animation
//! loop needs to run at all.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - wheel and drag events (or already-normalized deltas)
//! - the container extent along the interaction axis
//! - a frame callback that calls [`StepProgressController::tick`] while the loop is running
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod controller;
mod error;
mod input;
mod listener;
mod options;
mod state;
pub mod step;


pub use controller::{RenderSubscription, StepProgressController};
pub use error::ConfigError;
pub use input::{
    Axis, DEFAULT_LINE_HEIGHT, DEFAULT_PAGE_HEIGHT, DeltaMode, DragMove, DragTracker, WheelEvent,
    normalize_wheel,
};
pub use listener::Listener;
pub use options::{
    ContainerExtent, DEFAULT_EASE, DEFAULT_FRICTION, DEFAULT_SETTLE_EPSILON, ProgressOptions,
    Tuning, TuningKey,
};
pub use state::{LoopState, ProgressState, SteppedProgress};
