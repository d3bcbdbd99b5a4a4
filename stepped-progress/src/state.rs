use crate::step::{ceil_to_step, floor_to_step};

/// The controller's persistent progress pair.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressState {
    /// Smoothed, externally observable progress.
    pub current: f64,
    /// Desired progress before smoothing.
    pub target: f64,
}

/// A snapshot of the values a renderer reads on each render notification.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteppedProgress {
    pub progress: f64,
    /// Step boundary at or below `progress`.
    pub min_stepped_value: f64,
    /// Step boundary at or above `progress`.
    pub max_stepped_value: f64,
    /// Position of `progress` between the two boundaries, in `[0, 1)`.
    pub relative_stepped_progress: f64,
}

impl SteppedProgress {
    pub fn from_progress(progress: f64, step: f64) -> Self {
        let min_stepped_value = floor_to_step(progress, step);
        Self {
            progress,
            min_stepped_value,
            max_stepped_value: ceil_to_step(progress, step),
            relative_stepped_progress: (progress - min_stepped_value) / step,
        }
    }
}

/// Animation loop state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoopState {
    #[default]
    Idle,
    Running,
}
