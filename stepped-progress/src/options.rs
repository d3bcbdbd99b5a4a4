use std::str::FromStr;
use std::sync::Arc;

use crate::input::{Axis, DEFAULT_LINE_HEIGHT, DEFAULT_PAGE_HEIGHT};
use crate::ConfigError;

pub const DEFAULT_EASE: f64 = 0.1;
pub const DEFAULT_FRICTION: f64 = 0.5;
pub const DEFAULT_SETTLE_EPSILON: f64 = 1e-3;

/// The container's size along the interaction axis, used to normalize input deltas.
#[derive(Clone)]
pub enum ContainerExtent {
    /// A fixed extent.
    Value(f64),
    /// A live extent provider, queried on every input event.
    Provider(Arc<dyn Fn() -> f64 + Send + Sync>),
}

impl ContainerExtent {
    pub(crate) fn resolve(&self) -> f64 {
        match self {
            Self::Value(v) => *v,
            Self::Provider(f) => f(),
        }
    }
}

impl Default for ContainerExtent {
    fn default() -> Self {
        Self::Value(1.0)
    }
}

impl core::fmt::Debug for ContainerExtent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// The hot-patchable subset of the options.
///
/// The controller reads these on every tick, so a tuning surface can change them while the
/// animation is running.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tuning {
    /// Per-frame smoothing factor of `current` toward `target`, in `(0, 1]`.
    pub ease: f64,
    /// Fraction of `ease` used to pull `target` onto the step grid, in `[0, 1]`.
    pub friction: f64,
}

impl Tuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_ease(self.ease)?;
        validate_friction(self.friction)
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ease: DEFAULT_EASE,
            friction: DEFAULT_FRICTION,
        }
    }
}

/// Names accepted by `StepProgressController::set_option`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TuningKey {
    Ease,
    Friction,
}

impl TuningKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ease => "ease",
            Self::Friction => "friction",
        }
    }
}

impl FromStr for TuningKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ease" => Ok(Self::Ease),
            "friction" => Ok(Self::Friction),
            other => Err(ConfigError::UnknownOption(other.to_owned())),
        }
    }
}

pub(crate) fn validate_ease(ease: f64) -> Result<(), ConfigError> {
    if ease.is_nan() || ease <= 0.0 || ease > 1.0 {
        return Err(ConfigError::EaseOutOfRange(ease));
    }
    Ok(())
}

pub(crate) fn validate_friction(friction: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&friction) {
        return Err(ConfigError::FrictionOutOfRange(friction));
    }
    Ok(())
}

fn require_finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFiniteValue { name, value })
    }
}

/// Configuration for [`crate::StepProgressController`].
///
/// Cheap to clone: the extent provider lives in an `Arc`.
#[derive(Clone)]
pub struct ProgressOptions {
    /// Inclusive lower bound of progress.
    pub min: f64,
    /// Inclusive upper bound of progress.
    pub max: f64,
    /// Quantization granularity. `max - min` need not be a multiple of it.
    pub step: f64,
    pub tuning: Tuning,

    /// Starting value for both `current` and `target`, clamped into `[min, max]`.
    pub initial: f64,

    pub axis: Axis,
    pub extent: ContainerExtent,

    /// Pixel size of a wheel line (`DeltaMode::Line`).
    pub line_height: f64,
    /// Pixel size of a wheel page (`DeltaMode::Page`).
    pub page_height: f64,

    /// Distance under which `current` snaps onto `target` and `target` snaps onto its step.
    ///
    /// This bounds the settle latency: the loop goes idle once both gaps fall below it.
    pub settle_epsilon: f64,

    /// Optional identifier, attached to log events.
    pub name: Option<String>,
}

impl ProgressOptions {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self {
            min,
            max,
            step,
            tuning: Tuning::default(),
            initial: 0.0,
            axis: Axis::default(),
            extent: ContainerExtent::default(),
            line_height: DEFAULT_LINE_HEIGHT,
            page_height: DEFAULT_PAGE_HEIGHT,
            settle_epsilon: DEFAULT_SETTLE_EPSILON,
            name: None,
        }
    }

    /// Options for a slider over `count` slides: one step per slide, soft friction.
    pub fn for_slides(count: usize) -> Self {
        let max = count.saturating_sub(1) as f64;
        Self::new(0.0, max, 1.0).with_friction(0.1)
    }

    pub fn with_ease(mut self, ease: f64) -> Self {
        self.tuning.ease = ease;
        self
    }

    pub fn with_friction(mut self, friction: f64) -> Self {
        self.tuning.friction = friction;
        self
    }

    pub fn with_tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }

    pub fn with_initial(mut self, initial: f64) -> Self {
        self.initial = initial;
        self
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_extent(mut self, extent: f64) -> Self {
        self.extent = ContainerExtent::Value(extent);
        self
    }

    pub fn with_extent_provider(
        mut self,
        extent: impl Fn() -> f64 + Send + Sync + 'static,
    ) -> Self {
        self.extent = ContainerExtent::Provider(Arc::new(extent));
        self
    }

    pub fn with_wheel_scale(mut self, line_height: f64, page_height: f64) -> Self {
        self.line_height = line_height;
        self.page_height = page_height;
        self
    }

    pub fn with_settle_epsilon(mut self, settle_epsilon: f64) -> Self {
        self.settle_epsilon = settle_epsilon;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Checks every numeric field. Called by `StepProgressController::new`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_finite("min", self.min)?;
        require_finite("max", self.max)?;
        require_finite("step", self.step)?;
        require_finite("initial", self.initial)?;
        require_finite("line_height", self.line_height)?;
        require_finite("page_height", self.page_height)?;
        require_finite("settle_epsilon", self.settle_epsilon)?;
        if self.min > self.max {
            return Err(ConfigError::InvertedBounds {
                min: self.min,
                max: self.max,
            });
        }
        if self.step <= 0.0 {
            return Err(ConfigError::NonPositiveStep(self.step));
        }
        if self.settle_epsilon < 0.0 {
            return Err(ConfigError::NegativeEpsilon(self.settle_epsilon));
        }
        self.tuning.validate()
    }
}

impl core::fmt::Debug for ProgressOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProgressOptions")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("step", &self.step)
            .field("tuning", &self.tuning)
            .field("initial", &self.initial)
            .field("axis", &self.axis)
            .field("extent", &self.extent)
            .field("line_height", &self.line_height)
            .field("page_height", &self.page_height)
            .field("settle_epsilon", &self.settle_epsilon)
            .field("name", &self.name)
            .finish()
    }
}
