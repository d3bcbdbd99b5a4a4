/// Rejected configuration, reported eagerly at construction or when a tuning patch is applied.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("`{name}` must be finite, got {value}")]
    NonFiniteValue { name: &'static str, value: f64 },

    #[error("`min` ({min}) must not exceed `max` ({max})")]
    InvertedBounds { min: f64, max: f64 },

    #[error("`step` must be positive, got {0}")]
    NonPositiveStep(f64),

    #[error("`settle_epsilon` must not be negative, got {0}")]
    NegativeEpsilon(f64),

    #[error("`ease` must lie in (0, 1], got {0}")]
    EaseOutOfRange(f64),

    #[error("`friction` must lie in [0, 1], got {0}")]
    FrictionOutOfRange(f64),

    #[error("unknown tunable option `{0}`")]
    UnknownOption(String),
}
