//! Error types for run construction

use thiserror::Error;

/// Rejected run inputs. Raised before any stepping happens.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("rocket mass must be positive, got {0}")]
    NonPositiveMass(f64),

    #[error("body '{body}' has negative mass {mass}")]
    NegativeBodyMass { body: String, mass: f64 },

    #[error("body '{body}' must have a positive radius, got {radius}")]
    NonPositiveRadius { body: String, radius: f64 },

    #[error("time step must be positive, got {0}")]
    NonPositiveTimeStep(f64),

    #[error("target time must be positive, got {0}")]
    NonPositiveTargetTime(f64),

    #[error("gravitational constant must be positive, got {0}")]
    NonPositiveGravitationalConstant(f64),

    #[error("expected one or two celestial bodies, got {0}")]
    BodyCount(usize),

    #[error("non-finite value in {0}")]
    NonFinite(&'static str),

    #[error("secondary body selected but not described")]
    MissingSecondary,
}

/// Acceleration requested at the exact center of a body, where the
/// inverse-square field is undefined.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("acceleration evaluated at the center of '{body}'")]
pub struct SingularField {
    pub body: String,
}
