//! Things that can go wrong setting up or querying a simulation.
//! Blowing up numerically isn't one of them; that just produces big floats.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("a solar system needs at least one body")]
    NoBodies,

    #[error("body {name:?} has mass {mass}, which is not positive")]
    NonPositiveMass { name: String, mass: f64 },

    #[error("body {name:?} has radius {radius}, which is negative or not finite")]
    NegativeRadius { name: String, radius: f64 },

    #[error("more than one body is named {0:?}")]
    DuplicateName(String),

    #[error("bodies {first:?} and {second:?} start at the same position")]
    CoincidentBodies { first: String, second: String },

    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),

    #[error("end time must be non-negative and finite, got {0}")]
    InvalidEndTime(f64),

    #[error("signal speed must be positive and finite, got {0}")]
    InvalidSignalSpeed(f64),

    #[error("no body named {0:?}")]
    UnknownBody(String),

    #[error("no body with id {0}")]
    UnknownBodyId(usize),

    #[error("step {step} is out of range, only {samples} samples are recorded")]
    StepOutOfRange { step: usize, samples: usize },
}
