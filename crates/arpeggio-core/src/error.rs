use crate::axis::Axis;
use thiserror::Error;

/// Setup-time failures. None of these are recoverable once motion starts;
/// the host should refuse to start with a kinematics that reports one.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum KinematicsError {
    #[error("unknown axis code {0:?}, expected one of x, y, z, a, b, c")]
    UnknownAxis(char),
    #[error("axis name {0:?} must be a single axis code")]
    InvalidAxisName(String),
    #[error("no position reported for stepper {0}")]
    MissingStepper(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Reasons a requested move is rejected before it reaches the queue.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MoveError {
    #[error("Must home axis first: {0}")]
    MustHome(Axis),
    #[error("Move out of range: {axis} position {position} not in {min}:{max}")]
    OutOfRange {
        axis: Axis,
        position: f64,
        min: f64,
        max: f64,
    },
}

pub type Result<T, E = KinematicsError> = std::result::Result<T, E>;
