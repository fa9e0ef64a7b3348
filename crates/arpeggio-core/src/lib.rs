//! Joint-space stepper kinematics shared across Arpeggio components.
//!
//! This crate intentionally avoids any transport- or MCU-specific
//! dependencies. It maps trajectory segments onto per-stepper positions
//! for the step solver, and tracks the host-side homing state of a
//! six-joint arm.

pub mod axis;
pub mod config;
pub mod error;
pub mod itersolve;
pub mod kinematics;
pub mod motion;

pub use axis::Axis;
pub use error::{KinematicsError, MoveError};
pub use itersolve::{ActiveFlags, StepperKinematics};
pub use kinematics::{JointStepper, RobotJointsKinematics};
pub use motion::{Coord, Move, move_get_coord};
