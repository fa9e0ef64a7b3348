// Kinematics systems for joint-space machines

pub mod joints;
pub mod robot;

pub use joints::JointStepper;
pub use robot::{HomingMove, KinematicsStatus, MoveRequest, RobotJointsKinematics};
