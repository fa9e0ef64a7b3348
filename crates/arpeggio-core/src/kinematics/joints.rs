// Robotic joint kinematics - each stepper drives one joint axis directly

use crate::{
    axis::Axis,
    error::Result,
    itersolve::{ActiveFlags, StepperKinematics},
    motion::{Move, move_get_coord},
};

/// Selects a single joint coordinate out of the toolhead position.
///
/// The active mask always covers all six axes, not just the selected one,
/// so the solver re-evaluates every joint stepper whenever any joint moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JointStepper {
    axis: Axis,
    active_flags: ActiveFlags,
}

impl JointStepper {
    pub const fn new(axis: Axis) -> Self {
        Self {
            axis,
            active_flags: ActiveFlags::all(),
        }
    }

    /// Build a stepper from its axis code.
    ///
    /// Codes outside the lower-case set `x, y, z, a, b, c` are a setup
    /// error; nothing is built.
    pub fn alloc(code: char) -> Result<Self> {
        Axis::from_code(code).map(Self::new)
    }

    pub const fn axis(&self) -> Axis {
        self.axis
    }
}

impl StepperKinematics for JointStepper {
    #[inline]
    fn calc_position(&self, m: &Move, move_time: f64) -> f64 {
        move_get_coord(m, move_time).get(self.axis)
    }

    fn active_flags(&self) -> ActiveFlags {
        self.active_flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::KinematicsError, motion::Coord};

    fn sample_move() -> Move {
        // Parked so that coord(1.5) is exactly start_pos
        Move {
            print_time: 0.0,
            move_t: 3.0,
            start_pos: Coord {
                x: 10.0,
                y: 0.0,
                z: 5.0,
                a: -3.2,
                b: 0.0,
                c: 7.1,
            },
            ..Move::default()
        }
    }

    #[test]
    fn selects_requested_joint() {
        let m = sample_move();
        assert_eq!(JointStepper::alloc('z').unwrap().calc_position(&m, 1.5), 5.0);
        assert_eq!(JointStepper::alloc('a').unwrap().calc_position(&m, 1.5), -3.2);
        assert_eq!(JointStepper::alloc('x').unwrap().calc_position(&m, 1.5), 10.0);
        assert_eq!(JointStepper::alloc('c').unwrap().calc_position(&m, 1.5), 7.1);
    }

    #[test]
    fn rejects_unknown_axis_code() {
        assert_eq!(
            JointStepper::alloc('q'),
            Err(KinematicsError::UnknownAxis('q'))
        );
        assert!(JointStepper::alloc('e').is_err());
        for code in ['X', 'Y', 'Z', 'A', 'B', 'C'] {
            assert_eq!(
                JointStepper::alloc(code),
                Err(KinematicsError::UnknownAxis(code))
            );
        }
        assert!(JointStepper::alloc('\0').is_err());
    }

    #[test]
    fn every_joint_is_active_on_all_axes() {
        for axis in Axis::ALL {
            let kin = JointStepper::new(axis);
            assert_eq!(kin.axis(), axis);
            assert_eq!(kin.active_flags(), ActiveFlags::all());
        }
    }

    #[test]
    fn follows_moving_joint() {
        let kin = JointStepper::new(Axis::B);
        let m = Move::new(
            0.0,
            1.0,
            2.0,
            0.0,
            Coord::default(),
            Coord {
                b: 0.5,
                ..Coord::default()
            },
        );
        assert_eq!(kin.calc_position(&m, 0.0), 0.0);
        assert_eq!(kin.calc_position(&m, 1.0), 1.0);
        // Other joints stay put
        assert_eq!(JointStepper::new(Axis::X).calc_position(&m, 1.0), 0.0);
    }

    #[test]
    fn repeated_evaluation_is_bit_identical() {
        let m = Move::new(
            0.25,
            0.75,
            1.0 / 3.0,
            7.0,
            Coord::from_array([0.1, 0.2, 0.3, 0.4, 0.5, 0.6]),
            Coord::from_array([0.6, -0.5, 0.4, -0.3, 0.2, -0.1]),
        );
        for axis in Axis::ALL {
            let kin = JointStepper::new(axis);
            let first = kin.calc_position(&m, 0.4).to_bits();
            for _ in 0..8 {
                assert_eq!(kin.calc_position(&m, 0.4).to_bits(), first);
            }
        }
    }

    #[test]
    fn parked_coordinate_maps_to_joint() {
        let pos = Coord::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        for axis in Axis::ALL {
            assert_eq!(
                JointStepper::new(axis).calc_position_from_coord(pos),
                pos.get(axis)
            );
        }
    }
}
