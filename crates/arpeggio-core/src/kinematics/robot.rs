// Host-side kinematics for a six-joint robot arm

use crate::{
    axis::Axis,
    config::{RailConfig, RobotConfig},
    error::{KinematicsError, MoveError, Result},
    itersolve::StepperKinematics,
    kinematics::JointStepper,
    motion::{Coord, Move},
};
use serde::Serialize;
use std::collections::BTreeMap;

/// How far past the rail range a homing move is allowed to travel.
const HOMING_OVERSHOOT: f64 = 1.5;

/// Closed range a homed joint may move in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JointLimits {
    pub min: f64,
    pub max: f64,
}

impl JointLimits {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, position: f64) -> bool {
        self.min <= position && position <= self.max
    }
}

impl From<[f64; 2]> for JointLimits {
    fn from([min, max]: [f64; 2]) -> Self {
        Self { min, max }
    }
}

/// A single joint rail with its stepper
#[derive(Debug, Clone)]
pub struct JointRail {
    name: String,
    stepper: JointStepper,
    homing: RailConfig,
    commanded_pos: f64,
}

impl JointRail {
    fn new(axis: Axis, homing: RailConfig) -> Result<Self> {
        Ok(Self {
            name: format!("stepper_{axis}"),
            stepper: JointStepper::alloc(axis.code())?,
            homing,
            commanded_pos: 0.0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stepper(&self) -> &JointStepper {
        &self.stepper
    }

    pub fn axis(&self) -> Axis {
        self.stepper.axis()
    }

    pub fn commanded_pos(&self) -> f64 {
        self.commanded_pos
    }

    /// Rail travel as `(position_min, position_max)`
    pub fn range(&self) -> (f64, f64) {
        (self.homing.position_min, self.homing.position_max)
    }

    fn set_position(&mut self, pos: Coord) {
        self.commanded_pos = self.stepper.calc_position_from_coord(pos);
    }
}

/// A move as presented for limit checking
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveRequest {
    /// Per-axis displacement of the move
    pub axes_d: Coord,
    pub end_pos: Coord,
}

/// Target positions for homing one joint.
///
/// Only the homed axis carries a value; the host drives that rail from
/// `forcepos` towards `homepos` until the endstop triggers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomingMove {
    pub axis: Axis,
    pub forcepos: [Option<f64>; 6],
    pub homepos: [Option<f64>; 6],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KinematicsStatus {
    pub homed_axes: String,
    pub axis_minimum: Coord,
    pub axis_maximum: Coord,
}

/// Robotic joints kinematics: six independent joints, one stepper each.
///
/// Joint positions map one to one onto stepper positions, so all the
/// interesting state is the per-joint homing status. A joint only accepts
/// moves once it has been homed, and only within its link's `qlim`.
#[derive(Debug, Clone)]
pub struct RobotJointsKinematics {
    rails: Vec<JointRail>,
    link_limits: [JointLimits; 6],
    // None while the joint is un-homed
    limits: [Option<JointLimits>; 6],
    axes_min: Coord,
    axes_max: Coord,
    max_velocity: f64,
    max_accel: f64,
}

impl RobotJointsKinematics {
    pub fn new(config: &RobotConfig) -> Result<Self> {
        config.validate()?;

        let rails = Axis::ALL
            .into_iter()
            .map(|axis| JointRail::new(axis, *config.rails.get(axis)))
            .collect::<Result<Vec<_>>>()?;

        let link_limits = Axis::ALL.map(|axis| JointLimits::from(config.qlim(axis)));
        let axes_min = Coord::from_array(link_limits.map(|l| l.min));
        let axes_max = Coord::from_array(link_limits.map(|l| l.max));

        tracing::info!(
            steppers = rails.len(),
            max_velocity = config.printer.max_velocity,
            max_accel = config.printer.max_accel,
            "robotic joints kinematics configured"
        );

        Ok(Self {
            rails,
            link_limits,
            limits: [None; 6],
            axes_min,
            axes_max,
            max_velocity: config.printer.max_velocity,
            max_accel: config.printer.max_accel,
        })
    }

    pub fn rails(&self) -> &[JointRail] {
        &self.rails
    }

    pub fn rail(&self, axis: Axis) -> &JointRail {
        &self.rails[axis.index()]
    }

    /// Stepper kinematics paired with their stepper names
    pub fn steppers(&self) -> impl Iterator<Item = (&str, &JointStepper)> {
        self.rails.iter().map(|rail| (rail.name(), rail.stepper()))
    }

    pub fn max_velocity(&self) -> f64 {
        self.max_velocity
    }

    pub fn max_accel(&self) -> f64 {
        self.max_accel
    }

    pub fn limits(&self, axis: Axis) -> Option<JointLimits> {
        self.limits[axis.index()]
    }

    pub fn is_homed(&self, axis: Axis) -> bool {
        self.limits(axis).is_some()
    }

    /// Joint coordinate of the steppers' current commanded positions.
    pub fn commanded_position(&self) -> Coord {
        let mut pos = Coord::default();
        for rail in &self.rails {
            pos.set(rail.axis(), rail.commanded_pos());
        }
        pos
    }

    /// Forget all homing state, e.g. after the motors were disabled.
    pub fn motor_off(&mut self) {
        tracing::info!("motors off, all joints un-homed");
        self.limits = [None; 6];
    }

    /// Joint coordinate from the current stepper positions, keyed by stepper name.
    pub fn calc_position(&self, stepper_positions: &BTreeMap<String, f64>) -> Result<Coord> {
        let mut pos = Coord::default();
        for rail in &self.rails {
            let value = stepper_positions
                .get(rail.name())
                .copied()
                .ok_or_else(|| KinematicsError::MissingStepper(rail.name().to_string()))?;
            pos.set(rail.axis(), value);
        }
        Ok(pos)
    }

    /// Narrow the range of an already homed joint. Un-homed joints stay un-homed.
    pub fn update_limits(&mut self, axis: Axis, range: JointLimits) {
        if let Some(limits) = &mut self.limits[axis.index()] {
            *limits = range;
        }
    }

    pub fn set_position(&mut self, newpos: Coord, homing_axes: &[Axis]) {
        for rail in &mut self.rails {
            rail.set_position(newpos);
        }
        for &axis in homing_axes {
            self.limits[axis.index()] = Some(self.link_limits[axis.index()]);
        }
        tracing::debug!(?newpos, ?homing_axes, "joint position set");
    }

    /// Plan the homing moves for `axes`, in the order given.
    pub fn home(&self, axes: &[Axis]) -> Vec<HomingMove> {
        axes.iter()
            .map(|&axis| {
                let rail = self.rail(axis);
                let (position_min, position_max) = rail.range();
                let endstop = rail.homing.position_endstop;
                let force = if rail.homing.homing_positive_dir {
                    endstop - HOMING_OVERSHOOT * (endstop - position_min)
                } else {
                    endstop + HOMING_OVERSHOOT * (position_max - endstop)
                };

                let mut homepos = [None; 6];
                let mut forcepos = [None; 6];
                homepos[axis.index()] = Some(endstop);
                forcepos[axis.index()] = Some(force);

                tracing::debug!(%axis, endstop, force, "homing joint");
                HomingMove {
                    axis,
                    forcepos,
                    homepos,
                }
            })
            .collect()
    }

    /// Reject moves on un-homed joints or past a joint's limits.
    pub fn check_move(&self, request: &MoveRequest) -> std::result::Result<(), MoveError> {
        for axis in Axis::ALL {
            if request.axes_d.get(axis) == 0.0 {
                continue;
            }
            let Some(limits) = self.limits(axis) else {
                return Err(MoveError::MustHome(axis));
            };
            let position = request.end_pos.get(axis);
            if !limits.contains(position) {
                return Err(MoveError::OutOfRange {
                    axis,
                    position,
                    min: limits.min,
                    max: limits.max,
                });
            }
        }
        Ok(())
    }

    /// Evaluate every joint stepper at `move_time` within `m`.
    pub fn evaluate(&self, m: &Move, move_time: f64) -> Coord {
        let mut pos = Coord::default();
        for rail in &self.rails {
            pos.set(rail.axis(), rail.stepper().calc_position(m, move_time));
        }
        pos
    }

    pub fn status(&self) -> KinematicsStatus {
        KinematicsStatus {
            homed_axes: Axis::ALL
                .into_iter()
                .filter(|axis| self.is_homed(*axis))
                .map(Axis::code)
                .collect(),
            axis_minimum: self.axes_min,
            axis_maximum: self.axes_max,
        }
    }
}
