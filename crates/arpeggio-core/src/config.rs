//! Robot description consumed by [`RobotJointsKinematics`].
//!
//! [`RobotJointsKinematics`]: crate::kinematics::RobotJointsKinematics

use crate::{
    axis::Axis,
    error::{KinematicsError, Result},
};
use serde::{Deserialize, Serialize};

/// Full robot configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RobotConfig {
    #[serde(default)]
    pub printer: PrinterConfig,

    /// One rail per joint axis
    pub rails: RailsConfig,

    /// Kinematic links in joint order; their `qlim` bound each joint
    pub links: Vec<LinkConfig>,
}

/// Toolhead-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrinterConfig {
    #[serde(default = "default_kinematics")]
    pub kinematics: String,

    #[serde(default = "default_max_velocity")]
    pub max_velocity: f64,

    #[serde(default = "default_max_accel")]
    pub max_accel: f64,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            kinematics: default_kinematics(),
            max_velocity: default_max_velocity(),
            max_accel: default_max_accel(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RailsConfig {
    pub x: RailConfig,
    pub y: RailConfig,
    pub z: RailConfig,
    pub a: RailConfig,
    pub b: RailConfig,
    pub c: RailConfig,
}

impl RailsConfig {
    pub fn get(&self, axis: Axis) -> &RailConfig {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
            Axis::A => &self.a,
            Axis::B => &self.b,
            Axis::C => &self.c,
        }
    }
}

/// Homing geometry of a single joint rail
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RailConfig {
    pub position_endstop: f64,

    pub position_min: f64,

    pub position_max: f64,

    /// Home towards `position_max` instead of `position_min`
    #[serde(default)]
    pub homing_positive_dir: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkConfig {
    #[serde(default)]
    pub name: String,

    /// Joint range as `[min, max]`
    pub qlim: [f64; 2],
}

fn default_kinematics() -> String {
    "joints".to_string()
}

fn default_max_velocity() -> f64 {
    300.0
}

fn default_max_accel() -> f64 {
    3000.0
}

impl RobotConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.printer.kinematics != "joints" {
            return Err(invalid(format!(
                "printer.kinematics must be \"joints\", got {:?}",
                self.printer.kinematics
            )));
        }
        if !is_positive(self.printer.max_velocity) {
            return Err(invalid("printer.max_velocity must be positive"));
        }
        if !is_positive(self.printer.max_accel) {
            return Err(invalid("printer.max_accel must be positive"));
        }

        if self.links.len() != Axis::ALL.len() {
            return Err(invalid(format!(
                "expected {} links, found {}",
                Axis::ALL.len(),
                self.links.len()
            )));
        }
        for (axis, link) in Axis::ALL.into_iter().zip(&self.links) {
            let [min, max] = link.qlim;
            if !is_within(min, min, max) {
                return Err(invalid(format!(
                    "links[{}].qlim for axis {axis} is empty: {min}:{max}",
                    axis.index()
                )));
            }
        }

        for axis in Axis::ALL {
            let rail = self.rails.get(axis);
            if !is_within(rail.position_endstop, rail.position_min, rail.position_max) {
                return Err(invalid(format!(
                    "rails.{axis}.position_endstop {} not in {}:{}",
                    rail.position_endstop, rail.position_min, rail.position_max
                )));
            }
        }

        Ok(())
    }

    pub fn qlim(&self, axis: Axis) -> [f64; 2] {
        self.links[axis.index()].qlim
    }
}

fn is_positive(v: f64) -> bool {
    v > 0.0
}

// False for NaN on either side
fn is_within(v: f64, min: f64, max: f64) -> bool {
    min <= v && v <= max
}

fn invalid(msg: impl Into<String>) -> KinematicsError {
    KinematicsError::InvalidConfig(msg.into())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Six-joint arm with symmetric limits, the last wrist joint homing
    /// towards its positive end.
    pub(crate) const ARM: &str = r#"
[printer]
max_velocity = 2.0
max_accel = 10.0

[rails.x]
position_endstop = 0.0
position_min = -3.0
position_max = 3.0

[rails.y]
position_endstop = -1.5
position_min = -1.5
position_max = 1.5

[rails.z]
position_endstop = -1.5
position_min = -1.5
position_max = 1.5

[rails.a]
position_endstop = 0.0
position_min = -0.25
position_max = 1.75

[rails.b]
position_endstop = 0.0
position_min = -1.5
position_max = 1.5

[rails.c]
position_endstop = 3.0
position_min = -3.0
position_max = 3.0
homing_positive_dir = true

[[links]]
name = "L1"
qlim = [-3.0, 3.0]

[[links]]
name = "L2"
qlim = [-1.5, 1.5]

[[links]]
name = "L3"
qlim = [-1.5, 1.5]

[[links]]
name = "L4"
qlim = [-0.25, 1.75]

[[links]]
name = "L5"
qlim = [-1.5, 1.5]

[[links]]
name = "L6"
qlim = [-3.0, 3.0]
"#;

    pub(crate) fn arm() -> RobotConfig {
        toml::from_str(ARM).unwrap()
    }

    #[test]
    fn test_parse_toml() {
        let config = arm();
        assert_eq!(config.printer.kinematics, "joints");
        assert_eq!(config.printer.max_velocity, 2.0);
        assert_eq!(config.rails.a.position_max, 1.75);
        assert!(config.rails.c.homing_positive_dir);
        assert!(!config.rails.x.homing_positive_dir);
        assert_eq!(config.links[3].name, "L4");
        assert_eq!(config.qlim(Axis::A), [-0.25, 1.75]);
        config.validate().unwrap();
    }

    #[test]
    fn test_printer_defaults() {
        let printer: PrinterConfig = toml::from_str("").unwrap();
        assert_eq!(printer.kinematics, "joints");
        assert_eq!(printer.max_velocity, 300.0);
        assert_eq!(printer.max_accel, 3000.0);
    }

    #[test]
    fn rejects_other_kinematics() {
        let mut config = arm();
        config.printer.kinematics = "cartesian".into();
        assert!(matches!(
            config.validate(),
            Err(KinematicsError::InvalidConfig(msg)) if msg.contains("kinematics")
        ));
    }

    #[test]
    fn rejects_wrong_link_count() {
        let mut config = arm();
        config.links.pop();
        assert!(matches!(
            config.validate(),
            Err(KinematicsError::InvalidConfig(msg)) if msg.contains("expected 6 links")
        ));
    }

    #[test]
    fn rejects_inverted_qlim() {
        let mut config = arm();
        config.links[2].qlim = [1.0, -1.0];
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_endstop_outside_rail() {
        let mut config = arm();
        config.rails.b.position_endstop = 2.0;
        assert!(matches!(
            config.validate(),
            Err(KinematicsError::InvalidConfig(msg)) if msg.contains("rails.b")
        ));
    }

    #[test]
    fn rejects_non_positive_limits() {
        let mut config = arm();
        config.printer.max_accel = 0.0;
        assert!(config.validate().is_err());
        let mut config = arm();
        config.printer.max_velocity = f64::NAN;
        assert!(config.validate().is_err());
    }
}
