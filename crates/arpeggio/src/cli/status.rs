use anyhow::{Context, Result};
use arpeggio_core::{Axis, RobotJointsKinematics, kinematics::KinematicsStatus};
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct StatusArgs {
    /// Path to the robot configuration file (TOML or JSON).
    pub config: PathBuf,

    /// Joints to home before reporting, e.g. `xyz` or `x,a,c`.
    #[arg(long)]
    pub home: Option<String>,
}

impl StatusArgs {
    pub fn run(&self) -> Result<()> {
        let mut kin = crate::load_kinematics(&self.config)?;

        if let Some(home) = &self.home {
            let axes = Axis::parse_list(home)
                .with_context(|| format!("invalid --home axes {home:?}"))?;
            home_at_endstops(&mut kin, &axes);
        }

        println!("{}", render(&kin.status())?);
        Ok(())
    }
}

/// Home `axes` as if every endstop triggered exactly at its configured position.
///
/// Joints that are not homed keep their current commanded position.
pub fn home_at_endstops(kin: &mut RobotJointsKinematics, axes: &[Axis]) {
    let mut pos = kin.commanded_position();
    for homing in kin.home(axes) {
        tracing::info!(
            axis = %homing.axis,
            forcepos = ?homing.forcepos[homing.axis.index()],
            homepos = ?homing.homepos[homing.axis.index()],
            "homing joint"
        );
        for axis in Axis::ALL {
            if let Some(value) = homing.homepos[axis.index()] {
                pos.set(axis, value);
            }
        }
    }
    kin.set_position(pos, axes);
}

pub fn render(status: &KinematicsStatus) -> Result<String> {
    serde_json::to_string_pretty(status).context("failed to render status")
}
