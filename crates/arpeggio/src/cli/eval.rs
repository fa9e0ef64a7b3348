use anyhow::{Context, Result, ensure};
use arpeggio_core::{Coord, Move, RobotJointsKinematics};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args)]
pub struct EvalArgs {
    /// Path to the robot configuration file (TOML or JSON).
    pub config: PathBuf,

    /// Start position of the move as six comma-separated joint values.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub start: Vec<f64>,

    /// Per-joint direction ratios of the move.
    #[arg(long = "dir", value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub axes_r: Vec<f64>,

    /// Velocity at the start of the move.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub start_v: f64,

    /// Constant acceleration over the move.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub accel: f64,

    /// Duration of the move in seconds.
    #[arg(long, default_value_t = 1.0)]
    pub move_t: f64,

    /// Time offsets within the move to evaluate at.
    #[arg(long = "time", value_delimiter = ',', required = true)]
    pub times: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct Sample {
    pub time: f64,
    pub position: Coord,
}

impl EvalArgs {
    pub fn run(&self) -> Result<()> {
        let kin = crate::load_kinematics(&self.config)?;
        let m = self.to_move()?;

        for sample in sample(&kin, &m, &self.times) {
            let line = serde_json::to_string(&sample).context("failed to render sample")?;
            println!("{line}");
        }
        Ok(())
    }

    pub fn to_move(&self) -> Result<Move> {
        ensure!(self.move_t > 0.0, "--move-t must be positive");
        Ok(Move::new(
            0.0,
            self.move_t,
            self.start_v,
            self.accel,
            six("--start", &self.start)?,
            six("--dir", &self.axes_r)?,
        ))
    }
}

/// Evaluate all joint steppers of `kin` at each of `times` within `m`.
pub fn sample(kin: &RobotJointsKinematics, m: &Move, times: &[f64]) -> Vec<Sample> {
    times
        .iter()
        .map(|&time| {
            if !(0.0..=m.move_t).contains(&time) {
                tracing::warn!(time, move_t = m.move_t, "time outside of move");
            }
            Sample {
                time,
                position: kin.evaluate(m, time),
            }
        })
        .collect()
}

fn six(flag: &str, values: &[f64]) -> Result<Coord> {
    let values: [f64; 6] = values
        .try_into()
        .ok()
        .with_context(|| format!("{flag} takes 6 values, got {}", values.len()))?;
    Ok(Coord::from_array(values))
}
