use anyhow::Result;
use arpeggio_core::StepperKinematics;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct CheckArgs {
    /// Path to the robot configuration file (TOML or JSON).
    pub config: PathBuf,
}

impl CheckArgs {
    pub fn run(&self) -> Result<()> {
        let kin = crate::load_kinematics(&self.config)?;

        for rail in kin.rails() {
            let (position_min, position_max) = rail.range();
            tracing::info!(
                stepper = rail.name(),
                axis = %rail.axis(),
                position_min,
                position_max,
                active_flags = rail.stepper().active_flags().bits(),
                "rail configured"
            );
        }

        println!(
            "{}: {} joint steppers ok",
            self.config.display(),
            kin.rails().len()
        );
        Ok(())
    }
}
