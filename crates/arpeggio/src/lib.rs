//! Command-line driver for the Arpeggio joint kinematics.

pub mod cli;
pub mod config;

use anyhow::{Context, Result};
use arpeggio_core::RobotJointsKinematics;
use std::path::Path;

/// Load a robot config file and build its kinematics
pub fn load_kinematics<P: AsRef<Path>>(path: P) -> Result<RobotJointsKinematics> {
    let path = path.as_ref();
    let config = config::from_file(path)?;
    RobotJointsKinematics::new(&config)
        .with_context(|| format!("failed to set up kinematics from {}", path.display()))
}

/// Install the global tracing subscriber.
///
/// Logs go to stderr so command output on stdout stays machine readable.
/// `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
