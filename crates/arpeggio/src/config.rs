use anyhow::{Context, Result};
use arpeggio_core::config::RobotConfig;
use std::{fs, path::Path};

/// Load configuration from a file, auto-detecting TOML or JSON format
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<RobotConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;

    // Try to determine format from extension
    let extension = path.extension().and_then(|s| s.to_str());

    let config = match extension {
        Some("toml") => from_toml(&content)?,
        Some("json") => from_json(&content)?,
        _ => {
            // Try TOML first, fall back to JSON
            match from_toml(&content) {
                Ok(config) => config,
                Err(toml_err) => from_json(&content).map_err(|json_err| {
                    json_err.context(format!(
                        "config {} is neither TOML nor JSON ({toml_err:#})",
                        path.display()
                    ))
                })?,
            }
        }
    };

    config
        .validate()
        .with_context(|| format!("invalid config file {}", path.display()))?;
    Ok(config)
}

/// Parse configuration from TOML string
pub fn from_toml(content: &str) -> Result<RobotConfig> {
    toml::from_str(content).context("failed to parse config as TOML")
}

/// Parse configuration from JSON string
pub fn from_json(content: &str) -> Result<RobotConfig> {
    serde_json::from_str(content).context("failed to parse config as JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"{
        "printer": { "max_velocity": 1.0, "max_accel": 5.0 },
        "rails": {
            "x": { "position_endstop": 0.0, "position_min": -1.0, "position_max": 1.0 },
            "y": { "position_endstop": 0.0, "position_min": -1.0, "position_max": 1.0 },
            "z": { "position_endstop": 0.0, "position_min": -1.0, "position_max": 1.0 },
            "a": { "position_endstop": 0.0, "position_min": -1.0, "position_max": 1.0 },
            "b": { "position_endstop": 0.0, "position_min": -1.0, "position_max": 1.0 },
            "c": { "position_endstop": 1.0, "position_min": -1.0, "position_max": 1.0,
                   "homing_positive_dir": true }
        },
        "links": [
            { "name": "L1", "qlim": [-1.0, 1.0] },
            { "name": "L2", "qlim": [-1.0, 1.0] },
            { "name": "L3", "qlim": [-1.0, 1.0] },
            { "name": "L4", "qlim": [-1.0, 1.0] },
            { "name": "L5", "qlim": [-1.0, 1.0] },
            { "name": "L6", "qlim": [-1.0, 1.0] }
        ]
    }"#;

    #[test]
    fn test_parse_json() {
        let config = from_json(JSON).unwrap();
        assert_eq!(config.printer.kinematics, "joints");
        assert_eq!(config.printer.max_accel, 5.0);
        assert!(config.rails.c.homing_positive_dir);
        assert_eq!(config.links.len(), 6);
        config.validate().unwrap();
    }

    #[test]
    fn test_json_is_not_toml() {
        assert!(from_toml(JSON).is_err());
    }

    #[test]
    fn test_missing_rails() {
        let err = from_toml("[printer]\nmax_velocity = 1.0\n").unwrap_err();
        assert!(err.to_string().contains("TOML"));
    }
}
