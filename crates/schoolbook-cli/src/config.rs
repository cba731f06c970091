//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level schoolbook configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolbookConfig {
    /// School name shown on the dashboard header.
    #[serde(default = "default_school_name")]
    pub school_name: String,

    /// Directory holding the persisted store snapshot.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Rows shown by the dashboard leaderboard panel.
    #[serde(default = "default_top_n")]
    pub leaderboard_top_n: usize,

    /// Simulated seed fetch latency in milliseconds.
    #[serde(default = "default_seed_delay_ms")]
    pub seed_delay_ms: u64,

    /// Seconds before an initial load gives up.
    #[serde(default = "default_load_timeout_secs")]
    pub load_timeout_secs: u64,
}

fn default_school_name() -> String {
    "Greenwood Elementary School".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./schoolbook-data")
}

fn default_top_n() -> usize {
    10
}

fn default_seed_delay_ms() -> u64 {
    250
}

fn default_load_timeout_secs() -> u64 {
    30
}

impl Default for SchoolbookConfig {
    fn default() -> Self {
        Self {
            school_name: default_school_name(),
            data_dir: default_data_dir(),
            leaderboard_top_n: default_top_n(),
            seed_delay_ms: default_seed_delay_ms(),
            load_timeout_secs: default_load_timeout_secs(),
        }
    }
}

/// Load config from an explicit path, or `./schoolbook.toml` if present,
/// or defaults.
pub fn load_config_from(path: Option<&Path>) -> Result<SchoolbookConfig> {
    let config_path = match path {
        Some(p) => {
            if p.exists() {
                Some(p.to_path_buf())
            } else {
                anyhow::bail!("config file not found: {}", p.display());
            }
        }
        None => {
            let local = PathBuf::from("schoolbook.toml");
            local.exists().then_some(local)
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(SchoolbookConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_no_file() {
        let config = load_config_from(None).unwrap();
        assert_eq!(config.leaderboard_top_n, 10);
        assert_eq!(config.seed_delay_ms, 250);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: SchoolbookConfig =
            toml::from_str("school_name = \"Northside Middle\"").unwrap();
        assert_eq!(config.school_name, "Northside Middle");
        assert_eq!(config.data_dir, PathBuf::from("./schoolbook-data"));
    }

    #[test]
    fn explicit_missing_path_errors() {
        assert!(load_config_from(Some(Path::new("/nonexistent/x.toml"))).is_err());
    }
}
