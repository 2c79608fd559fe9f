/// Config file loading and creation for the voterank CLI.
///
/// Config lives at ~/.config/voterank/config.toml.
/// All fields are optional. CLI args override config values.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::bail;

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct VoterankConfig {
    /// z-score for the best (Wilson lower bound) column.
    pub z: Option<f64>,
    /// Default sort key: "hot", "best", "score" or "input".
    pub sort: Option<String>,
    /// Emit JSON instead of a table.
    pub json: Option<bool>,
}

pub const DEFAULT_CONFIG_TEMPLATE: &str = "\
# voterank configuration
# All values here can be overridden by CLI flags.

# z-score for the best (Wilson lower bound) score.
# 1.281551565545 = 80% one-sided confidence, 1.96 = ~95%.
# z = 1.281551565545

# Sort key for printed rows: \"hot\", \"best\", \"score\" or \"input\"
# sort = \"hot\"

# Print JSON instead of a table (pass --table to override for one run)
# json = false
";

/// Returns the default config path: ~/.config/voterank/config.toml
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| bail("HOME environment variable not set"));
    PathBuf::from(home).join(".config").join("voterank").join("config.toml")
}

/// Parse config file contents.
pub fn parse_config(content: &str) -> Result<VoterankConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> VoterankConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            tracing::debug!(path = %path.display(), "loaded config file");
            parse_config(&content).unwrap_or_else(|e| {
                bail(format!("Failed to parse config at {}: {e}", path.display()))
            })
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            VoterankConfig::default()
        }
        Err(e) => bail(format!("Failed to read config at {}: {e}", path.display())),
    }
}

/// Create the default config file. Errors if it already exists.
pub fn create_default_config() -> PathBuf {
    let path = config_path();

    if path.exists() {
        bail(format!("Config file already exists at {}", path.display()));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap_or_else(|e| {
            bail(format!("Failed to create directory {}: {e}", parent.display()))
        });
    }

    std::fs::write(&path, DEFAULT_CONFIG_TEMPLATE)
        .unwrap_or_else(|e| bail(format!("Failed to write config to {}: {e}", path.display())));

    path
}
