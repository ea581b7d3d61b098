use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "pagecraft.config.json";

/// Export target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Html,
    React,
}

impl Target {
    /// Parse a `--target` value: `html`, `react` or `all`
    pub fn parse_list(value: &str) -> Result<Vec<Target>> {
        match value {
            "html" => Ok(vec![Target::Html]),
            "react" => Ok(vec![Target::React]),
            "all" => Ok(vec![Target::Html, Target::React]),
            other => Err(anyhow!("Unknown target: {} (expected html, react or all)", other)),
        }
    }
}

/// Pagecraft configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory artifacts are written to
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    #[serde(default = "default_targets")]
    pub targets: Vec<Target>,

    /// Emit `Page.tsx` rather than `Page.jsx`
    #[serde(default = "default_typescript")]
    pub typescript: bool,
}

fn default_out_dir() -> String {
    "dist".to_string()
}

fn default_targets() -> Vec<Target> {
    vec![Target::Html, Target::React]
}

fn default_typescript() -> bool {
    true
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Get absolute path to the output directory
    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            targets: default_targets(),
            typescript: default_typescript(),
        }
    }
}
