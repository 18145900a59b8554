// SPDX-License-Identifier: MIT

//! Runtime configuration
//!
//! Resolution order, last wins: built-in defaults, optional YAML file,
//! `EXPRGRAPH_*` environment variables (a `.env` file is honored), CLI flags.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ExprGraphError, Result};
use crate::render::OutputFormat;
use crate::visualize::Mode;

pub const ENV_FORMAT: &str = "EXPRGRAPH_FORMAT";
pub const ENV_MODE: &str = "EXPRGRAPH_MODE";
pub const ENV_PORT: &str = "EXPRGRAPH_PORT";

/// Settings shared by the CLI and the HTTP surface
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct VizConfig {
    /// Output format for graphs
    pub format: OutputFormat,
    /// Default builder for requests that do not name one
    pub mode: Mode,
    /// Graphviz rank direction (TB, LR, BT, RL)
    pub rankdir: String,
    /// Port of the HTTP surface
    pub port: u16,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            mode: Mode::Heuristic,
            rankdir: "TB".to_string(),
            port: 3000,
        }
    }
}

impl VizConfig {
    /// Load from an optional YAML file, then apply environment overrides
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let content = fs::read_to_string(path)?;
                Self::parse_yaml(&content)?
            }
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from a YAML string; missing keys keep their defaults
    pub fn parse_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: VizConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (the process environment in production)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(format) = lookup(ENV_FORMAT) {
            self.format = format.parse()?;
        }
        if let Some(mode) = lookup(ENV_MODE) {
            self.mode = mode.parse()?;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| ExprGraphError::config(format!("Invalid port: {}", port)))?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        match self.rankdir.as_str() {
            "TB" | "LR" | "BT" | "RL" => Ok(()),
            other => Err(ExprGraphError::config(format!("Invalid rankdir: {}", other))),
        }
    }
}
