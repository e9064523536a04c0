use crate::error::{Error, Result};
use crate::links::{LinkEntry, LinkTable};
use crate::output::DEFAULT_OUTPUT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub links: Vec<LinkEntry>,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            links: LinkTable::builtin().entries().to_vec(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from an optional path, falling back to defaults when none is given
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Merge CLI arguments into config (CLI takes precedence)
    pub fn merge_cli(&mut self, output: Option<PathBuf>) {
        if let Some(out) = output {
            self.output.path = out;
        }
    }

    /// The configured links as an ordered table
    pub fn table(&self) -> LinkTable {
        LinkTable::new(self.links.clone())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.output.path.as_os_str().is_empty() {
            return Err(Error::config_validation("output path must not be empty"));
        }

        for (i, link) in self.links.iter().enumerate() {
            if link.label.trim().is_empty() {
                return Err(Error::config_validation(format!(
                    "link {} has an empty label",
                    i + 1
                )));
            }
            if link.url.trim().is_empty() {
                return Err(Error::config_validation(format!(
                    "link {} ({}) has an empty url",
                    i + 1,
                    link.label
                )));
            }
            if has_line_break(&link.label) || has_line_break(&link.url) {
                return Err(Error::config_validation(format!(
                    "link {} contains a line break",
                    i + 1
                )));
            }
        }

        Ok(())
    }
}

/// Each link must render as exactly one bullet line
fn has_line_break(s: &str) -> bool {
    s.contains(['\n', '\r'])
}
