use crate::error::RulemapError;
use crate::types::DEFAULT_RULES_PER_SECTION;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

// Default value functions for serde
fn default_rules_per_section() -> usize {
    DEFAULT_RULES_PER_SECTION
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Sectioned markdown outline for Markmap (default)
    #[default]
    Markmap,
    /// Extracted records as a pretty-printed JSON array
    Json,
}

impl FromStr for OutputFormat {
    type Err = RulemapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markmap" | "md" | "markdown" => Ok(OutputFormat::Markmap),
            "json" => Ok(OutputFormat::Json),
            other => Err(RulemapError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Markmap => write!(f, "markmap"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkmapConfig {
    /// Maximum number of rules under one "## Section" heading
    #[serde(default = "default_rules_per_section")]
    pub rules_per_section: usize,
    /// What gets written to the output path
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Default for MarkmapConfig {
    fn default() -> Self {
        Self {
            rules_per_section: DEFAULT_RULES_PER_SECTION,
            output_format: OutputFormat::Markmap,
        }
    }
}

impl MarkmapConfig {
    /// Load config from a YAML file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, RulemapError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| RulemapError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: MarkmapConfig =
            serde_yaml::from_str(&content).map_err(|source| RulemapError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load config with fallback to default
    pub fn load_with_fallback(path: Option<&str>) -> Self {
        match path {
            Some(p) => Self::load_from_file(p).unwrap_or_else(|e| {
                warn!("Failed to load config from {p}, using defaults ({e})");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Apply values given on the command line; `None` keeps the loaded value.
    pub fn with_overrides(
        mut self,
        rules_per_section: Option<usize>,
        output_format: Option<OutputFormat>,
    ) -> Self {
        if let Some(rules_per_section) = rules_per_section {
            self.rules_per_section = rules_per_section;
        }
        if let Some(output_format) = output_format {
            self.output_format = output_format;
        }
        self
    }

    pub fn validate(&self) -> Result<(), RulemapError> {
        if self.rules_per_section == 0 {
            return Err(RulemapError::InvalidSectionSize(self.rules_per_section));
        }
        Ok(())
    }
}
