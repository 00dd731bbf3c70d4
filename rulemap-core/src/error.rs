use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RulemapError {
    #[error("Failed to read input file at {path}: {source}")]
    InputRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output file at {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("rules_per_section must be a positive integer, got {0}")]
    InvalidSectionSize(usize),

    #[error("Unknown output format '{0}' (expected 'markmap' or 'json')")]
    UnknownFormat(String),

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Rendered document is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Failed to serialize rules: {0}")]
    Serialize(#[from] serde_json::Error),
}
