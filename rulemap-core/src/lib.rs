// Rulemap Core Library
//
// Extracts `rule { ... }` firewall rule blocks from markdown text and renders
// them as a sectioned outline for Markmap mind-map visualization.

pub mod config;
pub mod error;
pub mod extractor;
pub mod processor;
pub mod renderer;
pub mod types;

// Re-export main types and functions for easy use
pub use config::{MarkmapConfig, OutputFormat};
pub use error::RulemapError;
pub use extractor::{Extractor, RuleBlockExtractor};
pub use processor::{PipelineStages, ProcessSummary, RuleProcessor};
pub use types::*;
