// All core functionality is in rulemap-core
// This CLI acts as a thin wrapper around the core library

// CLI-specific modules
pub mod report;
pub mod stages;

// Re-export core types for convenience
pub use rulemap_core::*;

// Re-export CLI utilities
pub use report::completion_notice;
pub use stages::save_stages;
