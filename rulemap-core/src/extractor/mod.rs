//! Rule Extractors
//!
//! This module provides the extraction layer: raw document text goes in, an
//! ordered list of [`RuleRecord`](crate::types::RuleRecord)s comes out.
//!
//! ## Architecture
//!
//! ```text
//! Markdown document (free-form text)
//!     ↓
//! [Extractor]  rule { ... } blocks → five named fields
//!     ↓
//! Vec<RuleRecord> (input order)
//!     ↓
//! [Renderer]
//!     ↓
//! Markmap outline
//! ```
//!
//! ## Available Extractors
//!
//! - `RuleBlockExtractor` - regex-based `rule { ... }` block extraction

pub mod traits;
pub mod rule_block;

// Re-export main types
pub use traits::Extractor;
pub use rule_block::{parse_list_values, parse_rule_body, RuleBlockExtractor, FIELD_PATTERNS};
