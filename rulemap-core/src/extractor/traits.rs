// Extractor abstraction for rule processing
//
// This is the boundary between reading a document (text) and working with
// structured rules. Everything after this point deals only with RuleRecords.

use crate::error::RulemapError;
use crate::types::RuleRecord;
use std::path::Path;

/// Extractor trait - converts document text into RuleRecords
///
/// Implementations must return records in the order they appear in the text
/// and must never drop a matched block, even when none of its fields match.
pub trait Extractor {
    /// Extract every rule from the full text content of a document.
    fn extract(&self, content: &str) -> Vec<RuleRecord>;

    /// Convenience method: read a file fully into memory, then extract.
    ///
    /// A missing or unreadable file is fatal and produces no records.
    fn extract_file(&self, input: &Path) -> Result<Vec<RuleRecord>, RulemapError> {
        let content = std::fs::read_to_string(input).map_err(|source| RulemapError::InputRead {
            path: input.to_path_buf(),
            source,
        })?;
        Ok(self.extract(&content))
    }

    /// Get extractor name for debugging/logging
    fn name(&self) -> &str;
}
