use super::markmap::render_to_string;
use crate::config::{MarkmapConfig, OutputFormat};
use crate::error::RulemapError;
use crate::types::RuleRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Render rules in the configured output format.
pub fn render_with_format(
    rules: &[RuleRecord],
    config: &MarkmapConfig,
) -> Result<String, RulemapError> {
    match config.output_format {
        OutputFormat::Markmap => render_to_string(rules, config.rules_per_section),
        OutputFormat::Json => {
            config.validate()?;
            let mut json = serde_json::to_string_pretty(rules)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Overwrite `path` with `contents`.
///
/// Whatever reached the file before a failed write stays there.
pub fn write_document(path: &Path, contents: &str) -> Result<(), RulemapError> {
    let to_error = |source| RulemapError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(contents.as_bytes()).map_err(to_error)?;
    writer.flush().map_err(to_error)?;
    Ok(())
}

/// Render and write in one step; returns the rendered document.
pub fn save_with_format(
    rules: &[RuleRecord],
    path: &Path,
    config: &MarkmapConfig,
) -> Result<String, RulemapError> {
    let document = render_with_format(rules, config)?;
    write_document(path, &document)?;
    Ok(document)
}
