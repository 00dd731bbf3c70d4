use rulemap_core::OutputFormat;
use std::path::Path;

/// Line printed once the output file has been written.
pub fn completion_notice(format: OutputFormat, output_path: &Path) -> String {
    match format {
        OutputFormat::Markmap => format!("Markdown output written to {}", output_path.display()),
        OutputFormat::Json => format!("JSON output written to {}", output_path.display()),
    }
}
