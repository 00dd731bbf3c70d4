use anyhow::Result;
use rulemap_core::{OutputFormat, PipelineStages};
use std::fs;
use std::path::{Path, PathBuf};

/// Write every intermediate pipeline stage into `output_dir`.
///
/// Returns the paths written, in stage order.
pub fn save_stages(stages: &PipelineStages, input_path: &Path, output_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;
    let mut written = Vec::new();

    // Stage 1: Raw input text
    let input_copy = output_dir.join("stage1_input.md");
    fs::write(&input_copy, &stages.input)?;
    println!("  💾 {}", input_copy.display());
    written.push(input_copy);

    // Stage 2: Extracted rules
    let rules_path = output_dir.join("stage2_rules.json");
    fs::write(&rules_path, serde_json::to_string_pretty(&stages.rules)?)?;
    println!("  💾 {} ({} rules)", rules_path.display(), stages.rules.len());
    written.push(rules_path);

    // Stage 3: Rendered document, named after its format
    let document_path = output_dir.join(stage3_file_name(stages.output_format));
    fs::write(&document_path, &stages.document)?;
    println!("  💾 {} ({} sections)", document_path.display(), stages.section_count);
    written.push(document_path);

    // Summary file: quick reference for validation scripts
    let summary = serde_json::json!({
        "input": input_path.display().to_string(),
        "captured_at": chrono::Utc::now().to_rfc3339(),
        "output_format": stages.output_format.to_string(),
        "stage_counts": {
            "input_bytes": stages.input.len(),
            "rules": stages.rules.len(),
            "sections": stages.section_count,
            "document_bytes": stages.document.len(),
        }
    });
    let summary_path = output_dir.join("summary.json");
    fs::write(&summary_path, serde_json::to_string_pretty(&summary)?)?;
    println!("  💾 {}", summary_path.display());
    written.push(summary_path);

    Ok(written)
}

fn stage3_file_name(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Markmap => "stage3_markmap.md",
        OutputFormat::Json => "stage3_document.json",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rulemap_core::{MarkmapConfig, RuleProcessor};

    #[test]
    fn test_save_stages_writes_all_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("rules.md");
        fs::write(&input, r#"rule { name = "Allow-SSH" protocols = ["TCP"] }"#).unwrap();

        let stages = RuleProcessor::new()
            .capture_stages(&input, &MarkmapConfig::default())
            .unwrap();
        let out_dir = dir.path().join("stages");
        let written = save_stages(&stages, &input, &out_dir).unwrap();

        assert_eq!(written.len(), 4);
        assert!(written.iter().all(|p| p.exists()));

        let summary: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out_dir.join("summary.json")).unwrap()).unwrap();
        assert_eq!(summary["stage_counts"]["rules"], 1);
        assert_eq!(summary["stage_counts"]["sections"], 1);

        let document = fs::read_to_string(out_dir.join("stage3_markmap.md")).unwrap();
        assert!(document.contains("### Rule: Allow-SSH"));
    }

    #[test]
    fn test_json_stage_dump_is_named_after_format() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("rules.md");
        fs::write(&input, r#"rule { name = "Allow-SSH" }"#).unwrap();

        let config = MarkmapConfig {
            output_format: OutputFormat::Json,
            ..Default::default()
        };
        let stages = RuleProcessor::new().capture_stages(&input, &config).unwrap();
        let out_dir = dir.path().join("stages");
        save_stages(&stages, &input, &out_dir).unwrap();

        assert!(!out_dir.join("stage3_markmap.md").exists());
        let document = fs::read_to_string(out_dir.join("stage3_document.json")).unwrap();
        let rules: serde_json::Value = serde_json::from_str(&document).unwrap();
        assert_eq!(rules[0]["name"], "Allow-SSH");
    }
}
