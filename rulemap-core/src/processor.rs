use crate::config::{MarkmapConfig, OutputFormat};
use crate::error::RulemapError;
use crate::extractor::{Extractor, RuleBlockExtractor};
use crate::renderer::{paginate, render_with_format, save_with_format};
use crate::types::RuleRecord;
use anyhow::Result;
use log::{debug, info};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Captured intermediate outputs from each pipeline stage
/// Used for testing and diagnostics — lets you inspect/compare each boundary
#[derive(Debug, Clone, Serialize)]
pub struct PipelineStages {
    pub input: String,
    pub rules: Vec<RuleRecord>,
    pub document: String,
    pub section_count: usize,
    /// Format `document` was rendered in
    pub output_format: OutputFormat,
}

/// What a completed run produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessSummary {
    pub output_path: PathBuf,
    pub rule_count: usize,
    pub section_count: usize,
    pub bytes_written: usize,
    /// SHA-256 of the written document, hex encoded
    pub content_hash: String,
}

/// Simple profiler that collects timings for pipeline steps
pub struct StepProfiler {
    enabled: bool,
    timings: Vec<(String, Duration)>,
}

impl StepProfiler {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            timings: Vec::new(),
        }
    }

    pub fn time_step<F, R>(&mut self, step_name: &str, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        if !self.enabled {
            return f();
        }

        let start = Instant::now();
        let result = f();
        let elapsed = start.elapsed();

        self.timings.push((step_name.to_string(), elapsed));
        println!("⏱️  {}: {:.2}ms", step_name, elapsed.as_secs_f64() * 1000.0);

        result
    }

    pub fn timings(&self) -> &[(String, Duration)] {
        &self.timings
    }

    pub fn print_summary(&self) {
        if !self.enabled || self.timings.is_empty() {
            return;
        }

        println!("\n📊 Performance Summary:");
        let total: Duration = self.timings.iter().map(|(_, d)| *d).sum();

        for (step, duration) in &self.timings {
            let percentage = if total.is_zero() {
                0.0
            } else {
                (duration.as_secs_f64() / total.as_secs_f64()) * 100.0
            };
            println!(
                "   {:.<35} {:.2}ms ({:.1}%)",
                step,
                duration.as_secs_f64() * 1000.0,
                percentage
            );
        }
        println!("   {:.<35} {:.2}ms", "Total", total.as_secs_f64() * 1000.0);
    }
}

/// Hex SHA-256 of a rendered document
pub fn calculate_content_hash(contents: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(contents.as_bytes());
    format!("{:x}", hasher.finalize())
}

pub struct RuleProcessor {
    extractor: Box<dyn Extractor>,
}

impl Default for RuleProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleProcessor {
    /// Processor using the regex `rule { ... }` extractor
    pub fn new() -> Self {
        Self::new_with_extractor(Box::new(RuleBlockExtractor::new()))
    }

    pub fn new_with_extractor(extractor: Box<dyn Extractor>) -> Self {
        Self { extractor }
    }

    /// Read `input_path`, extract rules, render them and overwrite `output_path`.
    ///
    /// Nothing is written when the input cannot be read or the config is invalid.
    pub fn process_file(
        &self,
        input_path: &Path,
        output_path: &Path,
        config: &MarkmapConfig,
        enable_profiling: bool,
    ) -> Result<ProcessSummary> {
        config.validate()?;
        let mut profiler = StepProfiler::new(enable_profiling);

        info!(
            "Processing {} with {} ({} rules per section, {} format)",
            input_path.display(),
            self.extractor.name(),
            config.rules_per_section,
            config.output_format
        );

        let rules = profiler.time_step("Extract rules", || {
            self.extractor.extract_file(input_path)
        })?;
        let section_count = paginate(&rules, config.rules_per_section)?.len();
        debug!("{} rules across {} sections", rules.len(), section_count);

        let document = profiler.time_step("Render and write", || {
            save_with_format(&rules, output_path, config)
        })?;
        profiler.print_summary();

        Ok(ProcessSummary {
            output_path: output_path.to_path_buf(),
            rule_count: rules.len(),
            section_count,
            bytes_written: document.len(),
            content_hash: calculate_content_hash(&document),
        })
    }

    /// Run the pipeline in memory and keep every intermediate. The output file is not touched.
    pub fn capture_stages(
        &self,
        input_path: &Path,
        config: &MarkmapConfig,
    ) -> Result<PipelineStages> {
        config.validate()?;
        let input =
            std::fs::read_to_string(input_path).map_err(|source| RulemapError::InputRead {
                path: input_path.to_path_buf(),
                source,
            })?;
        let rules = self.extractor.extract(&input);
        let section_count = paginate(&rules, config.rules_per_section)?.len();
        let document = render_with_format(&rules, config)?;

        Ok(PipelineStages {
            input,
            rules,
            document,
            section_count,
            output_format: config.output_format,
        })
    }
}
