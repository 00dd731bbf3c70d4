use anyhow::Result;
use clap::Parser;
use std::path::Path;

use rulemap::{completion_notice, save_stages, MarkmapConfig, OutputFormat, RuleProcessor};

#[derive(Parser)]
#[command(name = "rulemap")]
#[command(about = "Turn firewall rule blocks in a markdown file into a Markmap mind-map outline")]
struct Args {
    /// Path to the markdown file containing `rule { ... }` blocks
    #[arg(short, long, required_unless_present = "show_configs")]
    input: Option<String>,

    /// Output file path (overwritten if it exists)
    #[arg(short, long, default_value = "firewall_rules_markmap_limit25.md")]
    output: String,

    /// Rules per "## Section" heading (overrides the config file)
    #[arg(short = 'n', long)]
    rules_per_section: Option<usize>,

    /// Path to custom config file (YAML format)
    #[arg(short, long)]
    config: Option<String>,

    /// Output format: markmap or json (overrides the config file)
    #[arg(short = 'f', long)]
    output_format: Option<OutputFormat>,

    /// Show available config options and exit
    #[arg(long)]
    show_configs: bool,

    /// Time each pipeline step
    #[arg(long)]
    profile: bool,

    /// Dump all intermediate pipeline stage outputs to a directory
    /// Captures: input text, extracted rules (JSON), rendered document, summary
    #[arg(long)]
    dump_stages: bool,

    /// Directory for stage dump output
    #[arg(long, default_value = "test_outputs/stages")]
    stages_dir: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if args.show_configs {
        show_help();
        return Ok(());
    }

    let Some(input) = args.input.as_deref() else {
        // clap enforces --input unless --show-configs was given
        return Ok(());
    };

    println!("🦀 Rulemap: firewall rules → Markmap");

    let config = MarkmapConfig::load_with_fallback(args.config.as_deref());
    if let Some(config_path) = &args.config {
        println!("📋 Loaded config from: {}", config_path);
    } else {
        println!("📋 Using default config");
    }

    // Apply CLI overrides to config
    let config = config.with_overrides(args.rules_per_section, args.output_format);
    log::debug!("Effective config: {config:?}");

    let processor = RuleProcessor::new();
    println!("📄 Processing: {}", input);

    if args.dump_stages {
        println!("\n🔬 Pipeline stage dump mode");
        match processor.capture_stages(Path::new(input), &config) {
            Ok(stages) => {
                save_stages(&stages, Path::new(input), Path::new(&args.stages_dir))?;
                println!("\n✅ All stages dumped to: {}", args.stages_dir);
                return Ok(());
            }
            Err(e) => {
                eprintln!("❌ Stage dump failed: {e:#}");
                std::process::exit(1);
            }
        }
    }

    match processor.process_file(Path::new(input), Path::new(&args.output), &config, args.profile) {
        Ok(summary) => {
            println!(
                "📊 {} rules in {} sections ({} bytes, sha256 {})",
                summary.rule_count,
                summary.section_count,
                summary.bytes_written,
                &summary.content_hash[..12]
            );
            println!("{}", completion_notice(config.output_format, &summary.output_path));
        }
        Err(e) => {
            eprintln!("❌ Processing failed: {e:#}");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn show_help() {
    println!("\n📋 Available Configuration Options:");
    println!("  --config <path>              Load custom config file (YAML)");
    println!("  --input <path>               Markdown file with rule {{ ... }} blocks");
    println!("  --output <path>              Output file (default: firewall_rules_markmap_limit25.md)");
    println!("  --rules-per-section <n>      Rules per section heading (default: 25)");
    println!("  --output-format <fmt>        Output format: markmap or json");
    println!("  --profile                    Time each pipeline step");
    println!("  --dump-stages                Write intermediate stages to --stages-dir");

    println!("\n📄 Output Formats:");
    println!("  markmap  - Sectioned markdown outline for Markmap (default)");
    println!("  json     - Extracted rules as a JSON array");

    println!("\n📁 Config file keys:");
    println!("  rules_per_section: 25");
    println!("  output_format: markmap");

    println!("\n📝 Usage Examples:");
    println!("  cargo run -- -i policy.md");
    println!("  cargo run -- -i policy.md -o markmap.md -n 10");
    println!("  cargo run -- -i policy.md -c rulemap.yaml -f json");
    println!("\n🔧 Logging: set RUST_LOG=debug for extractor diagnostics");
}
