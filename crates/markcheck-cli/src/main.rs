//! markcheck — USPTO trademark filing compliance checker (TMEP §1401–§1403).
//! Entry point for the command-line binary.

mod config;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use markcheck_common::{ApplicationInput, EngineConfig};
use markcheck_engine::{
    analyze_identification, assess_classification, report, run_full_pipeline, ClassContext,
    FilingBasis, TrademarkApplication,
};
use markcheck_ingestion::parse_pdf;
use markcheck_nice::{get_class_info, suggest_class_for_keyword};

use crate::config::{Config, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "markcheck", version, about = "Rule-based USPTO trademark application checker")]
struct Cli {
    /// Path to markcheck.toml (overrides MARKCHECK_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format; defaults to the config's report.format
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run all three pillars on an application JSON file
    Assess { input: PathBuf },
    /// Run the §1401 classification checks only
    Classify { input: PathBuf },
    /// Review one identification of goods/services (§1402)
    Identify {
        text: String,
        /// Nice class the identification is filed under
        #[arg(long = "class")]
        class_number: Option<i32>,
        #[arg(long, default_value = "1(a)")]
        basis: String,
        /// Specimen description, used by the accuracy check
        #[arg(long)]
        specimen: Option<String>,
    },
    /// Extract an application from a filing PDF
    Extract {
        pdf: PathBuf,
        /// Run the full assessment on the extracted application
        #[arg(long)]
        assess: bool,
    },
    /// Rank Nice classes for a goods/services term
    Suggest { term: String },
    /// Show a Nice class record
    Class { number: i32 },
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    init_tracing(&config);

    let format = cli.format.unwrap_or(config.report.format);
    debug!(?format, "Configuration loaded");

    match cli.command {
        Command::Assess { input } => assess(&input, &config.engine, format),
        Command::Classify { input } => classify(&input, &config.engine, format),
        Command::Identify { text, class_number, basis, specimen } => {
            identify(&text, class_number, &basis, specimen.as_deref(), &config.engine, format)
        }
        Command::Extract { pdf, assess } => extract(&pdf, assess, &config.engine, format),
        Command::Suggest { term } => suggest(&term, format),
        Command::Class { number } => class(number, format),
    }
}

// ---------------------------------------------------------------------------
// Subcommands
// ---------------------------------------------------------------------------

fn load_input(path: &Path) -> anyhow::Result<ApplicationInput> {
    ApplicationInput::from_path(path)
        .with_context(|| format!("Failed to load application {}", path.display()))
}

fn assess(path: &Path, engine: &EngineConfig, format: OutputFormat) -> anyhow::Result<()> {
    let input = load_input(path)?;
    run_and_print(&input, engine, format)
}

fn run_and_print(input: &ApplicationInput, engine: &EngineConfig, format: OutputFormat) -> anyhow::Result<()> {
    let result = run_full_pipeline(input, engine);
    info!(assessment_id = %result.assessment_id, "Assessment finished");
    emit(format, &result, || result.render_text())
}

fn classify(path: &Path, engine: &EngineConfig, format: OutputFormat) -> anyhow::Result<()> {
    let input = load_input(path)?;
    let app = TrademarkApplication::from_input(&input);
    let result = assess_classification(&app, engine);
    emit(format, &result, || result.report.clone())
}

fn identify(
    text: &str,
    class_number: Option<i32>,
    basis: &str,
    specimen: Option<&str>,
    engine: &EngineConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let context = class_number
        .map(|n| ClassContext::from_kb(n, FilingBasis::parse(basis), "", specimen.unwrap_or("")));
    let analysis = analyze_identification(text, context.as_ref(), &engine.pillar2);
    emit(format, &analysis, || report::identification::render(&analysis))
}

fn extract(pdf: &Path, then_assess: bool, engine: &EngineConfig, format: OutputFormat) -> anyhow::Result<()> {
    let extracted = parse_pdf(pdf).with_context(|| format!("Failed to extract {}", pdf.display()))?;

    if then_assess {
        return run_and_print(&extracted.application, engine, format);
    }
    // Extraction output is data either way.
    println!("{}", serde_json::to_string_pretty(&extracted)?);
    Ok(())
}

fn suggest(term: &str, format: OutputFormat) -> anyhow::Result<()> {
    let suggestions = suggest_class_for_keyword(term);
    emit(format, &suggestions, || {
        if suggestions.is_empty() {
            return format!("No class suggestions for \"{term}\".");
        }
        suggestions
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}. Class {:>2}  {:<40} score {}", i + 1, s.class_number, s.title, s.score))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

fn class(number: i32, format: OutputFormat) -> anyhow::Result<()> {
    let Some(info) = get_class_info(number) else {
        println!("Class {number} is not a valid Nice class (1–45).");
        return Ok(());
    };
    emit(format, info, || {
        format!(
            "Class {}  {}  [{}]\n{}\nKeywords: {}",
            info.number,
            info.title,
            info.category.as_str(),
            info.description,
            info.keywords.join(", ")
        )
    })
}

/// Print `value` as JSON, or the text rendering.
fn emit<T: Serialize>(format: OutputFormat, value: &T, text: impl FnOnce() -> String) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => println!("{}", text()),
    }
    Ok(())
}
