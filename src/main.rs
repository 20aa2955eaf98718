// file: src/main.rs
// description: commandline application entry point
// reference: application bootstrap and orchestration

use anyhow::{Context, Result, anyhow};
use clap::{ArgAction, Parser};
use doc_analyzer::utils::logging::{format_error, format_success, format_warning};
use doc_analyzer::{
    AnalyzerError, Config, ConsoleRenderer, DocumentAnalyzer, ErrorKind, JsonExporter,
    ProgressTracker, Validator,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "doc_analyzer")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(
    about = "Summarize documents and extract named entities and keywords",
    long_about = None
)]
struct Cli {
    /// Document to analyze (.pdf, .docx or .txt). Prompts when omitted.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    /// Write the full report as JSON
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    #[arg(long, requires = "output")]
    pretty: bool,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue, conflicts_with = "quiet")]
    verbose: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    quiet: bool,

    /// Number of keywords to display
    #[arg(long, value_name = "NUM")]
    max_keywords: Option<usize>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if !cli.color {
        colored::control::set_override(false);
    }
    doc_analyzer::utils::logging::init_logger(cli.color, cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("{}", format_error(&format!("Error: {:#}", e)));
            ExitCode::from(exit_code(&e))
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(&cli.config)?;

    let path = match &cli.file {
        Some(path) => path.clone(),
        None => prompt_for_path(&mut io::stdin().lock(), &mut io::stdout())?,
    };

    info!("Analyzing {}", path.display());

    let analyzer = DocumentAnalyzer::from_config(&config)
        .with_progress(ProgressTracker::new(!cli.quiet, cli.color));

    let report = match analyzer.analyze_file(&path)? {
        Some(report) => report,
        None => {
            println!(
                "{}",
                format_warning("Error: No text extracted from the document.")
            );
            return Ok(());
        }
    };

    let max_keywords = cli
        .max_keywords
        .unwrap_or(config.analysis.display_keywords);
    print!("{}", ConsoleRenderer::new(max_keywords).render(&report));

    if let Some(output) = &cli.output {
        JsonExporter::new(cli.pretty)
            .write(&report, output)
            .map_err(|e| anyhow!("Failed to write report: {}", e))?;
        println!(
            "{}",
            format_success(&format!("Report saved to {}", output.display()))
        );
    }

    let stats = analyzer.progress().get_stats();
    info!(
        "Analysis complete in {:.2}s",
        stats.total().as_secs_f64()
    );
    if let Some((stage, elapsed)) = stats.slowest() {
        info!("Slowest stage: {} ({:.2}s)", stage, elapsed.as_secs_f64());
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<Config> {
    info!("Loading configuration from: {}", path.display());

    if path.exists() {
        return Config::load(Some(path)).context("Failed to load configuration");
    }

    warn!(
        "Config file {} not found, using default configuration",
        path.display()
    );
    Config::load(None).context("Failed to load configuration")
}

/// Asks for a path until an existing file is entered. End of input aborts.
fn prompt_for_path(input: &mut impl BufRead, output: &mut impl Write) -> Result<PathBuf> {
    loop {
        write!(output, "Enter the path to the document: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Err(anyhow!("No document path provided"));
        }

        let raw = Validator::sanitize_input_path(&line);
        if raw.is_empty() {
            continue;
        }

        let path = PathBuf::from(&raw);
        if Validator::validate_file_path(&path).is_ok() {
            return Ok(path);
        }

        writeln!(
            output,
            "Error: File '{}' does not exist. Please try again.",
            raw
        )?;
    }
}

fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<AnalyzerError>().map(AnalyzerError::kind) {
        Some(ErrorKind::UnsupportedFormat) => 2,
        Some(ErrorKind::ExtractionFailure) => 3,
        Some(ErrorKind::InferenceFailure) => 4,
        Some(ErrorKind::Other) | None => 1,
    }
}
