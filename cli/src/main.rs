//! docx2artifact CLI - DOCX to artifact conversion tool
//!
//! Extracts the paragraph text of a Word document and writes it as a YAML,
//! JSON, Markdown, or Python artifact.

use clap::{ArgAction, Parser, ValueEnum};
use colored::*;
use docx2artifact::{ArtifactFormat, PythonLiteral, RenderOptions};
use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Convert DOCX documents to YAML, JSON, Markdown, or Python artifacts
#[derive(Parser)]
#[command(
    name = "docx2artifact",
    version,
    about = "Convert DOCX files to artifacts",
    long_about = "docx2artifact - Extract paragraph text from a DOCX document.\n\n\
                  Writes the text as YAML or JSON (with metadata), Markdown, or a\n\
                  Python module. The output extension is derived from the format."
)]
struct Cli {
    /// Input DOCX file
    #[arg(long)]
    input: PathBuf,

    /// Output format
    #[arg(long, value_enum)]
    format: FormatArg,

    /// Output file (without extension)
    #[arg(long)]
    output: PathBuf,

    /// How text is embedded in the Python string literal
    #[arg(long, value_enum, default_value = "escaped")]
    python_literal: LiteralMode,

    /// Write non-ASCII characters unescaped in JSON output
    #[arg(long)]
    unicode_json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Output format
#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    /// YAML mapping with metadata (.yaml)
    Yaml,
    /// JSON mapping with metadata (.json)
    Json,
    /// Markdown document (.md)
    Markdown,
    /// Python module with a CONTENT constant (.py)
    Python,
}

impl From<FormatArg> for ArtifactFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Yaml => ArtifactFormat::Yaml,
            FormatArg::Json => ArtifactFormat::Json,
            FormatArg::Markdown => ArtifactFormat::Markdown,
            FormatArg::Python => ArtifactFormat::Python,
        }
    }
}

/// Python literal mode
#[derive(Clone, Copy, ValueEnum)]
enum LiteralMode {
    /// Escape backslashes and delimiter quotes
    Escaped,
    /// Embed text unchanged, failing if it would break the literal
    Verbatim,
}

impl From<LiteralMode> for PythonLiteral {
    fn from(mode: LiteralMode) -> Self {
        match mode {
            LiteralMode::Escaped => PythonLiteral::Escaped,
            LiteralMode::Verbatim => PythonLiteral::Verbatim,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("{}: logging disabled: {}", "Warning".yellow(), e);
    }

    match run(cli) {
        Ok(output) => {
            println!("Successfully converted to {}", output.display());
        }
        Err(e) => {
            // colored checks stdout for a tty, but this label goes to stderr
            colored::control::set_override(std::io::stderr().is_terminal());
            eprintln!("{}: {}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> docx2artifact::Result<PathBuf> {
    let format = ArtifactFormat::from(cli.format);
    let options = RenderOptions::new()
        .with_python_literal(cli.python_literal.into())
        .with_ascii_json(!cli.unicode_json);

    let pb = create_spinner("Extracting text...");
    let result = docx2artifact::convert(&cli.input, format, &cli.output, &options);
    pb.finish_and_clear();

    result
}

fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Install the stderr logger. Fails only if a logger is already set.
fn init_logging(verbosity: u8) -> Result<(), log::SetLoggerError> {
    // stdout is reserved for the status line
    TermLogger::init(
        log_level(verbosity),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.blue} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
