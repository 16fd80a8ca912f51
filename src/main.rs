use anyhow::Result;
use clap::Parser;
use keysync::{run_check, CheckConfig, DocumentFormat, KeyMode, Language, ReportFormatter};
use std::path::PathBuf;
use std::process;

/// keysync - Check translation files against a reference locale
#[derive(Parser, Debug)]
#[command(name = "keysync")]
#[command(author, version, about, long_about = None)]
#[command(help_template = "{name} {version}\n{about}\n\nUSAGE:\n    {usage}\n\n{all-args}")]
struct Cli {
    /// Directory holding one {code}.{ext} file per language
    #[arg(short, long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Reference language whose keys are authoritative (default: en=English)
    #[arg(short, long, value_name = "CODE[=NAME]", value_parser = parse_language)]
    reference: Option<Language>,

    /// Languages to check, replacing the built-in list (e.g. "fr=French,de=German")
    #[arg(
        short = 'l',
        long = "lang",
        value_name = "CODE=NAME",
        value_delimiter = ',',
        value_parser = parse_language
    )]
    languages: Vec<Language>,

    /// Translation file format: json or yaml (default: json)
    #[arg(short, long, value_parser = parse_format)]
    format: Option<DocumentFormat>,

    /// TOML config file; command-line flags override its values
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Only compare leaf keys, ignoring intermediate sections
    #[arg(long)]
    leaves_only: bool,

    /// Exit with status 1 when any language is out of sync or fails to load
    #[arg(long)]
    strict: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Show debug diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_language(s: &str) -> Result<Language, String> {
    s.parse::<Language>().map_err(|e| e.to_string())
}

fn parse_format(s: &str) -> Result<DocumentFormat, String> {
    s.parse::<DocumentFormat>()
        .map_err(|_| format!("'{}' is not a supported format (expected json or yaml)", s))
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Runs the check and returns the process exit code
fn run(cli: &Cli) -> Result<i32> {
    let config = build_config(cli)?;

    tracing::debug!(
        dir = %config.translations_dir.display(),
        reference = %config.reference,
        languages = config.languages.len(),
        "starting key check"
    );

    let report = run_check(&config)?;

    let use_color = !cli.no_color && colored::control::SHOULD_COLORIZE.should_colorize();
    let formatter = ReportFormatter::new().with_color(use_color);
    print!("{}", formatter.format(&report));

    if cli.strict && !report.is_clean() {
        return Ok(1);
    }

    Ok(0)
}

/// Defaults, then the config file, then command-line overrides
fn build_config(cli: &Cli) -> Result<CheckConfig> {
    let mut config = match &cli.config {
        Some(path) => CheckConfig::from_file(path)?,
        None => CheckConfig::default(),
    };

    if let Some(dir) = &cli.dir {
        config.translations_dir = dir.clone();
    }
    if let Some(reference) = &cli.reference {
        config.reference = reference.clone();
    }
    if !cli.languages.is_empty() {
        config.languages = cli.languages.clone();
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.leaves_only {
        config.key_mode = KeyMode::LeavesOnly;
    }

    Ok(config)
}
