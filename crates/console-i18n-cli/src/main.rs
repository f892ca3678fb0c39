#![forbid(unsafe_code)]

//! `console-i18n` command-line tool.
//!
//! Lints catalog JSON files for cross-locale consistency, resolves keys
//! against the bundled console catalogs, and exports those catalogs.
//! Locale defaults come from `CONSOLE_I18N_*` environment variables; log
//! filtering from `RUST_LOG`.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use console_i18n::I18nConfig;
use tracing_subscriber::EnvFilter;

use crate::commands::{CliError, CliResult};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "console-i18n", version, about = "Monitoring-console catalog tool")]
struct Cli {
    /// Log output format on stderr.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare catalog JSON files against a reference catalog.
    Check(CheckCommand),
    /// Resolve one key against the bundled catalogs.
    Resolve(ResolveCommand),
    /// Print a bundled catalog as JSON.
    Export(ExportCommand),
    /// Print coverage of the bundled catalogs.
    Coverage(CoverageCommand),
}

#[derive(Args, Debug)]
struct CheckCommand {
    /// Reference catalog (normally the fallback locale).
    #[arg(long, value_name = "FILE")]
    reference: PathBuf,
    /// Catalogs to check.
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,
    /// Emit reports as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct ResolveCommand {
    /// Locale to resolve in (defaults to the configured active locale).
    #[arg(long)]
    locale: Option<String>,
    namespace: String,
    key: String,
    /// Substitution parameter, repeatable.
    #[arg(long = "param", value_name = "NAME=VALUE", value_parser = parse_param)]
    params: Vec<(String, String)>,
}

#[derive(Args, Debug)]
struct ExportCommand {
    /// Bundled locale to export.
    #[arg(long, default_value = console_locales::ZH_CN_LOCALE)]
    locale: String,
}

#[derive(Args, Debug)]
struct CoverageCommand {
    /// Emit the report as JSON.
    #[arg(long)]
    json: bool,
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{raw}'")),
    }
}

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    let _ = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

fn load_config() -> CliResult<I18nConfig> {
    let parsed = I18nConfig::from_env_with_diagnostics();
    if parsed.errors.is_empty() {
        return Ok(parsed.config);
    }
    for error in &parsed.errors {
        tracing::error!(%error, "invalid locale configuration");
    }
    Err(CliError::Config(
        parsed
            .errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; "),
    ))
}

fn run(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Commands::Check(command) => {
            let output = commands::check(&command.reference, &command.files, command.json)?;
            print!("{}", output.text);
            Ok(if output.clean {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
        Commands::Resolve(command) => {
            let config = load_config()?;
            let text = commands::resolve(
                &config,
                command.locale.as_deref(),
                &command.namespace,
                &command.key,
                &command.params,
            )?;
            println!("{text}");
            Ok(ExitCode::SUCCESS)
        }
        Commands::Export(command) => {
            println!("{}", commands::export(&command.locale)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Coverage(command) => {
            let config = load_config()?;
            print!("{}", commands::coverage(&config, command.json)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_format);
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}
