//! Apigen Code Generator
//!
//! Generates a typed TypeScript client module from HTTP API definitions.

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use apigen_definitions::console::define_console_api;
use apigen_gen::config::GeneratorConfig;
use apigen_gen::errors::GeneratorError;
use apigen_gen::loader::load_api_from_file;
use apigen_gen::output::generate_and_write;

/// Apigen code generator - transforms API definitions into a TypeScript client
#[derive(Parser, Debug)]
#[command(name = "apigen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Built-in API definition to generate code for (e.g., "console")
    #[arg(short, long, conflicts_with = "schema", required_unless_present = "schema")]
    api: Option<String>,

    /// JSON schema file holding the API definition
    #[arg(short, long)]
    schema: Option<PathBuf>,

    /// Output file for the generated module
    #[arg(short, long, default_value = "web/src/api/v0.gen.ts")]
    output: PathBuf,

    /// TOML file with generator settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let api = match (&cli.api, &cli.schema) {
        (_, Some(schema)) => load_api_from_file(schema)?,
        (Some(name), None) => builtin_api(name)?,
        (None, None) => {
            return Err(GeneratorError::ConfigError(
                "either --api or --schema is required".to_string(),
            ));
        }
    };
    debug!(
        groups = api.groups.len(),
        endpoints = api.endpoints().count(),
        root = %api.root_path(),
        "resolved API definition"
    );

    let config = match &cli.config {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::default(),
    };

    let code = generate_and_write(&api, &config, &cli.output, cli.dry_run)?;

    if !cli.dry_run {
        report_success(&cli.output, api.groups.len(), code.len());
    }

    Ok(())
}

fn builtin_api(name: &str) -> Result<apigen_define::Api, GeneratorError> {
    match name {
        "console" => Ok(define_console_api()),
        other => Err(GeneratorError::ConfigError(format!(
            "Unknown API: '{}'. Available APIs: console",
            other
        ))),
    }
}

fn report_success(path: &Path, groups: usize, bytes: usize) {
    eprintln!(
        "{} {} ({} client classes, {} bytes)",
        "Generated".green().bold(),
        path.display(),
        groups,
        bytes
    );
}

/// Initialize tracing from RUST_LOG, falling back to the verbosity flags.
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,apigen_gen=info".to_string(),
            2 => "info,apigen_gen=debug".to_string(),
            _ => "debug,apigen_gen=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose >= 2)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
