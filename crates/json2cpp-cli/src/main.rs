//! json2cpp CLI - C++ class generator for JSON schemas
//!
//! Reads a schema describing enums, classes and structs and writes a
//! declarations file plus an implementation file with RapidJSON based
//! `fromJson` / `toJson` / `validate` members.
//!
//! ```text
//! json2cpp --schema person.json --oheader include --ocpp src --ofile person
//! ```

use clap::Parser;
use std::path::PathBuf;

mod config;
mod generate;
mod verify;

use config::{CliOverrides, GeneratorConfig};

#[derive(Parser, Debug)]
#[command(name = "json2cpp")]
#[command(author, version, about = "Generate C++ classes with RapidJSON (de)serialization from a JSON schema", long_about = None)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Path to the JSON schema
    #[arg(long)]
    schema: PathBuf,

    /// Output directory for the declarations file (default: .)
    #[arg(long, value_name = "DIR")]
    oheader: Option<PathBuf>,

    /// Output directory for the implementation file (default: .)
    #[arg(long, value_name = "DIR")]
    ocpp: Option<PathBuf>,

    /// Base name of both generated files (default: json2cpp_gen)
    #[arg(long, value_name = "NAME")]
    ofile: Option<String>,

    /// Create missing output directories (default: true)
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    create_dir: Option<bool>,

    /// Fail instead of creating missing output directories
    #[arg(long, conflicts_with = "create_dir")]
    no_create_dir: bool,

    /// TOML configuration file; command-line flags take precedence
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Treat unresolved attribute types and dropped constraints as errors
    #[arg(long)]
    strict: bool,

    /// Syntax-check the generated code with the system C++ compiler
    #[arg(long)]
    verify: bool,

    /// Extra include directory for --verify (repeatable)
    #[arg(short = 'I', long = "include", value_name = "DIR")]
    include: Vec<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let create_dirs = if self.no_create_dir {
            Some(false)
        } else {
            self.create_dir
        };

        CliOverrides {
            header_dir: self.oheader.clone(),
            source_dir: self.ocpp.clone(),
            file_name: self.ofile.clone(),
            create_dirs,
            strict: self.strict,
            verify: self.verify,
            include_dirs: self.include.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = GeneratorConfig::resolve(cli.config.as_deref(), cli.overrides())?;
    let warnings = json2cpp_logging::init_logging(config.log_level()?);

    generate::run(&cli.schema, &config)?;

    if let Some(summary) = warning_summary(&warnings.messages()) {
        print!("{summary}");
    }

    Ok(())
}

/// Closing summary listing every warning of the run, or `None` for a clean run.
fn warning_summary(messages: &[String]) -> Option<String> {
    if messages.is_empty() {
        return None;
    }

    let mut summary = format!("Finished with {} warning(s):\n", messages.len());
    for message in messages {
        summary.push_str(&format!("  - {message}\n"));
    }
    Some(summary)
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod main_tests;
