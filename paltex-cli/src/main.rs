//! PalTex CLI - Command-line interface
//!
//! Lists the supported compressed texture formats, inspects encoded mip
//! level payloads on disk, and manages the configuration file.

mod commands;
mod error;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use paltex::config::ConfigFile;

use commands::common::EncodingKind;
use commands::config::ConfigCommands;
use error::CliError;

#[derive(Debug, Parser)]
#[command(name = "paltex", version, about = "Compressed texture inspection")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List texture formats and their driver constants
    Formats {
        /// Only list one encoding family
        #[arg(long, value_enum)]
        kind: Option<EncodingKind>,
    },

    /// Validate encoded mip level files and describe the resulting texture
    Inspect {
        /// Texture format (e.g. PALETTE8_RGBA8, BC1); defaults to texture.default_format
        #[arg(short, long)]
        format: Option<String>,

        /// Width of mip level 0, enables per-level size checks
        #[arg(long, requires = "height")]
        width: Option<u32>,

        /// Height of mip level 0
        #[arg(long, requires = "width")]
        height: Option<u32>,

        /// Texture name (defaults to the first file's stem)
        #[arg(short, long)]
        name: Option<String>,

        /// One file per mip level, most detailed first
        #[arg(required = true)]
        files: Vec<std::path::PathBuf>,
    },

    /// View or change configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn init_logging(verbose: bool, config: &ConfigFile) {
    let fallback = if verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli, config: ConfigFile) -> Result<(), CliError> {
    match cli.command {
        Commands::Formats { kind } => commands::formats::run(kind),
        Commands::Inspect {
            format,
            width,
            height,
            name,
            files,
        } => commands::inspect::run(
            commands::inspect::InspectArgs {
                format,
                dimensions: width.zip(height),
                name,
                files,
            },
            &config,
        ),
        Commands::Config { command } => commands::config::run(command),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match ConfigFile::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {} (using defaults)", e);
            ConfigFile::default()
        }
    };
    init_logging(cli.verbose, &config);

    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
