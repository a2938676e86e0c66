//! Configuration management CLI commands.
//!
//! Provides `config get`, `config set`, `config list`, and `config path`.

use clap::Subcommand;
use paltex::config::{config_file_path, ConfigFile, ConfigKey};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Get a configuration value
    Get {
        /// Configuration key in format section.key (e.g., texture.default_format)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key in format section.key (e.g., texture.default_format)
        key: String,

        /// Value to set
        value: String,
    },

    /// List all configuration settings
    List,

    /// Show the configuration file path
    Path,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Get { key } => {
            let config = ConfigFile::load()?;
            println!("{}", parse_key(&key)?.get(&config));
            Ok(())
        }
        ConfigCommands::Set { key, value } => {
            let mut config = ConfigFile::load()?;
            apply(&mut config, &key, &value)?;
            config.save()?;
            println!("Set {} = {}", key, value);
            Ok(())
        }
        ConfigCommands::List => {
            let config = ConfigFile::load()?;
            for line in list(&config) {
                println!("{}", line);
            }
            Ok(())
        }
        ConfigCommands::Path => {
            println!("{}", config_file_path().display());
            Ok(())
        }
    }
}

fn parse_key(key: &str) -> Result<ConfigKey, CliError> {
    key.parse().map_err(|_| {
        CliError::Config(format!(
            "Unknown configuration key '{}'. Use 'paltex config list' to see available keys.",
            key
        ))
    })
}

fn apply(config: &mut ConfigFile, key: &str, value: &str) -> Result<(), CliError> {
    parse_key(key)?.set(config, value)?;
    Ok(())
}

fn list(config: &ConfigFile) -> Vec<String> {
    ConfigKey::ALL
        .iter()
        .map(|key| format!("{} = {}", key, key.get(config)))
        .collect()
}
