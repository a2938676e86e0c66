//! CLI error types.

use std::fmt;
use std::path::PathBuf;

use paltex::config::ConfigError;
use paltex::texture::TextureError;

/// Errors surfaced to the user by CLI commands.
#[derive(Debug)]
pub enum CliError {
    /// Texture construction or format parsing failed.
    Texture(TextureError),

    /// Configuration error.
    Config(String),

    /// Failed to read an input file.
    ReadFile { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Texture(e) => write!(f, "{}", e),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::ReadFile { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Texture(e) => Some(e),
            CliError::Config(_) => None,
            CliError::ReadFile { source, .. } => Some(source),
        }
    }
}

impl From<TextureError> for CliError {
    fn from(e: TextureError) -> Self {
        CliError::Texture(e)
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e.to_string())
    }
}
