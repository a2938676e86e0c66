//! Configuration file handling.
//!
//! Settings live in an INI file at `~/.paltex/config.ini`:
//!
//! ```ini
//! [texture]
//! default_format = PALETTE8_RGBA8
//! validate_level_sizes = true
//!
//! [logging]
//! level = info
//! ```
//!
//! A missing file is not an error; every setting has a default.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ini::Ini;
use thiserror::Error;

use crate::texture::PaletteFormat;

/// Directory name under the user's home directory.
pub const CONFIG_DIR_NAME: &str = ".paltex";

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.ini";

/// Default log filter used when neither the config nor `RUST_LOG` set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Errors that can occur while loading or editing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading or writing the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid INI.
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// A setting has a value that cannot be used.
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    /// A `section.key` name that does not exist.
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// `[texture]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureSettings {
    /// Palette format used when a command does not name one.
    pub default_format: PaletteFormat,
    /// Whether declared dimensions are checked against level sizes.
    pub validate_level_sizes: bool,
}

impl Default for TextureSettings {
    fn default() -> Self {
        Self {
            default_format: PaletteFormat::default(),
            validate_level_sizes: true,
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// `tracing-subscriber` filter directive, e.g. `info` or `paltex=debug`.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub texture: TextureSettings,
    pub logging: LoggingSettings,
}

/// Path of the user's configuration file.
pub fn config_file_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

impl ConfigFile {
    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_file_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_file(path).map_err(|e| match e {
            ini::Error::Io(io) => ConfigError::Io(io),
            other => ConfigError::Parse(other.to_string()),
        })?;
        Self::from_ini(&ini)
    }

    /// Parse from INI text.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::from_ini(&ini)
    }

    fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        for key in ConfigKey::ALL {
            if let Some(value) = ini.get_from(Some(key.section()), key.field()) {
                key.set(&mut config, value)?;
            }
        }
        Ok(config)
    }

    /// Save to the default location, creating the directory if needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_file_path())
    }

    /// Save to an explicit path, creating parent directories if needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.to_ini().write_to_file(path)?;
        Ok(())
    }

    fn to_ini(&self) -> Ini {
        let mut ini = Ini::new();
        for key in ConfigKey::ALL {
            ini.with_section(Some(key.section()))
                .set(key.field(), key.get(self));
        }
        ini
    }
}

/// Addressable configuration settings, named `section.field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    TextureDefaultFormat,
    TextureValidateLevelSizes,
    LoggingLevel,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 3] = [
        ConfigKey::TextureDefaultFormat,
        ConfigKey::TextureValidateLevelSizes,
        ConfigKey::LoggingLevel,
    ];

    pub fn section(&self) -> &'static str {
        match self {
            ConfigKey::TextureDefaultFormat | ConfigKey::TextureValidateLevelSizes => "texture",
            ConfigKey::LoggingLevel => "logging",
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            ConfigKey::TextureDefaultFormat => "default_format",
            ConfigKey::TextureValidateLevelSizes => "validate_level_sizes",
            ConfigKey::LoggingLevel => "level",
        }
    }

    /// Current value rendered as it would appear in the file.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::TextureDefaultFormat => config.texture.default_format.to_string(),
            ConfigKey::TextureValidateLevelSizes => {
                config.texture.validate_level_sizes.to_string()
            }
            ConfigKey::LoggingLevel => config.logging.level.clone(),
        }
    }

    /// Parse `value` and store it.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigError> {
        match self {
            ConfigKey::TextureDefaultFormat => {
                config.texture.default_format =
                    value.parse().map_err(|e: crate::texture::TextureError| {
                        self.invalid(value, e.to_string())
                    })?;
            }
            ConfigKey::TextureValidateLevelSizes => {
                config.texture.validate_level_sizes = parse_bool(value)
                    .ok_or_else(|| self.invalid(value, "expected true or false".to_string()))?;
            }
            ConfigKey::LoggingLevel => {
                let level = value.trim();
                if level.is_empty() {
                    return Err(self.invalid(value, "must not be empty".to_string()));
                }
                config.logging.level = level.to_string();
            }
        }
        Ok(())
    }

    fn invalid(&self, value: &str, reason: String) -> ConfigError {
        ConfigError::InvalidValue {
            key: self.to_string(),
            value: value.to_string(),
            reason,
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section(), self.field())
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|key| key.to_string() == wanted)
            .ok_or_else(|| ConfigError::UnknownKey(s.to_string()))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
