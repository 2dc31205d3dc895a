//! Environment-driven configuration.

use std::str::FromStr;

use thiserror::Error;

/// Environment variable selecting the output format.
pub const FORMAT_ENV_VAR: &str = "MCC_FORMAT";

/// Errors raised while reading configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Unrecognized output format.
    #[error("Invalid MCC_FORMAT value: {value:?} (expected \"text\" or \"json\")")]
    InvalidFormat {
        /// The rejected value.
        value: String,
    },
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON document per lookup, or a JSON array for the full listing.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidFormat {
                value: s.to_string(),
            }),
        }
    }
}

/// Runtime configuration for the lookup binary.
#[derive(Debug, Clone, Default)]
pub struct LookupConfig {
    /// Output format.
    pub format: OutputFormat,
}

impl LookupConfig {
    /// Reads configuration from the environment, using defaults for unset
    /// variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_format_var(std::env::var(FORMAT_ENV_VAR).ok().as_deref())
    }

    fn from_format_var(format: Option<&str>) -> Result<Self, ConfigError> {
        let format = match format {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };
        Ok(Self { format })
    }
}
