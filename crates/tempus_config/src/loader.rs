//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::TempusConfig;
use std::path::Path;

/// Loads and validates a `tempus.toml` configuration file.
pub fn load_config(path: &Path) -> Result<TempusConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `tempus.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<TempusConfig, ConfigError> {
    let config: TempusConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that configuration values are consistent and in range.
fn validate_config(config: &TempusConfig) -> Result<(), ConfigError> {
    for (name, value) in config.delays.entries() {
        if value < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "delays.{name} must be non-negative, got {value}"
            )));
        }
    }

    config.analysis.resolved_period_ns()?;

    if config.limits.max_nodes == 0 {
        return Err(ConfigError::ValidationError(
            "limits.max_nodes must be at least 1".to_string(),
        ));
    }
    if config.limits.max_fanin == 0 {
        return Err(ConfigError::ValidationError(
            "limits.max_fanin must be at least 1".to_string(),
        ));
    }
    if config.limits.max_fanout == 0 {
        return Err(ConfigError::ValidationError(
            "limits.max_fanout must be at least 1".to_string(),
        ));
    }

    Ok(())
}
