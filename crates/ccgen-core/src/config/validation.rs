//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_github(config)?;
    validate_eol(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_github(config: &Config) -> Result<()> {
    if let Err(e) = url::Url::parse(&config.github.api_url) {
        return Err(ConfigError::InvalidValue {
            field: "github.api_url".to_string(),
            message: e.to_string(),
        }
        .into());
    }

    if config.github.token_env.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "github.token_env".to_string(),
            message: "token_env cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_eol(config: &Config) -> Result<()> {
    if config.eol.support_days <= 0 {
        return Err(ConfigError::InvalidValue {
            field: "eol.support_days".to_string(),
            message: "must be a positive number of days".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_invalid_api_url() {
        let mut config = Config::default();
        config.github.api_url = "not a url".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_empty_token_env() {
        let mut config = Config::default();
        config.github.token_env = String::new();
        assert!(validate_config(&config).is_err());
    }
}
