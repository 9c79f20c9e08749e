//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::FundMeConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parse and validate configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<FundMeConfig, ConfigError> {
    let config: FundMeConfig = toml::from_str(content).map_err(ConfigError::Parse)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<FundMeConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    parse_config(&content)
}

/// Load from `path` when given, otherwise validate and return the defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<FundMeConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => {
            let config = FundMeConfig::default();
            validate_config(&config).map_err(ConfigError::Validation)?;
            Ok(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [contract]
            address = "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512"
            "#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(
            config.contract.address,
            "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512"
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/fundme.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_syntax_error_is_parse_error() {
        let err = parse_config("[wallet\nenabled = true").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_errors_are_joined() {
        let err = parse_config(
            r#"
            [wallet]
            rpc_timeout_secs = 0

            [contract]
            address = "nope"
            "#,
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Validation failed: "));
        assert!(message.contains("wallet.rpc_timeout_secs"));
        assert!(message.contains(", contract.address"));
    }

    #[test]
    fn test_example_file_matches_defaults() {
        let config = parse_config(include_str!("../../fundme.example.toml")).unwrap();
        let defaults = FundMeConfig::default();
        assert_eq!(config.wallet.rpc_url, defaults.wallet.rpc_url);
        assert_eq!(config.contract.address, defaults.contract.address);
        assert_eq!(config.chain.native_currency, defaults.chain.native_currency);
        assert_eq!(config.observability.log_level, defaults.observability.log_level);
    }

    #[test]
    fn test_no_path_uses_defaults() {
        let config = load_or_default(None).unwrap();
        assert!(config.wallet.enabled);
    }
}
