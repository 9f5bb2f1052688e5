use failure::Error;
use log::LevelFilter;

use crate::util::error::ConfigError;

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LoggingConfig {
    /// Level for every module outside of this crate.
    pub level: String,
    pub module_level: String,
}

impl Default for LoggingConfig {
    fn default() -> LoggingConfig {
        LoggingConfig {
            level: "warn".to_string(),
            module_level: "debug".to_string(),
        }
    }
}

fn parse_level(level: &str) -> Result<LevelFilter, ConfigError> {
    level.parse()
        .map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))
}

/// Installs the global logger. `RUST_LOG` still applies on top of the
/// configured levels.
pub fn configure(config: &LoggingConfig, module: &str) -> Result<(), Error> {
    let level = parse_level(&config.level)?;
    let module_level = parse_level(&config.module_level)?;

    env_logger::Builder::new()
        .filter_level(level)
        .filter_module(module, module_level)
        .parse_env("RUST_LOG")
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("info").unwrap(), LevelFilter::Info);
        assert_eq!(parse_level("TRACE").unwrap(), LevelFilter::Trace);
        assert!(parse_level("loud").is_err());
    }

    #[test]
    fn test_invalid_level_fails_before_init() {
        let config = LoggingConfig {
            level: "loud".to_string(),
            ..LoggingConfig::default()
        };

        assert!(configure(&config, "spritejump").is_err());
    }
}
