use failure::Error;
use serde::{Serialize, Deserialize};

use crate::simulation::SimulationConfig;
use crate::util::logging::LoggingConfig;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub logging: LoggingConfig,
    pub simulation: SimulationConfig,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            logging: LoggingConfig::default(),
            simulation: SimulationConfig::default(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> Result<Config, Error> {
        let contents = std::fs::read_to_string(path)?;
        Config::from_str(&contents)
    }

    pub fn from_str(contents: &str) -> Result<Config, Error> {
        let config: Config = toml::from_str(contents)?;

        config.simulation.tick_length()?;

        Ok(config)
    }
}
