use failure::Fail;

#[derive(Debug, Fail)]
pub enum ConfigError {
    #[fail(display = "no configuration file path provided")]
    MissingPath,
    #[fail(display = "tick rate must be greater than zero")]
    InvalidTickRate,
    #[fail(display = "invalid log level: {}", _0)]
    InvalidLogLevel(String),
}
