use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid config TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid cluster table: {0}")]
    InvalidClusterTable(String),
}
