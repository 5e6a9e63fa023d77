use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid form state: {0}")]
    StateFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown sample: {0} (expected nginx or ubuntu)")]
    UnknownSample(String),

    #[error("Unsupported input file: {path} - {reason}")]
    UnsupportedInput { path: String, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Rendering failed: {0}")]
    Render(String),
}

impl From<std::fmt::Error> for Error {
    fn from(e: std::fmt::Error) -> Self {
        Error::Render(e.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::StateFormat(e.to_string())
    }
}
