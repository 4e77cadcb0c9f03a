use std::io;
use thiserror::Error;

/// Custom error type for barstat
#[derive(Error, Debug)]
pub enum BarError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Mixer error: {0}")]
    Mixer(String),

    #[error("Time format error: {0}")]
    Format(String),

    #[error("Display error: {0}")]
    Display(String),

    #[error("Metric collection failed: {0}")]
    MetricCollection(String),
}

/// Result type alias for barstat
pub type Result<T> = std::result::Result<T, BarError>;

impl BarError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        BarError::Config(msg.into())
    }

    /// Create a parse error for malformed source data
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        BarError::Parse(msg.into())
    }

    pub fn mixer<S: Into<String>>(msg: S) -> Self {
        BarError::Mixer(msg.into())
    }

    pub fn format<S: Into<String>>(msg: S) -> Self {
        BarError::Format(msg.into())
    }

    pub fn display<S: Into<String>>(msg: S) -> Self {
        BarError::Display(msg.into())
    }

    pub fn metric_collection<S: Into<String>>(msg: S) -> Self {
        BarError::MetricCollection(msg.into())
    }
}
