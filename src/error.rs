// file: src/error.rs
// version: 1.0.0
// guid: 3f8a1c52-9b47-4e06-a1d3-7c2e94f06b18

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, InstallError>;

/// Error types for the ERPNext install agent
#[derive(Error, Debug)]
pub enum InstallError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Command `{command}` failed with exit code {exit_code:?}")]
    ProcessError {
        command: String,
        exit_code: Option<i32>,
    },

    #[error("System error: {0}")]
    SystemError(String),
}

impl InstallError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a new system error
    pub fn system(msg: impl Into<String>) -> Self {
        Self::SystemError(msg.into())
    }
}
