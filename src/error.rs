use thiserror::Error;

/// Errors that can occur while loading recipes or configuring a session
#[derive(Error, Debug)]
pub enum AppError {
    /// Failed to read the recipe data file
    #[error("Failed to read recipe data: {0}")]
    Io(#[from] std::io::Error),

    /// Recipe data is not valid JSON or does not match the recipe schema
    #[error("Failed to decode recipe data: {0}")]
    Json(#[from] serde_json::Error),

    /// Recipe data parsed but has an unexpected shape
    #[error("Invalid recipe data: {0}")]
    InvalidData(String),

    /// Filter category name not recognised
    #[error("Unknown filter category: {0}")]
    UnknownCategory(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, AppError>;
