use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("AI request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("AI endpoint returned status {status}")]
    AiStatus { status: u16 },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Settings file error: {0}")]
    SettingsError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("You can only compare 2 doctors at a time")]
    SelectionLimit,
}

pub type Result<T> = std::result::Result<T, AppError>;
