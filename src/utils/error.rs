use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddressError {
    #[error("Address {id} not found")]
    NotFound { id: i32 },

    #[error("Validation error on '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("Blacklist request failed: {0}")]
    GatewayError(#[from] reqwest::Error),

    #[error("Blacklist service responded with status {status}")]
    GatewayStatusError { status: u16 },

    #[error("Address store error: {message}")]
    StoreError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Validation,
    Gateway,
    Store,
    Configuration,
    System,
}

impl AddressError {
    pub fn not_found(id: i32) -> Self {
        Self::NotFound { id }
    }

    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::StoreError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::ValidationError { .. } => ErrorCategory::Validation,
            Self::GatewayError(_) | Self::GatewayStatusError { .. } => ErrorCategory::Gateway,
            Self::StoreError { .. } => ErrorCategory::Store,
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// 對應的 HTTP 狀態碼
    pub fn status_code(&self) -> u16 {
        match self.category() {
            ErrorCategory::NotFound => 404,
            ErrorCategory::Validation => 400,
            ErrorCategory::Gateway => 502,
            ErrorCategory::Store | ErrorCategory::Configuration | ErrorCategory::System => 500,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::NotFound | ErrorCategory::Validation => self.to_string(),
            ErrorCategory::Gateway => "Blacklist service is unavailable".to_string(),
            ErrorCategory::Store => "Address store is unavailable".to_string(),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::NotFound => "Check the address id and try again",
            ErrorCategory::Validation => "Provide non-empty building, street, town and postcode",
            ErrorCategory::Gateway => "Check that the blacklist endpoint is reachable",
            ErrorCategory::Store => "Check the address store and retry the request",
            ErrorCategory::Configuration => "Fix the configuration file or command line flags",
            ErrorCategory::System => "Check file paths and permissions",
        }
    }
}

pub type Result<T> = std::result::Result<T, AddressError>;
