use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Config,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ProbeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ProbeError::IoError(_) => ErrorCategory::Io,
            ProbeError::SerializationError(_) => ErrorCategory::Serialization,
            ProbeError::ConfigError { .. }
            | ProbeError::InvalidConfigValueError { .. }
            | ProbeError::MissingConfigError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::High,
            ErrorCategory::Serialization => ErrorSeverity::High,
            ErrorCategory::Config => ErrorSeverity::Medium,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ProbeError::IoError(e) => format!("Cannot read the file: {}", e),
            ProbeError::SerializationError(e) => {
                format!("Failed to build the JSON report: {}", e)
            }
            ProbeError::ConfigError { message } => format!("Configuration problem: {}", message),
            ProbeError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid {}: {}", value, field, reason)
            }
            ProbeError::MissingConfigError { field } => {
                format!("Required option '{}' was not provided", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Io => {
                "Check that the file exists and that you have permission to read it".to_string()
            }
            ErrorCategory::Serialization => {
                "Re-run without --json, or report this as a bug".to_string()
            }
            ErrorCategory::Config => {
                "Run with --help to see the accepted options and value ranges".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;
