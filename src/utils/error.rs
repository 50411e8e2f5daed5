use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegroupError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Directory traversal error: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config file parse error: {0}")]
    TomlError(#[from] toml::de::Error),

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

    #[error("Cannot derive a group label from filename: {file_name}")]
    UnlabeledFileError { file_name: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

pub type Result<T> = std::result::Result<T, RegroupError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Filesystem,
    Data,
    Internal,
}

/// Drives the process exit code: Low = 0, Medium = 2, High = 1, Critical = 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RegroupError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) | Self::WalkError(_) => ErrorCategory::Filesystem,
            Self::TomlError(_)
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::ValidationError { .. } => ErrorCategory::Configuration,
            Self::UnlabeledFileError { .. } | Self::ProcessingError { .. } => ErrorCategory::Data,
            Self::SerializationError(_) => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::IoError(_) | Self::WalkError(_) => ErrorSeverity::Critical,
            Self::UnlabeledFileError { .. } => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::IoError(_) | Self::WalkError(_) => {
                "Check that the root directory exists and is readable, and that the disk is not full"
                    .to_string()
            }
            Self::TomlError(_) => "Check the TOML syntax of the config file".to_string(),
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::ValidationError { .. } => {
                "Review the command-line flags; run with --help for accepted values".to_string()
            }
            Self::UnlabeledFileError { .. } => {
                "Rename the file to end in _<label>.csv, or rerun with --on-unlabeled skip"
                    .to_string()
            }
            Self::ProcessingError { .. } | Self::SerializationError(_) => {
                "Rerun with --verbose and inspect the log output".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("A filesystem operation failed: {}", e),
            Self::WalkError(e) => format!("Could not walk the directory tree: {}", e),
            Self::TomlError(e) => format!("The config file could not be parsed: {}", e),
            Self::UnlabeledFileError { file_name } => {
                format!("'{}' has no _<label>.csv tail to group by", file_name)
            }
            other => other.to_string(),
        }
    }
}
