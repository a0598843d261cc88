use thiserror::Error;

#[derive(Error, Debug)]
pub enum BucketError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{message}")]
    LoadError { message: String },

    #[error("{message}")]
    UpdateError { message: String },

    #[error("No place with id '{id}' in the catalog")]
    PlaceNotFound { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BucketError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BucketError::PlaceNotFound { .. } => ErrorSeverity::Low,
            BucketError::ApiError(_)
            | BucketError::LoadError { .. }
            | BucketError::UpdateError { .. } => ErrorSeverity::Medium,
            BucketError::SerializationError(_) => ErrorSeverity::High,
            BucketError::IoError(_)
            | BucketError::ConfigError { .. }
            | BucketError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BucketError::ApiError(_) | BucketError::LoadError { .. } => {
                "Check that the backend is running and reachable at --server-url"
            }
            BucketError::UpdateError { .. } => {
                "Your list was restored to its previous state; try the change again"
            }
            BucketError::IoError(_) => "Check that the data directory exists and is writable",
            BucketError::SerializationError(_) => {
                "Check that the JSON files contain arrays of places"
            }
            BucketError::ConfigError { .. } | BucketError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and restart"
            }
            BucketError::PlaceNotFound { .. } => "Run the `places` command to see valid ids",
        }
    }

    /// Process exit code for the CLI binaries.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 4,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, BucketError>;
