use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeywordError {
    #[error("Invalid match type: '{value}' (expected one of Exact, Phrase, Modified, Broad)")]
    InvalidMatchType { value: String },

    #[error("At least one match type must be selected")]
    NoMatchTypes,

    #[error("Generation would produce {requested} rows, above the limit of {limit}")]
    RowLimitExceeded { requested: usize, limit: usize },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Decode error: {message}")]
    DecodeError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
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
    Input,
    Configuration,
    Limit,
    Encoding,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl KeywordError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            KeywordError::InvalidMatchType { .. } | KeywordError::NoMatchTypes => {
                ErrorCategory::Input
            }
            KeywordError::RowLimitExceeded { .. } => ErrorCategory::Limit,
            KeywordError::CsvError(_)
            | KeywordError::SerializationError(_)
            | KeywordError::DecodeError { .. } => ErrorCategory::Encoding,
            KeywordError::IoError(_) => ErrorCategory::System,
            KeywordError::ConfigError { .. }
            | KeywordError::ConfigValidationError { .. }
            | KeywordError::InvalidConfigValueError { .. }
            | KeywordError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Limit => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Encoding => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            KeywordError::InvalidMatchType { .. } => {
                "Use only Exact, Phrase, Modified or Broad as match types".to_string()
            }
            KeywordError::NoMatchTypes => "Select at least one match type".to_string(),
            KeywordError::RowLimitExceeded { limit, .. } => format!(
                "Reduce the number of products, words or match types, or raise max_rows above {}",
                limit
            ),
            KeywordError::CsvError(_) | KeywordError::DecodeError { .. } => {
                "Check that the payload was produced by this tool and was not truncated".to_string()
            }
            KeywordError::SerializationError(_) => "Retry with the csv output format".to_string(),
            KeywordError::IoError(_) => {
                "Check that input files exist and the output directory is writable".to_string()
            }
            KeywordError::ConfigError { .. }
            | KeywordError::ConfigValidationError { .. }
            | KeywordError::InvalidConfigValueError { .. }
            | KeywordError::MissingConfigError { .. } => {
                "Review the configuration values and try again".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            KeywordError::InvalidMatchType { value } => {
                format!("'{}' is not a supported match type", value)
            }
            KeywordError::RowLimitExceeded { requested, limit } => format!(
                "Too many keywords requested ({} rows, limit {})",
                requested, limit
            ),
            KeywordError::IoError(e) => format!("File access failed: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, KeywordError>;
