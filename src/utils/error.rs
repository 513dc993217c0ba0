use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Invalid CSV file: {reason}")]
    InvalidFormat { reason: String },

    #[error("Invalid data on line {line}: {reason}")]
    InvalidLine { line: u64, reason: String },

    #[error("Failed to persist records: {message}")]
    PersistenceFailure { message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Storage,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn invalid_format(reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            reason: reason.into(),
        }
    }

    pub fn invalid_line(line: u64, reason: impl Into<String>) -> Self {
        Self::InvalidLine {
            line,
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::InvalidFormat { .. } | EtlError::InvalidLine { .. } | EtlError::CsvError(_) => {
                ErrorCategory::Input
            }
            EtlError::PersistenceFailure { .. } | EtlError::SerializationError(_) => {
                ErrorCategory::Storage
            }
            EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            EtlError::IoError(_) | EtlError::ProcessingError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Message shown to the person who submitted the file.
    pub fn user_friendly_message(&self) -> String {
        match self {
            // Input errors are already written for the uploader.
            EtlError::InvalidFormat { reason } => reason.clone(),
            EtlError::InvalidLine { line, reason } => format!("Line {}: {}", line, reason),
            EtlError::CsvError(e) => format!("The CSV file could not be read: {}", e),
            EtlError::PersistenceFailure { .. } | EtlError::SerializationError(_) => {
                "Unexpected error while saving the data. Please try again.".to_string()
            }
            EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. } => format!("Configuration problem: {}", self),
            EtlError::IoError(_) | EtlError::ProcessingError { .. } => {
                "Unexpected error while processing the file. Please try again.".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::InvalidFormat { .. } => {
                "Upload a non-empty .csv file whose header is Nome,SobreNome,Email,Sexo,IpAcesso,Idade,Nascimento"
            }
            EtlError::InvalidLine { .. } => "Fix the reported line and submit the whole file again",
            EtlError::CsvError(_) => "Make sure the file is comma separated UTF-8 text",
            EtlError::PersistenceFailure { .. } | EtlError::SerializationError(_) => {
                "Check that the record store location is writable and retry the import"
            }
            EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. } => {
                "Review the command line flags and the TOML configuration file"
            }
            EtlError::IoError(_) => "Check that the file exists and is readable",
            EtlError::ProcessingError { .. } => "Retry the operation; report it if it keeps failing",
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
