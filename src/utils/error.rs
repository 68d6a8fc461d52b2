use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpecificityError {
    #[error("Request to calculation service failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Error calling calculation service: {reason} (status {status})")]
    ServiceStatus { status: u16, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Service,
    Data,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SpecificityError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            // Rejected while building the request, before anything was sent.
            Self::HttpError(e) if e.is_builder() => ErrorCategory::Configuration,
            Self::HttpError(_) => ErrorCategory::Network,
            Self::ServiceStatus { .. } => ErrorCategory::Service,
            Self::SerializationError(_) | Self::CsvError(_) => ErrorCategory::Data,
            Self::IoError(_) => ErrorCategory::System,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => ErrorCategory::Configuration,
            Self::InvalidInput { .. } => ErrorCategory::Input,
        }
    }

    /// Failures of a single submission are `Medium`: the user can resubmit.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network | ErrorCategory::Service | ErrorCategory::Data => {
                ErrorSeverity::Medium
            }
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::HttpError(e) if e.is_timeout() => {
                "The calculation service did not answer in time".to_string()
            }
            Self::HttpError(e) if e.is_connect() => {
                "Could not connect to the calculation service".to_string()
            }
            Self::HttpError(_) => "The request to the calculation service failed".to_string(),
            Self::ServiceStatus { reason, .. } => {
                format!("The calculation service rejected the request: {}", reason)
            }
            Self::SerializationError(_) => {
                "The calculation service returned an unreadable response".to_string()
            }
            Self::CsvError(_) => "Could not write results as CSV".to_string(),
            Self::IoError(e) => format!("I/O failure: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting {} is invalid: {}", field, reason)
            }
            Self::ConfigValidationError { field, message } => {
                format!("Setting {} is invalid: {}", field, message)
            }
            Self::InvalidInput { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check the network connection and the endpoint address, then submit again"
            }
            ErrorCategory::Service => {
                "Submit again later; the service may be temporarily unavailable"
            }
            ErrorCategory::Data => {
                "Verify that the endpoint points at a host specificity calculator"
            }
            ErrorCategory::Configuration => "Fix the configuration file or command-line flags",
            ErrorCategory::Input => "Counts must not increase from species up to classes",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, SpecificityError>;
