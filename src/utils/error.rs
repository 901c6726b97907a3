use thiserror::Error;

/// 取得寵物清單失敗時顯示給使用者的唯一訊息
pub const FETCH_FAILED_MESSAGE: &str = "No se pudo obtener la información de tus mascotas.";

#[derive(Error, Debug)]
pub enum PawmiError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Pet list request returned status {status}")]
    FetchFailed { status: u16 },

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 依嚴重程度決定的程序結束碼
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Low => 0,
            Self::Medium => 2,
            Self::High => 1,
            Self::Critical => 3,
        }
    }
}

impl PawmiError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) | Self::FetchFailed { .. } => ErrorCategory::Network,
            Self::CsvError(_) | Self::SerializationError(_) | Self::ProcessingError { .. } => {
                ErrorCategory::Data
            }
            Self::ZipError(_) | Self::IoError(_) => ErrorCategory::Storage,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Storage | ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息，不含內部細節
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(_) | Self::FetchFailed { .. } => FETCH_FAILED_MESSAGE.to_string(),
            Self::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            Self::MissingConfigError { field } => {
                format!("Configuration field '{}' is required", field)
            }
            Self::IoError(_) | Self::ZipError(_) => {
                "Could not write the feeding guidance files".to_string()
            }
            Self::CsvError(_) | Self::SerializationError(_) | Self::ProcessingError { .. } => {
                "The pet data could not be processed".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check the network connection and the pet list endpoint, then try again",
            ErrorCategory::Data => "Check that the endpoint returns a JSON array of pet records",
            ErrorCategory::Storage => "Check that the output path exists and is writable",
            ErrorCategory::Configuration => "Review the command line flags or the TOML configuration file",
        }
    }
}

pub type Result<T> = std::result::Result<T, PawmiError>;
