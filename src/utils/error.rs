use thiserror::Error;

#[derive(Error, Debug)]
pub enum QrError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("QR service returned {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

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
    Network,
    Filesystem,
    Configuration,
}

impl QrError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            QrError::Http(_) | QrError::HttpStatus { .. } => ErrorCategory::Network,
            QrError::Io(_) => ErrorCategory::Filesystem,
            QrError::UrlParse(_)
            | QrError::ConfigValidationError { .. }
            | QrError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// 依錯誤類別決定退出碼，一律非零
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Network => 2,
            ErrorCategory::Filesystem => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QrError::Http(e) if e.is_connect() => {
                format!("Could not connect to the QR service: {}", e)
            }
            QrError::Http(e) if e.is_timeout() => {
                format!("The QR service did not respond in time: {}", e)
            }
            QrError::Http(e) => format!("Downloading the QR code failed: {}", e),
            QrError::HttpStatus { status, .. } => {
                format!("The QR service rejected the request (HTTP {})", status)
            }
            QrError::Io(e) => format!("Could not write the QR code image: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            QrError::Http(_) => "Check your network connection and the --endpoint value",
            QrError::HttpStatus { status, .. } if *status >= 500 => {
                "The QR service is having trouble; try again later"
            }
            QrError::HttpStatus { .. } => "Check the payload and size parameters",
            QrError::Io(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "Make sure the output directory exists; it is not created automatically"
            }
            QrError::Io(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                "Choose an output path you have write permission for"
            }
            QrError::Io(_) => "Check the output path and available disk space",
            _ => "Fix the configuration value and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, QrError>;
