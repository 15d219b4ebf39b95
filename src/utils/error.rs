use thiserror::Error;

/// Why a fetch of the remote comment collection did not produce items.
///
/// Caught at the fetch boundary and turned into the store's `failed` state;
/// the `Display` text is what the viewer shows inline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    #[error("HTTP error! status: {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchFailure::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            FetchFailure::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            }
        } else {
            FetchFailure::Transport(err.to_string())
        }
    }
}

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unrecognized command '{input}': {reason}")]
    CommandError { input: String, reason: String },
}

impl ViewerError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ViewerError::IoError(e) => format!("檔案存取失敗: {}", e),
            ViewerError::SerializationError(e) => format!("JSON 處理失敗: {}", e),
            ViewerError::TomlError(e) => format!("設定檔格式錯誤: {}", e),
            ViewerError::ConfigError { message } => format!("設定錯誤: {}", message),
            ViewerError::InvalidConfigValueError { field, reason, .. } => {
                format!("設定值 '{}' 無效: {}", field, reason)
            }
            ViewerError::CommandError { input, reason } => {
                format!("無法執行指令 '{}': {}", input, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ViewerError::IoError(_) => "Check that the file exists and is readable",
            ViewerError::SerializationError(_) => "Report this output problem with --verbose logs",
            ViewerError::TomlError(_) => "Fix the TOML syntax in the configuration file",
            ViewerError::ConfigError { .. }
            | ViewerError::InvalidConfigValueError { .. } => {
                "Review the command-line flags and configuration file"
            }
            ViewerError::CommandError { .. } => "Type 'help' to list available commands",
        }
    }
}

pub type Result<T> = std::result::Result<T, ViewerError>;
