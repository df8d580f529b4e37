use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CastError {
    #[error("--host option is required")]
    MissingHost,

    #[error("Invalid {field} parameter '{value}': {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to connect to {host}:{port}: {message}")]
    Connection {
        host: String,
        port: u16,
        message: String,
    },

    #[error("Device error: {0}")]
    Device(String),

    #[error("Receiver was closed")]
    ReceiverClosed,

    #[error("Already casting. Aborting due to the use of --no-interrupt option.")]
    AlreadyCasting,

    #[error("No response from device within {0:?}")]
    Timeout(Duration),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Session task failed: {0}")]
    Task(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Network,
    Device,
    Configuration,
    Internal,
}

impl CastError {
    pub fn invalid_argument(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        CastError::InvalidArgument {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CastError::MissingHost | CastError::InvalidArgument { .. } => ErrorCategory::Usage,
            CastError::Connection { .. } | CastError::Timeout(_) => ErrorCategory::Network,
            CastError::Device(_) | CastError::ReceiverClosed | CastError::AlreadyCasting => {
                ErrorCategory::Device
            }
            CastError::Config { .. } => ErrorCategory::Configuration,
            CastError::Io(_) | CastError::Serialization(_) | CastError::Task(_) => {
                ErrorCategory::Internal
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CastError::MissingHost => {
                "Pass --host <address>, set CHROMECAST_HOST, or add [device] host to the config file"
            }
            CastError::InvalidArgument { .. } => "Volume values have to be floats between 0.0 and 1.0",
            CastError::Connection { .. } => {
                "Check that the device is powered on and reachable on the same network"
            }
            CastError::Timeout(_) => "Increase --timeout or check the device's network connection",
            CastError::ReceiverClosed => "The receiver application was stopped on the device",
            CastError::AlreadyCasting => "Run without --no-interrupt to replace the current session",
            CastError::Device(_) => "Run with --verbose to inspect the device messages",
            CastError::Config { .. } => "Fix the configuration file and try again",
            CastError::Io(_) | CastError::Serialization(_) | CastError::Task(_) => {
                "Run with --verbose and report the issue if it persists"
            }
        }
    }

    /// Every failure maps to the same process exit code.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, CastError>;
