//! Error types for the logging core

pub type Result<T> = std::result::Result<T, LogError>;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error from the configuration layer
    #[error("config error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Writer error (generic)
    #[error("writer error: {0}")]
    Writer(String),

    /// Destination rollover failure
    #[error("rotation failed for '{path}': {message}")]
    Rotation { path: String, message: String },

    /// A batched writer refusing work until its error state is cleared
    #[error("writer in sticky error state: {0}")]
    Sticky(String),
}

impl LogError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LogError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LogError::Writer(msg.into())
    }

    /// Create a rotation error
    pub fn rotation(path: impl Into<String>, message: impl Into<String>) -> Self {
        LogError::Rotation {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LogError::config("FileWriter", "empty path pattern");
        assert!(matches!(err, LogError::InvalidConfiguration { .. }));

        let err = LogError::writer("socket gone");
        assert!(matches!(err, LogError::Writer(_)));

        let err = LogError::rotation("/var/log/app.log", "disk full");
        assert!(matches!(err, LogError::Rotation { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LogError::config("TcpWriter", "missing addr");
        assert_eq!(
            err.to_string(),
            "invalid configuration for TcpWriter: missing addr"
        );

        let err = LogError::rotation("/var/log/app.log", "disk full");
        assert_eq!(
            err.to_string(),
            "rotation failed for '/var/log/app.log': disk full"
        );

        let err = LogError::Sticky("flush refused".to_string());
        assert_eq!(err.to_string(), "writer in sticky error state: flush refused");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: LogError = io_err.into();
        assert!(matches!(err, LogError::Io(_)));
        assert!(err.to_string().contains("access denied"));
    }
}
