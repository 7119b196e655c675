use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for API operations
#[derive(Debug, Error)]
pub enum Error {
    /// Network-level failure while sending the request or reading the
    /// response
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body was not valid JSON
    #[error("invalid JSON in response (status {status}): {source}")]
    Decode {
        status: u16,
        /// The offending body, verbatim
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// Attachment file could not be opened
    #[error("cannot open attachment {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// HTTP status of the offending response, when one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport(err) => err.status().map(|s| s.as_u16()),
            Error::Decode { status, .. } => Some(*status),
            Error::FileAccess { .. } => None,
        }
    }

    /// Check if this error came from an undecodable response body
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }

    /// Check if this error came from opening an attachment
    pub fn is_file_access(&self) -> bool {
        matches!(self, Error::FileAccess { .. })
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error() -> Error {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        Error::Decode {
            status: 200,
            body: "<html>".to_string(),
            source,
        }
    }

    #[test]
    fn test_decode_error_status() {
        let error = decode_error();
        assert!(error.is_decode());
        assert_eq!(error.status(), Some(200));
    }

    #[test]
    fn test_file_access_error() {
        let error = Error::FileAccess {
            path: PathBuf::from("/tmp/missing.png"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };

        assert!(error.is_file_access());
        assert_eq!(error.status(), None);
        assert!(error.to_string().contains("/tmp/missing.png"));
    }
}
