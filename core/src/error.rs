use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a data set from loading.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The local file could not be read
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The request never produced a response
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP error! status: {status} ({url})")]
    Status { url: String, status: u16 },

    /// The document is not a non-empty array
    #[error("Loaded data is not a valid array or is empty: {0}")]
    PayloadShape(String),

    /// The document is not valid JSON or an element has the wrong shape
    #[error("Invalid payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl LoadError {
    pub fn is_transport(&self) -> bool {
        matches!(self, LoadError::Io { .. } | LoadError::Http(_) | LoadError::Status { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoadError::Status {
            url: "http://localhost/satis_verileri.json".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "HTTP error! status: 404 (http://localhost/satis_verileri.json)"
        );
        assert!(err.is_transport());

        let err = LoadError::PayloadShape("empty array".to_string());
        assert!(!err.is_transport());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: LoadError = json_err.into();
        assert!(matches!(err, LoadError::Payload(_)));
    }
}
