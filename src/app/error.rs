use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActivityError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Lesson content error: {0}")]
    Content(String),

    #[error("Session metadata error: {0}")]
    Metadata(String),
}

/// Convenience type alias for Results with ActivityError
pub type Result<T> = std::result::Result<T, ActivityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ActivityError = io_err.into();
        assert!(matches!(err, ActivityError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_display() {
        let err = ActivityError::Content("no lessons for locale 'xx'".to_string());
        assert_eq!(
            err.to_string(),
            "Lesson content error: no lessons for locale 'xx'"
        );

        let err = ActivityError::Metadata("corrupt custom-media value".to_string());
        assert_eq!(
            err.to_string(),
            "Session metadata error: corrupt custom-media value"
        );
    }
}
