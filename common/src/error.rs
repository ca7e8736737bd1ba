//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not an image: {0}")]
    NotAnImage(String),

    #[error("File is empty: {0}")]
    EmptyFile(String),

    #[error("HTTP status {0}")]
    Http(u16),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_http() {
        let error = Error::Http(500);
        assert_eq!(format!("{}", error), "HTTP status 500");
    }

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_display_invalid_format() {
        let error = Error::InvalidFormat("expected array".to_string());
        assert_eq!(format!("{}", error), "Invalid data format: expected array");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }
}
