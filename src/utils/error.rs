use thiserror::Error;

#[derive(Error, Debug)]
pub enum CourseRecError {
    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, CourseRecError>;

/// 單一技能搜尋失敗的原因。聚合器會略過該技能，不回報給呼叫端。
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("catalog responded with status {0}")]
    Status(u16),

    #[error("catalog response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SearchError {
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::Transport(_) => "transport",
            SearchError::Status(_) => "status",
            SearchError::Decode(_) => "decode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_error_kind() {
        assert_eq!(SearchError::Status(503).kind(), "status");

        let decode = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert_eq!(SearchError::from(decode).kind(), "decode");
    }

    #[test]
    fn test_config_error_messages() {
        let err = CourseRecError::InvalidConfigValueError {
            field: "catalog.result_limit".to_string(),
            value: "0".to_string(),
            reason: "Value must be between 1 and 100".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value '0' for 'catalog.result_limit': Value must be between 1 and 100"
        );
    }
}
