use crate::messages;

/// Every way a summarization can fail.
///
/// `Display` renders the message shown in the form's error panel, so a
/// `Service` detail or a `Transport` message reaches the user verbatim.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{}", messages::EMPTY_INPUT)]
    Validation,

    #[error("{0}")]
    Service(String),

    #[error("{}{}", messages::STATUS_ERROR_PREFIX, .0)]
    ServiceStatus(String),

    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Message for the error panel, never blank.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            messages::UNKNOWN_FAILURE.to_string()
        } else {
            message
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidResponse(err.to_string())
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_uses_localized_prompt() {
        assert_eq!(
            AppError::Validation.user_message(),
            "要約するテキストを入力してください。"
        );
    }

    #[test]
    fn service_detail_is_verbatim() {
        let err = AppError::Service("model unavailable".to_string());
        assert_eq!(err.user_message(), "model unavailable");
    }

    #[test]
    fn status_fallback_includes_status_text() {
        let err = AppError::ServiceStatus("Internal Server Error".to_string());
        assert_eq!(
            err.user_message(),
            "エラーが発生しました: Internal Server Error"
        );
    }

    #[test]
    fn blank_transport_message_falls_back() {
        assert_eq!(
            AppError::Transport(String::new()).user_message(),
            "要約の取得中に不明なエラーが発生しました。"
        );
        assert_eq!(
            AppError::Transport("  ".to_string()).user_message(),
            messages::UNKNOWN_FAILURE
        );
    }

    #[test]
    fn json_errors_become_invalid_response() {
        let err: AppError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, AppError::InvalidResponse(ref msg) if !msg.is_empty()));
    }

    #[test]
    fn var_errors_become_config() {
        let err: AppError = std::env::VarError::NotPresent.into();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().starts_with("Configuration error: "));
    }
}
