use reqwest::StatusCode;
use serde_json::Value;

use crate::api::models::{ErrorBody, SummarizeResponse};
use crate::error::{AppError, Result};

/// Turns a finished HTTP exchange into the summary or the error to display.
pub fn interpret(status: StatusCode, body: &[u8]) -> Result<String> {
    if !status.is_success() {
        return Err(failure(status, body));
    }

    let data: SummarizeResponse = serde_json::from_slice(body)?;
    Ok(data.summary)
}

fn failure(status: StatusCode, body: &[u8]) -> AppError {
    let detail = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.detail)
        .and_then(detail_text);

    match detail {
        Some(detail) => AppError::Service(detail),
        None => AppError::ServiceStatus(status_text(status)),
    }
}

fn detail_text(detail: Value) -> Option<String> {
    match detail {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Reason phrase for the status, or the bare code when it has none.
pub fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_yields_summary() {
        let summary = interpret(StatusCode::OK, br#"{"summary":"Greeting."}"#).unwrap();
        assert_eq!(summary, "Greeting.");
    }

    #[test]
    fn success_ignores_extra_fields() {
        let body = br#"{"summary":"short","model":"gemini"}"#;
        assert_eq!(interpret(StatusCode::OK, body).unwrap(), "short");
    }

    #[test]
    fn success_without_summary_is_invalid() {
        let err = interpret(StatusCode::OK, br#"{"result":"x"}"#).unwrap_err();
        assert!(matches!(err, AppError::InvalidResponse(_)));
    }

    #[test]
    fn success_with_garbage_is_invalid() {
        let err = interpret(StatusCode::OK, b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, AppError::InvalidResponse(ref msg) if !msg.is_empty()));
    }

    #[test]
    fn failure_detail_is_surfaced() {
        let err = interpret(
            StatusCode::INTERNAL_SERVER_ERROR,
            br#"{"detail":"model unavailable"}"#,
        )
        .unwrap_err();
        assert_eq!(err.user_message(), "model unavailable");
    }

    #[test]
    fn failure_without_json_uses_status_text() {
        let err = interpret(StatusCode::BAD_GATEWAY, b"upstream down").unwrap_err();
        assert_eq!(err.user_message(), "エラーが発生しました: Bad Gateway");
    }

    #[test]
    fn failure_with_empty_or_null_detail_uses_status_text() {
        let bodies: [&[u8]; 4] = [br#"{"detail":""}"#, br#"{"detail":null}"#, b"{}", b""];
        for body in bodies {
            let err = interpret(StatusCode::SERVICE_UNAVAILABLE, body).unwrap_err();
            assert!(
                matches!(err, AppError::ServiceStatus(ref text) if text == "Service Unavailable"),
                "unexpected {err:?}"
            );
        }
    }

    #[test]
    fn structured_detail_is_rendered_as_json() {
        let body = br#"{"detail":[{"loc":["body","text"],"msg":"field required"}]}"#;
        let err = interpret(StatusCode::UNPROCESSABLE_ENTITY, body).unwrap_err();
        assert_eq!(
            err.user_message(),
            r#"[{"loc":["body","text"],"msg":"field required"}]"#
        );
    }

    #[test]
    fn unknown_status_falls_back_to_code() {
        let status = StatusCode::from_u16(599).unwrap();
        assert_eq!(status_text(status), "599");
    }
}
