use serde::Deserialize;
use validator::Validate;

/// 프로바이더 콜백 쿼리
///
/// 사용자가 동의를 거부하면 프로바이더는 `code` 대신 `error`를 보냅니다.
/// 이 경우에도 역직렬화가 되도록 `code`는 기본값을 허용하고, 검증 단계에서 거릅니다.
#[derive(Debug, Deserialize, Validate)]
pub struct OAuthCallbackQuery {
    #[serde(default)]
    #[validate(length(min = 1, message = "Authorization code가 필요합니다"))]
    pub code: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "State가 필요합니다"))]
    pub state: String,

    pub error: Option<String>,
    pub error_description: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "리프레시 토큰이 필요합니다"))]
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_query_validation() {
        let ok: OAuthCallbackQuery =
            serde_json::from_str(r#"{"code": "abc", "state": "xyz"}"#).unwrap();
        assert!(ok.validate().is_ok());

        let denied: OAuthCallbackQuery =
            serde_json::from_str(r#"{"error": "access_denied", "state": "xyz"}"#).unwrap();
        assert!(denied.validate().is_err());
        assert_eq!(denied.error.as_deref(), Some("access_denied"));
    }

    #[test]
    fn test_refresh_request_rejects_empty_token() {
        let request = RefreshTokenRequest { refresh_token: String::new() };
        assert!(request.validate().is_err());
    }
}
