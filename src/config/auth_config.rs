//! # Authentication Configuration Module
//!
//! OAuth 프로바이더, JWT 토큰, OAuth state 관련 설정을 관리하는 모듈입니다.
//!
//! ## 지원하는 인증 방식
//!
//! 1. **Google OAuth 2.0**: Google 계정을 통한 소셜 로그인
//! 2. **Facebook Login**: Facebook 계정을 통한 소셜 로그인
//! 3. **JWT 토큰**: 세션 참조로 사용하는 JSON Web Token
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export GOOGLE_REDIRECT_URI="http://localhost:8080/api/v1/auth/google/callback"
//!
//! export FACEBOOK_CLIENT_ID="your-facebook-app-id"
//! export FACEBOOK_CLIENT_SECRET="your-facebook-app-secret"
//! export FACEBOOK_REDIRECT_URI="http://localhost:8080/api/v1/auth/facebook/callback"
//!
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export OAUTH_STATE_SECRET="your-oauth-state-secret"
//! ```
//!
//! 프로바이더 자격 증명이 없으면 해당 프로바이더는 비활성화됩니다.

use std::env;
use std::fmt;
use serde::{Deserialize, Serialize};
use crate::errors::AppError;

/// 외부 인증 프로바이더
///
/// 계정 문서에는 프로바이더마다 하나의 외부 식별자 슬롯이 있습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Google,
    Facebook,
}

impl AuthProvider {
    pub const ALL: [AuthProvider; 2] = [AuthProvider::Google, AuthProvider::Facebook];

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "google" => Ok(AuthProvider::Google),
            "facebook" => Ok(AuthProvider::Facebook),
            _ => Err(format!("Unsupported auth provider: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Google => "google",
            AuthProvider::Facebook => "facebook",
        }
    }

    /// 계정 문서에서 이 프로바이더의 외부 식별자를 저장하는 필드명
    pub fn id_field(&self) -> &'static str {
        match self {
            AuthProvider::Google => "google_id",
            AuthProvider::Facebook => "facebook_id",
        }
    }

    fn env_prefix(&self) -> &'static str {
        match self {
            AuthProvider::Google => "GOOGLE",
            AuthProvider::Facebook => "FACEBOOK",
        }
    }

    fn default_auth_uri(&self) -> &'static str {
        match self {
            AuthProvider::Google => "https://accounts.google.com/o/oauth2/auth",
            AuthProvider::Facebook => "https://www.facebook.com/v19.0/dialog/oauth",
        }
    }

    fn default_token_uri(&self) -> &'static str {
        match self {
            AuthProvider::Google => "https://oauth2.googleapis.com/token",
            AuthProvider::Facebook => "https://graph.facebook.com/v19.0/oauth/access_token",
        }
    }

    fn default_userinfo_uri(&self) -> &'static str {
        match self {
            AuthProvider::Google => "https://www.googleapis.com/oauth2/v2/userinfo",
            AuthProvider::Facebook => "https://graph.facebook.com/v19.0/me",
        }
    }

    /// 인증 요청 시 사용하는 스코프
    pub fn scope(&self) -> &'static str {
        match self {
            AuthProvider::Google => "openid email profile",
            AuthProvider::Facebook => "email,public_profile",
        }
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 단일 OAuth 프로바이더의 클라이언트 설정
#[derive(Debug, Clone)]
pub struct OAuthProviderSettings {
    pub provider: AuthProvider,
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub auth_uri: String,
    pub token_uri: String,
    pub userinfo_uri: String,
}

impl OAuthProviderSettings {
    /// 환경 변수에서 프로바이더 설정을 로드합니다.
    ///
    /// `{PREFIX}_CLIENT_ID`, `{PREFIX}_CLIENT_SECRET`, `{PREFIX}_REDIRECT_URI`는 필수이며
    /// 엔드포인트 URI는 `{PREFIX}_AUTH_URI`, `{PREFIX}_TOKEN_URI`, `{PREFIX}_USERINFO_URI`로
    /// 재정의할 수 있습니다.
    pub fn from_env(provider: AuthProvider) -> Result<Self, AppError> {
        let prefix = provider.env_prefix();
        let required = |name: &str| {
            let key = format!("{}_{}", prefix, name);
            env::var(&key)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| AppError::ValidationError(format!("{} must be set", key)))
        };
        let optional = |name: &str, default: &str| {
            env::var(format!("{}_{}", prefix, name)).unwrap_or_else(|_| default.to_string())
        };

        Ok(Self {
            provider,
            client_id: required("CLIENT_ID")?,
            client_secret: required("CLIENT_SECRET")?,
            redirect_uri: required("REDIRECT_URI")?,
            auth_uri: optional("AUTH_URI", provider.default_auth_uri()),
            token_uri: optional("TOKEN_URI", provider.default_token_uri()),
            userinfo_uri: optional("USERINFO_URI", provider.default_userinfo_uri()),
        })
    }

    /// 지정한 자격 증명과 기본 엔드포인트로 설정을 생성합니다.
    pub fn with_defaults(
        provider: AuthProvider,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            auth_uri: provider.default_auth_uri().to_string(),
            token_uri: provider.default_token_uri().to_string(),
            userinfo_uri: provider.default_userinfo_uri().to_string(),
        }
    }
}

pub struct JwtConfig;

impl JwtConfig {
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }

    pub fn refresh_expiration_days() -> i64 {
        env::var("JWT_REFRESH_EXPIRATION_DAYS")
            .unwrap_or_else(|_| "7".to_string())
            .parse()
            .unwrap_or(7)
    }
}

pub struct OAuthConfig;

impl OAuthConfig {
    pub fn state_secret() -> String {
        env::var("OAUTH_STATE_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("OAUTH_STATE_SECRET not set, using default (not secure for production!)");
                "oauth-state-secret".to_string()
            })
    }

    pub fn session_timeout_minutes() -> i64 {
        env::var("OAUTH_SESSION_TIMEOUT_MINUTES")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_provider_from_string() {
        assert_eq!(AuthProvider::from_str("google").unwrap(), AuthProvider::Google);
        assert_eq!(AuthProvider::from_str("facebook").unwrap(), AuthProvider::Facebook);

        // 대소문자 무관 테스트
        assert_eq!(AuthProvider::from_str("GOOGLE").unwrap(), AuthProvider::Google);
        assert_eq!(AuthProvider::from_str("Facebook").unwrap(), AuthProvider::Facebook);

        assert!(AuthProvider::from_str("twitter").is_err());
        assert!(AuthProvider::from_str("local").is_err());
    }

    #[test]
    fn test_auth_provider_id_fields_are_distinct() {
        assert_eq!(AuthProvider::Google.id_field(), "google_id");
        assert_eq!(AuthProvider::Facebook.id_field(), "facebook_id");
    }

    #[test]
    fn test_auth_provider_serialization() {
        let json = serde_json::to_string(&AuthProvider::Facebook).unwrap();
        assert_eq!(json, "\"facebook\"");

        let deserialized: AuthProvider = serde_json::from_str("\"google\"").unwrap();
        assert_eq!(deserialized, AuthProvider::Google);
    }

    #[test]
    fn test_provider_settings_with_defaults() {
        let settings = OAuthProviderSettings::with_defaults(
            AuthProvider::Google,
            "client",
            "secret",
            "http://localhost:8080/api/v1/auth/google/callback",
        );

        assert_eq!(settings.auth_uri, "https://accounts.google.com/o/oauth2/auth");
        assert_eq!(settings.userinfo_uri, "https://www.googleapis.com/oauth2/v2/userinfo");
    }
}
