use serde::{Deserialize, Serialize};
use crate::domain::dto::accounts::AccountResponse;
use crate::domain::models::token::TokenPair;

/// 프로바이더 토큰 엔드포인트 응답
///
/// Google과 Facebook 모두 이 필드들을 공통으로 사용합니다.
#[derive(Debug, Deserialize)]
pub struct ProviderTokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OAuthLoginUrlResponse {
    pub login_url: String,

    pub state: String,
}

/// 로그인/토큰 갱신 성공 응답
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub tokens: TokenPair,

    pub account: AccountResponse,
}
