//! JWT 토큰 모델
//!
//! 세션 참조로 쓰이는 HS256 JWT의 클레임과 발급 결과를 정의합니다.
//! `sub`에는 계정 ID(ObjectId hex)가 들어가며, 요청마다 이 ID로 계정을 다시 조회합니다.

use serde::{Deserialize, Serialize};
use crate::domain::entities::accounts::Role;

/// 토큰 용도
///
/// 액세스 토큰을 리프레시에 쓰거나 그 반대로 쓰는 것을 막기 위해 클레임에 포함됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 계정 ID
    pub sub: String,
    /// 발급 시점의 역할 (인가에는 사용하지 않고 클라이언트 표시용)
    pub role: Role,
    pub token_type: TokenType,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// 액세스 토큰 만료까지 남은 초
    pub expires_in: i64,
}
