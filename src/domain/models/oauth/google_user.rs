//! # Google 사용자 정보 모델
//!
//! Google OAuth2 UserInfo 엔드포인트(`/oauth2/v2/userinfo`)의 응답을 매핑합니다.

use serde::Deserialize;
use super::profile::{ExternalProfile, ProfileValue};

/// Google UserInfo 응답
///
/// `profile` 스코프가 없으면 이름과 사진이, `email` 스코프가 없으면 이메일이
/// 응답에서 빠질 수 있으므로 `id`를 제외한 모든 필드는 선택적입니다.
///
/// ## 응답 예시
///
/// ```json
/// {
///   "id": "1234567890",
///   "email": "ann@example.com",
///   "verified_email": true,
///   "name": "Ann Lee",
///   "given_name": "Ann",
///   "family_name": "Lee",
///   "picture": "https://lh3.googleusercontent.com/a/..."
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleUserInfo {
    /// Google 고유 사용자 ID
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub verified_email: Option<bool>,
    /// 전체 이름 (표시 이름으로 사용)
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    /// 프로필 사진 URL
    #[serde(default)]
    pub picture: Option<String>,
}

impl From<GoogleUserInfo> for ExternalProfile {
    fn from(info: GoogleUserInfo) -> Self {
        ExternalProfile {
            id: info.id,
            emails: info.email.map(ProfileValue::new).into_iter().collect(),
            display_name: info.name,
            name: None,
            photos: info.picture.map(ProfileValue::new).into_iter().collect(),
        }
    }
}
