//! # Facebook 사용자 정보 모델
//!
//! Graph API `/me?fields=id,email,first_name,last_name,picture` 응답을 매핑합니다.
//! Facebook은 이름을 `first_name`/`last_name`으로 나눠서 제공합니다.

use serde::Deserialize;
use super::profile::{ExternalProfile, ProfileName, ProfileValue};

/// Graph API에 요청하는 필드 목록
pub const FACEBOOK_PROFILE_FIELDS: &str = "id,email,first_name,last_name,picture.type(large)";

#[derive(Debug, Clone, Deserialize)]
pub struct FacebookUserInfo {
    pub id: String,
    /// 사용자가 이메일 권한을 거부했거나 전화번호로 가입한 경우 없음
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub picture: Option<FacebookPicture>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FacebookPicture {
    pub data: FacebookPictureData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FacebookPictureData {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub is_silhouette: Option<bool>,
}

impl From<FacebookUserInfo> for ExternalProfile {
    fn from(info: FacebookUserInfo) -> Self {
        let photo = info.picture.and_then(|p| p.data.url);

        ExternalProfile {
            id: info.id,
            emails: info.email.map(ProfileValue::new).into_iter().collect(),
            display_name: None,
            name: Some(ProfileName {
                given_name: info.first_name,
                family_name: info.last_name,
            }),
            photos: photo.map(ProfileValue::new).into_iter().collect(),
        }
    }
}
