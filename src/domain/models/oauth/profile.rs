//! # 외부 프로바이더 프로필
//!
//! 프로바이더마다 다른 프로필 응답을 하나의 형태로 모은 뒤,
//! 계정 해석(Identity Resolution)에 쓰이는 정규화된 레코드로 변환합니다.
//!
//! ```text
//! GoogleUserInfo ──┐
//!                  ├──► ExternalProfile ──normalize──► ProviderProfile
//! FacebookUserInfo ┘
//! ```

use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;
use crate::utils::string_utils::clean_optional_string;

/// 다중 값 필드의 단일 항목 (`emails`, `photos`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileValue {
    pub value: String,
}

impl ProfileValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

/// 이름을 분리해서 제공하는 프로바이더용 이름 구성 요소
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileName {
    pub given_name: Option<String>,
    pub family_name: Option<String>,
}

/// 프로바이더에서 받은 원본 프로필
///
/// 외부 식별자는 항상 존재하며, 이메일과 사진은 0개 이상입니다.
/// 이름은 단일 문자열(`display_name`) 또는 분리된 구성 요소(`name`)로 제공됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalProfile {
    pub id: String,
    #[serde(default)]
    pub emails: Vec<ProfileValue>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub name: Option<ProfileName>,
    #[serde(default)]
    pub photos: Vec<ProfileValue>,
}

/// 계정 해석에 사용하는 정규화된 프로필
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderProfile {
    pub provider: AuthProvider,
    pub external_id: String,
    pub email: Option<String>,
    pub display_name: String,
    pub avatar_url: Option<String>,
}

impl ProviderProfile {
    /// 원본 프로필을 정규화합니다.
    ///
    /// - 이메일/사진은 첫 번째 값만 사용하며, 빈 문자열은 없는 것으로 취급합니다.
    /// - 이메일은 받은 그대로 보존합니다 (대소문자 변환, 공백 제거 없음).
    /// - Google은 `display_name`을, Facebook은 `given + " " + family`를 표시 이름으로 사용합니다.
    pub fn normalize(provider: AuthProvider, profile: ExternalProfile) -> Self {
        let ExternalProfile { id, emails, display_name, name, photos } = profile;

        let display_name = match provider {
            AuthProvider::Google => display_name.unwrap_or_default(),
            AuthProvider::Facebook => {
                let name = name.unwrap_or_default();
                format!(
                    "{} {}",
                    name.given_name.unwrap_or_default(),
                    name.family_name.unwrap_or_default()
                )
            }
        };

        Self {
            provider,
            external_id: id,
            email: emails.into_iter().next().map(|e| e.value).filter(|e| !e.trim().is_empty()),
            display_name,
            avatar_url: clean_optional_string(photos.into_iter().next().map(|p| p.value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facebook_profile(given: Option<&str>, family: Option<&str>) -> ExternalProfile {
        ExternalProfile {
            id: "f1".to_string(),
            name: Some(ProfileName {
                given_name: given.map(str::to_string),
                family_name: family.map(str::to_string),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_google_uses_display_name() {
        let profile = ExternalProfile {
            id: "g1".to_string(),
            emails: vec![ProfileValue::new("a@x.com")],
            display_name: Some("Ann Lee".to_string()),
            photos: vec![ProfileValue::new("http://img")],
            ..Default::default()
        };

        let normalized = ProviderProfile::normalize(AuthProvider::Google, profile);

        assert_eq!(normalized.external_id, "g1");
        assert_eq!(normalized.email.as_deref(), Some("a@x.com"));
        assert_eq!(normalized.display_name, "Ann Lee");
        assert_eq!(normalized.avatar_url.as_deref(), Some("http://img"));
    }

    #[test]
    fn test_facebook_joins_name_parts_with_single_space() {
        let normalized = ProviderProfile::normalize(
            AuthProvider::Facebook,
            facebook_profile(Some("Ann"), Some("Lee")),
        );
        assert_eq!(normalized.display_name, "Ann Lee");
    }

    #[test]
    fn test_facebook_empty_name_parts_are_not_trimmed() {
        let normalized = ProviderProfile::normalize(
            AuthProvider::Facebook,
            facebook_profile(Some("Ann"), None),
        );
        assert_eq!(normalized.display_name, "Ann ");
    }

    #[test]
    fn test_first_email_and_photo_win() {
        let profile = ExternalProfile {
            id: "g1".to_string(),
            emails: vec![ProfileValue::new("first@x.com"), ProfileValue::new("second@x.com")],
            photos: vec![ProfileValue::new("http://one"), ProfileValue::new("http://two")],
            ..Default::default()
        };

        let normalized = ProviderProfile::normalize(AuthProvider::Google, profile);

        assert_eq!(normalized.email.as_deref(), Some("first@x.com"));
        assert_eq!(normalized.avatar_url.as_deref(), Some("http://one"));
    }

    #[test]
    fn test_missing_or_blank_email_is_absent() {
        let without = ProviderProfile::normalize(AuthProvider::Google, ExternalProfile {
            id: "g1".to_string(),
            ..Default::default()
        });
        assert_eq!(without.email, None);

        let blank = ProviderProfile::normalize(AuthProvider::Google, ExternalProfile {
            id: "g1".to_string(),
            emails: vec![ProfileValue::new("  ")],
            ..Default::default()
        });
        assert_eq!(blank.email, None);
    }

    #[test]
    fn test_email_case_is_preserved() {
        let normalized = ProviderProfile::normalize(AuthProvider::Google, ExternalProfile {
            id: "g1".to_string(),
            emails: vec![ProfileValue::new("Ann.Lee@X.com")],
            ..Default::default()
        });
        assert_eq!(normalized.email.as_deref(), Some("Ann.Lee@X.com"));
    }

    #[test]
    fn test_email_is_not_trimmed() {
        let normalized = ProviderProfile::normalize(AuthProvider::Google, ExternalProfile {
            id: "g1".to_string(),
            emails: vec![ProfileValue::new(" ann@x.com")],
            photos: vec![ProfileValue::new(" http://img ")],
            ..Default::default()
        });

        assert_eq!(normalized.email.as_deref(), Some(" ann@x.com"));
        assert_eq!(normalized.avatar_url.as_deref(), Some("http://img"));
    }
}
