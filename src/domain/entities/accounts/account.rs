//! # Account Entity
//!
//! 소셜 로그인으로 생성되는 고객/직원 계정입니다. `accounts` 컬렉션에 저장됩니다.
//!
//! ## 고유성 제약
//!
//! | 필드 | 인덱스 |
//! |------|--------|
//! | `email` | sparse unique |
//! | `google_id` | sparse unique |
//! | `facebook_id` | sparse unique |
//!
//! 값이 없는 필드는 문서에서 아예 생략되어야 sparse 인덱스에서 제외됩니다.
//! 그래서 모든 선택적 필드에 `skip_serializing_if`를 붙입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;
use crate::domain::models::oauth::ProviderProfile;
use super::role::Role;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 프로바이더에서 받은 그대로의 이메일 (대소문자 보존)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// 표시 이름
    pub name: String,
    /// 프로필 이미지 URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub is_verified: bool,
    #[serde(default)]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook_id: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Account {
    /// 처음 로그인한 프로필로 새 계정을 만듭니다.
    ///
    /// 프로바이더가 이미 본인 확인을 했으므로 검증된 상태로 시작하고,
    /// 역할은 항상 `customer`입니다.
    pub fn from_profile(profile: &ProviderProfile) -> Self {
        let now = DateTime::now();

        let mut account = Self {
            id: None,
            email: profile.email.clone(),
            name: profile.display_name.clone(),
            avatar: profile.avatar_url.clone(),
            is_verified: true,
            role: Role::Customer,
            google_id: None,
            facebook_id: None,
            created_at: now,
            updated_at: now,
        };
        account.set_provider_id(profile.provider, profile.external_id.clone());
        account
    }

    /// 기존 계정에 프로바이더를 연결합니다.
    ///
    /// 이미 아바타가 있으면 유지합니다.
    pub fn link_provider(&mut self, profile: &ProviderProfile) {
        self.set_provider_id(profile.provider, profile.external_id.clone());
        self.is_verified = true;
        if self.avatar.is_none() {
            self.avatar = profile.avatar_url.clone();
        }
        self.updated_at = DateTime::now();
    }

    pub fn provider_id(&self, provider: AuthProvider) -> Option<&str> {
        match provider {
            AuthProvider::Google => self.google_id.as_deref(),
            AuthProvider::Facebook => self.facebook_id.as_deref(),
        }
    }

    pub fn set_provider_id(&mut self, provider: AuthProvider, external_id: String) {
        match provider {
            AuthProvider::Google => self.google_id = Some(external_id),
            AuthProvider::Facebook => self.facebook_id = Some(external_id),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
