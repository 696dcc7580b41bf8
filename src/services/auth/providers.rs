//! 프로바이더 HTTP 연동
//!
//! 인가 코드를 액세스 토큰으로 교환하고, 사용자 정보를 받아서 [`ExternalProfile`]로 옮깁니다.
//! 프로바이더별 차이는 이 파일 안에서 끝납니다.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use crate::config::{AuthProvider, OAuthProviderSettings};
use crate::domain::dto::auth::ProviderTokenResponse;
use crate::domain::models::oauth::{
    ExternalProfile, FacebookUserInfo, GoogleUserInfo, FACEBOOK_PROFILE_FIELDS,
};
use crate::errors::{AppError, AppResult};

#[async_trait]
pub trait ProviderGateway: Send + Sync {
    async fn exchange_code(&self, settings: &OAuthProviderSettings, code: &str) -> AppResult<ProviderTokenResponse>;

    async fn fetch_profile(&self, settings: &OAuthProviderSettings, access_token: &str) -> AppResult<ExternalProfile>;
}

/// 인가 요청 URL을 만듭니다.
pub fn authorization_url(settings: &OAuthProviderSettings, state: &str) -> String {
    let params = [
        ("client_id", settings.client_id.as_str()),
        ("redirect_uri", settings.redirect_uri.as_str()),
        ("scope", settings.provider.scope()),
        ("response_type", "code"),
        ("state", state),
    ];

    let query_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", settings.auth_uri, query_string)
}

#[derive(Clone)]
pub struct HttpProviderGateway {
    client: Client,
}

impl HttpProviderGateway {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
        provider: AuthProvider,
        what: &str,
    ) -> AppResult<T> {
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "{} {} 실패 ({}): {}", provider, what, status, error_text
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("{} {} 응답 파싱 실패: {}", provider, what, e)))
    }
}

impl Default for HttpProviderGateway {
    fn default() -> Self {
        Self::new(Client::new())
    }
}

#[async_trait]
impl ProviderGateway for HttpProviderGateway {
    async fn exchange_code(&self, settings: &OAuthProviderSettings, code: &str) -> AppResult<ProviderTokenResponse> {
        let params = [
            ("code", code),
            ("client_id", settings.client_id.as_str()),
            ("client_secret", settings.client_secret.as_str()),
            ("redirect_uri", settings.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self.client
            .post(&settings.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("{} 토큰 요청 실패: {}", settings.provider, e)))?;

        Self::read_json(response, settings.provider, "토큰 교환").await
    }

    async fn fetch_profile(&self, settings: &OAuthProviderSettings, access_token: &str) -> AppResult<ExternalProfile> {
        let mut request = self.client
            .get(&settings.userinfo_uri)
            .bearer_auth(access_token);

        if settings.provider == AuthProvider::Facebook {
            request = request.query(&[("fields", FACEBOOK_PROFILE_FIELDS)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("{} 사용자 정보 요청 실패: {}", settings.provider, e)))?;

        let profile: ExternalProfile = match settings.provider {
            AuthProvider::Google => {
                Self::read_json::<GoogleUserInfo>(response, settings.provider, "사용자 정보 조회").await?.into()
            }
            AuthProvider::Facebook => {
                Self::read_json::<FacebookUserInfo>(response, settings.provider, "사용자 정보 조회").await?.into()
            }
        };

        Ok(profile)
    }
}
