//! # OAuth 로그인 서비스
//!
//! 프로바이더 공통 OAuth 2.0 인가 코드 흐름입니다.
//!
//! ```text
//! login_url(provider)
//!   └─ state 생성 → Redis 저장 (TTL, provider에 묶임) → 인가 URL
//!
//! authenticate_with_code(provider, code, state)
//!   ├─ state 소비 (GETDEL, provider 일치 확인)
//!   ├─ code → 액세스 토큰 교환
//!   ├─ 사용자 정보 조회 → ExternalProfile → ProviderProfile
//!   └─ IdentityResolver::resolve → Account
//! ```
//!
//! 콜백 처리 중 어떤 단계가 실패하든 사용자에게는 동일한 인증 실패로 보고하고,
//! 실제 원인은 로그에만 남깁니다.

use std::collections::HashMap;
use std::sync::Arc;
use chrono::Utc;
use serde_json::json;
use sha2::{Digest, Sha256};
use uuid::Uuid;
use crate::config::{AuthProvider, OAuthConfig, OAuthProviderSettings};
use crate::domain::dto::auth::OAuthLoginUrlResponse;
use crate::domain::entities::accounts::Account;
use crate::domain::entities::audit::AuditAction;
use crate::domain::models::auth::RequestMeta;
use crate::domain::models::oauth::ProviderProfile;
use crate::errors::{AppError, AppResult};
use crate::services::audit::AuditService;
use super::identity_service::{IdentityResolver, Resolution};
use super::providers::{authorization_url, ProviderGateway};
use super::state_store::OAuthStateStore;

pub const AUTHENTICATION_FAILED: &str = "authentication_failed";

pub struct OAuthService {
    providers: HashMap<AuthProvider, OAuthProviderSettings>,
    states: Arc<dyn OAuthStateStore>,
    gateway: Arc<dyn ProviderGateway>,
    identity: Arc<IdentityResolver>,
    audit: Arc<AuditService>,
    state_secret: String,
    state_ttl_seconds: u64,
}

impl OAuthService {
    pub fn new(
        providers: Vec<OAuthProviderSettings>,
        states: Arc<dyn OAuthStateStore>,
        gateway: Arc<dyn ProviderGateway>,
        identity: Arc<IdentityResolver>,
        audit: Arc<AuditService>,
    ) -> Self {
        Self {
            providers: providers.into_iter().map(|s| (s.provider, s)).collect(),
            states,
            gateway,
            identity,
            audit,
            state_secret: OAuthConfig::state_secret(),
            state_ttl_seconds: OAuthConfig::session_timeout_minutes().max(1) as u64 * 60,
        }
    }

    /// 환경 변수에 자격 증명이 있는 프로바이더만 활성화합니다.
    pub fn load_provider_settings() -> Vec<OAuthProviderSettings> {
        AuthProvider::ALL
            .iter()
            .filter_map(|provider| match OAuthProviderSettings::from_env(*provider) {
                Ok(settings) => Some(settings),
                Err(e) => {
                    log::warn!("{} 로그인 비활성화: {}", provider, e);
                    None
                }
            })
            .collect()
    }

    pub fn enabled_providers(&self) -> Vec<AuthProvider> {
        AuthProvider::ALL
            .into_iter()
            .filter(|p| self.providers.contains_key(p))
            .collect()
    }

    /// 설정되지 않은 프로바이더면 `ValidationError`
    pub fn ensure_enabled(&self, provider: AuthProvider) -> AppResult<()> {
        self.settings(provider).map(|_| ())
    }

    fn settings(&self, provider: AuthProvider) -> AppResult<&OAuthProviderSettings> {
        self.providers.get(&provider).ok_or_else(|| {
            AppError::ValidationError(format!("{} 로그인이 설정되지 않았습니다", provider))
        })
    }

    pub async fn login_url(&self, provider: AuthProvider) -> AppResult<OAuthLoginUrlResponse> {
        let settings = self.settings(provider)?;
        let state = self.generate_oauth_state();

        self.states.put(&state, provider, self.state_ttl_seconds).await?;

        Ok(OAuthLoginUrlResponse {
            login_url: authorization_url(settings, &state),
            state,
        })
    }

    /// 콜백의 인가 코드로 로그인합니다.
    ///
    /// 설정되지 않은 프로바이더는 `ValidationError`, 그 외 모든 실패는
    /// `AuthenticationError(authentication_failed)`입니다.
    pub async fn authenticate_with_code(
        &self,
        provider: AuthProvider,
        code: &str,
        state: &str,
        requester: &RequestMeta,
    ) -> AppResult<Account> {
        let settings = self.settings(provider)?;

        let (account, resolution) = self
            .run_callback(settings, code, state)
            .await
            .map_err(|e| {
                log::warn!("{} 로그인 실패: {}", provider, e);
                AppError::AuthenticationError(AUTHENTICATION_FAILED.to_string())
            })?;

        log::info!("{} 로그인 성공 ({:?}): {:?}", provider, resolution, account.id);

        if account.role.is_staff_side() {
            if let Some(account_id) = account.id_string() {
                self.audit
                    .record(
                        AuditAction::Login,
                        &account_id,
                        None,
                        json!({ "provider": provider.as_str() }),
                        requester,
                    )
                    .await;
            }
        }

        Ok(account)
    }

    async fn run_callback(
        &self,
        settings: &OAuthProviderSettings,
        code: &str,
        state: &str,
    ) -> AppResult<(Account, Resolution)> {
        self.consume_state(settings.provider, state).await?;

        let token = self.gateway.exchange_code(settings, code).await?;
        let external = self.gateway.fetch_profile(settings, &token.access_token).await?;
        let profile = ProviderProfile::normalize(settings.provider, external);

        self.identity.resolve_with_outcome(&profile).await
    }

    async fn consume_state(&self, provider: AuthProvider, state: &str) -> AppResult<()> {
        match self.states.take(state).await? {
            Some(bound) if bound == provider => Ok(()),
            Some(bound) => Err(AppError::AuthenticationError(format!(
                "OAuth state가 다른 프로바이더({})에 발급되었습니다", bound
            ))),
            None => Err(AppError::AuthenticationError(
                "유효하지 않거나 만료된 OAuth state".to_string()
            )),
        }
    }

    /// 랜덤 UUID, 현재 시각, 비밀값을 SHA-256으로 묶은 hex 문자열
    fn generate_oauth_state(&self) -> String {
        let state_data = format!(
            "{}:{}:{}",
            Uuid::new_v4(),
            Utc::now().timestamp_nanos_opt().unwrap_or_default(),
            self.state_secret
        );

        let digest = Sha256::digest(state_data.as_bytes());
        digest.iter().map(|b| format!("{:02x}", b)).collect()
    }
}
