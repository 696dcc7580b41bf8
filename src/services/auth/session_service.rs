//! 세션 상관 서비스
//!
//! 세션 참조(JWT)를 요청마다 계정으로 되돌립니다. 계정이 삭제되었으면
//! 토큰이 유효하더라도 다음 요청에서 401이 됩니다.

use std::sync::Arc;
use crate::domain::entities::accounts::Account;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::token::TokenPair;
use crate::errors::{AppError, AppResult};
use super::identity_service::IdentityResolver;
use super::token_service::TokenService;

pub struct SessionService {
    tokens: Arc<TokenService>,
    identity: Arc<IdentityResolver>,
}

impl SessionService {
    pub fn new(tokens: Arc<TokenService>, identity: Arc<IdentityResolver>) -> Self {
        Self { tokens, identity }
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    /// `Authorization` 헤더 값으로 요청자를 확인합니다.
    pub async fn authenticate_header(&self, auth_header: &str) -> AppResult<AuthenticatedUser> {
        let token = self.tokens.extract_bearer_token(auth_header)?;
        self.authenticate(token).await
    }

    /// 액세스 토큰을 검증하고 계정을 다시 조회합니다.
    ///
    /// 역할은 토큰 클레임이 아니라 저장소의 현재 값을 사용합니다.
    pub async fn authenticate(&self, access_token: &str) -> AppResult<AuthenticatedUser> {
        let claims = self.tokens.verify_access_token(access_token)?;
        let account = self.correlate(&claims.sub).await?;

        AuthenticatedUser::from_account(&account)
            .ok_or_else(|| AppError::InternalError("계정 ID가 없습니다".to_string()))
    }

    /// 리프레시 토큰으로 새 토큰 쌍을 발급합니다.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<(Account, TokenPair)> {
        let claims = self.tokens.verify_refresh_token(refresh_token)?;
        let account = self.correlate(&claims.sub).await?;
        let pair = self.tokens.generate_token_pair(&account)?;

        Ok((account, pair))
    }

    /// 토큰 `sub`를 계정으로 바꿉니다. 잘못된 ID 형식도 인증 실패로 취급합니다.
    async fn correlate(&self, account_id: &str) -> AppResult<Account> {
        self.identity.correlate(account_id).await.map_err(|e| match e {
            AppError::ValidationError(_) => {
                AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
            }
            other => other,
        })
    }
}
