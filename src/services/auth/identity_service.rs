//! # 계정 해석 서비스 (Identity Resolution)
//!
//! 프로바이더가 돌려준 프로필을 정확히 하나의 계정으로 연결합니다.
//! 프로바이더와 무관한 단일 루틴이며, 프로바이더별 코드는 프로필을
//! [`ProviderProfile`]로 정규화하는 데까지만 관여합니다.
//!
//! ## 해석 순서
//!
//! ```text
//! (provider, external_id) 조회 ──found──► 그대로 반환 (쓰기 없음)
//!          │ miss
//!          ▼
//! email 있음? ──no──────────────────────┐
//!          │ yes                          │
//!          ▼                              ▼
//! email 조회 ──found──► 프로바이더 연결   새 계정 생성
//!          │ miss       (저장 후 반환)    (customer, verified)
//!          └──────────────────────────────┘
//! ```
//!
//! ## 동시성
//!
//! 읽기를 순서대로 한 뒤 최대 한 번 씁니다. 잠금이나 트랜잭션은 없습니다.
//! 같은 이메일로 두 프로바이더에서 동시에 첫 로그인을 하면 두 요청 모두
//! 이메일 조회에서 놓치고 둘 다 생성을 시도합니다. 이메일 고유 인덱스 때문에
//! 한쪽 삽입이 실패하며, 그 요청은 인증 실패로 끝납니다 (연결되지 않음).

use std::sync::Arc;
use crate::domain::entities::accounts::Account;
use crate::domain::models::oauth::ProviderProfile;
use crate::errors::{AppError, AppResult};
use crate::repositories::accounts::AccountStore;

/// 해석 결과가 어느 경로로 나왔는지
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// 이미 이 프로바이더로 연결된 계정
    Returning,
    /// 이메일이 같은 기존 계정에 프로바이더를 연결
    Linked,
    /// 새로 만든 계정
    Created,
}

pub struct IdentityResolver {
    accounts: Arc<dyn AccountStore>,
}

impl IdentityResolver {
    pub fn new(accounts: Arc<dyn AccountStore>) -> Self {
        Self { accounts }
    }

    /// 정규화된 프로필을 계정으로 해석합니다.
    ///
    /// 저장소 오류는 중간에 어디서 나든 해석을 중단시키고 그대로 전달됩니다.
    /// 이전 단계의 쓰기는 되돌리지 않습니다 (쓰기는 최대 한 번).
    pub async fn resolve(&self, profile: &ProviderProfile) -> AppResult<Account> {
        self.resolve_with_outcome(profile).await.map(|(account, _)| account)
    }

    pub async fn resolve_with_outcome(&self, profile: &ProviderProfile) -> AppResult<(Account, Resolution)> {
        if let Some(account) = self.accounts
            .find_by_provider_id(profile.provider, &profile.external_id)
            .await?
        {
            log::debug!("기존 {} 계정 로그인: {:?}", profile.provider, account.id);
            return Ok((account, Resolution::Returning));
        }

        if let Some(email) = profile.email.as_deref() {
            if let Some(found) = self.accounts.find_by_email(email).await? {
                let id = found.id_string().ok_or_else(|| {
                    AppError::InternalError("계정 ID가 없습니다".to_string())
                })?;
                let account = self.accounts
                    .link_provider(&id, profile)
                    .await?
                    .ok_or_else(|| AppError::NotFound("연결할 계정이 삭제되었습니다".to_string()))?;
                log::info!("{} 프로바이더를 기존 계정에 연결: {:?}", profile.provider, account.id);
                return Ok((account, Resolution::Linked));
            }
        }

        let account = self.accounts.create(Account::from_profile(profile)).await?;
        log::info!("새 계정 생성 ({}): {:?}", profile.provider, account.id);

        Ok((account, Resolution::Created))
    }

    /// 세션 참조의 계정 ID로 계정을 되찾습니다. 없으면 `AuthenticationError`.
    pub async fn correlate(&self, account_id: &str) -> AppResult<Account> {
        self.accounts
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("계정이 존재하지 않습니다".to_string()))
    }
}
