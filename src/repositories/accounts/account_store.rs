//! 계정 저장소 인터페이스
//!
//! 서비스 계층은 이 트레이트에만 의존합니다. 운영 환경에서는 MongoDB 구현
//! ([`super::AccountRepository`])을, 테스트에서는 메모리 구현을 주입합니다.

use async_trait::async_trait;
use crate::config::AuthProvider;
use crate::domain::entities::accounts::{Account, Role};
use crate::domain::models::oauth::ProviderProfile;
use crate::errors::AppResult;

#[async_trait]
pub trait AccountStore: Send + Sync {
    /// 내부 ID로 조회합니다. ID 형식이 잘못되면 `ValidationError`.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Account>>;

    /// (프로바이더, 외부 식별자)로 조회합니다.
    async fn find_by_provider_id(&self, provider: AuthProvider, external_id: &str) -> AppResult<Option<Account>>;

    /// 이메일로 조회합니다. 받은 문자열과 정확히 일치해야 합니다.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    /// 새 계정을 저장하고 ID가 채워진 계정을 반환합니다.
    ///
    /// 이메일이나 프로바이더 ID가 다른 계정과 겹치면 `ConflictError`.
    async fn create(&self, account: Account) -> AppResult<Account>;

    /// 기존 계정에 프로바이더를 연결하고 변경된 계정을 반환합니다. 계정이 없으면 `None`.
    ///
    /// 프로바이더 ID, 검증 플래그, 비어 있을 때의 아바타만 바꿉니다.
    /// 조회 이후 다른 요청이 바꾼 필드(역할 등)는 그대로 남습니다.
    async fn link_provider(&self, id: &str, profile: &ProviderProfile) -> AppResult<Option<Account>>;

    /// 역할만 변경하고 변경된 계정을 반환합니다. 계정이 없으면 `None`.
    async fn update_role(&self, id: &str, role: Role) -> AppResult<Option<Account>>;

    /// 계정을 삭제합니다. 삭제된 문서가 있으면 `true`.
    async fn delete(&self, id: &str) -> AppResult<bool>;
}
