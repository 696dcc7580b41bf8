//! 계정 관리 서비스
//!
//! 관리자용 조회, 역할 변경, 삭제를 담당하며 변경 행위는 감사 기록을 남깁니다.

use std::sync::Arc;
use serde_json::json;
use crate::domain::dto::accounts::UpdateRoleRequest;
use crate::domain::entities::accounts::Account;
use crate::domain::entities::audit::AuditAction;
use crate::domain::models::auth::{AuthenticatedUser, RequestMeta};
use crate::errors::{AppError, AppResult};
use crate::repositories::accounts::AccountStore;
use crate::services::audit::AuditService;

pub struct AccountService {
    accounts: Arc<dyn AccountStore>,
    audit: Arc<AuditService>,
}

impl AccountService {
    pub fn new(accounts: Arc<dyn AccountStore>, audit: Arc<AuditService>) -> Self {
        Self { accounts, audit }
    }

    pub async fn get_account(&self, id: &str) -> AppResult<Account> {
        self.accounts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("계정을 찾을 수 없습니다".to_string()))
    }

    pub async fn change_role(
        &self,
        actor: &AuthenticatedUser,
        id: &str,
        request: UpdateRoleRequest,
        requester: &RequestMeta,
    ) -> AppResult<Account> {
        let before = self.get_account(id).await?;

        let updated = self.accounts
            .update_role(id, request.role)
            .await?
            .ok_or_else(|| AppError::NotFound("계정을 찾을 수 없습니다".to_string()))?;

        log::info!("역할 변경: {} {} → {} (by {})", id, before.role, updated.role, actor.account_id);

        self.audit
            .record(
                AuditAction::RoleChange,
                &actor.account_id,
                Some(id.to_string()),
                json!({
                    "from": before.role.as_str(),
                    "to": updated.role.as_str(),
                    "reason": request.reason,
                }),
                requester,
            )
            .await;

        Ok(updated)
    }

    /// 계정을 삭제합니다. 관리자는 자기 자신을 삭제할 수 없습니다.
    pub async fn delete_account(
        &self,
        actor: &AuthenticatedUser,
        id: &str,
        requester: &RequestMeta,
    ) -> AppResult<()> {
        if actor.account_id == id {
            return Err(AppError::AuthorizationError("자기 자신의 계정은 삭제할 수 없습니다".to_string()));
        }

        let target = self.get_account(id).await?;

        if !self.accounts.delete(id).await? {
            return Err(AppError::NotFound("계정을 찾을 수 없습니다".to_string()));
        }

        log::info!("계정 삭제: {} (by {})", id, actor.account_id);

        self.audit
            .record(
                AuditAction::AccountDelete,
                &actor.account_id,
                Some(id.to_string()),
                json!({ "email": target.email, "role": target.role.as_str() }),
                requester,
            )
            .await;

        Ok(())
    }
}
