//! 감사 기록 서비스
//!
//! 관리자 행위를 기록합니다. 기록 실패는 로그로만 남기고 원래 행위는 계속 진행합니다.

use std::sync::Arc;
use serde_json::Value;
use crate::domain::entities::audit::{AuditAction, AuditLog};
use crate::domain::models::auth::RequestMeta;
use crate::repositories::audit::AuditLogStore;

pub struct AuditService {
    store: Arc<dyn AuditLogStore>,
}

impl AuditService {
    pub fn new(store: Arc<dyn AuditLogStore>) -> Self {
        Self { store }
    }

    pub async fn record(
        &self,
        action: AuditAction,
        admin_id: &str,
        target_id: Option<String>,
        metadata: Value,
        requester: &RequestMeta,
    ) {
        let entry = AuditLog::new(action, admin_id, target_id, metadata)
            .with_requester(requester.ip_address.clone(), requester.user_agent.clone());

        if let Err(e) = self.store.append(entry).await {
            log::error!("감사 기록 저장 실패 ({}, admin={}): {}", action.as_str(), admin_id, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::repositories::audit::InMemoryAuditLogStore;

    fn requester() -> RequestMeta {
        RequestMeta {
            ip_address: Some("192.0.2.10".to_string()),
            user_agent: Some("Mozilla/5.0".to_string()),
        }
    }

    #[actix_web::test]
    async fn test_record_appends_entry_with_requester() {
        let store = Arc::new(InMemoryAuditLogStore::new());
        let service = AuditService::new(store.clone());

        service
            .record(AuditAction::AccountDelete, "admin-1", Some("acc-9".to_string()), json!({}), &requester())
            .await;

        let entries = store.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action, AuditAction::AccountDelete);
        assert_eq!(entries[0].admin_id, "admin-1");
        assert_eq!(entries[0].target_id.as_deref(), Some("acc-9"));
        assert_eq!(entries[0].ip_address.as_deref(), Some("192.0.2.10"));
        assert_eq!(entries[0].user_agent.as_deref(), Some("Mozilla/5.0"));
    }

    #[actix_web::test]
    async fn test_append_failure_is_swallowed() {
        let service = AuditService::new(Arc::new(InMemoryAuditLogStore::failing()));

        service
            .record(AuditAction::Login, "admin-1", None, json!({ "provider": "google" }), &RequestMeta::default())
            .await;
    }
}
