//! # Audit Log Entity
//!
//! 관리자 행위 기록입니다. `audit_logs` 컬렉션에 추가만 되며 수정/삭제하지 않습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 감사 대상 행위
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Login,
    RoleChange,
    AccountDelete,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Login => "login",
            AuditAction::RoleChange => "role_change",
            AuditAction::AccountDelete => "account_delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub action: AuditAction,
    /// 행위를 수행한 관리자 계정 ID
    pub admin_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
    /// 행위별 자유 형식 데이터
    #[serde(default)]
    pub metadata: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    pub created_at: DateTime,
}

impl AuditLog {
    pub fn new(
        action: AuditAction,
        admin_id: impl Into<String>,
        target_id: Option<String>,
        metadata: serde_json::Value,
    ) -> Self {
        Self {
            id: None,
            action,
            admin_id: admin_id.into(),
            target_id,
            metadata,
            ip_address: None,
            user_agent: None,
            created_at: DateTime::now(),
        }
    }

    /// 요청자의 네트워크 정보를 붙입니다.
    pub fn with_requester(mut self, ip_address: Option<String>, user_agent: Option<String>) -> Self {
        self.ip_address = ip_address;
        self.user_agent = user_agent;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_tags() {
        assert_eq!(serde_json::to_string(&AuditAction::RoleChange).unwrap(), "\"role_change\"");
        assert_eq!(AuditAction::AccountDelete.as_str(), "account_delete");
    }

    #[test]
    fn test_document_shape() {
        let log = AuditLog::new(
            AuditAction::RoleChange,
            "admin-1",
            Some("target-1".to_string()),
            json!({ "from": "customer", "to": "staff" }),
        )
        .with_requester(Some("10.0.0.1".to_string()), None);

        let document = mongodb::bson::to_document(&log).unwrap();

        assert_eq!(document.get_str("action").unwrap(), "role_change");
        assert_eq!(document.get_str("ip_address").unwrap(), "10.0.0.1");
        assert!(!document.contains_key("user_agent"));
        assert_eq!(
            document.get_document("metadata").unwrap().get_str("to").unwrap(),
            "staff"
        );
    }
}
