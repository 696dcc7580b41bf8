use serde::Serialize;
use crate::config::AuthProvider;
use crate::domain::entities::accounts::{Account, Role};

/// 계정 응답
///
/// 외부 식별자 자체는 노출하지 않고 연결된 프로바이더 목록만 보여줍니다.
#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub id: String,
    pub email: Option<String>,
    pub name: String,
    pub avatar: Option<String>,
    pub is_verified: bool,
    pub role: Role,
    pub linked_providers: Vec<AuthProvider>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        let linked_providers = AuthProvider::ALL
            .into_iter()
            .filter(|p| account.provider_id(*p).is_some())
            .collect();

        let Account {
            id,
            email,
            name,
            avatar,
            is_verified,
            role,
            created_at,
            updated_at,
            ..
        } = account;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            email,
            name,
            avatar,
            is_verified,
            role,
            linked_providers,
            created_at: created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: updated_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{oid::ObjectId, DateTime};

    #[test]
    fn test_lists_linked_providers() {
        let account = Account {
            id: Some(ObjectId::new()),
            email: Some("ann@example.com".to_string()),
            name: "Ann Lee".to_string(),
            avatar: None,
            is_verified: true,
            role: Role::Customer,
            google_id: Some("g1".to_string()),
            facebook_id: Some("f1".to_string()),
            created_at: DateTime::now(),
            updated_at: DateTime::now(),
        };

        let response = AccountResponse::from(account);

        assert_eq!(response.linked_providers, vec![AuthProvider::Google, AuthProvider::Facebook]);
        assert_eq!(response.id.len(), 24);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["role"], "customer");
        assert!(json.get("google_id").is_none());
    }
}
