//! # 관리자 계정 핸들러
//!
//! | 메서드 | 경로 | 역할 |
//! |--------|------|------|
//! | GET | `/api/v1/admin/accounts/{id}` | admin, manager |
//! | PATCH | `/api/v1/admin/accounts/{id}/role` | admin |
//! | DELETE | `/api/v1/admin/accounts/{id}` | admin |
//!
//! 역할 변경과 삭제는 감사 기록(`role_change`, `account_delete`)을 남깁니다.

use actix_web::{delete, get, patch, web, HttpResponse};
use serde_json::json;
use validator::Validate;
use crate::domain::dto::accounts::{AccountResponse, UpdateRoleRequest};
use crate::domain::entities::accounts::Role;
use crate::domain::models::auth::{AuthenticatedUser, RequestMeta};
use crate::errors::AppError;
use crate::middlewares::AuthMiddleware;
use crate::services::accounts::AccountService;

#[get(
    "/accounts/{id}",
    wrap = "AuthMiddleware::required_with_roles(vec![Role::Admin, Role::Manager])"
)]
pub async fn get_account(
    path: web::Path<String>,
    accounts: web::Data<AccountService>,
) -> Result<HttpResponse, AppError> {
    let account = accounts.get_account(&path).await?;

    Ok(HttpResponse::Ok().json(AccountResponse::from(account)))
}

#[patch("/accounts/{id}/role", wrap = "AuthMiddleware::required_with_role(Role::Admin)")]
pub async fn update_account_role(
    path: web::Path<String>,
    payload: web::Json<UpdateRoleRequest>,
    user: AuthenticatedUser,
    requester: RequestMeta,
    accounts: web::Data<AccountService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let account = accounts
        .change_role(&user, &path, payload.into_inner(), &requester)
        .await?;

    Ok(HttpResponse::Ok().json(AccountResponse::from(account)))
}

#[delete("/accounts/{id}", wrap = "AuthMiddleware::required_with_role(Role::Admin)")]
pub async fn delete_account(
    path: web::Path<String>,
    user: AuthenticatedUser,
    requester: RequestMeta,
    accounts: web::Data<AccountService>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    accounts.delete_account(&user, &id, &requester).await?;

    Ok(HttpResponse::Ok().json(json!({
        "deleted": true,
        "id": id
    })))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::{http::StatusCode, test, App};
    use mongodb::bson::DateTime;
    use super::*;
    use crate::domain::entities::accounts::Account;
    use crate::domain::entities::audit::AuditAction;
    use crate::repositories::accounts::InMemoryAccountStore;
    use crate::repositories::audit::InMemoryAuditLogStore;
    use crate::services::audit::AuditService;
    use crate::services::auth::{IdentityResolver, SessionService, TokenService};

    struct Harness {
        accounts: Arc<InMemoryAccountStore>,
        audit_logs: Arc<InMemoryAuditLogStore>,
        sessions: web::Data<SessionService>,
        account_service: web::Data<AccountService>,
    }

    fn harness() -> Harness {
        let accounts = Arc::new(InMemoryAccountStore::new());
        let audit_logs = Arc::new(InMemoryAuditLogStore::new());
        let sessions = web::Data::new(SessionService::new(
            Arc::new(TokenService::new("admin-secret", 1, 7)),
            Arc::new(IdentityResolver::new(accounts.clone())),
        ));
        let account_service = web::Data::new(AccountService::new(
            accounts.clone(),
            Arc::new(AuditService::new(audit_logs.clone())),
        ));
        Harness { accounts, audit_logs, sessions, account_service }
    }

    fn insert(h: &Harness, email: &str, role: Role) -> Account {
        h.accounts.insert(Account {
            id: None,
            email: Some(email.to_string()),
            name: email.to_string(),
            avatar: None,
            is_verified: true,
            role,
            google_id: None,
            facebook_id: None,
            created_at: DateTime::now(),
            updated_at: DateTime::now(),
        })
    }

    fn bearer(h: &Harness, account: &Account) -> (&'static str, String) {
        let pair = h.sessions.tokens().generate_token_pair(account).unwrap();
        ("Authorization", format!("Bearer {}", pair.access_token))
    }

    macro_rules! app {
        ($h:expr) => {
            test::init_service(
                App::new()
                    .app_data($h.sessions.clone())
                    .app_data($h.account_service.clone())
                    .service(
                        web::scope("/api/v1/admin")
                            .service(get_account)
                            .service(update_account_role)
                            .service(delete_account)
                    )
            ).await
        };
    }

    #[actix_web::test]
    async fn test_manager_can_read_but_not_change_roles() {
        let h = harness();
        let manager = insert(&h, "manager@example.com", Role::Manager);
        let customer = insert(&h, "ann@example.com", Role::Customer);
        let app = app!(h);
        let uri = format!("/api/v1/admin/accounts/{}", customer.id_string().unwrap());

        let req = test::TestRequest::get().uri(&uri).insert_header(bearer(&h, &manager)).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::patch()
            .uri(&format!("{}/role", uri))
            .insert_header(bearer(&h, &manager))
            .set_json(json!({ "role": "staff" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_admin_changes_role_with_audit() {
        let h = harness();
        let admin = insert(&h, "admin@example.com", Role::Admin);
        let customer = insert(&h, "ann@example.com", Role::Customer);
        let app = app!(h);

        let req = test::TestRequest::patch()
            .uri(&format!("/api/v1/admin/accounts/{}/role", customer.id_string().unwrap()))
            .insert_header(bearer(&h, &admin))
            .insert_header(("User-Agent", "admin-panel"))
            .set_json(json!({ "role": "inventory", "reason": "stock room" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["role"], "inventory");
        let entries = h.audit_logs.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action, AuditAction::RoleChange);
        assert_eq!(entries[0].user_agent.as_deref(), Some("admin-panel"));
    }

    #[actix_web::test]
    async fn test_unknown_role_is_rejected() {
        let h = harness();
        let admin = insert(&h, "admin@example.com", Role::Admin);
        let customer = insert(&h, "ann@example.com", Role::Customer);
        let app = app!(h);

        let req = test::TestRequest::patch()
            .uri(&format!("/api/v1/admin/accounts/{}/role", customer.id_string().unwrap()))
            .insert_header(bearer(&h, &admin))
            .set_json(json!({ "role": "owner" }))
            .to_request();

        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
        assert!(h.audit_logs.entries().is_empty());
    }

    #[actix_web::test]
    async fn test_admin_cannot_delete_self_over_http() {
        let h = harness();
        let admin = insert(&h, "admin@example.com", Role::Admin);
        let app = app!(h);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/admin/accounts/{}", admin.id_string().unwrap()))
            .insert_header(bearer(&h, &admin))
            .to_request();

        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);
        assert_eq!(h.accounts.all().len(), 1);
    }

    #[actix_web::test]
    async fn test_missing_account_is_not_found() {
        let h = harness();
        let admin = insert(&h, "admin@example.com", Role::Admin);
        let app = app!(h);

        let req = test::TestRequest::get()
            .uri("/api/v1/admin/accounts/65f000000000000000000042")
            .insert_header(bearer(&h, &admin))
            .to_request();

        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }
}
