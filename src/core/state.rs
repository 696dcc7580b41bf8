//! 애플리케이션 상태 조립
//!
//! ```text
//! Database ─► AccountRepository ─┬─► IdentityResolver ─┬─► SessionService
//!                                │                     └─► OAuthService ◄─ RedisOAuthStateStore
//!                                └─► AccountService                       ◄─ HttpProviderGateway
//! Database ─► AuditLogRepository ──► AuditService ─► (OAuthService, AccountService)
//! ```

use std::sync::Arc;
use actix_web::web;
use crate::caching::redis::RedisClient;
use crate::db::Database;
use crate::errors::AppResult;
use crate::repositories::accounts::{AccountRepository, AccountStore};
use crate::repositories::audit::{AuditLogRepository, AuditLogStore};
use crate::services::accounts::AccountService;
use crate::services::audit::AuditService;
use crate::services::auth::{
    HttpProviderGateway, IdentityResolver, OAuthService, OAuthStateStore,
    ProviderGateway, RedisOAuthStateStore, SessionService, TokenService,
};
use crate::utils::display_terminal::{print_step_complete, print_step_start, print_sub_task};

/// 요청 핸들러에 주입되는 서비스 핸들
#[derive(Clone)]
pub struct AppState {
    pub sessions: web::Data<SessionService>,
    pub oauth: web::Data<OAuthService>,
    pub accounts: web::Data<AccountService>,
}

impl AppState {
    pub const REPOSITORY_COUNT: usize = 2;
    pub const SERVICE_COUNT: usize = 6;

    /// 컬렉션 인덱스를 보장한 뒤 서비스 그래프를 생성합니다.
    pub async fn build(database: &Database, redis: RedisClient) -> AppResult<Self> {
        print_step_start(1, "Preparing repositories");
        print_sub_task("MongoDB", database.database_name());

        let account_repo = AccountRepository::new(database);
        account_repo.create_indexes().await?;
        print_sub_task("AccountRepository", "indexes ready");

        let audit_repo = AuditLogRepository::new(database);
        audit_repo.create_indexes().await?;
        print_sub_task("AuditLogRepository", "indexes ready");

        print_step_complete(1, "Repositories prepared", Self::REPOSITORY_COUNT);

        print_step_start(2, "Wiring services");

        let account_store: Arc<dyn AccountStore> = Arc::new(account_repo);
        let audit_store: Arc<dyn AuditLogStore> = Arc::new(audit_repo);
        let states: Arc<dyn OAuthStateStore> = Arc::new(RedisOAuthStateStore::new(redis));
        let gateway: Arc<dyn ProviderGateway> = Arc::new(HttpProviderGateway::default());

        let identity = Arc::new(IdentityResolver::new(account_store.clone()));
        let tokens = Arc::new(TokenService::from_config());
        let audit = Arc::new(AuditService::new(audit_store));

        let sessions = SessionService::new(tokens, identity.clone());
        let oauth = OAuthService::new(
            OAuthService::load_provider_settings(),
            states,
            gateway,
            identity,
            audit.clone(),
        );
        let accounts = AccountService::new(account_store, audit);

        let enabled = oauth
            .enabled_providers()
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>();
        print_sub_task(
            "OAuthService",
            &if enabled.is_empty() { "no providers enabled".to_string() } else { enabled.join(", ") },
        );

        print_step_complete(2, "Services wired", Self::SERVICE_COUNT);

        Ok(Self {
            sessions: web::Data::new(sessions),
            oauth: web::Data::new(oauth),
            accounts: web::Data::new(accounts),
        })
    }
}
