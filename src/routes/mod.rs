//! 라우트 구성
//!
//! 모든 HTTP 엔드포인트를 한 곳에서 등록합니다. 역할 검사는 각 핸들러의
//! `wrap = "AuthMiddleware::..."` 속성에서 지정합니다.

use crate::handlers;
use actix_web::web;
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_admin_routes(cfg);
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::get_current_account)
            .service(handlers::auth::refresh_tokens)
            .service(handlers::auth::oauth_login_url)
            .service(handlers::auth::oauth_callback)
    );
}

fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/admin")
            .service(handlers::admin::get_account)
            .service(handlers::admin::update_account_role)
            .service(handlers::admin::delete_account)
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "providers": ["google", "facebook"]
        }
    }))
}
