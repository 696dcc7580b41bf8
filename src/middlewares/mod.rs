//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - Bearer 토큰 추출 및 검증
//! - 토큰의 계정 ID로 계정 재조회 (삭제된 계정은 401)
//! - 계정의 현재 역할로 인가 (부족하면 403)
//! - 선택적/강제 인증 모드 지원
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::domain::entities::accounts::Role;
//! use crate::middlewares::AuthMiddleware;
//!
//! web::scope("/api/v1/admin")
//!     .wrap(AuthMiddleware::required_with_roles(vec![Role::Admin, Role::Manager]))
//!     .service(get_account)
//! ```
//!
//! 미들웨어는 `web::Data<SessionService>`를 앱 데이터에서 찾습니다.

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
