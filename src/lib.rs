//! 살롱 예약 플랫폼 아이덴티티 서비스 백엔드
//!
//! Google, Facebook 소셜 로그인으로 계정을 식별하고 JWT 세션과
//! 역할 기반 접근 제어, 관리자 감사 기록을 제공합니다.
//!
//! # Features
//!
//! - **소셜 로그인**: Google, Facebook OAuth 2.0 (state 검증 포함)
//! - **계정 연결**: 프로바이더 ID → 이메일 → 신규 생성 순서의 아이덴티티 해석
//! - **JWT 세션**: 액세스/리프레시 토큰, 요청마다 현재 역할 재조회
//! - **RBAC**: customer, admin, manager, inventory, reception, staff
//! - **감사 기록**: 스태프 로그인, 역할 변경, 계정 삭제
//! - **MongoDB**: 계정 및 감사 기록 영구 저장
//! - **Redis**: OAuth state 단기 보관
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 아이덴티티 해석, 세션, 감사
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← AccountStore, AuditLogStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use salon_identity_backend::core::AppState;
//!
//! let state = AppState::build(&database, redis_client).await?;
//! let account = state.oauth
//!     .authenticate_with_code(AuthProvider::Google, &code, &oauth_state, &requester)
//!     .await?;
//! let tokens = state.sessions.tokens().generate_token_pair(&account)?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
