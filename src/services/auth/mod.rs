//! # Authentication Services
//!
//! - [`identity_service`] - 프로필 → 계정 해석 (조회/연결/생성)
//! - [`oauth_service`] - OAuth 2.0 인가 코드 흐름 (Google, Facebook)
//! - [`providers`] - 프로바이더 토큰 교환과 사용자 정보 조회
//! - [`state_store`] - 일회용 OAuth state 저장소
//! - [`token_service`] - JWT 세션 참조 발급/검증
//! - [`session_service`] - 세션 참조 → 계정 상관

pub mod identity_service;
pub mod oauth_service;
pub mod providers;
pub mod state_store;
pub mod token_service;
pub mod session_service;

pub use identity_service::{IdentityResolver, Resolution};
pub use oauth_service::OAuthService;
pub use providers::{HttpProviderGateway, ProviderGateway};
pub use state_store::{OAuthStateStore, RedisOAuthStateStore};
pub use token_service::TokenService;
pub use session_service::SessionService;
