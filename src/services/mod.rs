//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 시작 시 한 번 생성되어 `web::Data`로 핸들러에 전달됩니다.
//! 저장소와 외부 연동은 트레이트 객체로 주입받습니다.
//!
//! # Modules
//!
//! - [`auth`] - 계정 해석, OAuth 로그인, JWT 세션
//! - [`accounts`] - 관리자용 계정 조회/역할 변경/삭제
//! - [`audit`] - 관리자 행위 감사 기록
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::auth::{IdentityResolver, TokenService};
//!
//! let identity = IdentityResolver::new(accounts.clone());
//! let account = identity.resolve(&profile).await?;
//! let tokens = TokenService::from_config().generate_token_pair(&account)?;
//! ```

pub mod auth;
pub mod accounts;
pub mod audit;
