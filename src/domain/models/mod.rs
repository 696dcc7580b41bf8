//! # Domain Models Module
//!
//! 저장되지 않는 도메인 모델과 값 객체를 정의합니다.
//!
//! ## Entities vs Models 구분
//!
//! - **Entities** (`../entities/`): MongoDB 문서와 1:1로 대응하는 영속 객체
//!   (`Account`, `AuditLog`)
//! - **Models** (`./`): 요청 처리 중에만 존재하는 값
//!   (`ProviderProfile`, `AuthenticatedUser`, `TokenClaims`)
//!
//! ## 모듈 구성
//!
//! ```text
//! models/
//! ├── auth/    ← 요청별 인증 컨텍스트, 라우트 인증 요구사항, 요청자 정보
//! ├── oauth/   ← 프로바이더 프로필 응답과 정규화
//! └── token/   ← JWT 클레임과 토큰 쌍
//! ```

pub mod auth;
pub mod oauth;
pub mod token;
