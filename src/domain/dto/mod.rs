//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 요청/응답 객체들입니다.
//! 엔티티를 그대로 노출하지 않고, 필요한 필드만 골라서 직렬화합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── auth/       # OAuth 콜백, 토큰 갱신, 로그인 응답
//! └── accounts/   # 계정 응답, 역할 변경 요청
//! ```
//!
//! 요청 DTO는 `validator`의 `Validate`를 구현하며, 핸들러에서 `validate()`를 호출한 뒤
//! 실패하면 `AppError::ValidationError`로 변환합니다.

pub mod auth;
pub mod accounts;
