//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들입니다.
//!
//! ```text
//! Client ──► Handlers (이 모듈) ──► Services ──► Repositories ──► MongoDB / Redis
//! ```
//!
//! 핸들러는 요청을 DTO로 받아 검증하고, `web::Data`로 주입된 서비스를 호출한 뒤
//! 결과를 응답 DTO로 직렬화합니다. 실패는 `AppError`로 반환하며
//! `ResponseError` 구현이 상태 코드와 JSON 본문을 만듭니다.
//!
//! ## 모듈 구성
//!
//! - [`auth`] - 소셜 로그인, 토큰 갱신, 현재 계정
//! - [`admin`] - 관리자 계정 조회/역할 변경/삭제

pub mod auth;
pub mod admin;
