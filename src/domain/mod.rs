//! # Domain Layer Module
//!
//! 계정, 역할, 감사 기록과 인증 흐름에서 오가는 값들을 정의하는 도메인 계층입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB 문서 (Account, AuditLog)
//! ├── dto       - API 요청/응답
//! └── models    - 프로바이더 프로필, 인증 컨텍스트, JWT 클레임
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! 도메인 타입은 서비스나 저장소에 의존하지 않습니다.
//! 계정 해석 규칙 중 문서 변경에 해당하는 부분(`Account::from_profile`,
//! `Account::link_provider`)만 엔티티에 두고, 조회 순서는 서비스 계층이 결정합니다.

pub mod entities;
pub mod dto;
pub mod models;
