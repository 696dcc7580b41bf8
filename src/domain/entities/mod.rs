//! # Domain Entities Module
//!
//! MongoDB 컬렉션과 직접 매핑되는 엔티티들입니다.
//!
//! | 엔티티 | 컬렉션 | 설명 |
//! |--------|--------|------|
//! | [`accounts::Account`] | `accounts` | 소셜 로그인 계정과 역할 |
//! | [`audit::AuditLog`] | `audit_logs` | 관리자 행위 기록 (추가 전용) |
//!
//! 모든 엔티티는 `_id`를 `Option<ObjectId>`로 두고, 삽입 전에는 `None`입니다.
//! 저장소가 삽입 결과의 ID를 채워서 돌려줍니다.

pub mod accounts;
pub mod audit;
