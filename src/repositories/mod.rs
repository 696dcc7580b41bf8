//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 주 저장소로 사용합니다. 서비스 계층은 구체 타입 대신
//! 저장소 트레이트(`AccountStore`, `AuditLogStore`)에 의존하므로
//! 테스트에서는 메모리 구현으로 교체할 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::accounts::{AccountRepository, AccountStore};
//!
//! let accounts: Arc<dyn AccountStore> = Arc::new(AccountRepository::new(&db));
//! let account = accounts.find_by_email("ann@example.com").await?;
//! ```

pub mod accounts;
pub mod audit;
