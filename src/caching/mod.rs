//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 단기 데이터 저장소를 제공합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let cache = RedisClient::new().await?;
//! cache.set_with_expiry("oauth:state:abc", &AuthProvider::Google, 600).await?;
//!
//! let provider: Option<AuthProvider> = cache.take("oauth:state:abc").await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
