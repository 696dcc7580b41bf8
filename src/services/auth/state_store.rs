//! OAuth state 저장소
//!
//! 로그인 URL을 만들 때 발급한 state를 콜백에서 한 번만 소비할 수 있도록 보관합니다.
//! state는 발급한 프로바이더에 묶여 있어서 다른 프로바이더의 콜백에서는 쓸 수 없습니다.

use async_trait::async_trait;
use crate::caching::redis::RedisClient;
use crate::config::AuthProvider;
use crate::errors::{AppError, AppResult};

#[async_trait]
pub trait OAuthStateStore: Send + Sync {
    async fn put(&self, state: &str, provider: AuthProvider, ttl_seconds: u64) -> AppResult<()>;

    /// state를 꺼내면서 삭제합니다. 없거나 만료되었으면 `None`.
    async fn take(&self, state: &str) -> AppResult<Option<AuthProvider>>;
}

pub struct RedisOAuthStateStore {
    redis: RedisClient,
}

impl RedisOAuthStateStore {
    pub fn new(redis: RedisClient) -> Self {
        Self { redis }
    }

    fn key(state: &str) -> String {
        format!("oauth:state:{}", state)
    }
}

#[async_trait]
impl OAuthStateStore for RedisOAuthStateStore {
    async fn put(&self, state: &str, provider: AuthProvider, ttl_seconds: u64) -> AppResult<()> {
        self.redis
            .set_with_expiry(&Self::key(state), &provider, ttl_seconds)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }

    async fn take(&self, state: &str) -> AppResult<Option<AuthProvider>> {
        self.redis
            .take::<AuthProvider>(&Self::key(state))
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }
}
