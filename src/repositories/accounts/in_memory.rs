//! 테스트용 메모리 계정 저장소
//!
//! MongoDB의 sparse unique 인덱스와 같은 제약(이메일, 프로바이더 ID)을 흉내냅니다.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};
use crate::config::AuthProvider;
use crate::domain::entities::accounts::{Account, Role};
use crate::domain::models::oauth::ProviderProfile;
use crate::errors::{AppError, AppResult};
use super::account_store::AccountStore;

#[derive(Default)]
pub struct InMemoryAccountStore {
    accounts: Mutex<Vec<Account>>,
    fail_all: AtomicBool,
    writes: AtomicUsize,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 이후 모든 호출이 `DatabaseError`로 실패하게 합니다.
    pub fn fail_all(&self) {
        self.fail_all.store(true, Ordering::SeqCst);
    }

    /// create/link/update/delete 호출 횟수
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn all(&self) -> Vec<Account> {
        self.accounts.lock().unwrap().clone()
    }

    /// 테스트 준비용. 쓰기 횟수에 포함되지 않습니다.
    pub fn insert(&self, mut account: Account) -> Account {
        account.id.get_or_insert_with(ObjectId::new);
        self.accounts.lock().unwrap().push(account.clone());
        account
    }

    fn check_available(&self) -> AppResult<()> {
        if self.fail_all.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError("connection reset".to_string()));
        }
        Ok(())
    }

    fn conflicts(existing: &Account, candidate: &Account) -> bool {
        if existing.id.is_some() && existing.id == candidate.id {
            return false;
        }
        let same = |a: &Option<String>, b: &Option<String>| a.is_some() && a == b;

        same(&existing.email, &candidate.email)
            || same(&existing.google_id, &candidate.google_id)
            || same(&existing.facebook_id, &candidate.facebook_id)
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Account>> {
        self.check_available()?;
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        Ok(self.accounts.lock().unwrap().iter().find(|a| a.id == Some(object_id)).cloned())
    }

    async fn find_by_provider_id(&self, provider: AuthProvider, external_id: &str) -> AppResult<Option<Account>> {
        self.check_available()?;
        Ok(self.accounts.lock().unwrap()
            .iter()
            .find(|a| a.provider_id(provider) == Some(external_id))
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        self.check_available()?;
        Ok(self.accounts.lock().unwrap()
            .iter()
            .find(|a| a.email.as_deref() == Some(email))
            .cloned())
    }

    async fn create(&self, mut account: Account) -> AppResult<Account> {
        self.check_available()?;
        self.writes.fetch_add(1, Ordering::SeqCst);

        let mut accounts = self.accounts.lock().unwrap();
        if accounts.iter().any(|a| Self::conflicts(a, &account)) {
            return Err(AppError::ConflictError("duplicate key".to_string()));
        }
        account.id = Some(ObjectId::new());
        accounts.push(account.clone());
        Ok(account)
    }

    async fn link_provider(&self, id: &str, profile: &ProviderProfile) -> AppResult<Option<Account>> {
        self.check_available()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let mut accounts = self.accounts.lock().unwrap();
        let Some(position) = accounts.iter().position(|a| a.id == Some(object_id)) else {
            return Ok(None);
        };

        // 저장된 현재 문서에 연결 필드만 반영
        let mut linked = accounts[position].clone();
        linked.link_provider(profile);
        if accounts.iter().any(|a| Self::conflicts(a, &linked)) {
            return Err(AppError::ConflictError("duplicate key".to_string()));
        }

        accounts[position] = linked.clone();
        Ok(Some(linked))
    }

    async fn update_role(&self, id: &str, role: Role) -> AppResult<Option<Account>> {
        self.check_available()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let mut accounts = self.accounts.lock().unwrap();
        Ok(accounts.iter_mut().find(|a| a.id == Some(object_id)).map(|a| {
            a.role = role;
            a.updated_at = DateTime::now();
            a.clone()
        }))
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        self.check_available()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let mut accounts = self.accounts.lock().unwrap();
        let before = accounts.len();
        accounts.retain(|a| a.id != Some(object_id));
        Ok(accounts.len() < before)
    }
}
