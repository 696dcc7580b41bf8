//! 감사 기록 저장소
//!
//! 추가 전용입니다. 조회/수정/삭제 API는 제공하지 않습니다.

use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use crate::db::Database;
use crate::domain::entities::audit::AuditLog;
use crate::errors::{AppError, AppResult};

pub const AUDIT_LOGS_COLLECTION: &str = "audit_logs";

#[async_trait]
pub trait AuditLogStore: Send + Sync {
    async fn append(&self, entry: AuditLog) -> AppResult<()>;
}

#[derive(Clone)]
pub struct AuditLogRepository {
    collection: Collection<AuditLog>,
}

impl AuditLogRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<AuditLog>(AUDIT_LOGS_COLLECTION),
        }
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let admin_index = IndexModel::builder()
            .keys(doc! { "admin_id": 1, "created_at": -1 })
            .options(IndexOptions::builder()
                .name("admin_created_at".to_string())
                .build())
            .build();

        let target_index = IndexModel::builder()
            .keys(doc! { "target_id": 1 })
            .options(IndexOptions::builder()
                .sparse(true)
                .name("target_id".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([admin_index, target_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("감사 기록 인덱스 생성 완료: {}", AUDIT_LOGS_COLLECTION);
        Ok(())
    }
}

#[async_trait]
impl AuditLogStore for AuditLogRepository {
    async fn append(&self, entry: AuditLog) -> AppResult<()> {
        self.collection
            .insert_one(&entry)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}
