//! MongoDB 계정 저장소

use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::config::AuthProvider;
use crate::db::Database;
use crate::domain::entities::accounts::{Account, Role};
use crate::domain::models::oauth::ProviderProfile;
use crate::errors::{AppError, AppResult};
use super::account_store::AccountStore;

pub const ACCOUNTS_COLLECTION: &str = "accounts";

const DUPLICATE_ACCOUNT_MESSAGE: &str = "이미 다른 계정에서 사용 중인 이메일 또는 프로바이더 ID입니다";

#[derive(Clone)]
pub struct AccountRepository {
    collection: Collection<Account>,
}

impl AccountRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Account>(ACCOUNTS_COLLECTION),
        }
    }

    /// 고유성 제약을 위한 인덱스를 생성합니다.
    ///
    /// 이메일과 프로바이더 ID는 없을 수 있으므로 모두 sparse 인덱스입니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let unique_sparse = |field: &str| {
            IndexModel::builder()
                .keys(doc! { field: 1 })
                .options(IndexOptions::builder()
                    .unique(true)
                    .sparse(true)
                    .name(format!("{}_unique", field))
                    .build())
                .build()
        };

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        let mut indexes = vec![unique_sparse("email")];
        indexes.extend(AuthProvider::ALL.iter().map(|p| unique_sparse(p.id_field())));
        indexes.push(created_at_index);

        self.collection
            .create_indexes(indexes)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("계정 인덱스 생성 완료: {}", ACCOUNTS_COLLECTION);
        Ok(())
    }
}

fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
}

/// 프로바이더 연결용 업데이트 파이프라인
///
/// 아바타는 `$ifNull`로 기존 값이 없을 때만 채웁니다. URL이 `$`로 시작해도
/// 필드 경로로 해석되지 않도록 `$literal`로 감쌉니다.
fn link_pipeline(profile: &ProviderProfile) -> Vec<Document> {
    let mut set = doc! {
        profile.provider.id_field(): profile.external_id.as_str(),
        "is_verified": true,
        "updated_at": DateTime::now(),
    };

    if let Some(avatar) = &profile.avatar_url {
        set.insert("avatar", doc! { "$ifNull": ["$avatar", { "$literal": avatar.as_str() }] });
    }

    vec![doc! { "$set": set }]
}

#[async_trait]
impl AccountStore for AccountRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Account>> {
        let object_id = parse_object_id(id)?;

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_provider_id(&self, provider: AuthProvider, external_id: &str) -> AppResult<Option<Account>> {
        self.collection
            .find_one(doc! { provider.id_field(): external_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create(&self, mut account: Account) -> AppResult<Account> {
        let result = self.collection
            .insert_one(&account)
            .await
            .map_err(|e| AppError::from_mongo(e, DUPLICATE_ACCOUNT_MESSAGE))?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("삽입된 계정 ID를 읽을 수 없습니다".to_string())
        })?;
        account.id = Some(id);

        Ok(account)
    }

    async fn link_provider(&self, id: &str, profile: &ProviderProfile) -> AppResult<Option<Account>> {
        let object_id = parse_object_id(id)?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(doc! { "_id": object_id }, link_pipeline(profile))
            .with_options(options)
            .await
            .map_err(|e| AppError::from_mongo(e, DUPLICATE_ACCOUNT_MESSAGE))
    }

    async fn update_role(&self, id: &str, role: Role) -> AppResult<Option<Account>> {
        let object_id = parse_object_id(id)?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": { "role": role.as_str(), "updated_at": DateTime::now() } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let object_id = parse_object_id(id)?;

        let result = self.collection
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(avatar: Option<&str>) -> ProviderProfile {
        ProviderProfile {
            provider: AuthProvider::Google,
            external_id: "g1".to_string(),
            email: Some("ann@example.com".to_string()),
            display_name: "Ann Lee".to_string(),
            avatar_url: avatar.map(str::to_string),
        }
    }

    #[test]
    fn test_link_pipeline_touches_only_link_fields() {
        let pipeline = link_pipeline(&profile(Some("http://img")));

        assert_eq!(pipeline.len(), 1);
        let set = pipeline[0].get_document("$set").unwrap();
        let mut keys: Vec<&str> = set.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(keys, vec!["avatar", "google_id", "is_verified", "updated_at"]);
        assert_eq!(set.get_str("google_id").unwrap(), "g1");
        assert!(!set.contains_key("role"));

        let avatar = set.get_document("avatar").unwrap();
        let args = avatar.get_array("$ifNull").unwrap();
        assert_eq!(args[0].as_str(), Some("$avatar"));
    }

    #[test]
    fn test_link_pipeline_without_avatar_leaves_avatar_alone() {
        let pipeline = link_pipeline(&profile(None));

        let set = pipeline[0].get_document("$set").unwrap();
        assert!(!set.contains_key("avatar"));
    }
}
