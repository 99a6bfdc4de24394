//! 컬렉션 단위 리포지토리 공통 trait
//!
//! 각 리포지토리는 하나의 컬렉션과 그 문서 타입을 소유합니다.
//! 삽입과 전체 조회는 기본 구현을 그대로 사용합니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Bson, doc, oid::ObjectId};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::db::Database;
use crate::errors::{AppError, AppResult};

#[async_trait]
pub trait Repository: Send + Sync {
    /// 컬렉션 문서 타입
    type Entity: Serialize + DeserializeOwned + Send + Sync + Unpin + 'static;

    fn database(&self) -> &Arc<Database>;

    fn collection_name(&self) -> &str;

    fn collection(&self) -> Collection<Self::Entity> {
        self.database().get_database().collection(self.collection_name())
    }

    /// 문서 하나를 삽입하고 생성된 `_id`를 반환합니다.
    async fn insert(&self, entity: &Self::Entity) -> AppResult<ObjectId> {
        let result = self
            .collection()
            .insert_one(entity)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        inserted_object_id(self.collection_name(), result.inserted_id)
    }

    /// 여러 문서를 삽입하고 입력 순서대로 생성된 `_id`를 반환합니다.
    async fn insert_many(&self, entities: &[Self::Entity]) -> AppResult<Vec<ObjectId>> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let result = self
            .collection()
            .insert_many(entities)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let mut inserted: Vec<(usize, Bson)> = result.inserted_ids.into_iter().collect();
        inserted.sort_by_key(|(index, _)| *index);

        inserted
            .into_iter()
            .map(|(_, id)| inserted_object_id(self.collection_name(), id))
            .collect()
    }

    async fn find_all(&self) -> AppResult<Vec<Self::Entity>> {
        self.collection()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect::<Vec<_>>()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

fn inserted_object_id(collection: &str, id: Bson) -> AppResult<ObjectId> {
    id.as_object_id().ok_or_else(|| {
        AppError::InternalError(format!("{}: inserted _id is not an ObjectId: {}", collection, id))
    })
}

/// 전용 쿼리가 필요 없는 컬렉션용 리포지토리
pub struct CollectionRepository<T> {
    db: Arc<Database>,
    name: &'static str,
    _entity: std::marker::PhantomData<fn() -> T>,
}

impl<T> CollectionRepository<T> {
    pub fn new(db: Arc<Database>, name: &'static str) -> Self {
        Self {
            db,
            name,
            _entity: std::marker::PhantomData,
        }
    }
}

impl<T> Repository for CollectionRepository<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + Unpin + 'static,
{
    type Entity = T;

    fn database(&self) -> &Arc<Database> {
        &self.db
    }

    fn collection_name(&self) -> &str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inserted_object_id_accepts_object_ids_only() {
        let id = ObjectId::new();
        assert_eq!(inserted_object_id("users", Bson::ObjectId(id)).unwrap(), id);
        assert!(matches!(
            inserted_object_id("users", Bson::String("abc".into())),
            Err(AppError::InternalError(_))
        ));
    }
}
