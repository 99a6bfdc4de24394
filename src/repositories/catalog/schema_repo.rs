//! 데이터베이스 카탈로그 리포지토리
//!
//! 컬렉션 생성, 기존 검증기 조회, 인덱스 생성을 담당합니다.
//! 문서 단위 리포지토리와 달리 특정 엔티티 타입에 묶이지 않습니다.

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::IndexModel;
use mongodb::bson::{Document, doc};
use mongodb::options::{CreateCollectionOptions, IndexOptions};

use crate::db::Database;
use crate::errors::{AppError, AppResult};

pub struct SchemaRepository {
    db: Arc<Database>,
}

impl SchemaRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// 컬렉션의 현재 검증기를 조회합니다.
    ///
    /// 컬렉션이 없으면 `None`, 있지만 검증기가 없으면 `Some(None)`입니다.
    pub async fn current_validator(&self, name: &str) -> AppResult<Option<Option<Document>>> {
        let specification = self
            .db
            .get_database()
            .list_collections()
            .filter(doc! { "name": name })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_next()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(specification.map(|spec| spec.options.validator))
    }

    pub async fn create_with_validator(&self, name: &str, validator: &Document) -> AppResult<()> {
        let options = CreateCollectionOptions::builder()
            .validator(validator.clone())
            .build();

        self.db
            .get_database()
            .create_collection(name)
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(format!("createCollection {}: {}", name, e)))
    }

    /// 이름이 지정된 고유 인덱스를 생성합니다.
    ///
    /// 같은 이름과 같은 정의의 인덱스가 이미 있으면 서버가 아무 작업도 하지 않습니다.
    pub async fn ensure_unique_index(&self, collection: &str, field: &str, index_name: &str) -> AppResult<String> {
        let index = IndexModel::builder()
            .keys(doc! { field: 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name(index_name.to_string())
                .build())
            .build();

        let result = self
            .db
            .get_database()
            .collection::<Document>(collection)
            .create_index(index)
            .await
            .map_err(|e| AppError::DatabaseError(format!("createIndex {}.{}: {}", collection, field, e)))?;

        Ok(result.index_name)
    }

    /// 컬렉션의 모든 문서를 삭제하고 삭제된 수를 반환합니다.
    pub async fn clear_collection(&self, collection: &str) -> AppResult<u64> {
        let result = self
            .db
            .get_database()
            .collection::<Document>(collection)
            .delete_many(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(format!("deleteMany {}: {}", collection, e)))?;

        Ok(result.deleted_count)
    }
}
