//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션의 조회와 시드 과정의 관계/목록 갱신을 담당합니다.

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::bson::{Document, doc, oid::ObjectId};

use crate::db::Database;
use crate::domain::entities::collections;
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::Repository;

pub struct UserRepository {
    db: Arc<Database>,
}

impl Repository for UserRepository {
    type Entity = User;

    fn database(&self) -> &Arc<Database> {
        &self.db
    }

    fn collection_name(&self) -> &str {
        collections::USERS
    }
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// 주어진 Firebase UID 중 이미 존재하는 값을 반환합니다.
    pub async fn existing_firebase_uids(&self, uids: &[&str]) -> AppResult<Vec<String>> {
        let users: Vec<User> = self
            .collection()
            .find(doc! { "firebaseUid": { "$in": uids } })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(users.into_iter().map(|user| user.firebase_uid).collect())
    }

    /// `followers`와 `following`을 주어진 목록으로 교체합니다.
    pub async fn set_relations(&self, user_id: ObjectId, followers: &[ObjectId], following: &[ObjectId]) -> AppResult<()> {
        self.update(
            user_id,
            doc! { "$set": { "followers": followers.to_vec(), "following": following.to_vec() } },
        )
        .await
    }

    /// `information.achievements`를 주어진 업적 목록으로 교체합니다.
    pub async fn set_achievements(&self, user_id: ObjectId, achievements: &[ObjectId]) -> AppResult<()> {
        self.update(
            user_id,
            doc! { "$set": { "information.achievements": achievements.to_vec() } },
        )
        .await
    }

    /// `information.myCourses`에 강좌를 중복 없이 추가합니다.
    pub async fn add_course(&self, user_id: ObjectId, course_id: ObjectId) -> AppResult<()> {
        self.update(user_id, doc! { "$addToSet": { "information.myCourses": course_id } })
            .await
    }

    async fn update(&self, user_id: ObjectId, update: Document) -> AppResult<()> {
        let result = self
            .collection()
            .update_one(doc! { "_id": user_id }, update)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!("user {} not found", user_id)));
        }
        Ok(())
    }
}
