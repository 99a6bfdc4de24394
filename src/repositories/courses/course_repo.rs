//! 강좌 리포지토리
//!
//! 레슨은 강좌 문서에 임베드되므로 레슨 추가도 이 리포지토리가 담당합니다.

use std::sync::Arc;

use mongodb::bson::{self, Document, doc, oid::ObjectId};

use crate::db::Database;
use crate::domain::entities::collections;
use crate::domain::entities::courses::{Course, Lesson};
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::repositories::Repository;

pub struct CourseRepository {
    db: Arc<Database>,
}

impl Repository for CourseRepository {
    type Entity = Course;

    fn database(&self) -> &Arc<Database> {
        &self.db
    }

    fn collection_name(&self) -> &str {
        collections::COURSES
    }
}

impl CourseRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// 강좌의 `lessons` 배열 끝에 레슨을 추가합니다.
    pub async fn push_lesson(&self, course_id: ObjectId, lesson: &Lesson) -> AppResult<()> {
        let lesson = bson::to_document(lesson).context("lesson serialization failed")?;

        self.update(course_id, doc! { "$push": { "lessons": lesson } }).await
    }

    /// 강좌의 `students`에 학생을 중복 없이 추가합니다.
    pub async fn add_student(&self, course_id: ObjectId, student_id: ObjectId) -> AppResult<()> {
        self.update(course_id, doc! { "$addToSet": { "students": student_id } })
            .await
    }

    async fn update(&self, course_id: ObjectId, update: Document) -> AppResult<()> {
        let result = self
            .collection()
            .update_one(doc! { "_id": course_id }, update)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!("course {} not found", course_id)));
        }
        Ok(())
    }
}
