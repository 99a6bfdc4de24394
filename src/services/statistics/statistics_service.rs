//! 교사 통계 서비스
//!
//! 저장된 강좌와 수강 기록에서 교사 통계를 계산해 `teacherStatistics`에 저장합니다.

use std::sync::Arc;

use log::info;
use mongodb::bson::oid::ObjectId;

use crate::db::Database;
use crate::domain::entities::collections;
use crate::domain::entities::enrollments::EnrolledCourse;
use crate::domain::entities::statistics::TeacherStatistics;
use crate::errors::AppResult;
use crate::repositories::courses::CourseRepository;
use crate::repositories::{CollectionRepository, Repository};

pub struct StatisticsService {
    courses: CourseRepository,
    enrollments: CollectionRepository<EnrolledCourse>,
    statistics: CollectionRepository<TeacherStatistics>,
}

impl StatisticsService {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            courses: CourseRepository::new(db.clone()),
            enrollments: CollectionRepository::new(db.clone(), collections::ENROLLED_COURSES),
            statistics: CollectionRepository::new(db, collections::TEACHER_STATISTICS),
        }
    }

    /// 현재 저장된 데이터로 교사 통계를 계산합니다.
    pub async fn derive_for(&self, teacher_id: ObjectId) -> AppResult<TeacherStatistics> {
        let courses = self.courses.find_all().await?;
        let enrollments = self.enrollments.find_all().await?;

        Ok(TeacherStatistics::derive(teacher_id, &courses, &enrollments))
    }

    /// 통계를 계산해 새 문서로 저장합니다.
    pub async fn record_for(&self, teacher_id: ObjectId) -> AppResult<TeacherStatistics> {
        let mut statistics = self.derive_for(teacher_id).await?;
        statistics.id = Some(self.statistics.insert(&statistics).await?);

        info!(
            "📊 교사 통계 저장: courses={}, lessons={}, students={}",
            statistics.courses_created, statistics.lessons_created, statistics.total_students
        );
        Ok(statistics)
    }
}
