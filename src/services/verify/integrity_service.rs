//! 무결성 검증 서비스
//!
//! 시드 컬렉션을 모두 읽어 [`DatasetSnapshot`]을 만들고 [`verify`]를 실행합니다.

use std::sync::Arc;

use log::{info, warn};

use crate::db::Database;
use crate::domain::entities::achievements::{Achievement, Milestone};
use crate::domain::entities::catalog::{PremadeComment, Sign};
use crate::domain::entities::collections;
use crate::domain::entities::enrollments::EnrolledCourse;
use crate::domain::entities::forums::ForumPost;
use crate::domain::entities::news::NewsPost;
use crate::domain::entities::statistics::TeacherStatistics;
use crate::errors::AppResult;
use crate::repositories::courses::CourseRepository;
use crate::repositories::users::UserRepository;
use crate::repositories::{CollectionRepository, Repository};
use crate::services::verify::{DatasetSnapshot, IntegrityReport, verify};

pub struct IntegrityService {
    users: UserRepository,
    courses: CourseRepository,
    achievements: CollectionRepository<Achievement>,
    news: CollectionRepository<NewsPost>,
    enrollments: CollectionRepository<EnrolledCourse>,
    forums: CollectionRepository<ForumPost>,
    teacher_statistics: CollectionRepository<TeacherStatistics>,
    premade_comments: CollectionRepository<PremadeComment>,
    signs: CollectionRepository<Sign>,
}

impl IntegrityService {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            users: UserRepository::new(db.clone()),
            courses: CourseRepository::new(db.clone()),
            achievements: CollectionRepository::new(db.clone(), collections::ACHIEVEMENTS),
            news: CollectionRepository::new(db.clone(), collections::NEWS),
            enrollments: CollectionRepository::new(db.clone(), collections::ENROLLED_COURSES),
            forums: CollectionRepository::new(db.clone(), collections::FORUMS),
            teacher_statistics: CollectionRepository::new(db.clone(), collections::TEACHER_STATISTICS),
            premade_comments: CollectionRepository::new(db.clone(), collections::PREMADE_COMMENTS),
            signs: CollectionRepository::new(db, collections::SIGNS),
        }
    }

    pub async fn snapshot(&self) -> AppResult<DatasetSnapshot> {
        Ok(DatasetSnapshot {
            users: self.users.find_all().await?,
            achievements: self.achievements.find_all().await?,
            news: self.news.find_all().await?,
            courses: self.courses.find_all().await?,
            enrollments: self.enrollments.find_all().await?,
            forums: self.forums.find_all().await?,
            teacher_statistics: self.teacher_statistics.find_all().await?,
            premade_comments: self.premade_comments.find_all().await?,
            signs: self.signs.find_all().await?,
        })
    }

    /// 현재 데이터셋을 검사합니다. 업적 수는 마일스톤 카탈로그 크기와 비교합니다.
    pub async fn run(&self) -> AppResult<IntegrityReport> {
        let snapshot = self.snapshot().await?;
        let report = verify(&snapshot, Milestone::catalog().len());

        if report.is_clean() {
            info!("✅ 무결성 검사 통과");
        } else {
            for violation in &report.violations {
                warn!("❌ {}: {}", violation.collection, violation.detail);
            }
        }
        Ok(report)
    }
}
