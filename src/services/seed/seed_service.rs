//! # 픽스처 시드 서비스
//!
//! 샘플 문서를 고정된 순서로 삽입하고, 생성된 ID를 이후 단계의
//! 삽입과 갱신에 연결합니다.
//!
//! ## 단계
//!
//! ```text
//!  1. premadeComments  축하 메시지
//!  2. signs            수어 목록
//!  3. users            María, Sofía, Carlos
//!  4. users            María ↔ Sofía 팔로우 관계
//!  5. achievements     업적 카탈로그 26개
//!  6. courses          "LESCO Básico - Saludos" + 레슨 1
//!  7. users            María, Sofía의 myCourses에 강좌 추가
//!  8. courses          레슨 2 추가
//!  9. enrolledCourses  María 수강 기록 (두 레슨 완료)
//! 10. users            María가 달성한 업적 부여
//! 11. courses/users    Carlos 수강 등록
//! 12. news             María의 소식과 Sofía의 댓글
//! 13. forums           레슨 1 포럼 글과 Sofía의 답변
//! 14. teacherStatistics Sofía 통계 (계산값)
//! ```
//!
//! 트랜잭션이나 재시도는 없습니다. 중간 단계가 실패하면 그때까지 삽입된
//! 문서는 남아 있고 에러가 그대로 반환됩니다.

use std::sync::Arc;

use log::{info, warn};
use mongodb::bson::{DateTime, oid::ObjectId};
use validator::Validate;

use crate::config::{Environment, SeedConfig};
use crate::db::Database;
use crate::domain::entities::achievements::{Achievement, LearnerProgress, Milestone};
use crate::domain::entities::catalog::{PremadeComment, Sign};
use crate::domain::entities::collections;
use crate::domain::entities::enrollments::EnrolledCourse;
use crate::domain::entities::flags::SignLanguage;
use crate::domain::entities::forums::ForumPost;
use crate::domain::entities::news::NewsPost;
use crate::domain::fixtures::{self, SignRefs, uids};
use crate::errors::{AppError, AppResult};
use crate::repositories::catalog::SchemaRepository;
use crate::repositories::courses::CourseRepository;
use crate::repositories::users::UserRepository;
use crate::repositories::{CollectionRepository, Repository};
use crate::services::seed::SeedReport;
use crate::services::statistics::StatisticsService;

const TOTAL_STEPS: u8 = 14;

pub struct SeedService {
    environment: Environment,
    catalog: SchemaRepository,
    users: UserRepository,
    courses: CourseRepository,
    premade_comments: CollectionRepository<PremadeComment>,
    signs: CollectionRepository<Sign>,
    achievements: CollectionRepository<Achievement>,
    enrollments: CollectionRepository<EnrolledCourse>,
    news: CollectionRepository<NewsPost>,
    forums: CollectionRepository<ForumPost>,
    statistics: StatisticsService,
}

fn step(number: u8, description: &str) {
    info!("🌱 [{:>2}/{}] {}", number, TOTAL_STEPS, description);
}

impl SeedService {
    pub fn new(db: Arc<Database>, environment: Environment) -> Self {
        Self {
            environment,
            catalog: SchemaRepository::new(db.clone()),
            users: UserRepository::new(db.clone()),
            courses: CourseRepository::new(db.clone()),
            premade_comments: CollectionRepository::new(db.clone(), collections::PREMADE_COMMENTS),
            signs: CollectionRepository::new(db.clone(), collections::SIGNS),
            achievements: CollectionRepository::new(db.clone(), collections::ACHIEVEMENTS),
            enrollments: CollectionRepository::new(db.clone(), collections::ENROLLED_COURSES),
            news: CollectionRepository::new(db.clone(), collections::NEWS),
            forums: CollectionRepository::new(db.clone(), collections::FORUMS),
            statistics: StatisticsService::new(db),
        }
    }

    /// 모든 시드 단계를 순서대로 실행합니다.
    pub async fn run(&self, options: &SeedConfig) -> AppResult<SeedReport> {
        options.check_allowed(&self.environment)?;

        let mut report = SeedReport::default();
        self.prepare(options, &mut report).await?;

        let now = DateTime::now();

        step(1, "축하 메시지 생성");
        let premade_id = self.premade_comments.insert(&fixtures::premade_comment()).await?;
        report.record(collections::PREMADE_COMMENTS, "premade comment", premade_id);

        step(2, "수어 목록 생성");
        let sign_ids = self.signs.insert_many(&fixtures::signs()).await?;
        let signs = SignRefs::from_ids(&sign_ids)?;
        report.record_all(collections::SIGNS, "sign", &sign_ids);

        step(3, "사용자 생성");
        let student = fixtures::student(now);
        student.validate()?;
        let student_id = self.users.insert(&student).await?;
        report.record(collections::USERS, &student.name, student_id);

        let teacher = fixtures::teacher(now, student_id);
        teacher.validate()?;
        let teacher_id = self.users.insert(&teacher).await?;
        report.record(collections::USERS, &teacher.name, teacher_id);

        let new_student = fixtures::new_student(now);
        new_student.validate()?;
        let new_student_id = self.users.insert(&new_student).await?;
        report.record(collections::USERS, &new_student.name, new_student_id);

        step(4, "팔로우 관계 설정");
        self.users.set_relations(student_id, &[teacher_id], &[teacher_id]).await?;

        step(5, "업적 카탈로그 생성");
        let milestones = Milestone::catalog();
        let achievements = fixtures::achievements(&milestones, premade_id)?;
        for achievement in &achievements {
            achievement.validate()?;
        }
        let achievement_ids = self.achievements.insert_many(&achievements).await?;
        report.record_all(collections::ACHIEVEMENTS, "achievement", &achievement_ids);

        step(6, "강좌 생성");
        let mut course = fixtures::greetings_course(teacher_id, student_id, &signs);
        course.validate()?;
        let course_id = self.courses.insert(&course).await?;
        course.id = Some(course_id);
        report.record(collections::COURSES, &course.name, course_id);

        step(7, "강좌를 사용자 myCourses에 추가");
        self.users.add_course(student_id, course_id).await?;
        self.users.add_course(teacher_id, course_id).await?;

        step(8, "레슨 2 추가");
        let lesson = fixtures::formal_greetings_lesson(&signs, course.next_lesson_order());
        lesson.validate()?;
        self.courses.push_lesson(course_id, &lesson).await?;
        course.lessons.push(lesson);

        step(9, "수강 기록 생성");
        let enrollment = fixtures::student_enrollment(student_id, &course)?;
        enrollment.validate()?;
        let enrollment_id = self.enrollments.insert(&enrollment).await?;
        report.record(collections::ENROLLED_COURSES, &student.name, enrollment_id);

        step(10, "달성한 업적 부여");
        let progress = LearnerProgress::from_enrollments(
            &student.information,
            std::slice::from_ref(&course),
            std::slice::from_ref(&enrollment),
        );
        let awarded = fixtures::awarded_achievements(&milestones, &achievement_ids, &progress)?;
        let awarded_ids: Vec<ObjectId> = awarded.iter().map(|(_, id)| *id).collect();
        self.users.set_achievements(student_id, &awarded_ids).await?;
        for language in SignLanguage::ALL {
            let count = awarded.iter().filter(|(milestone, _)| milestone.language == language).count();
            info!("   ├─ {} {}: 업적 {}개", student.name, language.label(), count);
        }

        step(11, "신규 학생 수강 등록");
        self.courses.add_student(course_id, new_student_id).await?;
        self.users.add_course(new_student_id, course_id).await?;
        let new_enrollment = EnrolledCourse::start(new_student_id, course_id);
        let new_enrollment_id = self.enrollments.insert(&new_enrollment).await?;
        report.record(collections::ENROLLED_COURSES, &new_student.name, new_enrollment_id);

        step(12, "소식 게시글 생성");
        let news = fixtures::lesson_news(student_id, teacher_id)?;
        news.validate()?;
        let news_id = self.news.insert(&news).await?;
        report.record(collections::NEWS, "news post", news_id);

        step(13, "포럼 글 생성");
        let first_lesson = course
            .lessons
            .first()
            .ok_or_else(|| AppError::InternalError(format!("course '{}' has no lessons", course.name)))?;
        let thread = fixtures::lesson_forum_thread(first_lesson.id, student_id, teacher_id)?;
        thread.validate()?;
        let thread_id = self.forums.insert(&thread).await?;
        report.record(collections::FORUMS, "forum thread", thread_id);

        step(14, "교사 통계 생성");
        let statistics = self.statistics.record_for(teacher_id).await?;
        if let Some(id) = statistics.id {
            report.record(collections::TEACHER_STATISTICS, &teacher.name, id);
        }

        info!("✅ 시드 완료: {}개 문서 삽입", report.total());
        Ok(report)
    }

    /// 픽스처가 이미 있으면 중단하거나, `--reset`이면 시드 컬렉션을 비웁니다.
    async fn prepare(&self, options: &SeedConfig, report: &mut SeedReport) -> AppResult<()> {
        if options.reset {
            warn!("🧹 시드 컬렉션 초기화 ({})", self.environment.as_str());
            for collection in collections::SEEDED {
                let deleted = self.catalog.clear_collection(collection).await?;
                report.cleared.insert(collection.to_string(), deleted);
            }
            return Ok(());
        }

        let existing = self.users.existing_firebase_uids(&uids::ALL).await?;
        if !existing.is_empty() {
            return Err(AppError::ConflictError(format!(
                "fixtures already seeded ({}); rerun with --reset",
                existing.join(", ")
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::services::schema::SchemaService;
    use crate::services::verify::IntegrityService;

    /// `MONGODB_URI`의 서버에서 빈 데이터베이스에 스키마 정의, 시드, 검사를 차례로 실행합니다.
    ///
    /// ```bash
    /// MONGODB_URI=mongodb://localhost:27017 cargo test -- --ignored
    /// ```
    #[tokio::test]
    #[ignore = "requires a running MongoDB server"]
    async fn test_seed_links_every_reference() {
        let config = DatabaseConfig::from_env()
            .unwrap()
            .with_overrides(None, Some("learn_setup_seed_test".to_string()))
            .unwrap();
        let db = Arc::new(Database::connect(&config).await.unwrap());
        db.get_database().drop().await.unwrap();

        SchemaService::new(db.clone()).define_all().await.unwrap();

        let seeder = SeedService::new(db.clone(), Environment::Test);
        let report = seeder.run(&SeedConfig::default()).await.unwrap();
        let counts = report.counts();
        assert_eq!(counts.get(collections::ACHIEVEMENTS), Some(&26));
        assert_eq!(counts.get(collections::USERS), Some(&3));
        assert_eq!(counts.get(collections::ENROLLED_COURSES), Some(&2));

        // 두 번째 실행은 --reset 없이 거부됩니다
        assert!(matches!(
            seeder.run(&SeedConfig::default()).await,
            Err(AppError::ConflictError(_))
        ));

        // --reset는 시드 컬렉션을 비운 뒤 다시 시드합니다
        let reset = SeedConfig { reset: true, force: false };
        let report = seeder.run(&reset).await.unwrap();
        assert_eq!(report.cleared.get(collections::USERS), Some(&3));
        assert_eq!(report.counts().get(collections::USERS), Some(&3));

        let integrity = IntegrityService::new(db.clone()).run().await.unwrap();
        assert!(integrity.is_clean(), "unexpected violations: {:?}", integrity.violations);
        assert_eq!(integrity.counts.get(collections::ACHIEVEMENTS), Some(&26));

        let snapshot = IntegrityService::new(db.clone()).snapshot().await.unwrap();
        let student = snapshot
            .users
            .iter()
            .find(|user| user.firebase_uid == uids::STUDENT)
            .unwrap();
        assert_eq!(student.information.achievements.len(), 10);
        assert!(snapshot.enrollments.iter().any(|e| Some(e.user_id) == student.id && e.is_completed()));

        db.get_database().drop().await.unwrap();
    }
}
