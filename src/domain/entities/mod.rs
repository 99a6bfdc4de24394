//! # Domain Entities Module
//!
//! LEARN 데이터베이스 컬렉션과 1:1로 대응되는 문서 구조체들을 정의합니다.
//!
//! ## 컬렉션 매핑
//!
//! | 컬렉션 | 엔티티 | 검증기 |
//! |--------|--------|--------|
//! | `users` | [`users::User`] | ✓ |
//! | `achievements` | [`achievements::Achievement`] | ✓ |
//! | `news` | [`news::NewsPost`] | ✓ |
//! | `courses` | [`courses::Course`] | ✓ |
//! | `enrolledCourses` | [`enrollments::EnrolledCourse`] | ✓ |
//! | `forums` | [`forums::ForumPost`] | ✓ |
//! | `teacherStatistics` | [`statistics::TeacherStatistics`] | ✓ |
//! | `premadeComments` | [`catalog::PremadeComment`] | - |
//! | `signs` | [`catalog::Sign`] | - |
//!
//! ## 공통 규칙
//!
//! - 필드 이름은 저장 형식(camelCase)을 그대로 사용합니다.
//! - `_id`는 `Option<ObjectId>`로 두고, 삽입 전에는 생략합니다.
//! - 정수 카운터는 검증기의 `int`(32비트)에 맞춰 `i32`를 사용합니다.
//! - 불리언 플래그는 [`flags`]의 열거형으로 다룹니다.
//!
//! ```rust,ignore
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! #[serde(rename_all = "camelCase")]
//! pub struct Course {
//!     #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
//!     pub id: Option<ObjectId>,
//!     pub user_id: ObjectId,
//!     pub language: SignLanguage,
//!     // ...
//! }
//! ```

pub mod flags;
pub mod users;
pub mod achievements;
pub mod news;
pub mod courses;
pub mod enrollments;
pub mod forums;
pub mod statistics;
pub mod catalog;

/// 컬렉션 이름 상수
pub mod collections {
    pub const USERS: &str = "users";
    pub const ACHIEVEMENTS: &str = "achievements";
    pub const NEWS: &str = "news";
    pub const COURSES: &str = "courses";
    pub const ENROLLED_COURSES: &str = "enrolledCourses";
    pub const FORUMS: &str = "forums";
    pub const TEACHER_STATISTICS: &str = "teacherStatistics";
    pub const PREMADE_COMMENTS: &str = "premadeComments";
    pub const SIGNS: &str = "signs";

    /// 시더가 문서를 넣는 모든 컬렉션 (reset 대상)
    pub const SEEDED: [&str; 9] = [
        USERS,
        ACHIEVEMENTS,
        NEWS,
        COURSES,
        ENROLLED_COURSES,
        FORUMS,
        TEACHER_STATISTICS,
        PREMADE_COMMENTS,
        SIGNS,
    ];
}
