//! # Seed Fixtures
//!
//! 시더가 삽입하는 고정 샘플 문서를 만드는 순수 함수들입니다.
//! 생성된 ID는 인자로 받아 문서에 연결하며, 데이터베이스에는 접근하지 않습니다.
//!
//! | 픽스처 | 컬렉션 |
//! |--------|--------|
//! | 축하 메시지 | `premadeComments` |
//! | 수어 목록 | `signs` |
//! | 사용자 3명 | `users` |
//! | 업적 카탈로그 26개 | `achievements` |
//! | 강좌와 레슨 2개 | `courses` |
//! | 수강 기록 2개 | `enrolledCourses` |
//! | 소식 게시글 | `news` |
//! | 포럼 글 | `forums` |

pub mod users;
pub mod catalog;
pub mod course;
pub mod activity;

pub use users::*;
pub use catalog::*;
pub use course::*;
pub use activity::*;

/// 픽스처 사용자의 Firebase UID
pub mod uids {
    pub const STUDENT: &str = "seed-student-maria";
    pub const TEACHER: &str = "seed-teacher-sofia";
    pub const NEW_STUDENT: &str = "seed-student-carlos";

    pub const ALL: [&str; 3] = [STUDENT, TEACHER, NEW_STUDENT];
}

/// 업적과 활동 기록에 쓰이는 고정 날짜
pub mod dates {
    pub const ACHIEVEMENTS_START: &str = "2025-10-10";
    pub const FORUM_THREAD: &str = "2025-10-13";
    pub const LESSON_COMPLETED: &str = "2025-10-15";
    pub const NEWS_POST: &str = "2025-10-15";
}
