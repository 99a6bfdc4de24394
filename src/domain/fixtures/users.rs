//! 사용자 픽스처

use mongodb::bson::{DateTime, oid::ObjectId};

use super::uids;
use crate::domain::entities::flags::UserRole;
use crate::domain::entities::users::{User, UserInformation};

/// 주 학생 (María). 팔로우 관계는 교사 삽입 후 갱신합니다.
pub fn student(now: DateTime) -> User {
    User::new(
        uids::STUDENT,
        UserRole::Student,
        "María Badilla Castro",
        UserInformation::new(7, now, (2, 3), (6, 5)),
    )
}

/// 교사 (Sofía). 학생을 팔로우하고 학생에게 팔로우됩니다.
pub fn teacher(now: DateTime, student_id: ObjectId) -> User {
    let mut teacher = User::new(
        uids::TEACHER,
        UserRole::Teacher,
        "Sofia Castro Álvarez",
        UserInformation::new(30, now, (50, 45), (10, 9)),
    );
    teacher.followers = vec![student_id];
    teacher.following = vec![student_id];
    teacher
}

/// 관계와 진행 기록이 없는 신규 학생 (Carlos)
pub fn new_student(now: DateTime) -> User {
    User::new(
        uids::NEW_STUDENT,
        UserRole::Student,
        "Carlos Rodríguez Pérez",
        UserInformation::new(0, now, (0, 0), (1, 1)),
    )
}
