//! Teacher Statistics Entity
//!
//! 교사별 요약 통계입니다. 값은 강좌와 수강 기록으로부터 계산합니다.

use std::collections::HashSet;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::entities::courses::Course;
use crate::domain::entities::enrollments::EnrolledCourse;

/// 교사 통계 (`teacherStatistics` 컬렉션)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherStatistics {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    pub courses_created: i32,
    pub lessons_created: i32,
    pub total_students: i32,
}

impl TeacherStatistics {
    /// 교사가 소유한 강좌와 해당 강좌의 수강 기록으로 통계를 계산합니다.
    ///
    /// - `coursesCreated`: 교사 소유 강좌 수
    /// - `lessonsCreated`: 소유 강좌의 레슨 합계
    /// - `totalStudents`: 소유 강좌에 수강 등록된 서로 다른 학생 수
    ///
    /// 다른 교사의 강좌와 그 강좌의 수강 기록은 무시합니다.
    pub fn derive(owner: ObjectId, courses: &[Course], enrollments: &[EnrolledCourse]) -> Self {
        let owned: Vec<&Course> = courses.iter().filter(|course| course.user_id == owner).collect();
        let owned_ids: HashSet<ObjectId> = owned.iter().filter_map(|course| course.id).collect();

        let students: HashSet<ObjectId> = enrollments
            .iter()
            .filter(|enrollment| owned_ids.contains(&enrollment.course_id))
            .map(|enrollment| enrollment.user_id)
            .collect();

        Self {
            id: None,
            user_id: owner,
            courses_created: owned.len() as i32,
            lessons_created: owned.iter().map(|course| course.lessons.len() as i32).sum(),
            total_students: students.len() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::courses::Lesson;
    use crate::domain::entities::flags::{CourseVisibility, SignLanguage};

    fn course(owner: ObjectId, lessons: usize) -> Course {
        Course {
            id: Some(ObjectId::new()),
            user_id: owner,
            name: "Curso".into(),
            description: String::new(),
            difficulty: 1,
            language: SignLanguage::Lesco,
            status: CourseVisibility::Public,
            students: vec![],
            lessons: (1..=lessons as i32)
                .map(|order| Lesson {
                    id: ObjectId::new(),
                    order,
                    name: format!("L{}", order),
                    question_count: 0,
                    attempts: 1,
                    forum_enabled: false,
                    theory: vec![],
                    exercises: vec![],
                })
                .collect(),
        }
    }

    #[test]
    fn test_derive_counts_only_owned_courses() {
        let teacher = ObjectId::new();
        let other_teacher = ObjectId::new();
        let student_a = ObjectId::new();
        let student_b = ObjectId::new();

        let mine = course(teacher, 2);
        let also_mine = course(teacher, 1);
        let theirs = course(other_teacher, 5);

        let enrollments = vec![
            EnrolledCourse::start(student_a, mine.id.unwrap()),
            EnrolledCourse::start(student_a, also_mine.id.unwrap()),
            EnrolledCourse::start(student_b, mine.id.unwrap()),
            EnrolledCourse::start(ObjectId::new(), theirs.id.unwrap()),
        ];

        let stats = TeacherStatistics::derive(teacher, &[mine, also_mine, theirs], &enrollments);
        assert_eq!(stats.user_id, teacher);
        assert_eq!(stats.courses_created, 2);
        assert_eq!(stats.lessons_created, 3);
        assert_eq!(stats.total_students, 2);
    }

    #[test]
    fn test_derive_for_teacher_without_courses() {
        let stats = TeacherStatistics::derive(ObjectId::new(), &[], &[]);
        assert_eq!((stats.courses_created, stats.lessons_created, stats.total_students), (0, 0, 0));
    }
}
