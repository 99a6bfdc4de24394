//! Enrollment Entity Implementation
//!
//! 학생의 강좌 수강 기록과 레슨별 완료 항목을 정의합니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::courses::Course;
use crate::errors::{AppError, AppResult};

/// 수강 기록 엔티티 (`enrolledCourses` 컬렉션)
///
/// `completionDate`, `totalQuestions`, `correctAnswers`는 검증기에서
/// `null`을 허용하므로 값이 없을 때도 필드를 `null`로 저장합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EnrolledCourse {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    pub course_id: ObjectId,
    #[serde(default)]
    pub completion_date: Option<DateTime>,
    #[serde(default)]
    pub total_questions: Option<i32>,
    #[serde(default)]
    pub correct_answers: Option<i32>,
    #[serde(default)]
    #[validate(nested)]
    pub completed_lessons: Vec<CompletedLesson>,
}

/// 레슨 완료 항목
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompletedLesson {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub lesson_id: ObjectId,
    #[validate(range(min = 0))]
    pub correct_count: i32,
    /// 남은 시도 횟수 (`-1` = 무제한)
    pub remaining_attempts: i32,
    pub completion_date: DateTime,
}

impl EnrolledCourse {
    /// 진행 기록 없이 새 수강 기록을 생성합니다.
    pub fn start(user_id: ObjectId, course_id: ObjectId) -> Self {
        Self {
            id: None,
            user_id,
            course_id,
            completion_date: None,
            total_questions: None,
            correct_answers: None,
            completed_lessons: Vec::new(),
        }
    }

    /// 레슨 완료 항목을 추가하고 누적 정답 수와 총 문제 수를 갱신합니다.
    ///
    /// 레슨이 강좌에 없거나 정답 수가 레슨 문제 수를 넘으면 에러를 반환합니다.
    /// 같은 레슨이 이미 완료되어 있으면 `ConflictError`를 반환합니다.
    pub fn complete_lesson(
        &mut self,
        course: &Course,
        lesson_id: ObjectId,
        correct_count: i32,
        completed_at: DateTime,
    ) -> AppResult<&CompletedLesson> {
        let lesson = course.lesson(&lesson_id).ok_or_else(|| {
            AppError::NotFound(format!("lesson {} is not part of course '{}'", lesson_id, course.name))
        })?;

        if correct_count < 0 || correct_count > lesson.question_count {
            return Err(AppError::ValidationError(format!(
                "correctCount {} outside 0..={} for lesson '{}'",
                correct_count, lesson.question_count, lesson.name
            )));
        }
        if self.completed_lessons.iter().any(|entry| entry.lesson_id == lesson_id) {
            return Err(AppError::ConflictError(format!("lesson '{}' already completed", lesson.name)));
        }

        let remaining_attempts = if lesson.attempts < 0 { -1 } else { (lesson.attempts - 1).max(0) };

        self.completed_lessons.push(CompletedLesson {
            id: ObjectId::new(),
            lesson_id,
            correct_count,
            remaining_attempts,
            completion_date: completed_at,
        });
        self.total_questions = Some(course.total_questions());
        self.correct_answers = Some(self.completed_lessons.iter().map(|entry| entry.correct_count).sum());

        if course.lessons.iter().all(|l| self.completed_lessons.iter().any(|entry| entry.lesson_id == l.id)) {
            self.completion_date = Some(completed_at);
        }

        self.completed_lessons
            .last()
            .ok_or_else(|| AppError::InternalError("completed lesson was not recorded".to_string()))
    }

    pub fn is_completed(&self) -> bool {
        self.completion_date.is_some()
    }
}
