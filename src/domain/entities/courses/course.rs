//! Course Entity Implementation
//!
//! 교사가 소유하는 강좌와, 강좌에 포함된 레슨/이론/연습 문제를 정의합니다.
//! 레슨은 강좌 문서에 순서대로 임베드됩니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::flags::{CourseVisibility, SignLanguage};

/// 강좌 엔티티 (`courses` 컬렉션)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 소유 교사
    pub user_id: ObjectId,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 1, max = 5))]
    pub difficulty: i32,
    /// 수어 트랙 (`false` = LESCO, `true` = LIBRAS)
    pub language: SignLanguage,
    /// 공개 여부 (`false` = 비공개, `true` = 공개)
    pub status: CourseVisibility,
    #[serde(default)]
    pub students: Vec<ObjectId>,
    #[serde(default)]
    #[validate(nested)]
    pub lessons: Vec<Lesson>,
}

/// 강좌에 임베드된 레슨
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_lesson"))]
pub struct Lesson {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[validate(range(min = 1))]
    pub order: i32,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0))]
    pub question_count: i32,
    /// 허용 시도 횟수 (`-1` = 무제한)
    pub attempts: i32,
    pub forum_enabled: bool,
    #[serde(default)]
    pub theory: Vec<TheoryItem>,
    #[serde(default)]
    #[validate(nested)]
    pub exercises: Vec<Exercise>,
}

/// 레슨 이론 항목
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TheoryItem {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign: Option<ObjectId>,
}

/// 연습 문제 유형 (`exerciseType`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum ExerciseType {
    /// 단일 선택
    SingleChoice,
    /// 참/거짓
    TrueFalse,
    /// 순서 맞추기
    Ordering,
}

impl TryFrom<i32> for ExerciseType {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ExerciseType::SingleChoice),
            2 => Ok(ExerciseType::TrueFalse),
            3 => Ok(ExerciseType::Ordering),
            other => Err(format!("unknown exerciseType {}", other)),
        }
    }
}

impl From<ExerciseType> for i32 {
    fn from(kind: ExerciseType) -> Self {
        match kind {
            ExerciseType::SingleChoice => 1,
            ExerciseType::TrueFalse => 2,
            ExerciseType::Ordering => 3,
        }
    }
}

/// 레슨 연습 문제
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_exercise_answers"))]
pub struct Exercise {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub exercise_type: ExerciseType,
    #[validate(range(min = 1))]
    pub order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign: Option<ObjectId>,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub possible_answers: Vec<String>,
    #[serde(default)]
    pub correct_answer: Vec<String>,
}

/// 레슨의 문제 수는 연습 문제 개수와 같아야 하고, 시도 횟수는 양수 또는 `-1`이어야 합니다.
fn validate_lesson(lesson: &Lesson) -> Result<(), ValidationError> {
    if lesson.attempts == 0 || lesson.attempts < -1 {
        return Err(ValidationError::new("invalid_attempts")
            .with_message(format!("레슨 '{}'의 attempts 값이 올바르지 않습니다", lesson.name).into()));
    }
    if lesson.question_count as usize != lesson.exercises.len() {
        return Err(ValidationError::new("question_count_mismatch")
            .with_message(format!("레슨 '{}'의 questionCount가 연습 문제 수와 다릅니다", lesson.name).into()));
    }
    Ok(())
}

/// 정답은 비어 있지 않아야 하며, 선택형 문제의 정답은 보기 안에 있어야 합니다.
fn validate_exercise_answers(exercise: &Exercise) -> Result<(), ValidationError> {
    if exercise.correct_answer.is_empty() {
        return Err(ValidationError::new("missing_correct_answer"));
    }
    let choice_based = matches!(exercise.exercise_type, ExerciseType::SingleChoice | ExerciseType::TrueFalse);
    if choice_based
        && !exercise
            .correct_answer
            .iter()
            .all(|answer| exercise.possible_answers.contains(answer))
    {
        return Err(ValidationError::new("answer_not_in_options")
            .with_message("정답이 보기 목록에 없습니다".into()));
    }
    Ok(())
}

impl Course {
    pub fn lesson(&self, lesson_id: &ObjectId) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| &lesson.id == lesson_id)
    }

    pub fn has_lesson(&self, lesson_id: &ObjectId) -> bool {
        self.lesson(lesson_id).is_some()
    }

    /// 모든 레슨의 문제 수 합계
    pub fn total_questions(&self) -> i32 {
        self.lessons.iter().map(|lesson| lesson.question_count).sum()
    }

    /// 다음에 추가될 레슨의 순서 번호
    pub fn next_lesson_order(&self) -> i32 {
        self.lessons.iter().map(|lesson| lesson.order).max().unwrap_or(0) + 1
    }

    /// 레슨 순서가 1부터 빈틈없이 오름차순인지 확인합니다.
    pub fn has_sequential_lessons(&self) -> bool {
        self.lessons
            .iter()
            .enumerate()
            .all(|(index, lesson)| lesson.order == index as i32 + 1)
    }

    /// 이론과 연습 문제가 참조하는 모든 수어(sign) ID
    pub fn sign_refs(&self) -> impl Iterator<Item = &ObjectId> {
        self.lessons.iter().flat_map(|lesson| {
            lesson
                .theory
                .iter()
                .filter_map(|item| item.sign.as_ref())
                .chain(lesson.exercises.iter().filter_map(|exercise| exercise.sign.as_ref()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    fn exercise(order: i32, kind: ExerciseType, options: &[&str], correct: &[&str]) -> Exercise {
        Exercise {
            id: ObjectId::new(),
            exercise_type: kind,
            order,
            sign: None,
            question: "¿Qué significa esta seña?".to_string(),
            possible_answers: options.iter().map(|s| s.to_string()).collect(),
            correct_answer: correct.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn lesson(order: i32, exercises: Vec<Exercise>) -> Lesson {
        Lesson {
            id: ObjectId::new(),
            order,
            name: format!("Lección {}", order),
            question_count: exercises.len() as i32,
            attempts: 3,
            forum_enabled: true,
            theory: vec![TheoryItem { text: "Teoría".to_string(), sign: Some(ObjectId::new()) }],
            exercises,
        }
    }

    fn course(lessons: Vec<Lesson>) -> Course {
        Course {
            id: None,
            user_id: ObjectId::new(),
            name: "Curso".to_string(),
            description: String::new(),
            difficulty: 1,
            language: SignLanguage::Lesco,
            status: CourseVisibility::Public,
            students: vec![],
            lessons,
        }
    }

    #[test]
    fn test_exercise_type_persists_as_int() {
        let document = bson::to_document(&exercise(1, ExerciseType::TrueFalse, &["Verdadero", "Falso"], &["Falso"])).unwrap();
        assert_eq!(document.get_i32("exerciseType").unwrap(), 2);
        assert!(!document.contains_key("sign"));
        assert_eq!(ExerciseType::try_from(7), Err("unknown exerciseType 7".to_string()));
    }

    #[test]
    fn test_lesson_orders_and_totals() {
        let first = lesson(1, vec![exercise(1, ExerciseType::SingleChoice, &["Hola", "Adiós"], &["Hola"])]);
        let second = lesson(2, vec![
            exercise(1, ExerciseType::SingleChoice, &["A", "B"], &["B"]),
            exercise(2, ExerciseType::Ordering, &["x", "y"], &["y", "x"]),
        ]);
        let second_id = second.id;
        let course = course(vec![first, second]);

        assert!(course.has_sequential_lessons());
        assert_eq!(course.total_questions(), 3);
        assert_eq!(course.next_lesson_order(), 3);
        assert!(course.has_lesson(&second_id));
        assert!(!course.has_lesson(&ObjectId::new()));
        assert_eq!(course.sign_refs().count(), 2);
    }

    #[test]
    fn test_out_of_order_lessons_detected() {
        let course = course(vec![lesson(2, vec![]), lesson(1, vec![])]);
        assert!(!course.has_sequential_lessons());
    }

    #[test]
    fn test_validation_catches_question_count_mismatch() {
        let mut broken = lesson(1, vec![exercise(1, ExerciseType::SingleChoice, &["A"], &["A"])]);
        broken.question_count = 4;
        assert!(course(vec![broken]).validate().is_err());
    }

    #[test]
    fn test_validation_catches_answer_outside_options() {
        let bad = lesson(1, vec![exercise(1, ExerciseType::SingleChoice, &["A", "B"], &["C"])]);
        assert!(course(vec![bad]).validate().is_err());

        // 순서 맞추기 문제는 보기 검사를 하지 않습니다.
        let ordering = lesson(1, vec![exercise(1, ExerciseType::Ordering, &[], &["b", "a"])]);
        assert!(course(vec![ordering]).validate().is_ok());
    }
}
