//! 수강 기록, 소식 게시글, 포럼 글 픽스처

use mongodb::bson::oid::ObjectId;

use super::dates;
use crate::domain::entities::courses::Course;
use crate::domain::entities::enrollments::EnrolledCourse;
use crate::domain::entities::forums::{ForumComment, ForumPost};
use crate::domain::entities::news::{NewsComment, NewsPost};
use crate::errors::{AppError, AppResult};
use crate::utils::date_utils::utc_date;

/// 주 학생의 레슨별 정답 수 (레슨 순서대로)
pub const STUDENT_CORRECT_COUNTS: [i32; 2] = [2, 1];

/// 주 학생의 수강 기록. 강좌의 두 레슨을 모두 완료해 강좌가 완료된 상태입니다.
pub fn student_enrollment(student_id: ObjectId, course: &Course) -> AppResult<EnrolledCourse> {
    let course_id = course
        .id
        .ok_or_else(|| AppError::InternalError(format!("course '{}' has no id", course.name)))?;
    if course.lessons.len() != STUDENT_CORRECT_COUNTS.len() {
        return Err(AppError::InternalError(format!(
            "course '{}' has {} lessons, expected {}",
            course.name,
            course.lessons.len(),
            STUDENT_CORRECT_COUNTS.len()
        )));
    }

    let completed_at = utc_date(dates::LESSON_COMPLETED)?;
    let mut enrollment = EnrolledCourse::start(student_id, course_id);
    for (lesson, correct_count) in course.lessons.iter().zip(STUDENT_CORRECT_COUNTS) {
        enrollment.complete_lesson(course, lesson.id, correct_count, completed_at)?;
    }
    Ok(enrollment)
}

/// 주 학생의 첫 레슨 완료 소식과 교사의 댓글
pub fn lesson_news(student_id: ObjectId, teacher_id: ObjectId) -> AppResult<NewsPost> {
    let date = utc_date(dates::NEWS_POST)?;
    Ok(NewsPost {
        id: None,
        user_id: student_id,
        title: None,
        description: Some("¡Completé mi primera lección de LESCO!".to_string()),
        likes: 5,
        date,
        comments: vec![NewsComment::new(teacher_id, "¡Excelente trabajo María!", date)],
    })
}

/// 레슨 1 포럼에 학생이 남긴 질문과 교사의 답변
pub fn lesson_forum_thread(lesson_id: ObjectId, student_id: ObjectId, teacher_id: ObjectId) -> AppResult<ForumPost> {
    let date = utc_date(dates::FORUM_THREAD)?;
    Ok(ForumPost {
        id: None,
        lesson_id,
        user_id: student_id,
        content: "¿Alguien puede explicarme mejor la diferencia entre los saludos formales e informales?"
            .to_string(),
        video_url: None,
        creation_date: date,
        comments: vec![ForumComment::new(
            teacher_id,
            "Claro María. Los saludos formales se usan en contextos profesionales, mientras que los informales son para amigos y familia.",
            date,
        )],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::{SignRefs, formal_greetings_lesson, greetings_course};
    use validator::Validate;

    fn seeded_course() -> Course {
        let signs = SignRefs {
            hola: ObjectId::new(),
            buenos_dias: ObjectId::new(),
            buenas_tardes: ObjectId::new(),
            mucho_gusto: ObjectId::new(),
        };
        let mut course = greetings_course(ObjectId::new(), ObjectId::new(), &signs);
        course.id = Some(ObjectId::new());
        course.lessons.push(formal_greetings_lesson(&signs, 2));
        course
    }

    #[test]
    fn test_student_enrollment_completes_course() {
        let course = seeded_course();
        let student = ObjectId::new();
        let enrollment = student_enrollment(student, &course).unwrap();

        assert!(enrollment.validate().is_ok());
        assert_eq!(enrollment.course_id, course.id.unwrap());
        assert_eq!(enrollment.completed_lessons.len(), 2);
        assert!(enrollment.completed_lessons.iter().all(|entry| course.has_lesson(&entry.lesson_id)));
        assert_eq!(enrollment.completed_lessons[0].correct_count, 2);
        assert_eq!(enrollment.completed_lessons[0].remaining_attempts, 2);
        assert_eq!(enrollment.total_questions, Some(4));
        assert_eq!(enrollment.correct_answers, Some(3));
        assert_eq!(enrollment.completion_date, Some(utc_date(dates::LESSON_COMPLETED).unwrap()));
    }

    #[test]
    fn test_student_enrollment_needs_both_lessons() {
        let mut course = seeded_course();
        course.lessons.pop();
        assert!(matches!(
            student_enrollment(ObjectId::new(), &course),
            Err(AppError::InternalError(_))
        ));
    }

    #[test]
    fn test_enrollment_requires_inserted_course() {
        let mut course = seeded_course();
        course.id = None;
        assert!(matches!(
            student_enrollment(ObjectId::new(), &course),
            Err(AppError::InternalError(_))
        ));
    }

    #[test]
    fn test_news_and_forum_are_valid() {
        let student = ObjectId::new();
        let teacher = ObjectId::new();

        let news = lesson_news(student, teacher).unwrap();
        assert!(news.validate().is_ok());
        assert_eq!(news.comments[0].user_id, teacher);

        let thread = lesson_forum_thread(ObjectId::new(), student, teacher).unwrap();
        assert!(thread.validate().is_ok());
        assert_eq!(thread.comments.len(), 1);
        assert!(thread.video_url.is_none());
    }
}
