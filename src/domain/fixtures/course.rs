//! 강좌 "LESCO Básico - Saludos"와 두 레슨 픽스처

use mongodb::bson::oid::ObjectId;

use super::catalog::SignRefs;
use crate::domain::entities::courses::{Course, Exercise, ExerciseType, Lesson, TheoryItem};
use crate::domain::entities::flags::{CourseVisibility, SignLanguage};

pub const COURSE_NAME: &str = "LESCO Básico - Saludos";

fn answers(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// 레슨 1 "Saludos Básicos"만 포함한 공개 LESCO 강좌
pub fn greetings_course(teacher_id: ObjectId, student_id: ObjectId, signs: &SignRefs) -> Course {
    Course {
        id: None,
        user_id: teacher_id,
        name: COURSE_NAME.to_string(),
        description: "Aprende los saludos básicos en LESCO".to_string(),
        difficulty: 1,
        language: SignLanguage::Lesco,
        status: CourseVisibility::Public,
        students: vec![student_id],
        lessons: vec![basic_greetings_lesson(signs)],
    }
}

pub fn basic_greetings_lesson(signs: &SignRefs) -> Lesson {
    Lesson {
        id: ObjectId::new(),
        order: 1,
        name: "Saludos Básicos".to_string(),
        question_count: 2,
        attempts: 3,
        forum_enabled: true,
        theory: vec![TheoryItem {
            text: "La seña de 'Hola' se realiza moviendo la mano derecha hacia adelante.".to_string(),
            sign: Some(signs.hola),
        }],
        exercises: vec![
            Exercise {
                id: ObjectId::new(),
                exercise_type: ExerciseType::SingleChoice,
                order: 1,
                sign: Some(signs.hola),
                question: "¿Qué significa esta seña?".to_string(),
                possible_answers: answers(&["Hola", "Adiós", "Gracias", "Por favor"]),
                correct_answer: answers(&["Hola"]),
            },
            Exercise {
                id: ObjectId::new(),
                exercise_type: ExerciseType::SingleChoice,
                order: 2,
                sign: Some(signs.buenos_dias),
                question: "¿Cuál es la seña correcta para 'Buenos días'?".to_string(),
                possible_answers: answers(&["Opción A", "Opción B", "Opción C"]),
                correct_answer: answers(&["Opción B"]),
            },
        ],
    }
}

/// 레슨 2 "Saludos Formales". `order`는 강좌의 다음 순서 번호입니다.
pub fn formal_greetings_lesson(signs: &SignRefs, order: i32) -> Lesson {
    Lesson {
        id: ObjectId::new(),
        order,
        name: "Saludos Formales".to_string(),
        question_count: 2,
        attempts: 3,
        forum_enabled: true,
        theory: vec![
            TheoryItem {
                text: "Los saludos formales se usan en contextos profesionales o con personas mayores.".to_string(),
                sign: None,
            },
            TheoryItem {
                text: "'Buenas tardes' se signa con la mano abierta descendiendo frente al pecho.".to_string(),
                sign: Some(signs.buenas_tardes),
            },
        ],
        exercises: vec![
            Exercise {
                id: ObjectId::new(),
                exercise_type: ExerciseType::TrueFalse,
                order: 1,
                sign: Some(signs.buenas_tardes),
                question: "Esta seña significa 'Buenas tardes'.".to_string(),
                possible_answers: answers(&["Verdadero", "Falso"]),
                correct_answer: answers(&["Verdadero"]),
            },
            Exercise {
                id: ObjectId::new(),
                exercise_type: ExerciseType::Ordering,
                order: 2,
                sign: Some(signs.mucho_gusto),
                question: "Ordena el saludo formal completo.".to_string(),
                possible_answers: answers(&["gusto", "Buenas tardes,", "mucho"]),
                correct_answer: answers(&["Buenas tardes,", "mucho", "gusto"]),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn refs() -> SignRefs {
        SignRefs {
            hola: ObjectId::new(),
            buenos_dias: ObjectId::new(),
            buenas_tardes: ObjectId::new(),
            mucho_gusto: ObjectId::new(),
        }
    }

    #[test]
    fn test_course_starts_with_one_valid_lesson() {
        let signs = refs();
        let teacher = ObjectId::new();
        let student = ObjectId::new();
        let course = greetings_course(teacher, student, &signs);

        assert!(course.validate().is_ok());
        assert_eq!(course.user_id, teacher);
        assert_eq!(course.students, vec![student]);
        assert_eq!(course.lessons.len(), 1);
        assert_eq!(course.next_lesson_order(), 2);
    }

    #[test]
    fn test_appending_formal_lesson_keeps_orders_sequential() {
        let signs = refs();
        let mut course = greetings_course(ObjectId::new(), ObjectId::new(), &signs);
        let lesson = formal_greetings_lesson(&signs, course.next_lesson_order());
        course.lessons.push(lesson);

        assert!(course.validate().is_ok());
        assert!(course.has_sequential_lessons());
        assert_eq!(course.total_questions(), 4);
    }

    #[test]
    fn test_lessons_reference_only_catalog_signs() {
        let signs = refs();
        let mut course = greetings_course(ObjectId::new(), ObjectId::new(), &signs);
        course.lessons.push(formal_greetings_lesson(&signs, 2));

        let known = [signs.hola, signs.buenos_dias, signs.buenas_tardes, signs.mucho_gusto];
        assert!(course.sign_refs().all(|id| known.contains(id)));
    }
}
