//! 컬렉션별 `$jsonSchema` 검증기 정의
//!
//! 검증기는 필수 필드의 존재와 BSON 타입 형태만 강제합니다.
//! 다른 컬렉션 문서의 존재 여부(참조 무결성)는 검사하지 않습니다.

use mongodb::bson::{Bson, Document, doc};

use crate::domain::entities::collections;

/// 하나의 컬렉션과 그 검증기
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionSchema {
    pub name: &'static str,
    pub validator: Document,
}

impl CollectionSchema {
    fn new(name: &'static str, json_schema: Document) -> Self {
        Self {
            name,
            validator: doc! { "$jsonSchema": json_schema },
        }
    }

    /// 최상위 `required` 필드 목록
    pub fn required_fields(&self) -> Vec<&str> {
        self.validator
            .get_document("$jsonSchema")
            .ok()
            .and_then(|schema| schema.get_array("required").ok())
            .map(|fields| fields.iter().filter_map(Bson::as_str).collect())
            .unwrap_or_default()
    }
}

/// 생성 순서대로 정렬된 7개 컬렉션의 검증기
pub fn collection_schemas() -> Vec<CollectionSchema> {
    vec![
        users_schema(),
        achievements_schema(),
        news_schema(),
        courses_schema(),
        enrolled_courses_schema(),
        forums_schema(),
        teacher_statistics_schema(),
    ]
}

fn object_id_array() -> Document {
    doc! { "bsonType": "array", "items": { "bsonType": "objectId" } }
}

fn string_array() -> Document {
    doc! { "bsonType": "array", "items": { "bsonType": "string" } }
}

fn nullable(bson_type: &str) -> Document {
    doc! { "bsonType": [bson_type, "null"] }
}

pub fn users_schema() -> CollectionSchema {
    CollectionSchema::new(
        collections::USERS,
        doc! {
            "bsonType": "object",
            "required": ["firebaseUid", "type"],
            "properties": {
                "firebaseUid": {
                    "bsonType": "string",
                    "description": "UID del usuario proveniente de Firebase Authentication"
                },
                "type": {
                    "bsonType": "bool",
                    "description": "false = Student, true = Teacher"
                },
                "followers": object_id_array(),
                "following": object_id_array(),
                "information": {
                    "bsonType": "object",
                    "required": ["streak"],
                    "properties": {
                        "streak": {
                            "bsonType": "object",
                            "required": ["current", "lastConnection"],
                            "properties": {
                                "current": { "bsonType": "int" },
                                "lastConnection": { "bsonType": "date" }
                            }
                        },
                        "achievements": object_id_array(),
                        "lescoSkills": { "bsonType": "int" },
                        "librasSkills": { "bsonType": "int" },
                        "lescoLevel": { "bsonType": "int" },
                        "librasLevel": { "bsonType": "int" },
                        "myCourses": object_id_array()
                    }
                }
            }
        },
    )
}

pub fn achievements_schema() -> CollectionSchema {
    CollectionSchema::new(
        collections::ACHIEVEMENTS,
        doc! {
            "bsonType": "object",
            "required": ["name", "type", "content", "date"],
            "properties": {
                "name": { "bsonType": "string" },
                "type": {
                    "bsonType": "bool",
                    "description": "false = LESCO, true = LIBRAS"
                },
                "content": { "bsonType": "string" },
                "date": { "bsonType": "date" },
                "premadeId": { "bsonType": "objectId" }
            }
        },
    )
}

pub fn news_schema() -> CollectionSchema {
    CollectionSchema::new(
        collections::NEWS,
        doc! {
            "bsonType": "object",
            "required": ["userId", "date"],
            "properties": {
                "userId": { "bsonType": "objectId" },
                "title": { "bsonType": "string" },
                "description": { "bsonType": "string" },
                "likes": { "bsonType": "int" },
                "date": { "bsonType": "date" },
                "comments": {
                    "bsonType": "array",
                    "items": {
                        "bsonType": "object",
                        "required": ["_id", "comment", "userId", "date"],
                        "properties": {
                            "_id": { "bsonType": "objectId" },
                            "comment": { "bsonType": "string" },
                            "userId": { "bsonType": "objectId" },
                            "date": { "bsonType": "date" }
                        }
                    }
                }
            }
        },
    )
}

pub fn courses_schema() -> CollectionSchema {
    let theory_item = doc! {
        "bsonType": "object",
        "properties": {
            "text": { "bsonType": "string" },
            "sign": { "bsonType": "objectId" }
        }
    };
    let exercise = doc! {
        "bsonType": "object",
        "required": ["_id", "exerciseType", "order"],
        "properties": {
            "_id": { "bsonType": "objectId" },
            "exerciseType": { "bsonType": "int" },
            "order": { "bsonType": "int" },
            "sign": { "bsonType": "objectId" },
            "question": { "bsonType": "string" },
            "possibleAnswers": string_array(),
            "correctAnswer": string_array()
        }
    };
    let lesson = doc! {
        "bsonType": "object",
        "required": ["_id", "order", "name", "questionCount", "attempts", "forumEnabled"],
        "properties": {
            "_id": { "bsonType": "objectId" },
            "order": { "bsonType": "int" },
            "name": { "bsonType": "string" },
            "questionCount": { "bsonType": "int" },
            "attempts": { "bsonType": "int" },
            "forumEnabled": { "bsonType": "bool" },
            "theory": { "bsonType": "array", "items": theory_item },
            "exercises": { "bsonType": "array", "items": exercise }
        }
    };

    CollectionSchema::new(
        collections::COURSES,
        doc! {
            "bsonType": "object",
            "required": ["userId", "name", "difficulty", "language", "status"],
            "properties": {
                "userId": { "bsonType": "objectId" },
                "name": { "bsonType": "string" },
                "description": { "bsonType": "string" },
                "difficulty": { "bsonType": "int" },
                "language": {
                    "bsonType": "bool",
                    "description": "false = LESCO, true = LIBRAS"
                },
                "status": {
                    "bsonType": "bool",
                    "description": "false = private, true = public"
                },
                "students": object_id_array(),
                "lessons": { "bsonType": "array", "items": lesson }
            }
        },
    )
}

pub fn enrolled_courses_schema() -> CollectionSchema {
    CollectionSchema::new(
        collections::ENROLLED_COURSES,
        doc! {
            "bsonType": "object",
            "required": ["userId", "courseId"],
            "properties": {
                "userId": { "bsonType": "objectId" },
                "courseId": { "bsonType": "objectId" },
                "completionDate": nullable("date"),
                "totalQuestions": nullable("int"),
                "correctAnswers": nullable("int"),
                "completedLessons": {
                    "bsonType": "array",
                    "items": {
                        "bsonType": "object",
                        "required": ["_id", "lessonId"],
                        "properties": {
                            "_id": { "bsonType": "objectId" },
                            "lessonId": { "bsonType": "objectId" },
                            "correctCount": { "bsonType": "int" },
                            "remainingAttempts": { "bsonType": "int" },
                            "completionDate": { "bsonType": "date" }
                        }
                    }
                }
            }
        },
    )
}

pub fn forums_schema() -> CollectionSchema {
    let mut video_url = nullable("string");
    video_url.insert("description", "URL del video (opcional)");

    CollectionSchema::new(
        collections::FORUMS,
        doc! {
            "bsonType": "object",
            "required": ["lessonId", "userId", "content", "creationDate"],
            "properties": {
                "lessonId": { "bsonType": "objectId" },
                "userId": { "bsonType": "objectId" },
                "content": { "bsonType": "string" },
                "videoURL": video_url.clone(),
                "creationDate": { "bsonType": "date" },
                "comments": {
                    "bsonType": "array",
                    "items": {
                        "bsonType": "object",
                        "required": ["_id", "userId", "content", "date"],
                        "properties": {
                            "_id": { "bsonType": "objectId" },
                            "userId": { "bsonType": "objectId" },
                            "content": { "bsonType": "string" },
                            "videoURL": video_url,
                            "date": { "bsonType": "date" }
                        }
                    }
                }
            }
        },
    )
}

pub fn teacher_statistics_schema() -> CollectionSchema {
    CollectionSchema::new(
        collections::TEACHER_STATISTICS,
        doc! {
            "bsonType": "object",
            "required": ["userId"],
            "properties": {
                "userId": { "bsonType": "objectId" },
                "coursesCreated": { "bsonType": "int" },
                "lessonsCreated": { "bsonType": "int" },
                "totalStudents": { "bsonType": "int" }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schemas::{SchemaAction, plan};

    #[test]
    fn test_seven_collections_in_creation_order() {
        let names: Vec<_> = collection_schemas().iter().map(|schema| schema.name).collect();
        assert_eq!(
            names,
            vec!["users", "achievements", "news", "courses", "enrolledCourses", "forums", "teacherStatistics"]
        );
    }

    /// `mongosh`로 만든 기존 LEARN 데이터베이스의 users 검증기
    fn mongosh_users_validator() -> Document {
        doc! {
            "$jsonSchema": {
                "bsonType": "object",
                "required": ["firebaseUid", "type"],
                "properties": {
                    "firebaseUid": {
                        "bsonType": "string",
                        "description": "UID del usuario proveniente de Firebase Authentication"
                    },
                    "type": {
                        "bsonType": "bool",
                        "description": "false = Student, true = Teacher"
                    },
                    "followers": { "bsonType": "array", "items": { "bsonType": "objectId" } },
                    "following": { "bsonType": "array", "items": { "bsonType": "objectId" } },
                    "information": {
                        "bsonType": "object",
                        "required": ["streak"],
                        "properties": {
                            "streak": {
                                "bsonType": "object",
                                "required": ["current", "lastConnection"],
                                "properties": {
                                    "current": { "bsonType": "int" },
                                    "lastConnection": { "bsonType": "date" }
                                }
                            },
                            "achievements": { "bsonType": "array", "items": { "bsonType": "objectId" } },
                            "lescoSkills": { "bsonType": "int" },
                            "librasSkills": { "bsonType": "int" },
                            "lescoLevel": { "bsonType": "int" },
                            "librasLevel": { "bsonType": "int" },
                            "myCourses": { "bsonType": "array", "items": { "bsonType": "objectId" } }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_users_validator_matches_existing_database() {
        let desired = users_schema().validator;
        let existing = mongosh_users_validator();

        assert_eq!(desired, existing);
        let properties: Vec<&str> = desired
            .get_document("$jsonSchema")
            .and_then(|s| s.get_document("properties"))
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(properties, vec!["firebaseUid", "type", "followers", "following", "information"]);
        assert_eq!(plan(Some(Some(&existing)), &desired), SchemaAction::Unchanged);
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(users_schema().required_fields(), vec!["firebaseUid", "type"]);
        assert_eq!(
            courses_schema().required_fields(),
            vec!["userId", "name", "difficulty", "language", "status"]
        );
        assert_eq!(
            forums_schema().required_fields(),
            vec!["lessonId", "userId", "content", "creationDate"]
        );
        assert_eq!(teacher_statistics_schema().required_fields(), vec!["userId"]);
    }

    #[test]
    fn test_enrollment_counters_are_nullable() {
        let schema = enrolled_courses_schema();
        let properties = schema
            .validator
            .get_document("$jsonSchema")
            .and_then(|s| s.get_document("properties"))
            .unwrap();

        for field in ["completionDate", "totalQuestions", "correctAnswers"] {
            let types = properties.get_document(field).unwrap().get_array("bsonType").unwrap();
            assert!(types.contains(&Bson::String("null".into())), "{} should allow null", field);
        }
    }

    #[test]
    fn test_lesson_items_require_identity_and_order() {
        let schema = courses_schema();
        let lesson = schema
            .validator
            .get_document("$jsonSchema")
            .and_then(|s| s.get_document("properties"))
            .and_then(|p| p.get_document("lessons"))
            .and_then(|l| l.get_document("items"))
            .unwrap();
        let required: Vec<_> = lesson.get_array("required").unwrap().iter().filter_map(Bson::as_str).collect();
        assert!(required.contains(&"_id"));
        assert!(required.contains(&"order"));
        assert!(required.contains(&"forumEnabled"));
    }
}
