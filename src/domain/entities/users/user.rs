//! User Entity Implementation
//!
//! 학습 플랫폼 사용자(학생/교사) 엔티티입니다.
//! 외부 인증(Firebase) 식별자와 학습 진행 정보를 포함합니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::flags::{SignLanguage, UserRole};

/// 사용자 엔티티 (`users` 컬렉션)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Firebase Authentication UID (unique)
    #[validate(length(min = 1, max = 128, message = "firebaseUid는 1-128자여야 합니다"))]
    pub firebase_uid: String,
    /// 역할 (`false` = 학생, `true` = 교사)
    #[serde(rename = "type")]
    pub role: UserRole,
    /// 표시 이름
    #[validate(length(min = 1, message = "이름은 비어 있을 수 없습니다"))]
    pub name: String,
    #[serde(default)]
    pub followers: Vec<ObjectId>,
    #[serde(default)]
    pub following: Vec<ObjectId>,
    #[validate(nested)]
    pub information: UserInformation,
}

/// 사용자 학습 정보 (`users.information`)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserInformation {
    #[validate(nested)]
    pub streak: Streak,
    #[serde(default)]
    pub achievements: Vec<ObjectId>,
    #[validate(range(min = 0))]
    pub lesco_skills: i32,
    #[validate(range(min = 0))]
    pub libras_skills: i32,
    #[validate(range(min = 0))]
    pub lesco_level: i32,
    #[validate(range(min = 0))]
    pub libras_level: i32,
    #[serde(default)]
    pub my_courses: Vec<ObjectId>,
}

/// 연속 접속 기록
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Streak {
    #[validate(range(min = 0))]
    pub current: i32,
    pub last_connection: DateTime,
}

impl User {
    /// 팔로워/팔로잉 관계가 없는 새 사용자를 생성합니다.
    pub fn new(firebase_uid: impl Into<String>, role: UserRole, name: impl Into<String>, information: UserInformation) -> Self {
        Self {
            id: None,
            firebase_uid: firebase_uid.into(),
            role,
            name: name.into(),
            followers: Vec::new(),
            following: Vec::new(),
            information,
        }
    }

    pub fn is_teacher(&self) -> bool {
        self.role == UserRole::Teacher
    }
}

impl UserInformation {
    /// 스킬/레벨 카운터와 연속 접속 일수로 학습 정보를 생성합니다.
    ///
    /// 업적과 수강 강좌 목록은 비어 있는 상태로 시작합니다.
    pub fn new(streak_days: i32, last_connection: DateTime, skills: (i32, i32), levels: (i32, i32)) -> Self {
        Self {
            streak: Streak {
                current: streak_days,
                last_connection,
            },
            achievements: Vec::new(),
            lesco_skills: skills.0,
            libras_skills: skills.1,
            lesco_level: levels.0,
            libras_level: levels.1,
            my_courses: Vec::new(),
        }
    }

    pub fn level(&self, language: SignLanguage) -> i32 {
        match language {
            SignLanguage::Lesco => self.lesco_level,
            SignLanguage::Libras => self.libras_level,
        }
    }
}
