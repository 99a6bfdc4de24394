//! 불리언으로 저장되는 도메인 플래그
//!
//! 컬렉션 검증기는 역할/언어/공개 여부를 `bool`로 정의합니다.
//! Rust 코드에서는 열거형으로 다루고, 직렬화 시에는 원래의 불리언 값으로 저장합니다.

use serde::{Deserialize, Serialize};

/// 사용자 역할 (`users.type`)
///
/// `false` = 학생, `true` = 교사
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum UserRole {
    Student,
    Teacher,
}

impl From<bool> for UserRole {
    fn from(value: bool) -> Self {
        if value { UserRole::Teacher } else { UserRole::Student }
    }
}

impl From<UserRole> for bool {
    fn from(role: UserRole) -> Self {
        matches!(role, UserRole::Teacher)
    }
}

/// 수어 트랙 (`achievements.type`, `courses.language`)
///
/// `false` = LESCO (코스타리카 수어), `true` = LIBRAS (브라질 수어)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum SignLanguage {
    Lesco,
    Libras,
}

impl SignLanguage {
    pub const ALL: [SignLanguage; 2] = [SignLanguage::Lesco, SignLanguage::Libras];

    pub fn label(&self) -> &'static str {
        match self {
            SignLanguage::Lesco => "LESCO",
            SignLanguage::Libras => "LIBRAS",
        }
    }
}

impl From<bool> for SignLanguage {
    fn from(value: bool) -> Self {
        if value { SignLanguage::Libras } else { SignLanguage::Lesco }
    }
}

impl From<SignLanguage> for bool {
    fn from(language: SignLanguage) -> Self {
        matches!(language, SignLanguage::Libras)
    }
}

/// 강좌 공개 여부 (`courses.status`)
///
/// `false` = 비공개, `true` = 공개
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum CourseVisibility {
    Private,
    Public,
}

impl From<bool> for CourseVisibility {
    fn from(value: bool) -> Self {
        if value { CourseVisibility::Public } else { CourseVisibility::Private }
    }
}

impl From<CourseVisibility> for bool {
    fn from(visibility: CourseVisibility) -> Self {
        matches!(visibility, CourseVisibility::Public)
    }
}
