//! 기존 컬렉션과 원하는 검증기를 비교해 수행할 작업을 결정합니다.

use mongodb::bson::Document;

/// 하나의 컬렉션에 대해 스키마 정의기가 수행할 작업
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaAction {
    /// 컬렉션이 없으므로 검증기와 함께 생성
    Create,
    /// 같은 검증기로 이미 존재함
    Unchanged,
    /// 검증기가 없거나 다름. 기존 검증기는 변경하지 않습니다.
    Conflict(String),
}

impl SchemaAction {
    pub fn label(&self) -> &'static str {
        match self {
            SchemaAction::Create => "created",
            SchemaAction::Unchanged => "unchanged",
            SchemaAction::Conflict(_) => "conflict",
        }
    }
}

/// `existing`은 컬렉션이 있을 때 그 옵션의 validator입니다.
///
/// 컬렉션 자체가 없으면 `None`, 컬렉션은 있지만 validator가 없으면
/// `Some(None)`을 넘깁니다.
pub fn plan(existing: Option<Option<&Document>>, desired: &Document) -> SchemaAction {
    match existing {
        None => SchemaAction::Create,
        Some(None) => SchemaAction::Conflict("collection exists without a validator".to_string()),
        Some(Some(current)) if current == desired => SchemaAction::Unchanged,
        Some(Some(_)) => SchemaAction::Conflict("collection exists with a different validator".to_string()),
    }
}
