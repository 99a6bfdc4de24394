//! Achievement Entity

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::flags::SignLanguage;

/// 업적 엔티티 (`achievements` 컬렉션)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[validate(length(min = 1))]
    pub name: String,
    /// 수어 트랙 (`false` = LESCO, `true` = LIBRAS)
    #[serde(rename = "type")]
    pub language: SignLanguage,
    #[validate(length(min = 1))]
    pub content: String,
    pub date: DateTime,
    /// 미리 정의된 축하 메시지 (`premadeComments`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premade_id: Option<ObjectId>,
}
