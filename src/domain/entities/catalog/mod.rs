//! 검증기가 없는 보조 컬렉션 엔티티
//!
//! - `premadeComments`: 업적에 연결되는 미리 정의된 축하 메시지
//! - `signs`: 레슨 이론과 연습 문제가 참조하는 수어 항목

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::entities::flags::SignLanguage;

/// 미리 정의된 축하 메시지
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PremadeComment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub content: String,
}

/// 수어 항목
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sign {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub word: String,
    pub language: SignLanguage,
}
