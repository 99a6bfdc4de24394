//! Forum Thread Entity
//!
//! 레슨 단위 포럼 글과 댓글을 정의합니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 포럼 글 (`forums` 컬렉션)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ForumPost {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub lesson_id: ObjectId,
    pub user_id: ObjectId,
    #[validate(length(min = 1))]
    pub content: String,
    /// 선택적 영상 URL (`null` 허용)
    #[serde(rename = "videoURL", default)]
    #[validate(url)]
    pub video_url: Option<String>,
    pub creation_date: DateTime,
    #[serde(default)]
    #[validate(nested)]
    pub comments: Vec<ForumComment>,
}

/// 포럼 댓글
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ForumComment {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_id: ObjectId,
    #[validate(length(min = 1))]
    pub content: String,
    #[serde(rename = "videoURL", default)]
    #[validate(url)]
    pub video_url: Option<String>,
    pub date: DateTime,
}

impl ForumComment {
    pub fn new(user_id: ObjectId, content: impl Into<String>, date: DateTime) -> Self {
        Self {
            id: ObjectId::new(),
            user_id,
            content: content.into(),
            video_url: None,
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, Bson};

    fn post(video_url: Option<&str>) -> ForumPost {
        ForumPost {
            id: None,
            lesson_id: ObjectId::new(),
            user_id: ObjectId::new(),
            content: "¿Alguien puede explicarme?".into(),
            video_url: video_url.map(str::to_string),
            creation_date: DateTime::now(),
            comments: vec![ForumComment::new(ObjectId::new(), "Claro.", DateTime::now())],
        }
    }

    #[test]
    fn test_video_url_field_name_and_null() {
        let document = bson::to_document(&post(None)).unwrap();
        assert_eq!(document.get("videoURL"), Some(&Bson::Null));
        assert!(document.get_datetime("creationDate").is_ok());
    }

    #[test]
    fn test_video_url_must_be_a_url() {
        assert!(post(Some("https://videos.example.com/saludos.mp4")).validate().is_ok());
        assert!(post(Some("no es una url")).validate().is_err());
    }
}
