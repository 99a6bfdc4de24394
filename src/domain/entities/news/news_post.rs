//! News Post Entity

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 소식 게시글 (`news` 컬렉션)
///
/// `title`과 `description`은 검증기에서 `string`만 허용하므로
/// 값이 없으면 필드를 생략합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewsPost {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 작성자
    pub user_id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub likes: i32,
    pub date: DateTime,
    #[serde(default)]
    #[validate(nested)]
    pub comments: Vec<NewsComment>,
}

/// 소식 게시글 댓글
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewsComment {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[validate(length(min = 1))]
    pub comment: String,
    pub user_id: ObjectId,
    pub date: DateTime,
}

impl NewsComment {
    pub fn new(user_id: ObjectId, comment: impl Into<String>, date: DateTime) -> Self {
        Self {
            id: ObjectId::new(),
            comment: comment.into(),
            user_id,
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_missing_title_is_omitted() {
        let post = NewsPost {
            id: None,
            user_id: ObjectId::new(),
            title: None,
            description: Some("¡Completé mi primera lección!".into()),
            likes: 0,
            date: DateTime::now(),
            comments: vec![NewsComment::new(ObjectId::new(), "¡Bien!", DateTime::now())],
        };
        let document = bson::to_document(&post).unwrap();

        assert!(!document.contains_key("title"));
        assert!(document.contains_key("description"));
        let comments = document.get_array("comments").unwrap();
        let comment = comments[0].as_document().unwrap();
        assert!(comment.get_object_id("_id").is_ok());
        assert!(comment.get_object_id("userId").is_ok());
    }
}
