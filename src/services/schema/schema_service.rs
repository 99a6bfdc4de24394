//! # 스키마 정의 서비스
//!
//! 7개 컬렉션을 `$jsonSchema` 검증기와 함께 생성하고
//! `users.firebaseUid` 고유 인덱스를 만듭니다.
//!
//! 재실행 시 동작:
//!
//! | 기존 상태 | 작업 |
//! |-----------|------|
//! | 컬렉션 없음 | 검증기와 함께 생성 |
//! | 같은 검증기 | 건너뜀 |
//! | 다른 검증기 또는 검증기 없음 | `ConflictError` |
//!
//! 기존 검증기는 절대 변경하지 않습니다(`collMod`를 사용하지 않음).
//! 충돌이 있어도 나머지 컬렉션은 계속 처리하고, 마지막에 충돌을 에러로 반환합니다.
//! 인덱스는 충돌이 없을 때만 생성합니다.

use std::sync::Arc;

use log::{info, warn};
use serde::Serialize;

use crate::db::Database;
use crate::domain::entities::collections;
use crate::domain::schemas::{FIREBASE_UID_INDEX, SchemaAction, collection_schemas, plan};
use crate::errors::{AppError, AppResult};
use crate::repositories::catalog::SchemaRepository;

/// 컬렉션별 처리 결과
#[derive(Debug, Clone, Serialize)]
pub struct CollectionOutcome {
    pub collection: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SchemaReport {
    pub collections: Vec<CollectionOutcome>,
    pub unique_index: Option<String>,
}

impl SchemaReport {
    pub fn created(&self) -> usize {
        self.count("created")
    }

    pub fn unchanged(&self) -> usize {
        self.count("unchanged")
    }

    pub fn conflicts(&self) -> Vec<&CollectionOutcome> {
        self.collections.iter().filter(|outcome| outcome.action == "conflict").collect()
    }

    fn count(&self, action: &str) -> usize {
        self.collections.iter().filter(|outcome| outcome.action == action).count()
    }

    fn record(&mut self, collection: &str, action: &SchemaAction) {
        self.collections.push(CollectionOutcome {
            collection: collection.to_string(),
            action: action.label().to_string(),
            reason: match action {
                SchemaAction::Conflict(reason) => Some(reason.clone()),
                _ => None,
            },
        });
    }
}

pub struct SchemaService {
    schemas: SchemaRepository,
}

impl SchemaService {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            schemas: SchemaRepository::new(db),
        }
    }

    /// 모든 검증 컬렉션과 고유 인덱스를 정의합니다.
    pub async fn define_all(&self) -> AppResult<SchemaReport> {
        let mut report = SchemaReport::default();

        for schema in collection_schemas() {
            let current = self.schemas.current_validator(schema.name).await?;
            let action = plan(current.as_ref().map(Option::as_ref), &schema.validator);

            match &action {
                SchemaAction::Create => {
                    self.schemas.create_with_validator(schema.name, &schema.validator).await?;
                    info!("✅ 컬렉션 생성: {}", schema.name);
                }
                SchemaAction::Unchanged => {
                    info!("⏭️  컬렉션 유지 (동일한 검증기): {}", schema.name);
                }
                SchemaAction::Conflict(reason) => {
                    warn!("⚠️  컬렉션 충돌: {} - {}", schema.name, reason);
                }
            }
            report.record(schema.name, &action);
        }

        let conflicts = report.conflicts();
        if !conflicts.is_empty() {
            let names: Vec<&str> = conflicts.iter().map(|outcome| outcome.collection.as_str()).collect();
            return Err(AppError::ConflictError(format!(
                "collection already exists with a different validator: {}",
                names.join(", ")
            )));
        }

        let index = self
            .schemas
            .ensure_unique_index(collections::USERS, "firebaseUid", FIREBASE_UID_INDEX)
            .await?;
        info!("🔑 고유 인덱스 확인: {}.{}", collections::USERS, index);
        report.unique_index = Some(index);

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts_actions() {
        let mut report = SchemaReport::default();
        report.record("users", &SchemaAction::Create);
        report.record("news", &SchemaAction::Unchanged);
        report.record("forums", &SchemaAction::Conflict("differs".into()));

        assert_eq!(report.created(), 1);
        assert_eq!(report.unchanged(), 1);
        let conflicts = report.conflicts();
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].collection, "forums");
        assert_eq!(conflicts[0].reason.as_deref(), Some("differs"));
    }
}
