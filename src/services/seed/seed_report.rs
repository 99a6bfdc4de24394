//! 시드 실행 결과

use std::collections::BTreeMap;

use mongodb::bson::oid::ObjectId;
use serde::Serialize;

/// 시더가 삽입한 문서 하나
#[derive(Debug, Clone, Serialize)]
pub struct SeededDocument {
    pub collection: String,
    pub label: String,
    pub id: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SeedReport {
    /// `--reset`으로 삭제한 문서 수 (컬렉션별)
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub cleared: BTreeMap<String, u64>,
    pub documents: Vec<SeededDocument>,
}

impl SeedReport {
    pub fn record(&mut self, collection: &str, label: impl Into<String>, id: ObjectId) {
        self.documents.push(SeededDocument {
            collection: collection.to_string(),
            label: label.into(),
            id: id.to_hex(),
        });
    }

    pub fn record_all(&mut self, collection: &str, label: &str, ids: &[ObjectId]) {
        for (index, id) in ids.iter().enumerate() {
            self.record(collection, format!("{} #{}", label, index + 1), *id);
        }
    }

    /// 컬렉션별 삽입 문서 수
    pub fn counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for document in &self.documents {
            *counts.entry(document.collection.as_str()).or_insert(0) += 1;
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.documents.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_group_by_collection() {
        let mut report = SeedReport::default();
        report.record("users", "student", ObjectId::new());
        report.record("users", "teacher", ObjectId::new());
        report.record_all("signs", "sign", &[ObjectId::new(), ObjectId::new(), ObjectId::new()]);

        let counts = report.counts();
        assert_eq!(counts.get("users"), Some(&2));
        assert_eq!(counts.get("signs"), Some(&3));
        assert_eq!(report.total(), 5);
        assert_eq!(report.documents[4].label, "sign #3");
    }

    #[test]
    fn test_ids_serialize_as_hex() {
        let id = ObjectId::new();
        let mut report = SeedReport::default();
        report.record("news", "post", id);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["documents"][0]["id"], id.to_hex());
        assert!(json.get("cleared").is_none());
    }
}
