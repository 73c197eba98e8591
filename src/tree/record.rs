//! Flat document records as handed over by the store.

use crate::types::DocumentId;
use serde::{Deserialize, Serialize};

/// One row of the documents table, reduced to what the sidebar needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub id: DocumentId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub is_folder: bool,
    #[serde(default)]
    pub parent_id: Option<DocumentId>,
    /// Collection tag (e.g. "curriculum", "community"); absent for untyped records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
}

impl DocumentRecord {
    pub fn document(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            is_folder: false,
            parent_id: None,
            document_type: None,
        }
    }

    pub fn folder(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            is_folder: true,
            ..Self::document(id, title)
        }
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_type(mut self, document_type: impl Into<String>) -> Self {
        self.document_type = Some(document_type.into());
        self
    }
}

/// Keep only the records tagged with `document_type`.
///
/// Run this before building: a record whose parent was filtered out ends up
/// as a root in the built tree.
pub fn filter_by_type(records: &[DocumentRecord], document_type: &str) -> Vec<DocumentRecord> {
    records
        .iter()
        .filter(|r| r.document_type.as_deref() == Some(document_type))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_record() {
        let json = r#"{"id":"d1","title":"Intro","isFolder":false,"parentId":"f1","documentType":"curriculum"}"#;
        let record: DocumentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "d1");
        assert_eq!(record.parent_id.as_deref(), Some("f1"));
        assert_eq!(record.document_type.as_deref(), Some("curriculum"));
        assert!(!record.is_folder);
    }

    #[test]
    fn test_deserialize_null_parent_and_missing_fields() {
        let json = r#"{"id":"root","parentId":null}"#;
        let record: DocumentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.parent_id, None);
        assert_eq!(record.title, "");
        assert!(!record.is_folder);
    }

    #[test]
    fn test_filter_by_type() {
        let records = vec![
            DocumentRecord::folder("f1", "Modules").with_type("curriculum"),
            DocumentRecord::document("d1", "Welcome").with_type("community"),
            DocumentRecord::document("d2", "Untyped"),
        ];
        let filtered = filter_by_type(&records, "curriculum");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "f1");
    }
}
