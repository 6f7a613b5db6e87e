//! Catalog record types.

use serde::{Deserialize, Serialize};

/// One drug record as served by the catalog API.
///
/// Every field is optional: the catalog is populated from scraped and
/// OCR-derived sources, so display logic must tolerate any field being
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrugRecord {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub active_ingredient: Option<String>,
    pub manufacturer: Option<String>,
    pub expiry_date: Option<String>,
    pub detected_type: Option<String>,
    pub description: Option<String>,
    pub usage: Option<String>,
    pub indications: Option<String>,
    pub image_path: Option<String>,
    pub created_at: Option<String>,
}

impl DrugRecord {
    /// Display name with a fallback for records missing one.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed drug")
    }

    /// Usage text, falling back from `usage` to `indications`.
    pub fn usage_text(&self) -> Option<&str> {
        self.usage
            .as_deref()
            .or(self.indications.as_deref())
            .filter(|text| !text.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_full_record() {
        let record: DrugRecord = serde_json::from_str(
            r#"{
                "id": 7,
                "name": "Panadol Extra",
                "active_ingredient": "Paracetamol, Caffeine",
                "manufacturer": "GSK",
                "expiry_date": "2026-01-31",
                "detected_type": "Blister Pack",
                "description": "Pain relief tablets",
                "usage": "Headache, fever",
                "image_path": "/uploads/panadol.jpg",
                "created_at": "2025-02-10T09:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(record.id, Some(7));
        assert_eq!(record.display_name(), "Panadol Extra");
        assert_eq!(record.usage_text(), Some("Headache, fever"));
    }

    #[test]
    fn test_tolerates_sparse_records() {
        let record: DrugRecord = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(record.display_name(), "Unnamed drug");
        assert_eq!(record.usage_text(), None);
        assert!(record.expiry_date.is_none());

        let empty: DrugRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.id, None);
    }

    #[test]
    fn test_usage_falls_back_to_indications() {
        let record: DrugRecord =
            serde_json::from_str(r#"{"indications": "Mild pain"}"#).unwrap();
        assert_eq!(record.usage_text(), Some("Mild pain"));

        let blank: DrugRecord = serde_json::from_str(r#"{"usage": "   "}"#).unwrap();
        assert_eq!(blank.usage_text(), None);
    }
}
