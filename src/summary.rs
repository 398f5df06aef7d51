//! Run summary written next to the exported schemas

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::registry::schema_filename;

/// Index of one export run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaSummary {
    /// When the run finished extracting
    pub extracted_at: DateTime<Utc>,
    /// Number of schemas successfully extracted
    pub total_schemas: usize,
    /// Extracted model names, in registry order
    pub schema_names: Vec<String>,
    /// Model name to schema file name
    pub file_locations: Map<String, Value>,
}

impl SchemaSummary {
    /// Summarize an extraction result set
    pub fn new(schemas: &Map<String, Value>, extracted_at: DateTime<Utc>) -> Self {
        let schema_names: Vec<String> = schemas.keys().cloned().collect();
        let file_locations = schema_names
            .iter()
            .map(|name| (name.clone(), Value::String(schema_filename(name))))
            .collect();

        Self {
            extracted_at,
            total_schemas: schema_names.len(),
            schema_names,
            file_locations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_follows_result_order() {
        let mut schemas = Map::new();
        schemas.insert("Session".into(), json!({}));
        schemas.insert("Agent".into(), json!({}));

        let summary = SchemaSummary::new(&schemas, Utc::now());
        assert_eq!(summary.total_schemas, 2);
        assert_eq!(summary.schema_names, vec!["Session", "Agent"]);
        assert_eq!(
            Value::Object(summary.file_locations),
            json!({ "Session": "session.schema.json", "Agent": "agent.schema.json" })
        );
    }

    #[test]
    fn test_summary_serializes_iso_timestamp() {
        let at = DateTime::parse_from_rfc3339("2024-05-01T12:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let summary = SchemaSummary::new(&Map::new(), at);

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["extracted_at"], "2024-05-01T12:30:00Z");
        assert_eq!(value["total_schemas"], 0);
        assert_eq!(value["schema_names"], json!([]));
        assert_eq!(value["file_locations"], json!({}));
    }
}
