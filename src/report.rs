// src/report.rs
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Prediction payload returned by the forecast service after a CSV upload.
///
/// Every field is optional on the wire: missing counts default to 0,
/// missing sequences to empty, missing scalars to `None`. The report is
/// cached wholesale and re-read by the dashboard and detail screens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionReport {
    pub total: u64,
    #[serde(rename = "highRisk")]
    pub high_risk: u64,
    #[serde(deserialize_with = "lenient_seq")]
    pub predictions: Vec<Prediction>,
    #[serde(deserialize_with = "lenient_seq")]
    pub stacks: Vec<Stack>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prediction {
    pub date: String,
    pub location: String,
}

/// One coal stack: grouped by warehouse, with its own temperature series
/// and forecast summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stack {
    pub id: String,
    pub name: String,
    pub warehouse: String,
    #[serde(deserialize_with = "lenient_seq")]
    pub dates: Vec<String>,
    #[serde(deserialize_with = "lenient_seq")]
    pub temps: Vec<f64>,
    pub forecast: Option<String>,
    #[serde(rename = "lastTemp")]
    pub last_temp: Option<f64>,
}

impl PredictionReport {
    /// Distinct warehouse names across all stacks, in first-seen order.
    pub fn warehouses(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for stack in &self.stacks {
            if !seen.contains(&stack.warehouse.as_str()) {
                seen.push(stack.warehouse.as_str());
            }
        }
        seen
    }

    pub fn stacks_in(&self, warehouse: &str) -> Vec<&Stack> {
        self.stacks
            .iter()
            .filter(|s| s.warehouse == warehouse)
            .collect()
    }

    /// Looks the stack up by id within the chosen warehouse only, so a
    /// selection left over from another warehouse never matches.
    pub fn find_stack(&self, warehouse: &str, id: &str) -> Option<&Stack> {
        self.stacks_in(warehouse).into_iter().find(|s| s.id == id)
    }
}

// The service occasionally hands back scalars or nulls where a sequence is
// expected; the views must degrade to an empty series instead of rejecting
// the whole report.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let report: PredictionReport = serde_json::from_str("{}").unwrap();
        assert_eq!(report.total, 0);
        assert_eq!(report.high_risk, 0);
        assert!(report.predictions.is_empty());
        assert!(report.stacks.is_empty());
    }

    #[test]
    fn wire_names_are_mapped() {
        let report: PredictionReport =
            serde_json::from_str(r#"{"total":3,"highRisk":1}"#).unwrap();
        assert_eq!(report.total, 3);
        assert_eq!(report.high_risk, 1);

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"highRisk\":1"));
    }

    #[test]
    fn non_array_temps_become_empty() {
        let report: PredictionReport = serde_json::from_str(
            r#"{"stacks":[{"id":"s1","warehouse":"W1","temps":"oops","dates":null}]}"#,
        )
        .unwrap();
        assert_eq!(report.stacks.len(), 1);
        assert!(report.stacks[0].temps.is_empty());
        assert!(report.stacks[0].dates.is_empty());
    }

    #[test]
    fn warehouses_are_distinct_in_first_seen_order() {
        let report: PredictionReport = serde_json::from_str(
            r#"{"stacks":[
                {"id":"s1","warehouse":"W2"},
                {"id":"s2","warehouse":"W1"},
                {"id":"s3","warehouse":"W2"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(report.warehouses(), vec!["W2", "W1"]);
    }

    #[test]
    fn warehouse_filter_excludes_other_stacks() {
        let report: PredictionReport = serde_json::from_str(
            r#"{"stacks":[
                {"id":"s1","warehouse":"W1"},
                {"id":"s2","warehouse":"W2"}
            ]}"#,
        )
        .unwrap();

        let filtered = report.stacks_in("W1");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "s1");

        assert!(report.find_stack("W1", "s2").is_none());
        assert_eq!(report.find_stack("W1", "s1").unwrap().id, "s1");
    }
}
