//! Report types produced by a simulation run.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::stats::StatSummary;

/// Named outputs produced by one simulated trial.
///
/// Fields vary per scenario. Only finite numeric fields are summarized by
/// the aggregator; anything else (booleans, nulls) is carried through the
/// record but ignored statistically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct IterationResult(Map<String, Value>);

impl IterationResult {
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Record a numeric output. Non-finite values are stored as null and
    /// later filtered by the aggregator.
    pub fn set(&mut self, key: &str, value: f64) {
        self.0.insert(key.to_string(), Value::from(value));
    }

    /// Record a non-numeric output.
    pub fn set_value(&mut self, key: &str, value: Value) {
        self.0.insert(key.to_string(), value);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Iterate fields in key order.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Run identification attached to a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub scenario: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    pub parameters: Value,
}

/// Full output of one orchestrated run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationReport {
    pub metadata: ReportMetadata,
    pub iterations: usize,
    /// ISO 8601 / RFC 3339 timestamp of the run.
    pub timestamp: String,
    pub statistics: BTreeMap<String, StatSummary>,
}
