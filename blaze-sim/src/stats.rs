//! Statistics aggregation over iteration results.
//!
//! Summarized keys are taken from the first result record; values missing
//! or non-finite in later records are silently dropped from that key's
//! sample. Percentiles use nearest-rank indexing (`floor(p * n)`) with no
//! interpolation, matching the upstream report format.

use chrono::{DateTime, Utc};
use num_traits::cast::cast;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::SimulationError;
use crate::report::{IterationResult, ReportMetadata, SimulationReport};

/// Empirical confidence band: the [2.5th, 97.5th] percentile interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
    pub level: f64,
}

/// Nearest-rank percentile set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Percentiles {
    pub p5: f64,
    pub p10: f64,
    pub p25: f64,
    pub p75: f64,
    pub p90: f64,
    pub p95: f64,
}

/// Summary statistics for one numeric output field.
///
/// `mean`, `median`, and `std_dev` are rounded to 4 decimal places;
/// `min`, `max`, percentiles, and the confidence bounds are raw elements
/// of the sorted sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatSummary {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub percentiles: Percentiles,
    pub confidence_interval: ConfidenceInterval,
}

/// Reduce iteration results into a full report.
///
/// # Errors
///
/// Returns `EmptyResultSet` if `results` is empty.
pub fn analyze(
    results: &[IterationResult],
    metadata: ReportMetadata,
    timestamp: DateTime<Utc>,
) -> Result<SimulationReport, SimulationError> {
    let Some(first) = results.first() else {
        return Err(SimulationError::EmptyResultSet);
    };

    let mut statistics = BTreeMap::new();
    for (key, value) in first.fields() {
        if !is_finite_number(value) {
            continue;
        }
        let mut values: Vec<f64> = results
            .iter()
            .filter_map(|r| r.get(key))
            .filter_map(Value::as_f64)
            .filter(|v| v.is_finite())
            .collect();
        if values.is_empty() {
            continue;
        }
        statistics.insert(key.clone(), summarize(&mut values));
    }

    Ok(SimulationReport {
        metadata,
        iterations: results.len(),
        timestamp: timestamp.to_rfc3339(),
        statistics,
    })
}

fn is_finite_number(value: &Value) -> bool {
    value.as_f64().is_some_and(f64::is_finite)
}

fn summarize(values: &mut [f64]) -> StatSummary {
    values.sort_by(f64::total_cmp);
    let n = values.len();
    let count = cast::<usize, f64>(n).unwrap_or(1.0);

    let mean = values.iter().sum::<f64>() / count;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count;
    let median = values[n / 2];

    StatSummary {
        mean: round4(mean),
        median: round4(median),
        std_dev: round4(variance.sqrt()),
        min: values[0],
        max: values[n - 1],
        percentiles: Percentiles {
            p5: nearest_rank(values, 0.05),
            p10: nearest_rank(values, 0.10),
            p25: nearest_rank(values, 0.25),
            p75: nearest_rank(values, 0.75),
            p90: nearest_rank(values, 0.90),
            p95: nearest_rank(values, 0.95),
        },
        confidence_interval: ConfidenceInterval {
            lower: nearest_rank(values, 0.025),
            upper: nearest_rank(values, 0.975),
            level: 0.95,
        },
    }
}

// Nearest-rank index without interpolation: floor(p * n), clamped to the
// last element.
fn nearest_rank(sorted: &[f64], p: f64) -> f64 {
    let n = cast::<usize, f64>(sorted.len()).unwrap_or(0.0);
    let index = cast::<f64, usize>((p * n).floor()).unwrap_or(0);
    sorted[index.min(sorted.len() - 1)]
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn metadata() -> ReportMetadata {
        ReportMetadata {
            scenario: "test".to_string(),
            team: None,
            parameters: json!({}),
        }
    }

    fn record(pairs: &[(&str, f64)]) -> IterationResult {
        let mut r = IterationResult::new();
        for (key, value) in pairs {
            r.set(key, *value);
        }
        r
    }

    #[test]
    fn empty_results_are_an_error() {
        let err = analyze(&[], metadata(), Utc::now()).unwrap_err();
        assert_eq!(err, SimulationError::EmptyResultSet);
    }

    #[test]
    fn summary_matches_hand_computed_sample() {
        let results: Vec<IterationResult> = (1..=10)
            .map(|i| record(&[("score", f64::from(i))]))
            .collect();
        let report = analyze(&results, metadata(), Utc::now()).unwrap();
        let s = &report.statistics["score"];

        assert!((s.mean - 5.5).abs() < 1e-9);
        // Nearest rank: sorted[10/2] = 6.
        assert!((s.median - 6.0).abs() < 1e-9);
        assert!((s.min - 1.0).abs() < 1e-9);
        assert!((s.max - 10.0).abs() < 1e-9);
        // floor(0.25 * 10) = index 2 -> value 3.
        assert!((s.percentiles.p25 - 3.0).abs() < 1e-9);
        // floor(0.95 * 10) = index 9 -> value 10.
        assert!((s.percentiles.p95 - 10.0).abs() < 1e-9);
        // Population stddev of 1..10 = sqrt(8.25) = 2.8723 rounded.
        assert!((s.std_dev - 2.8723).abs() < 1e-9);
        assert!((s.confidence_interval.level - 0.95).abs() < f64::EPSILON);
    }

    #[test]
    fn nan_and_missing_values_are_filtered() {
        let mut with_nan = record(&[("score", f64::NAN)]);
        with_nan.set("other", 1.0);
        let results = vec![
            record(&[("score", 2.0), ("other", 1.0)]),
            with_nan,
            record(&[("other", 1.0)]),
            record(&[("score", 4.0), ("other", 1.0)]),
        ];
        let report = analyze(&results, metadata(), Utc::now()).unwrap();
        let s = &report.statistics["score"];
        assert!((s.mean - 3.0).abs() < 1e-9);
        assert!((s.min - 2.0).abs() < 1e-9);
        assert!((s.max - 4.0).abs() < 1e-9);
    }

    #[test]
    fn non_numeric_first_record_fields_are_skipped() {
        let mut first = record(&[("score", 1.0)]);
        first.set_value("flag", json!(true));
        let results = vec![first, record(&[("score", 3.0)])];
        let report = analyze(&results, metadata(), Utc::now()).unwrap();
        assert!(report.statistics.contains_key("score"));
        assert!(!report.statistics.contains_key("flag"));
    }

    #[test]
    fn keys_absent_from_first_record_are_ignored() {
        let results = vec![record(&[("a", 1.0)]), record(&[("a", 2.0), ("b", 9.0)])];
        let report = analyze(&results, metadata(), Utc::now()).unwrap();
        assert!(report.statistics.contains_key("a"));
        assert!(!report.statistics.contains_key("b"));
    }

    #[test]
    fn percentiles_are_monotonic() {
        let mut values: Vec<f64> = (0..997).map(|i| f64::from(i) * 0.37).collect();
        let s = summarize(&mut values);
        let p = &s.percentiles;
        assert!(s.min <= p.p5);
        assert!(p.p5 <= p.p10);
        assert!(p.p10 <= p.p25);
        assert!(p.p25 <= p.p75);
        assert!(p.p75 <= p.p90);
        assert!(p.p90 <= p.p95);
        assert!(p.p95 <= s.max);
        assert!(s.confidence_interval.lower <= s.confidence_interval.upper);
    }
}
