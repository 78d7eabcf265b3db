//! Summary statistics over trend measurement sets.
//!
//! Computes the per-metric mean/max/min block shown at the top of every
//! report. Values are kept at full precision here; rounding to two decimal
//! places happens at presentation time only.

use serde::Serialize;
use tr_common::MeasurementSet;

/// Mean, maximum, and minimum of one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSummary {
    pub avg: f64,
    pub max: f64,
    pub min: f64,
}

/// Derived statistics for one measurement set. Recomputed per report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    pub flow: MetricSummary,
    pub percentage: MetricSummary,
}

/// Summarize a measurement set.
///
/// Returns `None` for an empty set; callers short-circuit report
/// generation before any statistics are shown.
pub fn summarize(set: &MeasurementSet) -> Option<SummaryStats> {
    if set.is_empty() {
        return None;
    }
    Some(SummaryStats {
        flow: metric_summary(set.iter().map(|r| r.flow)),
        percentage: metric_summary(set.iter().map(|r| r.flow_percentage)),
    })
}

fn metric_summary(values: impl Iterator<Item = f64>) -> MetricSummary {
    let mut sum = 0.0;
    let mut max = f64::NEG_INFINITY;
    let mut min = f64::INFINITY;
    let mut count = 0usize;

    for value in values {
        sum += value;
        max = max.max(value);
        min = min.min(value);
        count += 1;
    }

    MetricSummary {
        avg: sum / count as f64,
        max,
        min,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use tr_common::MeasurementRecord;

    fn record(index: usize, flow: f64, percentage: f64) -> MeasurementRecord {
        MeasurementRecord {
            timestamp: NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
                + chrono::Duration::minutes(index as i64 * 15),
            timestamp_ms: 0,
            counter: index as i64,
            flow,
            flow_percentage: percentage,
        }
    }

    #[test]
    fn empty_set_has_no_summary() {
        assert!(summarize(&Vec::new()).is_none());
    }

    #[test]
    fn three_record_scenario() {
        let set = vec![
            record(0, 10.0, 1.0),
            record(1, 20.0, 2.0),
            record(2, 30.0, 3.0),
        ];
        let stats = summarize(&set).unwrap();

        assert_eq!(stats.flow.avg, 20.0);
        assert_eq!(stats.flow.max, 30.0);
        assert_eq!(stats.flow.min, 10.0);
        assert_eq!(stats.percentage.avg, 2.0);
        assert_eq!(stats.percentage.max, 3.0);
        assert_eq!(stats.percentage.min, 1.0);
    }

    #[test]
    fn single_record_collapses_to_its_value() {
        let set = vec![record(0, 212.5, 71.25)];
        let stats = summarize(&set).unwrap();
        assert_eq!(stats.flow.avg, 212.5);
        assert_eq!(stats.flow.max, 212.5);
        assert_eq!(stats.flow.min, 212.5);
    }

    proptest! {
        #[test]
        fn avg_is_bounded_by_min_and_max(
            values in prop::collection::vec((-1.0e6f64..1.0e6, 0.0f64..100.0), 1..100)
        ) {
            let set: Vec<_> = values
                .iter()
                .enumerate()
                .map(|(i, (flow, pct))| record(i, *flow, *pct))
                .collect();
            let stats = summarize(&set).unwrap();

            let tolerance = 1e-6;
            prop_assert!(stats.flow.min <= stats.flow.avg + tolerance);
            prop_assert!(stats.flow.avg <= stats.flow.max + tolerance);
            prop_assert!(stats.percentage.min <= stats.percentage.avg + tolerance);
            prop_assert!(stats.percentage.avg <= stats.percentage.max + tolerance);
        }
    }
}
