//! Measurement record types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One timestamped reading from the trend relation.
///
/// Immutable once fetched. Serde field names match the relation's column
/// names so JSON output mirrors the raw recordset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// Reading timestamp, second resolution.
    #[serde(rename = "Time_Stamp")]
    pub timestamp: NaiveDateTime,

    /// Sub-second offset of the reading, in milliseconds.
    #[serde(rename = "Time_Stamp_ms")]
    pub timestamp_ms: u32,

    /// Monotonic sequence id assigned by the data source.
    #[serde(rename = "counter")]
    pub counter: i64,

    /// Total flow reading.
    #[serde(rename = "rTotalQ")]
    pub flow: f64,

    /// Flow as a percentage of capacity. Nominal range 0-100, not enforced.
    #[serde(rename = "rTotalQPercentage")]
    pub flow_percentage: f64,
}

/// An ordered sequence of measurement records.
///
/// Order is the source's natural (insertion/query) order, capped at
/// [`crate::schema::FETCH_LIMIT`] rows per report. An empty set
/// short-circuits report generation.
pub type MeasurementSet = Vec<MeasurementRecord>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn serde_field_names_match_columns() {
        let record = MeasurementRecord {
            timestamp: NaiveDate::from_ymd_opt(2025, 4, 17)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
            timestamp_ms: 250,
            counter: 42,
            flow: 212.5,
            flow_percentage: 71.25,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("Time_Stamp").is_some());
        assert!(json.get("Time_Stamp_ms").is_some());
        assert!(json.get("counter").is_some());
        assert!(json.get("rTotalQ").is_some());
        assert!(json.get("rTotalQPercentage").is_some());
    }

    #[test]
    fn roundtrips_through_json() {
        let record = MeasurementRecord {
            timestamp: NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            timestamp_ms: 0,
            counter: 1,
            flow: 10.0,
            flow_percentage: 1.0,
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: MeasurementRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
