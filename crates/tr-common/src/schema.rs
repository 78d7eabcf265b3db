//! Trend relation schema.

/// Name of the relation the fixed query reads from.
pub const TREND_TABLE: &str = "TREND001";

/// Column names of the trend relation, in report table order.
pub const TREND_COLUMNS: [&str; 5] = [
    "Time_Stamp",
    "Time_Stamp_ms",
    "counter",
    "rTotalQ",
    "rTotalQPercentage",
];

/// Maximum rows fetched per report.
pub const FETCH_LIMIT: usize = 100;

/// The fixed, unparameterized fetch query.
///
/// No filtering and no ordering clause: row order is whatever the source
/// returns naturally. The date range accepted by the report endpoint is
/// never applied here.
pub fn trend_query() -> String {
    format!(
        "SELECT {} FROM {} LIMIT {}",
        TREND_COLUMNS.join(", "),
        TREND_TABLE,
        FETCH_LIMIT
    )
}
