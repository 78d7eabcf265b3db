//! Simulated row source with a realistic daily pattern.
//!
//! Generates flow readings shaped like a real plant day: morning ramp-up,
//! midday plateau, evening peak and decline, night-time low, with weekend
//! damping and bounded random jitter on top.

use chrono::{Datelike, Duration, NaiveDateTime, Timelike, Utc, Weekday};
use rand::Rng;
use tr_common::{MeasurementRecord, MeasurementSet, Result, FETCH_LIMIT};

use crate::RowSource;

/// Minutes between generated readings.
const STEP_MINUTES: i64 = 15;

/// Row source producing synthetic trend rows.
///
/// Selected explicitly via configuration. Not a fallback: a real source
/// that fails still yields an empty set.
#[derive(Debug, Clone)]
pub struct SimulatedSource {
    rows: usize,
}

impl SimulatedSource {
    pub fn new() -> Self {
        Self { rows: FETCH_LIMIT }
    }

    /// Limit the number of generated rows (still capped at the fetch limit).
    pub fn with_rows(rows: usize) -> Self {
        Self {
            rows: rows.min(FETCH_LIMIT),
        }
    }
}

impl Default for SimulatedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RowSource for SimulatedSource {
    fn fetch(&self) -> MeasurementSet {
        let mut rng = rand::thread_rng();
        let now = Utc::now().naive_utc();
        let mut set = Vec::with_capacity(self.rows);

        // Oldest first so timestamps ascend like the historical table.
        for i in (0..self.rows).rev() {
            let timestamp = now - Duration::minutes(i as i64 * STEP_MINUTES);
            let factor = load_factor(&timestamp) + rng.gen_range(-0.1..0.1);

            let flow = round2(150.0 + factor * 200.0);
            let percentage = round2(60.0 + factor * 35.0);
            let counter = (40.0 + factor * 60.0).round() as i64;

            set.push(MeasurementRecord {
                timestamp,
                timestamp_ms: rng.gen_range(0..1000),
                counter,
                flow,
                flow_percentage: percentage,
            });
        }
        set
    }

    fn ping(&self) -> Result<()> {
        Ok(())
    }
}

/// Base load factor for a point in time, before jitter.
fn load_factor(timestamp: &NaiveDateTime) -> f64 {
    let hour = timestamp.hour() as f64 + timestamp.minute() as f64 / 60.0;

    let base = if (6.0..10.0).contains(&hour) {
        // Morning ramp up
        0.3 + ((hour - 6.0) / 4.0) * 0.7
    } else if (10.0..16.0).contains(&hour) {
        // Midday plateau
        0.8 + (((hour - 10.0) / 6.0) * std::f64::consts::PI).sin() * 0.2
    } else if (16.0..22.0).contains(&hour) {
        // Evening peak and decline
        1.0 - ((hour - 16.0) / 6.0) * 0.6
    } else {
        // Night time low
        0.2
    };

    let weekend = matches!(timestamp.weekday(), Weekday::Sat | Weekday::Sun);
    base * if weekend { 0.7 } else { 1.0 }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
