//! SQLite-backed row source.

use std::path::PathBuf;

use rusqlite::Connection;
use tracing::{debug, warn};
use tr_common::{schema::trend_query, Error, MeasurementRecord, MeasurementSet, Result};

use crate::RowSource;

/// Row source reading the trend relation from a SQLite database.
///
/// A fresh connection is opened per call, so the source stays `Sync` and
/// holds no connection state between requests.
#[derive(Debug, Clone)]
pub struct SqliteSource {
    path: PathBuf,
}

impl SqliteSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn query_rows(&self) -> rusqlite::Result<MeasurementSet> {
        let conn = Connection::open(&self.path)?;
        let mut stmt = conn.prepare(&trend_query())?;
        let rows = stmt.query_map([], |row| {
            Ok(MeasurementRecord {
                timestamp: row.get(0)?,
                timestamp_ms: row.get(1)?,
                counter: row.get(2)?,
                flow: row.get(3)?,
                flow_percentage: row.get(4)?,
            })
        })?;
        rows.collect()
    }
}

impl RowSource for SqliteSource {
    fn fetch(&self) -> MeasurementSet {
        match self.query_rows() {
            Ok(set) => {
                debug!(rows = set.len(), "fetched trend rows");
                set
            }
            Err(e) => {
                warn!(error = %e, path = %self.path.display(), "trend query failed");
                Vec::new()
            }
        }
    }

    fn ping(&self) -> Result<()> {
        let probe = Connection::open(&self.path)
            .and_then(|conn| conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0)));
        match probe {
            Ok(_) => Ok(()),
            Err(e) => Err(Error::Source(e.to_string())),
        }
    }
}
