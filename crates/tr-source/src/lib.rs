//! Row sources supplying trend measurement records.
//!
//! This crate provides:
//! - The [`RowSource`] boundary trait
//! - [`SqliteSource`]: the fixed top-100 query against the trend relation
//! - [`SimulatedSource`]: synthetic rows with a realistic daily pattern
//!
//! Connection and query failures never cross the fetch boundary. They are
//! logged and surfaced as an empty set, which callers treat as "no report".

pub mod simulate;
pub mod sqlite;

use tr_common::{MeasurementSet, Result};

pub use simulate::SimulatedSource;
pub use sqlite::SqliteSource;

/// The Row Source boundary.
///
/// A narrow interface: an ordered sequence of records, at most
/// [`tr_common::FETCH_LIMIT`] of them, in the source's natural order.
pub trait RowSource: Send + Sync {
    /// Fetch the measurement set.
    ///
    /// Infallible by contract: a failed connection or query yields an
    /// empty set, never an error.
    fn fetch(&self) -> MeasurementSet;

    /// Connectivity probe for the health endpoint.
    fn ping(&self) -> Result<()>;
}
