//! The report generation pipeline.
//!
//! Fetch → summarize → render charts → compose, sequential and blocking.
//! All-or-nothing: an empty fetch produces no artifact, and any rendering
//! or composition failure aborts the whole request. There is no partial
//! report.

use tracing::info;
use tr_chart::render_all;
use tr_common::{Error, Result};
use tr_source::RowSource;
use tr_stats::summarize;

use crate::compose::{Composer, ReportDocument};
use crate::theme::ReportTheme;

/// Generate a full report from the given source.
///
/// Returns `Ok(None)` when the source yields no rows — including when the
/// underlying fetch failed, since that surfaces as an empty set at the
/// source boundary.
pub fn generate(source: &dyn RowSource, theme: &ReportTheme) -> Result<Option<ReportDocument>> {
    let set = source.fetch();
    let Some(stats) = summarize(&set) else {
        info!("no trend rows available; skipping report generation");
        return Ok(None);
    };

    let charts = render_all(&set).map_err(|e| Error::Chart(e.to_string()))?;
    let document = Composer::new(theme.clone())
        .compose(&set, &stats, &charts)
        .map_err(|e| Error::Compose(e.to_string()))?;

    Ok(Some(document))
}
