//! Chart rendering for trend reports.
//!
//! Turns a measurement set into three rasterized chart images for print
//! embedding: a flow time series, a flow/percentage scatter, and a counter
//! bar chart. Each render call owns its bitmap buffer and releases it on
//! return, so there is no shared figure state between calls.

pub mod render;

use thiserror::Error;

pub use render::{render_all, render_bar, render_line, render_scatter, RASTER_HEIGHT, RASTER_WIDTH};

/// Errors from chart rendering. These abort the whole report request.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("chart drawing failed: {0}")]
    Draw(String),

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// The chart kinds a report embeds, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Scatter,
    Bar,
}

impl ChartKind {
    /// Stable lowercase label, as used in chart-type requests.
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Scatter => "scatter",
            ChartKind::Bar => "bar",
        }
    }

    /// Chart title as printed above the plot.
    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::Line => "Flow Over Time",
            ChartKind::Scatter => "Flow vs Pressure",
            ChartKind::Bar => "Counter Distribution",
        }
    }
}

/// A rendered chart: PNG bytes tagged with kind and logical page size.
///
/// Produced once, embedded once, discarded after embedding.
#[derive(Debug, Clone)]
pub struct ChartImage {
    pub kind: ChartKind,
    pub png: Vec<u8>,
    /// Target width on the page, in page units.
    pub page_width: f32,
    /// Target height on the page, in page units.
    pub page_height: f32,
}
