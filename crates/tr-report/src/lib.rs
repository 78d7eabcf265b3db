//! PDF report composition for trend data.
//!
//! This crate provides:
//! - The Page Composer: banner chrome, summary block, chart embedding,
//!   and the styled record table, across three fixed pages
//! - The single-page request-stub document for the report endpoint
//! - The chart-options HTML page
//! - The generation pipeline wiring fetch → summarize → render → compose
//!
//! The composed document is returned as in-memory bytes; callers decide
//! where (and whether) to write it.

pub mod compose;
pub mod html;
pub mod layout;
pub mod pipeline;
mod table;
pub mod theme;

pub use compose::{ComposeError, Composer, ReportDocument};
pub use html::chart_options_page;
pub use pipeline::generate;
pub use theme::ReportTheme;
