//! Fixed page geometry.
//!
//! All positions are in points on a portrait letter page, origin at the
//! bottom-left, and are not configurable.

use printpdf::Mm;

/// Page width in points (letter, portrait).
pub const PAGE_WIDTH_PT: f32 = 612.0;

/// Page height in points.
pub const PAGE_HEIGHT_PT: f32 = 792.0;

/// Height of the header and footer bands.
pub const BAND_HEIGHT_PT: f32 = 50.0;

/// Left edge for body content.
pub const MARGIN_X_PT: f32 = 50.0;

/// Baseline of the first summary line, measured from the page top.
pub const SUMMARY_TOP_OFFSET_PT: f32 = 100.0;

/// Vertical step between summary lines.
pub const SUMMARY_LINE_STEP_PT: f32 = 20.0;

/// Bottom edge of the line chart on page 1.
pub const LINE_CHART_Y_PT: f32 = PAGE_HEIGHT_PT - 400.0;

/// Bottom edge of the scatter chart on page 1.
pub const SCATTER_CHART_Y_PT: f32 = PAGE_HEIGHT_PT - 600.0;

/// Bottom edge of the bar chart on page 2.
pub const BAR_CHART_Y_PT: f32 = PAGE_HEIGHT_PT - 380.0;

/// Top edge of the record table on page 3.
pub const TABLE_TOP_PT: f32 = PAGE_HEIGHT_PT - 100.0;

/// Fixed table column width. Five columns fit the page with room to spare.
pub const TABLE_COL_WIDTH_PT: f32 = 100.0;

/// Table header row height.
pub const TABLE_HEADER_ROW_PT: f32 = 24.0;

/// Table body row height. A full 100-row set overflows the page; the
/// overflow is silent, not detected.
pub const TABLE_BODY_ROW_PT: f32 = 16.0;

/// Convert points to the millimetre unit the PDF layer API expects.
pub fn pt(value: f32) -> Mm {
    Mm(value * 25.4 / 72.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_page_in_millimetres() {
        let width = pt(PAGE_WIDTH_PT);
        let height = pt(PAGE_HEIGHT_PT);
        assert!((width.0 - 215.9).abs() < 0.01);
        assert!((height.0 - 279.4).abs() < 0.01);
    }

    #[test]
    fn table_fits_page_width() {
        assert!(MARGIN_X_PT + 5.0 * TABLE_COL_WIDTH_PT <= PAGE_WIDTH_PT);
    }
}
