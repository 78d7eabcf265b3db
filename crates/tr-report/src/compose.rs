//! The Page Composer.
//!
//! Builds the report document incrementally: chrome, summary, charts,
//! table, page by page in a fixed order, then seals it into bytes exactly
//! once. Page order and content are not data-dependent; a chart is never
//! skipped and pages are never reordered.

use std::io::Cursor;

use chrono::Local;
use printpdf::image_crate::codecs::png::PngDecoder;
use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, PdfDocument, PdfLayerReference, Rect,
};
use thiserror::Error;
use tracing::info;
use tr_chart::{ChartImage, RASTER_HEIGHT, RASTER_WIDTH};
use tr_common::MeasurementSet;
use tr_stats::SummaryStats;

use crate::layout::{
    pt, BAND_HEIGHT_PT, BAR_CHART_Y_PT, LINE_CHART_Y_PT, MARGIN_X_PT, PAGE_HEIGHT_PT,
    PAGE_WIDTH_PT, SCATTER_CHART_Y_PT, SUMMARY_LINE_STEP_PT, SUMMARY_TOP_OFFSET_PT,
};
use crate::table;
use crate::theme::ReportTheme;

/// DPI at which chart rasters are embedded.
const IMAGE_DPI: f32 = 300.0;

/// Errors from document composition. These abort the whole request.
#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("PDF error: {0}")]
    Pdf(#[from] printpdf::Error),

    #[error("chart embedding failed: {0}")]
    Image(String),
}

/// The final artifact: document bytes plus the sealed page count.
#[derive(Debug, Clone)]
pub struct ReportDocument {
    pub bytes: Vec<u8>,
    pub pages: usize,
}

pub(crate) struct Fonts {
    pub regular: IndirectFontRef,
    pub bold: IndirectFontRef,
}

/// Composes report documents in one fixed layout, parameterized only by
/// theme.
pub struct Composer {
    theme: ReportTheme,
}

impl Composer {
    pub fn new(theme: ReportTheme) -> Self {
        Self { theme }
    }

    /// Compose the full three-page report.
    ///
    /// Page 1: chrome, summary block, line and scatter charts. Page 2:
    /// chrome, bar chart. Page 3: chrome, styled record table. The table
    /// may overflow the page for large sets; the overflow is silent.
    pub fn compose(
        &self,
        set: &MeasurementSet,
        stats: &SummaryStats,
        charts: &[ChartImage; 3],
    ) -> Result<ReportDocument, ComposeError> {
        let (doc, page_idx, layer_idx) = PdfDocument::new(
            "Trend Data Report",
            pt(PAGE_WIDTH_PT),
            pt(PAGE_HEIGHT_PT),
            "page 1",
        );
        let fonts = Fonts {
            regular: doc.add_builtin_font(BuiltinFont::Helvetica)?,
            bold: doc.add_builtin_font(BuiltinFont::HelveticaBold)?,
        };
        let generated_on = generation_stamp();
        let mut pages = 0usize;

        let layer = doc.get_page(page_idx).get_layer(layer_idx);
        pages += 1;
        self.draw_chrome(&layer, &fonts, pages, &generated_on);
        self.draw_summary(&layer, &fonts, stats);
        embed_chart(&layer, &charts[0], MARGIN_X_PT, LINE_CHART_Y_PT)?;
        embed_chart(&layer, &charts[1], MARGIN_X_PT, SCATTER_CHART_Y_PT)?;

        let (page_idx, layer_idx) = doc.add_page(pt(PAGE_WIDTH_PT), pt(PAGE_HEIGHT_PT), "page 2");
        let layer = doc.get_page(page_idx).get_layer(layer_idx);
        pages += 1;
        self.draw_chrome(&layer, &fonts, pages, &generated_on);
        embed_chart(&layer, &charts[2], MARGIN_X_PT, BAR_CHART_Y_PT)?;

        let (page_idx, layer_idx) = doc.add_page(pt(PAGE_WIDTH_PT), pt(PAGE_HEIGHT_PT), "page 3");
        let layer = doc.get_page(page_idx).get_layer(layer_idx);
        pages += 1;
        self.draw_chrome(&layer, &fonts, pages, &generated_on);
        table::draw_table(&layer, &fonts, &self.theme, set);

        let bytes = doc.save_to_bytes()?;
        info!(pages, bytes = bytes.len(), "report composed");
        Ok(ReportDocument { bytes, pages })
    }

    /// Compose the single-page stub returned by the report endpoint.
    ///
    /// Echoes the submitted date range and one line per requested chart
    /// label. Labels are opaque: unknown kinds are echoed, never rendered.
    pub fn compose_request_stub(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
        chart_types: &[String],
    ) -> Result<ReportDocument, ComposeError> {
        let (doc, page_idx, layer_idx) = PdfDocument::new(
            "Trend Report Request",
            pt(PAGE_WIDTH_PT),
            pt(PAGE_HEIGHT_PT),
            "page 1",
        );
        let fonts = Fonts {
            regular: doc.add_builtin_font(BuiltinFont::Helvetica)?,
            bold: doc.add_builtin_font(BuiltinFont::HelveticaBold)?,
        };

        let layer = doc.get_page(page_idx).get_layer(layer_idx);
        self.draw_chrome(&layer, &fonts, 1, &generation_stamp());

        layer.set_fill_color(ReportTheme::black());
        layer.use_text(
            "Report Request",
            14.0,
            pt(MARGIN_X_PT),
            pt(PAGE_HEIGHT_PT - SUMMARY_TOP_OFFSET_PT),
            &fonts.bold,
        );

        let mut lines = vec![
            format!("Start date: {}", start_date.unwrap_or("(not provided)")),
            format!("End date: {}", end_date.unwrap_or("(not provided)")),
            "Requested charts:".to_string(),
        ];
        lines.extend(chart_types.iter().map(|kind| format!("- {kind}")));

        for (i, line) in lines.iter().enumerate() {
            let y = PAGE_HEIGHT_PT
                - SUMMARY_TOP_OFFSET_PT
                - (i as f32 + 2.0) * SUMMARY_LINE_STEP_PT;
            layer.use_text(line.as_str(), 12.0, pt(MARGIN_X_PT), pt(y), &fonts.regular);
        }

        let bytes = doc.save_to_bytes()?;
        Ok(ReportDocument { bytes, pages: 1 })
    }

    /// Banner header and footer, stamped on every page.
    fn draw_chrome(
        &self,
        layer: &PdfLayerReference,
        fonts: &Fonts,
        page_no: usize,
        generated_on: &str,
    ) {
        let banner = ReportTheme::color(self.theme.banner);
        let banner_text = ReportTheme::color(self.theme.banner_text);

        layer.set_fill_color(banner.clone());
        layer.add_rect(
            Rect::new(
                pt(0.0),
                pt(PAGE_HEIGHT_PT - BAND_HEIGHT_PT),
                pt(PAGE_WIDTH_PT),
                pt(PAGE_HEIGHT_PT),
            )
            .with_mode(PaintMode::Fill),
        );
        layer.set_fill_color(banner_text.clone());
        layer.use_text(
            "Trend Data Report",
            16.0,
            pt(30.0),
            pt(PAGE_HEIGHT_PT - 35.0),
            &fonts.bold,
        );

        layer.set_fill_color(banner);
        layer.add_rect(
            Rect::new(pt(0.0), pt(0.0), pt(PAGE_WIDTH_PT), pt(BAND_HEIGHT_PT))
                .with_mode(PaintMode::Fill),
        );
        layer.set_fill_color(banner_text);
        layer.use_text(generated_on, 10.0, pt(30.0), pt(20.0), &fonts.regular);

        let page_label = format!("Page {page_no}");
        let x = PAGE_WIDTH_PT - 30.0 - text_width_pt(&page_label, 10.0);
        layer.use_text(page_label, 10.0, pt(x), pt(20.0), &fonts.regular);
    }

    /// Six summary lines: avg/max/min for flow and percentage. Two decimal
    /// places applied here, at presentation time.
    fn draw_summary(&self, layer: &PdfLayerReference, fonts: &Fonts, stats: &SummaryStats) {
        let lines = [
            format!("Average Flow: {:.2}", stats.flow.avg),
            format!("Max Flow: {:.2}", stats.flow.max),
            format!("Min Flow: {:.2}", stats.flow.min),
            format!("Average Percentage: {:.2}", stats.percentage.avg),
            format!("Max Percentage: {:.2}", stats.percentage.max),
            format!("Min Percentage: {:.2}", stats.percentage.min),
        ];

        layer.set_fill_color(ReportTheme::black());
        for (i, line) in lines.iter().enumerate() {
            let y = PAGE_HEIGHT_PT - SUMMARY_TOP_OFFSET_PT - i as f32 * SUMMARY_LINE_STEP_PT;
            layer.use_text(line.as_str(), 12.0, pt(MARGIN_X_PT), pt(y), &fonts.regular);
        }
    }
}

fn generation_stamp() -> String {
    Local::now().format("Generated on %B %-d, %Y").to_string()
}

/// Rough width of Helvetica text, for right-aligning and centering.
pub(crate) fn text_width_pt(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * 0.5
}

/// Embed a chart raster with its bottom-left corner at the given point,
/// scaled from raster pixels to the chart's logical page footprint.
fn embed_chart(
    layer: &PdfLayerReference,
    chart: &ChartImage,
    x_pt: f32,
    y_pt: f32,
) -> Result<(), ComposeError> {
    let decoder = PngDecoder::new(Cursor::new(chart.png.as_slice()))
        .map_err(|e| ComposeError::Image(e.to_string()))?;
    let image = Image::try_from(decoder).map_err(|e| ComposeError::Image(e.to_string()))?;

    let native_width_mm = RASTER_WIDTH as f32 * 25.4 / IMAGE_DPI;
    let native_height_mm = RASTER_HEIGHT as f32 * 25.4 / IMAGE_DPI;
    let target_width_mm = chart.page_width * 25.4 / 72.0;
    let target_height_mm = chart.page_height * 25.4 / 72.0;

    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(pt(x_pt)),
            translate_y: Some(pt(y_pt)),
            scale_x: Some(target_width_mm / native_width_mm),
            scale_y: Some(target_height_mm / native_height_mm),
            dpi: Some(IMAGE_DPI),
            ..Default::default()
        },
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_width_scales_with_length() {
        assert!(text_width_pt("Page 10", 10.0) > text_width_pt("Page 1", 10.0));
        assert_eq!(text_width_pt("", 10.0), 0.0);
    }
}
