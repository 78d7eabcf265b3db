//! Styled record table for the report's final page.

use printpdf::path::PaintMode;
use printpdf::{PdfLayerReference, Rect};
use tr_common::{MeasurementSet, TREND_COLUMNS};

use crate::compose::{text_width_pt, Fonts};
use crate::layout::{
    pt, MARGIN_X_PT, TABLE_BODY_ROW_PT, TABLE_COL_WIDTH_PT, TABLE_HEADER_ROW_PT, TABLE_TOP_PT,
};
use crate::theme::ReportTheme;

const HEADER_FONT_PT: f32 = 9.0;
const BODY_FONT_PT: f32 = 8.0;

/// Draw the full record set as a grid: themed header row, shaded body
/// rows, a border on every cell, one column per schema field.
///
/// Rows are laid out top-down from a fixed origin with no pagination; a
/// large set runs past the page boundary and is clipped by the viewer,
/// not by us.
pub(crate) fn draw_table(
    layer: &PdfLayerReference,
    fonts: &Fonts,
    theme: &ReportTheme,
    set: &MeasurementSet,
) {
    layer.set_outline_color(ReportTheme::black());
    layer.set_outline_thickness(1.0);

    let header: Vec<String> = TREND_COLUMNS.iter().map(|c| c.to_string()).collect();
    let mut y_top = TABLE_TOP_PT;
    draw_row(layer, fonts, theme, y_top, TABLE_HEADER_ROW_PT, &header, true);
    y_top -= TABLE_HEADER_ROW_PT;

    for record in set {
        let cells = vec![
            record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            record.timestamp_ms.to_string(),
            record.counter.to_string(),
            format!("{:.2}", record.flow),
            format!("{:.2}", record.flow_percentage),
        ];
        draw_row(layer, fonts, theme, y_top, TABLE_BODY_ROW_PT, &cells, false);
        y_top -= TABLE_BODY_ROW_PT;
    }
}

fn draw_row(
    layer: &PdfLayerReference,
    fonts: &Fonts,
    theme: &ReportTheme,
    y_top: f32,
    row_height: f32,
    cells: &[String],
    is_header: bool,
) {
    let (background, text_color, font, font_size) = if is_header {
        (
            theme.table_header_bg,
            theme.table_header_text,
            &fonts.bold,
            HEADER_FONT_PT,
        )
    } else {
        (theme.row_shade, (0.0, 0.0, 0.0), &fonts.regular, BODY_FONT_PT)
    };

    for (col, cell) in cells.iter().enumerate() {
        let x = MARGIN_X_PT + col as f32 * TABLE_COL_WIDTH_PT;
        let bounds = Rect::new(
            pt(x),
            pt(y_top - row_height),
            pt(x + TABLE_COL_WIDTH_PT),
            pt(y_top),
        );

        layer.set_fill_color(ReportTheme::color(background));
        layer.add_rect(bounds.clone().with_mode(PaintMode::Fill));
        layer.add_rect(bounds.with_mode(PaintMode::Stroke));

        let text_x = x + (TABLE_COL_WIDTH_PT - text_width_pt(cell, font_size)) / 2.0;
        let text_y = y_top - row_height + 5.0;
        layer.set_fill_color(ReportTheme::color(text_color));
        layer.use_text(cell.as_str(), font_size, pt(text_x), pt(text_y), font);
    }
}
