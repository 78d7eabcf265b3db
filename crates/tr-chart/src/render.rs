//! Raster chart rendering with per-call owned buffers.

use std::io::Cursor;

use chrono::{Duration, NaiveDateTime};
use image::{ImageFormat, RgbImage};
use plotters::prelude::*;
use tracing::debug;
use tr_common::MeasurementSet;

use crate::{ChartError, ChartImage, ChartKind};

/// Raster width in pixels. High enough that axis text stays legible when
/// the image is scaled down to its page footprint.
pub const RASTER_WIDTH: u32 = 1000;

/// Raster height in pixels.
pub const RASTER_HEIGHT: u32 = 500;

const ORANGE: RGBColor = RGBColor(255, 165, 0);

/// Render all three report charts, in page order.
pub fn render_all(set: &MeasurementSet) -> Result<[ChartImage; 3], ChartError> {
    let charts = [render_line(set)?, render_scatter(set)?, render_bar(set)?];
    debug!(rows = set.len(), "rendered report charts");
    Ok(charts)
}

/// Line chart: flow over time.
pub fn render_line(set: &MeasurementSet) -> Result<ChartImage, ChartError> {
    require_rows(set)?;
    let (t_min, t_max) = padded_time_range(set);
    let (y_min, y_max) = padded_range(set.iter().map(|r| r.flow));

    let mut buf = raster_buffer();
    {
        let root =
            BitMapBackend::with_buffer(&mut buf, (RASTER_WIDTH, RASTER_HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(ChartKind::Line.title(), ("sans-serif", 30))
            .margin(12)
            .x_label_area_size(46)
            .y_label_area_size(60)
            .build_cartesian_2d(
                RangedDateTime::<NaiveDateTime>::from(t_min..t_max),
                y_min..y_max,
            )
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .x_desc("Timestamp")
            .y_desc("Flow")
            .draw()
            .map_err(draw_err)?;

        chart
            .draw_series(LineSeries::new(
                set.iter().map(|r| (r.timestamp, r.flow)),
                &BLUE,
            ))
            .map_err(draw_err)?
            .label("Flow")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], &BLUE));

        chart
            .configure_series_labels()
            .border_style(&BLACK)
            .background_style(&WHITE.mix(0.8))
            .draw()
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
    }

    Ok(ChartImage {
        kind: ChartKind::Line,
        png: encode_png(buf)?,
        page_width: 500.0,
        page_height: 150.0,
    })
}

/// Scatter chart: flow against the percentage column.
///
/// The y axis carries the percentage column; the axis label "Pressure" is
/// the historical wording and is kept as-is.
pub fn render_scatter(set: &MeasurementSet) -> Result<ChartImage, ChartError> {
    require_rows(set)?;
    let (x_min, x_max) = padded_range(set.iter().map(|r| r.flow));
    let (y_min, y_max) = padded_range(set.iter().map(|r| r.flow_percentage));

    let mut buf = raster_buffer();
    {
        let root =
            BitMapBackend::with_buffer(&mut buf, (RASTER_WIDTH, RASTER_HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(ChartKind::Scatter.title(), ("sans-serif", 30))
            .margin(12)
            .x_label_area_size(46)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .x_desc("Flow")
            .y_desc("Pressure")
            .draw()
            .map_err(draw_err)?;

        chart
            .draw_series(
                set.iter()
                    .map(|r| Circle::new((r.flow, r.flow_percentage), 3, GREEN.filled())),
            )
            .map_err(draw_err)?
            .label("Flow vs Pressure")
            .legend(|(x, y)| Circle::new((x + 9, y), 3, GREEN.filled()));

        chart
            .configure_series_labels()
            .border_style(&BLACK)
            .background_style(&WHITE.mix(0.8))
            .draw()
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
    }

    Ok(ChartImage {
        kind: ChartKind::Scatter,
        png: encode_png(buf)?,
        page_width: 500.0,
        page_height: 150.0,
    })
}

/// Bar chart: counter value per record index.
pub fn render_bar(set: &MeasurementSet) -> Result<ChartImage, ChartError> {
    require_rows(set)?;
    let max_counter = set.iter().map(|r| r.counter).max().unwrap_or(0) as f64;
    let y_max = if max_counter > 0.0 {
        max_counter * 1.05
    } else {
        1.0
    };

    let mut buf = raster_buffer();
    {
        let root =
            BitMapBackend::with_buffer(&mut buf, (RASTER_WIDTH, RASTER_HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(ChartKind::Bar.title(), ("sans-serif", 30))
            .margin(12)
            .x_label_area_size(46)
            .y_label_area_size(60)
            .build_cartesian_2d(0..set.len() as i32, 0.0..y_max)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .x_desc("Index")
            .y_desc("Counter")
            .draw()
            .map_err(draw_err)?;

        chart
            .draw_series(set.iter().enumerate().map(|(i, r)| {
                Rectangle::new(
                    [(i as i32, 0.0), (i as i32 + 1, r.counter as f64)],
                    ORANGE.filled(),
                )
            }))
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
    }

    Ok(ChartImage {
        kind: ChartKind::Bar,
        png: encode_png(buf)?,
        page_width: 500.0,
        page_height: 300.0,
    })
}

fn require_rows(set: &MeasurementSet) -> Result<(), ChartError> {
    if set.is_empty() {
        return Err(ChartError::Draw("empty measurement set".to_string()));
    }
    Ok(())
}

fn raster_buffer() -> Vec<u8> {
    vec![0u8; (RASTER_WIDTH * RASTER_HEIGHT * 3) as usize]
}

fn encode_png(buf: Vec<u8>) -> Result<Vec<u8>, ChartError> {
    let img = RgbImage::from_raw(RASTER_WIDTH, RASTER_HEIGHT, buf)
        .ok_or_else(|| ChartError::Draw("raster buffer size mismatch".to_string()))?;
    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(png)
}

fn draw_err<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Draw(e.to_string())
}

fn padded_time_range(set: &MeasurementSet) -> (NaiveDateTime, NaiveDateTime) {
    let mut min = set[0].timestamp;
    let mut max = set[0].timestamp;
    for record in set {
        min = min.min(record.timestamp);
        max = max.max(record.timestamp);
    }
    if min == max {
        // Degenerate single-instant range; widen so the axis has extent.
        (min - Duration::minutes(15), max + Duration::minutes(15))
    } else {
        (min, max)
    }
}

fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values {
        min = min.min(value);
        max = max.max(value);
    }
    let pad = if max > min { (max - min) * 0.05 } else { 1.0 };
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tr_common::MeasurementRecord;

    const PNG_SIGNATURE: [u8; 4] = [0x89, b'P', b'N', b'G'];

    fn sample_set(rows: usize) -> MeasurementSet {
        (0..rows)
            .map(|i| MeasurementRecord {
                timestamp: NaiveDate::from_ymd_opt(2025, 4, 17)
                    .unwrap()
                    .and_hms_opt(8, 0, 0)
                    .unwrap()
                    + Duration::minutes(i as i64 * 15),
                timestamp_ms: (i as u32 * 10) % 1000,
                counter: 40 + (i as i64 % 60),
                flow: 200.0 + (i as f64 * 3.5) % 100.0,
                flow_percentage: 60.0 + (i as f64 * 1.5) % 35.0,
            })
            .collect()
    }

    #[test]
    fn all_three_kinds_render_png() {
        let charts = render_all(&sample_set(20)).unwrap();
        assert_eq!(charts[0].kind, ChartKind::Line);
        assert_eq!(charts[1].kind, ChartKind::Scatter);
        assert_eq!(charts[2].kind, ChartKind::Bar);
        for chart in &charts {
            assert_eq!(&chart.png[..4], &PNG_SIGNATURE);
            assert!(chart.png.len() > 1000, "suspiciously small PNG");
        }
    }

    #[test]
    fn single_record_renders() {
        // Degenerate ranges (one timestamp, one value) must still produce
        // a valid image.
        for chart in render_all(&sample_set(1)).unwrap() {
            assert_eq!(&chart.png[..4], &PNG_SIGNATURE);
        }
    }

    #[test]
    fn empty_set_is_rejected() {
        assert!(render_line(&Vec::new()).is_err());
        assert!(render_scatter(&Vec::new()).is_err());
        assert!(render_bar(&Vec::new()).is_err());
    }

    #[test]
    fn page_footprints_match_layout() {
        let charts = render_all(&sample_set(5)).unwrap();
        assert_eq!(
            (charts[0].page_width, charts[0].page_height),
            (500.0, 150.0)
        );
        assert_eq!(
            (charts[1].page_width, charts[1].page_height),
            (500.0, 150.0)
        );
        assert_eq!(
            (charts[2].page_width, charts[2].page_height),
            (500.0, 300.0)
        );
    }
}
