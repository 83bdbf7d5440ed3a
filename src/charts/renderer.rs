//! Static Chart Renderer
//! Renders aggregate views of the movie table to PNG files with Plotters.

use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::FontTransform;
use thiserror::Error;

/// Figure sizes in pixels, a 10x5 / 8x5 inch layout at 100 DPI.
const WIDE_FIGURE: (u32, u32) = (1000, 500);
const SQUAT_FIGURE: (u32, u32) = (800, 500);

/// Muted blue, the first color of the default seaborn cycle.
const SERIES_COLOR: RGBColor = RGBColor(31, 119, 180);

const CAPTION_FONT: (&str, u32) = ("sans-serif", 22);
const LABEL_FONT: (&str, u32) = ("sans-serif", 11);
const AXIS_FONT: (&str, u32) = ("sans-serif", 14);

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Chart rendering failed: {0}")]
    Render(String),
    #[error("No data points to plot")]
    NoData,
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Render(err.to_string())
    }
}

/// Title and axis labelling for a single chart.
pub struct ChartLabels<'a> {
    pub title: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
}

/// Renders static PNG charts from pre-computed data.
pub struct ChartRenderer;

impl ChartRenderer {
    /// Bar chart with one bar per category, labels rotated 90 degrees.
    ///
    /// Categories are drawn in the order supplied.
    pub fn bar_chart(
        categories: &[String],
        values: &[f64],
        labels: &ChartLabels,
        path: &str,
    ) -> Result<(), ChartError> {
        if categories.is_empty() || categories.len() != values.len() {
            return Err(ChartError::NoData);
        }

        let y_max = Self::padded_max(values);

        let root = BitMapBackend::new(path, WIDE_FIGURE).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(labels.title, CAPTION_FONT)
            .margin(10)
            .x_label_area_size(150)
            .y_label_area_size(50)
            .build_cartesian_2d(
                (0u32..categories.len() as u32).into_segmented(),
                0f64..y_max,
            )?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(categories.len())
            .x_label_formatter(&|segment| match segment {
                SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => {
                    categories.get(*i as usize).cloned().unwrap_or_default()
                }
                SegmentValue::Last => String::new(),
            })
            .x_label_style(LABEL_FONT.into_font().transform(FontTransform::Rotate90))
            .x_desc(labels.x_label)
            .y_desc(labels.y_label)
            .axis_desc_style(AXIS_FONT)
            .draw()?;

        chart.draw_series(
            Histogram::vertical(&chart)
                .style(SERIES_COLOR.filled())
                .margin(1)
                .data(values.iter().enumerate().map(|(i, &v)| (i as u32, v))),
        )?;

        root.present()?;
        Ok(())
    }

    /// Line chart with point markers and gridlines, x values in supplied order.
    pub fn line_chart(
        xs: &[i32],
        ys: &[f64],
        labels: &ChartLabels,
        path: &str,
    ) -> Result<(), ChartError> {
        if xs.is_empty() || xs.len() != ys.len() {
            return Err(ChartError::NoData);
        }

        let x_min = xs.iter().copied().min().unwrap_or(0);
        let x_max = xs.iter().copied().max().unwrap_or(0);
        let (y_min, y_max) = Self::padded_bounds(ys);

        let root = BitMapBackend::new(path, WIDE_FIGURE).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(labels.title, CAPTION_FONT)
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d((x_min - 1)..(x_max + 1), y_min..y_max)?;

        chart
            .configure_mesh()
            .x_desc(labels.x_label)
            .y_desc(labels.y_label)
            .axis_desc_style(AXIS_FONT)
            .label_style(LABEL_FONT)
            .draw()?;

        chart.draw_series(LineSeries::new(
            xs.iter().zip(ys).map(|(&x, &y)| (x, y)),
            SERIES_COLOR.stroke_width(2),
        ))?;
        chart.draw_series(
            xs.iter()
                .zip(ys)
                .map(|(&x, &y)| Circle::new((x, y), 3, SERIES_COLOR.filled())),
        )?;

        root.present()?;
        Ok(())
    }

    /// Scatter plot with semi-transparent markers, one point per row.
    pub fn scatter_chart(
        xs: &[f64],
        ys: &[f64],
        labels: &ChartLabels,
        path: &str,
    ) -> Result<(), ChartError> {
        if xs.is_empty() || xs.len() != ys.len() {
            return Err(ChartError::NoData);
        }

        let (x_min, x_max) = Self::padded_bounds(xs);
        let (y_min, y_max) = Self::padded_bounds(ys);

        let root = BitMapBackend::new(path, SQUAT_FIGURE).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(labels.title, CAPTION_FONT)
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

        chart
            .configure_mesh()
            .x_desc(labels.x_label)
            .y_desc(labels.y_label)
            .axis_desc_style(AXIS_FONT)
            .label_style(LABEL_FONT)
            .draw()?;

        chart.draw_series(
            xs.iter()
                .zip(ys)
                .map(|(&x, &y)| Circle::new((x, y), 3, SERIES_COLOR.mix(0.7).filled())),
        )?;

        root.present()?;
        Ok(())
    }

    /// Upper bound padded slightly above the largest value.
    fn padded_max(values: &[f64]) -> f64 {
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if max.is_finite() && max > 0.0 {
            max * 1.05
        } else {
            1.0
        }
    }

    fn padded_bounds(values: &[f64]) -> (f64, f64) {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if !min.is_finite() || !max.is_finite() {
            return (0.0, 1.0);
        }
        let pad = ((max - min) * 0.05).max(0.1);
        (min - pad, max + pad)
    }
}
