//! # Progress Chart Geometry
//!
//! Turns a progress series into the list of drawing commands for the chart,
//! without touching any drawing surface. All coordinate mapping and the
//! placeholder guard ladder live here so they can be tested natively.
//!
//! ## Layout
//! The plot area starts at (80, 60) and is inset 120 units from the canvas
//! width and height. Samples are spaced by their ordinal index over the full
//! series, so samples without a usable volume still occupy an x slot.

use shared::ProgressSample;

use super::commands::{
    DrawCommand, Point, Rect, Rgb, TextAlign, AXIS_COLOR, GRID_COLOR, LABEL_COLOR,
    PLACEHOLDER_BACKGROUND, PLACEHOLDER_TEXT, PLOT_BACKGROUND, SERIES_COLOR,
};
use crate::services::date_utils;

const PLOT_LEFT: f64 = 80.0;
const PLOT_TOP: f64 = 60.0;
const PLOT_INSET: f64 = 120.0;
const GRID_DIVISIONS: usize = 5;

const AXIS_WIDTH: f64 = 2.0;
const GRID_WIDTH: f64 = 1.0;
const SERIES_WIDTH: f64 = 3.0;
const MARKER_RADIUS: f64 = 5.0;

const VALUE_LABEL_OFFSET: f64 = 10.0;
const X_LABEL_OFFSET: f64 = 15.0;
const Y_LABEL_GAP: f64 = 5.0;
const Y_LABEL_BASELINE_SHIFT: f64 = 3.0;

pub const Y_AXIS_TITLE: &str = "Total Volume (kg)";
pub const LEGEND_LABEL: &str = "Total Volume";

/// Logical size of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(800.0, 400.0)
    }
}

/// Why the chart is replaced by a centered message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartPlaceholder {
    /// No exercise is selected yet
    NoSelection,
    EmptySeries,
    /// Fewer than two samples
    InsufficientSeries,
    /// Samples exist but none has a positive volume
    NoValidVolume,
}

impl ChartPlaceholder {
    pub fn message(&self) -> &'static str {
        match self {
            ChartPlaceholder::NoSelection => "Select an exercise to see the progress chart.",
            ChartPlaceholder::EmptySeries => "No progress data for this exercise.",
            ChartPlaceholder::InsufficientSeries => "Need at least 2 logged sessions to show progress.",
            ChartPlaceholder::NoValidVolume => "No valid volume data to display.",
        }
    }
}

/// The rectangle samples are plotted into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn for_canvas(canvas: CanvasSize) -> Self {
        Self {
            origin_x: PLOT_LEFT,
            origin_y: PLOT_TOP,
            width: (canvas.width - PLOT_INSET).max(0.0),
            height: (canvas.height - PLOT_INSET).max(0.0),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.origin_x, self.origin_y, self.width, self.height)
    }

    /// y of the bottom axis
    pub fn baseline(&self) -> f64 {
        self.origin_y + self.height
    }

    /// x of ordinal `index` in a series of `count` samples (`count >= 2`)
    pub fn x_for_index(&self, index: usize, count: usize) -> f64 {
        let slots = count.saturating_sub(1).max(1) as f64;
        self.origin_x + index as f64 * self.width / slots
    }

    /// y of the `step`-th horizontal guide, 0 being the top edge
    fn guide_y(&self, step: usize) -> f64 {
        self.origin_y + step as f64 * self.height / GRID_DIVISIONS as f64
    }
}

/// Linear mapping from volume to y inside the plot area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeScale {
    pub min: f64,
    pub max: f64,
    plot: PlotArea,
}

impl VolumeScale {
    pub fn new(min: f64, max: f64, plot: PlotArea) -> Self {
        Self { min, max, plot }
    }

    /// A flat range (`max == min`) divides by 1, which puts every point on the baseline.
    pub fn y_for(&self, volume: f64) -> f64 {
        let range = self.max - self.min;
        let divisor = if range == 0.0 { 1.0 } else { range };
        self.plot.baseline() - (volume - self.min) * self.plot.height / divisor
    }

    /// Value shown next to the `step`-th guide, `max` at the top down to `min`
    fn tick_value(&self, step: usize) -> f64 {
        let divisions = GRID_DIVISIONS as f64;
        self.min + (self.max - self.min) * (divisions - step as f64) / divisions
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlottedPoint {
    /// Ordinal index in the full series
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub volume: f64,
}

impl PlottedPoint {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub text: String,
    pub at: Point,
}

/// Everything needed to draw one chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub canvas: CanvasSize,
    pub plot: PlotArea,
    pub scale: VolumeScale,
    /// Length of the full series, valid or not
    pub sample_count: usize,
    pub points: Vec<PlottedPoint>,
    pub gridlines: Vec<f64>,
    pub y_ticks: Vec<AxisLabel>,
    pub x_labels: Vec<AxisLabel>,
}

/// Run the placeholder guard ladder and lay out the chart.
pub fn layout_chart(series: &[ProgressSample], canvas: CanvasSize) -> Result<ChartLayout, ChartPlaceholder> {
    if series.is_empty() {
        return Err(ChartPlaceholder::EmptySeries);
    }
    if series.len() < 2 {
        return Err(ChartPlaceholder::InsufficientSeries);
    }

    let (min, max) = volume_bounds(series).ok_or(ChartPlaceholder::NoValidVolume)?;

    let plot = PlotArea::for_canvas(canvas);
    let scale = VolumeScale::new(min, max, plot);
    let count = series.len();

    let points = series
        .iter()
        .enumerate()
        .filter_map(|(index, sample)| {
            sample.valid_volume().map(|volume| PlottedPoint {
                index,
                x: plot.x_for_index(index, count),
                y: scale.y_for(volume),
                volume,
            })
        })
        .collect();

    let gridlines = (1..=GRID_DIVISIONS).map(|step| plot.guide_y(step)).collect();

    let y_ticks = (0..=GRID_DIVISIONS)
        .map(|step| AxisLabel {
            text: format_rounded(scale.tick_value(step)),
            at: Point::new(plot.origin_x - Y_LABEL_GAP, plot.guide_y(step) + Y_LABEL_BASELINE_SHIFT),
        })
        .collect();

    let x_labels = series
        .iter()
        .enumerate()
        .map(|(index, sample)| AxisLabel {
            text: date_utils::format_month_day(&sample.date),
            at: Point::new(plot.x_for_index(index, count), plot.baseline() + X_LABEL_OFFSET),
        })
        .collect();

    Ok(ChartLayout {
        canvas,
        plot,
        scale,
        sample_count: count,
        points,
        gridlines,
        y_ticks,
        x_labels,
    })
}

/// Min and max over valid samples only
fn volume_bounds(series: &[ProgressSample]) -> Option<(f64, f64)> {
    series
        .iter()
        .filter_map(ProgressSample::valid_volume)
        .fold(None, |bounds, v| match bounds {
            None => Some((v, v)),
            Some((min, max)) => Some((f64::min(min, v), f64::max(max, v))),
        })
}

fn format_rounded(value: f64) -> String {
    format!("{}", value.round() as i64)
}

impl ChartLayout {
    /// Drawing commands in paint order. The first command always clears the surface.
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        let plot = self.plot;
        let mut commands = vec![
            DrawCommand::Clear {
                width: self.canvas.width,
                height: self.canvas.height,
            },
            DrawCommand::FillRect {
                rect: plot.rect(),
                color: PLOT_BACKGROUND,
            },
            DrawCommand::StrokePath {
                points: vec![
                    Point::new(plot.origin_x, plot.origin_y),
                    Point::new(plot.origin_x, plot.baseline()),
                    Point::new(plot.origin_x + plot.width, plot.baseline()),
                ],
                color: AXIS_COLOR,
                width: AXIS_WIDTH,
            },
        ];

        for &y in &self.gridlines {
            commands.push(DrawCommand::StrokePath {
                points: vec![Point::new(plot.origin_x, y), Point::new(plot.origin_x + plot.width, y)],
                color: GRID_COLOR,
                width: GRID_WIDTH,
            });
        }

        // Consecutive valid points are joined directly, skipping invalid slots
        if self.points.len() > 1 {
            commands.push(DrawCommand::StrokePath {
                points: self.points.iter().map(PlottedPoint::position).collect(),
                color: SERIES_COLOR,
                width: SERIES_WIDTH,
            });
        }

        for point in &self.points {
            commands.push(DrawCommand::FillCircle {
                center: point.position(),
                radius: MARKER_RADIUS,
                color: SERIES_COLOR,
            });
        }

        for point in &self.points {
            commands.push(text(
                format_rounded(point.volume),
                Point::new(point.x, point.y - VALUE_LABEL_OFFSET),
                10,
                LABEL_COLOR,
                TextAlign::Center,
            ));
        }

        commands.push(text(Y_AXIS_TITLE, Point::new(10.0, 30.0), 14, LABEL_COLOR, TextAlign::Left));
        for tick in &self.y_ticks {
            commands.push(text(tick.text.clone(), tick.at, 10, LABEL_COLOR, TextAlign::Right));
        }
        for label in &self.x_labels {
            commands.push(text(label.text.clone(), label.at, 10, LABEL_COLOR, TextAlign::Center));
        }

        let legend_x = plot.origin_x + plot.width - 100.0;
        commands.push(DrawCommand::FillRect {
            rect: Rect::new(legend_x, plot.origin_y - 40.0, 15.0, 3.0),
            color: SERIES_COLOR,
        });
        commands.push(text(
            LEGEND_LABEL,
            Point::new(legend_x + 20.0, plot.origin_y - 35.0),
            12,
            LABEL_COLOR,
            TextAlign::Left,
        ));

        commands
    }
}

fn text(content: impl Into<String>, at: Point, font_px: u32, color: Rgb, align: TextAlign) -> DrawCommand {
    DrawCommand::FillText {
        text: content.into(),
        at,
        font_px,
        color,
        align,
    }
}

/// Clear the canvas, fill it with a neutral background and center `message`.
pub fn placeholder_commands(canvas: CanvasSize, message: &str) -> Vec<DrawCommand> {
    vec![
        DrawCommand::Clear {
            width: canvas.width,
            height: canvas.height,
        },
        DrawCommand::FillRect {
            rect: Rect::new(0.0, 0.0, canvas.width, canvas.height),
            color: PLACEHOLDER_BACKGROUND,
        },
        text(
            message,
            Point::new(canvas.width / 2.0, canvas.height / 2.0),
            16,
            PLACEHOLDER_TEXT,
            TextAlign::Center,
        ),
    ]
}

/// Series in, drawing commands out: either the full chart or the placeholder
/// picked by the guard ladder.
pub fn compute_chart_geometry(series: &[ProgressSample], canvas: CanvasSize) -> Vec<DrawCommand> {
    match layout_chart(series, canvas) {
        Ok(layout) => layout.draw_commands(),
        Err(placeholder) => placeholder_commands(canvas, placeholder.message()),
    }
}
