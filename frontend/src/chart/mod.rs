//! # Progress Chart
//!
//! Line chart of total training volume per session for one exercise.
//!
//! ## Key Components:
//! - `geometry.rs` - Guard ladder and coordinate mapping, series -> drawing commands
//! - `commands.rs` - Backend-independent drawing primitives and palette
//! - `surface.rs` - `ChartSurface` seam, plotters adapter, `render`/`render_placeholder`

pub mod commands;
pub mod geometry;
pub mod surface;

use thiserror::Error;

pub use geometry::{compute_chart_geometry, layout_chart, placeholder_commands, CanvasSize, ChartPlaceholder};
pub use surface::{render, render_placeholder, ChartOutcome, ChartSurface, PlottersSurface};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("chart surface is not available")]
    SurfaceUnavailable,
    #[error("drawing backend error: {0}")]
    Backend(String),
}
