//! Replays drawing commands onto a concrete surface.
//!
//! In the browser the surface is a plotters `CanvasBackend` wrapped in
//! [`PlottersSurface`]; tests use the SVG backend or a recording surface.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use shared::ProgressSample;

use super::commands::{DrawCommand, Point, Rect, Rgb, TextAlign, CANVAS_BACKGROUND};
use super::geometry::{layout_chart, placeholder_commands, CanvasSize, ChartPlaceholder};
use super::ChartError;

/// Something the chart can be painted on
pub trait ChartSurface {
    fn clear(&mut self, width: f64, height: f64) -> Result<(), ChartError>;
    fn fill_rect(&mut self, rect: Rect, color: Rgb) -> Result<(), ChartError>;
    fn stroke_path(&mut self, points: &[Point], color: Rgb, width: f64) -> Result<(), ChartError>;
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb) -> Result<(), ChartError>;
    fn fill_text(&mut self, text: &str, at: Point, font_px: u32, color: Rgb, align: TextAlign) -> Result<(), ChartError>;

    /// Flush pending drawing; a no-op for immediate-mode surfaces
    fn present(&mut self) -> Result<(), ChartError> {
        Ok(())
    }
}

/// What a render call ended up drawing
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutcome {
    Drawn { points: usize },
    Placeholder(ChartPlaceholder),
}

/// Paint `commands` in order and present the result.
pub fn paint<S: ChartSurface + ?Sized>(surface: &mut S, commands: &[DrawCommand]) -> Result<(), ChartError> {
    for command in commands {
        match command {
            DrawCommand::Clear { width, height } => surface.clear(*width, *height)?,
            DrawCommand::FillRect { rect, color } => surface.fill_rect(*rect, *color)?,
            DrawCommand::StrokePath { points, color, width } => surface.stroke_path(points, *color, *width)?,
            DrawCommand::FillCircle { center, radius, color } => surface.fill_circle(*center, *radius, *color)?,
            DrawCommand::FillText {
                text,
                at,
                font_px,
                color,
                align,
            } => surface.fill_text(text, *at, *font_px, *color, *align)?,
        }
    }
    surface.present()
}

/// Draw the progress chart for `series`, or the placeholder its shape calls for.
///
/// A missing surface is reported as [`ChartError::SurfaceUnavailable`] and
/// nothing is drawn.
pub fn render<S: ChartSurface + ?Sized>(
    surface: Option<&mut S>,
    series: &[ProgressSample],
    canvas: CanvasSize,
) -> Result<ChartOutcome, ChartError> {
    let surface = surface.ok_or(ChartError::SurfaceUnavailable)?;
    match layout_chart(series, canvas) {
        Ok(layout) => {
            paint(surface, &layout.draw_commands())?;
            Ok(ChartOutcome::Drawn {
                points: layout.points.len(),
            })
        }
        Err(placeholder) => {
            paint(surface, &placeholder_commands(canvas, placeholder.message()))?;
            Ok(ChartOutcome::Placeholder(placeholder))
        }
    }
}

/// Clear the surface and center `message` on a neutral background.
pub fn render_placeholder<S: ChartSurface + ?Sized>(
    surface: Option<&mut S>,
    canvas: CanvasSize,
    message: &str,
) -> Result<(), ChartError> {
    let surface = surface.ok_or(ChartError::SurfaceUnavailable)?;
    paint(surface, &placeholder_commands(canvas, message))
}

/// [`ChartSurface`] over any plotters drawing backend.
///
/// Plotters works in whole pixels, so coordinates are rounded.
pub struct PlottersSurface<DB: DrawingBackend> {
    area: DrawingArea<DB, Shift>,
}

impl<DB: DrawingBackend> PlottersSurface<DB> {
    pub fn new(backend: DB) -> Self {
        Self {
            area: backend.into_drawing_area(),
        }
    }
}

fn pixel(point: Point) -> (i32, i32) {
    (point.x.round() as i32, point.y.round() as i32)
}

fn color(rgb: Rgb) -> RGBColor {
    RGBColor(rgb.0, rgb.1, rgb.2)
}

fn backend_error(err: impl std::fmt::Display) -> ChartError {
    ChartError::Backend(err.to_string())
}

impl<DB: DrawingBackend> ChartSurface for PlottersSurface<DB> {
    fn clear(&mut self, _width: f64, _height: f64) -> Result<(), ChartError> {
        // The drawing area always spans the whole backend
        self.area.fill(&color(CANVAS_BACKGROUND)).map_err(backend_error)
    }

    fn fill_rect(&mut self, rect: Rect, rgb: Rgb) -> Result<(), ChartError> {
        let top_left = pixel(Point::new(rect.x, rect.y));
        let bottom_right = pixel(Point::new(rect.right(), rect.bottom()));
        self.area
            .draw(&Rectangle::new([top_left, bottom_right], color(rgb).filled()))
            .map_err(backend_error)
    }

    fn stroke_path(&mut self, points: &[Point], rgb: Rgb, width: f64) -> Result<(), ChartError> {
        let path: Vec<(i32, i32)> = points.iter().copied().map(pixel).collect();
        let stroke = color(rgb).stroke_width(width.round().max(1.0) as u32);
        self.area
            .draw(&PathElement::new(path, stroke))
            .map_err(backend_error)
    }

    fn fill_circle(&mut self, center: Point, radius: f64, rgb: Rgb) -> Result<(), ChartError> {
        self.area
            .draw(&Circle::new(pixel(center), radius.round() as i32, color(rgb).filled()))
            .map_err(backend_error)
    }

    fn fill_text(&mut self, text: &str, at: Point, font_px: u32, rgb: Rgb, align: TextAlign) -> Result<(), ChartError> {
        let h_pos = match align {
            TextAlign::Left => HPos::Left,
            TextAlign::Center => HPos::Center,
            TextAlign::Right => HPos::Right,
        };
        let style = (FontFamily::SansSerif, font_px as f64)
            .into_font()
            .color(&color(rgb))
            .pos(Pos::new(h_pos, VPos::Bottom));
        self.area
            .draw(&Text::new(text.to_string(), pixel(at), style))
            .map_err(backend_error)
    }

    fn present(&mut self) -> Result<(), ChartError> {
        self.area.present().map_err(backend_error)
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    /// Pixel-free surface that keeps whatever is currently "on screen"
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub visible: Vec<DrawCommand>,
        pub clears: usize,
        pub presents: usize,
    }

    impl RecordingSurface {
        pub fn visible_text(&self) -> Vec<String> {
            self.visible.iter().filter_map(|c| c.text().map(str::to_string)).collect()
        }
    }

    impl ChartSurface for RecordingSurface {
        fn clear(&mut self, width: f64, height: f64) -> Result<(), ChartError> {
            self.visible.clear();
            self.clears += 1;
            self.visible.push(DrawCommand::Clear { width, height });
            Ok(())
        }

        fn fill_rect(&mut self, rect: Rect, color: Rgb) -> Result<(), ChartError> {
            self.visible.push(DrawCommand::FillRect { rect, color });
            Ok(())
        }

        fn stroke_path(&mut self, points: &[Point], color: Rgb, width: f64) -> Result<(), ChartError> {
            self.visible.push(DrawCommand::StrokePath {
                points: points.to_vec(),
                color,
                width,
            });
            Ok(())
        }

        fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb) -> Result<(), ChartError> {
            self.visible.push(DrawCommand::FillCircle { center, radius, color });
            Ok(())
        }

        fn fill_text(&mut self, text: &str, at: Point, font_px: u32, color: Rgb, align: TextAlign) -> Result<(), ChartError> {
            self.visible.push(DrawCommand::FillText {
                text: text.to_string(),
                at,
                font_px,
                color,
                align,
            });
            Ok(())
        }

        fn present(&mut self) -> Result<(), ChartError> {
            self.presents += 1;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::recording::RecordingSurface;
    use super::*;
    use crate::chart::geometry::{LEGEND_LABEL, Y_AXIS_TITLE};

    fn sample(date: &str, volume: Option<f64>) -> ProgressSample {
        ProgressSample::new(date, volume)
    }

    #[test]
    fn test_render_without_surface_is_a_safe_noop() {
        let series = vec![sample("2025-03-01", Some(10.0)), sample("2025-03-02", Some(20.0))];
        let result = render::<RecordingSurface>(None, &series, CanvasSize::default());
        assert_eq!(result, Err(ChartError::SurfaceUnavailable));

        let result = render_placeholder::<RecordingSurface>(None, CanvasSize::default(), "nothing");
        assert_eq!(result, Err(ChartError::SurfaceUnavailable));
    }

    #[test]
    fn test_render_reports_outcome() {
        let mut surface = RecordingSurface::default();

        let drawn = render(
            Some(&mut surface),
            &[sample("2025-03-01", Some(100.0)), sample("2025-03-02", None), sample("2025-03-03", Some(300.0))],
            CanvasSize::default(),
        );
        assert_eq!(drawn, Ok(ChartOutcome::Drawn { points: 2 }));

        let placeholder = render(Some(&mut surface), &[], CanvasSize::default());
        assert_eq!(placeholder, Ok(ChartOutcome::Placeholder(ChartPlaceholder::EmptySeries)));
        assert_eq!(surface.presents, 2);
    }

    #[test]
    fn test_second_render_leaves_no_residue() {
        let mut surface = RecordingSurface::default();
        let first = vec![
            sample("2025-03-01", Some(100.0)),
            sample("2025-03-02", Some(250.0)),
            sample("2025-03-03", Some(175.0)),
        ];
        let second = vec![sample("2025-04-10", Some(40.0)), sample("2025-04-12", Some(60.0))];

        render(Some(&mut surface), &first, CanvasSize::default()).unwrap();
        assert!(surface.visible_text().contains(&"250".to_string()));

        render(Some(&mut surface), &second, CanvasSize::default()).unwrap();
        let text = surface.visible_text();
        assert_eq!(surface.clears, 2);
        assert!(!text.contains(&"250".to_string()));
        assert!(!text.contains(&"Mar 1".to_string()));
        assert!(text.contains(&"Apr 10".to_string()));

        let markers = surface
            .visible
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .count();
        assert_eq!(markers, 2);
    }

    #[test]
    fn test_placeholder_after_chart_wipes_chart() {
        let mut surface = RecordingSurface::default();
        let series = vec![sample("2025-03-01", Some(100.0)), sample("2025-03-02", Some(200.0))];

        render(Some(&mut surface), &series, CanvasSize::default()).unwrap();
        render_placeholder(Some(&mut surface), CanvasSize::default(), "Pick an exercise").unwrap();

        assert_eq!(surface.visible_text(), vec!["Pick an exercise".to_string()]);
        assert!(surface.visible[0].is_clear());
    }

    #[test]
    fn test_plotters_svg_backend_renders_chart() {
        let mut svg = String::new();
        {
            let mut surface = PlottersSurface::new(SVGBackend::with_string(&mut svg, (800, 400)));
            let series = vec![
                sample("2025-03-01", Some(100.0)),
                sample("2025-03-02", None),
                sample("2025-03-03", Some(300.0)),
            ];
            let outcome = render(Some(&mut surface), &series, CanvasSize::default()).unwrap();
            assert_eq!(outcome, ChartOutcome::Drawn { points: 2 });
        }

        assert!(svg.contains("<svg"));
        assert!(svg.contains(LEGEND_LABEL));
        assert!(svg.contains(Y_AXIS_TITLE));
        assert!(svg.contains("<circle"));
        assert!(svg.contains("#FF6B6B") || svg.contains("#ff6b6b"));
    }

    #[test]
    fn test_plotters_svg_backend_renders_placeholder() {
        let mut svg = String::new();
        {
            let mut surface = PlottersSurface::new(SVGBackend::with_string(&mut svg, (800, 400)));
            render_placeholder(Some(&mut surface), CanvasSize::default(), "No valid volume data to display.").unwrap();
        }

        assert!(svg.contains("No valid volume data to display."));
        assert!(!svg.contains("<circle"));
    }
}
