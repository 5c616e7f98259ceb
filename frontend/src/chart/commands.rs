//! Backend-independent drawing commands produced by the chart geometry.

/// A point in canvas units (origin top-left, y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

// Palette
pub const CANVAS_BACKGROUND: Rgb = Rgb(255, 255, 255);
pub const PLOT_BACKGROUND: Rgb = Rgb(249, 249, 249);
pub const PLACEHOLDER_BACKGROUND: Rgb = Rgb(245, 245, 245);
pub const PLACEHOLDER_TEXT: Rgb = Rgb(153, 153, 153);
pub const AXIS_COLOR: Rgb = Rgb(51, 51, 51);
pub const GRID_COLOR: Rgb = Rgb(224, 224, 224);
pub const SERIES_COLOR: Rgb = Rgb(255, 107, 107);
pub const LABEL_COLOR: Rgb = Rgb(51, 51, 51);

/// Horizontal anchor of a text command relative to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// One drawing primitive. Text positions are baselines, as on a 2-D canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Wipe the whole surface
    Clear { width: f64, height: f64 },
    FillRect { rect: Rect, color: Rgb },
    /// Open polyline through `points` in order
    StrokePath { points: Vec<Point>, color: Rgb, width: f64 },
    FillCircle { center: Point, radius: f64, color: Rgb },
    FillText {
        text: String,
        at: Point,
        font_px: u32,
        color: Rgb,
        align: TextAlign,
    },
}

impl DrawCommand {
    pub fn is_clear(&self) -> bool {
        matches!(self, DrawCommand::Clear { .. })
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            DrawCommand::FillText { text, .. } => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(SERIES_COLOR.to_hex(), "#ff6b6b");
        assert_eq!(PLOT_BACKGROUND.to_hex(), "#f9f9f9");
        assert_eq!(Rgb(0, 0, 0).to_hex(), "#000000");
    }

    #[test]
    fn test_rect_edges_and_contains() {
        let rect = Rect::new(80.0, 60.0, 680.0, 280.0);
        assert_eq!(rect.right(), 760.0);
        assert_eq!(rect.bottom(), 340.0);
        assert!(rect.contains(Point::new(80.0, 340.0)));
        assert!(!rect.contains(Point::new(79.9, 100.0)));
    }

    #[test]
    fn test_text_accessor() {
        let label = DrawCommand::FillText {
            text: "Total Volume".to_string(),
            at: Point::new(0.0, 0.0),
            font_px: 12,
            color: LABEL_COLOR,
            align: TextAlign::Left,
        };
        assert_eq!(label.text(), Some("Total Volume"));
        assert!(DrawCommand::Clear { width: 1.0, height: 1.0 }.is_clear());
    }
}
