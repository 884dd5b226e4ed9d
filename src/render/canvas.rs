//! Drawing capability consumed by the chart renderer
//!
//! Backends implement [`Canvas`]. Every call carries the [`Projection`] that
//! maps its coordinates into device space; a backend never keeps transform
//! state between calls.

use std::path::Path;

use imageproc::geometric_transformations::Projection;

use crate::error::ChartError;

/// RGBA color with channels in [0,1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[must_use]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// 8-bit channels, each rounded from the clamped [0,1] value
    pub fn to_rgba8(self) -> [u8; 4] {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            channel(self.r),
            channel(self.g),
            channel(self.b),
            channel(self.a),
        ]
    }
}

/// Axis-aligned rectangle in the coordinates of the transform it is drawn with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Corners in drawing order, starting at (x, y)
    pub fn corners(&self) -> [(f32, f32); 4] {
        let (x0, y0) = (self.x, self.y);
        let (x1, y1) = (self.x + self.width, self.y + self.height);
        [(x0, y0), (x1, y0), (x1, y1), (x0, y1)]
    }
}

/// Open polyline path built from move-to / line-to commands
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinePath {
    subpaths: Vec<Vec<(f32, f32)>>,
}

impl LinePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new subpath at (x, y)
    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.subpaths.push(vec![(x, y)]);
        self
    }

    /// Extend the current subpath; starts one at (x, y) if there is none
    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        match self.subpaths.last_mut() {
            Some(current) => current.push((x, y)),
            None => self.subpaths.push(vec![(x, y)]),
        }
        self
    }

    pub fn subpaths(&self) -> &[Vec<(f32, f32)>] {
        &self.subpaths
    }

    /// Every straight segment of every subpath
    pub fn segments(&self) -> impl Iterator<Item = ((f32, f32), (f32, f32))> + '_ {
        self.subpaths
            .iter()
            .flat_map(|points| points.windows(2).map(|w| (w[0], w[1])))
    }
}

/// Stroke style; width is in device pixels regardless of the transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

/// Anchor of a text box relative to its position: (0,0) top-left,
/// (0.5,0.5) centered, (1,1) bottom-right
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
}

impl Anchor {
    pub const CENTER: Anchor = Anchor { x: 0.5, y: 0.5 };
}

/// A single line of text placed at `position`
#[derive(Debug, Clone, PartialEq)]
pub struct Label<'a> {
    pub text: &'a str,
    pub position: (f32, f32),
    pub anchor: Anchor,
    pub color: Color,
}

impl<'a> Label<'a> {
    pub fn centered(text: &'a str, x: f32, y: f32, color: Color) -> Self {
        Self {
            text,
            position: (x, y),
            anchor: Anchor::CENTER,
            color,
        }
    }
}

pub trait Canvas {
    /// Device size in pixels (width, height)
    fn size(&self) -> (u32, u32);

    /// Overwrite every pixel with `color`
    fn clear(&mut self, color: Color);

    fn stroke(&mut self, path: &LinePath, stroke: Stroke, transform: &Projection);

    /// Fill `rect`, replacing what is underneath when `color` is opaque
    fn fill_rect(&mut self, rect: Rect, color: Color, transform: &Projection);

    fn draw_text(&mut self, label: &Label<'_>, transform: &Projection);

    /// Write the canvas as a PNG, replacing any existing file
    fn save(&self, path: &Path) -> Result<(), ChartError>;
}
