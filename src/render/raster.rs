//! PNG canvas backed by `image` + `imageproc`
//!
//! Shapes are transformed into device space and rasterized there. Text is
//! rendered off-screen into a tile, warped through its transform (which
//! handles the rotated axis labels) and blended onto the canvas.

use std::fs;
use std::path::Path;

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use image::{ImageFormat, Rgba, RgbaImage, imageops};
use imageproc::drawing::{
    Blend, Canvas as PixelCanvas, draw_line_segment_mut, draw_polygon_mut, draw_text_mut,
    text_size,
};
use imageproc::geometric_transformations::{Interpolation, Projection, warp_into};
use imageproc::point::Point;
use tracing::{debug, warn};

use super::canvas::{Canvas, Color, Label, LinePath, Rect, Stroke};
use crate::constants::{FONT_SEARCH_PATHS, TEXT_SIZE};
use crate::error::ChartError;

/// Blank space around the glyphs in an off-screen text tile
const TILE_MARGIN: u32 = 2;

pub struct RasterCanvas {
    image: Blend<RgbaImage>,
    font: Option<FontArc>,
    text_scale: PxScale,
}

impl RasterCanvas {
    /// A transparent canvas. Without a font, text drawing is a no-op.
    pub fn new(width: u32, height: u32, font: Option<FontArc>) -> Self {
        Self {
            image: Blend(RgbaImage::new(width, height)),
            font,
            text_scale: PxScale::from(TEXT_SIZE),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image.0
    }

    fn fill_polygon(&mut self, points: &[(f32, f32)], color: Rgba<u8>) {
        let mut poly: Vec<Point<i32>> = Vec::with_capacity(points.len());
        for &(x, y) in points {
            let p = Point::new(x.round() as i32, y.round() as i32);
            if poly.last() != Some(&p) {
                poly.push(p);
            }
        }
        // imageproc rejects closed polygons (first == last)
        while poly.len() > 1 && poly.first() == poly.last() {
            poly.pop();
        }

        match poly.len() {
            0 => {}
            1 => self.blend_pixel(poly[0].x, poly[0].y, color),
            2 => draw_line_segment_mut(
                &mut self.image,
                (poly[0].x as f32, poly[0].y as f32),
                (poly[1].x as f32, poly[1].y as f32),
                color,
            ),
            _ => draw_polygon_mut(&mut self.image, &poly, color),
        }
    }

    fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        let (width, height) = self.image.dimensions();
        if x >= 0 && y >= 0 && (x as u32) < width && (y as u32) < height {
            self.image.draw_pixel(x as u32, y as u32, color);
        }
    }
}

impl Canvas for RasterCanvas {
    fn size(&self) -> (u32, u32) {
        self.image.0.dimensions()
    }

    fn clear(&mut self, color: Color) {
        let pixel = Rgba(color.to_rgba8());
        for p in self.image.0.pixels_mut() {
            *p = pixel;
        }
    }

    fn stroke(&mut self, path: &LinePath, stroke: Stroke, transform: &Projection) {
        let color = Rgba(stroke.color.to_rgba8());
        let half = stroke.width / 2.0;

        for (from, to) in path.segments() {
            let (x0, y0) = *transform * from;
            let (x1, y1) = *transform * to;

            if stroke.width <= 1.0 {
                draw_line_segment_mut(&mut self.image, (x0, y0), (x1, y1), color);
                continue;
            }

            let (dx, dy) = (x1 - x0, y1 - y0);
            let len = (dx * dx + dy * dy).sqrt();
            if len == 0.0 {
                continue;
            }
            // Unit direction scaled to half the width; square caps on both ends
            let (ux, uy) = (dx / len * half, dy / len * half);
            let (nx, ny) = (-uy, ux);
            let quad = [
                (x0 - ux + nx, y0 - uy + ny),
                (x1 + ux + nx, y1 + uy + ny),
                (x1 + ux - nx, y1 + uy - ny),
                (x0 - ux - nx, y0 - uy - ny),
            ];
            self.fill_polygon(&quad, color);
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color, transform: &Projection) {
        let corners = rect.corners().map(|corner| *transform * corner);
        self.fill_polygon(&corners, Rgba(color.to_rgba8()));
    }

    fn draw_text(&mut self, label: &Label<'_>, transform: &Projection) {
        let Some(font) = self.font.as_ref() else {
            return;
        };
        let (text_w, ink_h) = text_size(self.text_scale, font, label.text);
        if text_w == 0 || ink_h == 0 {
            return;
        }
        // Glyphs hang from the ascent line, so the box spans ascent to descent
        let text_h = font.as_scaled(self.text_scale).height().ceil() as u32;

        // Glyph coverage lands in alpha over a transparent tile of the label
        // color, so warping and blending never tint the edges.
        let [r, g, b, a] = label.color.to_rgba8();
        let clear = Rgba([r, g, b, 0]);
        let mut tile =
            RgbaImage::from_pixel(text_w + 2 * TILE_MARGIN, text_h + 2 * TILE_MARGIN, clear);
        draw_text_mut(
            &mut tile,
            Rgba([r, g, b, a]),
            TILE_MARGIN as i32,
            TILE_MARGIN as i32,
            self.text_scale,
            font,
            label.text,
        );

        // Tile pixel (0,0) sits here in the label's own coordinates
        let origin_x = label.position.0 - label.anchor.x * text_w as f32 - TILE_MARGIN as f32;
        let origin_y = label.position.1 - label.anchor.y * text_h as f32 - TILE_MARGIN as f32;
        let to_device = *transform * Projection::translate(origin_x, origin_y);

        // Device-space bounding box of the transformed tile, clipped to the canvas
        let (tile_w, tile_h) = (tile.width() as f32, tile.height() as f32);
        let corners = [(0.0, 0.0), (tile_w, 0.0), (tile_w, tile_h), (0.0, tile_h)]
            .map(|corner| to_device * corner);
        let (canvas_w, canvas_h) = self.size();
        let min_x = corners.iter().map(|c| c.0).fold(f32::INFINITY, f32::min);
        let max_x = corners.iter().map(|c| c.0).fold(f32::NEG_INFINITY, f32::max);
        let min_y = corners.iter().map(|c| c.1).fold(f32::INFINITY, f32::min);
        let max_y = corners.iter().map(|c| c.1).fold(f32::NEG_INFINITY, f32::max);
        let (x0, x1) = (min_x.floor().max(0.0), max_x.ceil().min(canvas_w as f32));
        let (y0, y1) = (min_y.floor().max(0.0), max_y.ceil().min(canvas_h as f32));
        if x1 <= x0 || y1 <= y0 {
            debug!("Skipping text {:?}: outside the canvas", label.text);
            return;
        }

        let mut patch = RgbaImage::from_pixel((x1 - x0) as u32, (y1 - y0) as u32, clear);
        let to_patch = Projection::translate(-x0, -y0) * to_device;
        warp_into(&tile, &to_patch, Interpolation::Nearest, clear, &mut patch);
        imageops::overlay(&mut self.image.0, &patch, x0 as i64, y0 as i64);
    }

    fn save(&self, path: &Path) -> Result<(), ChartError> {
        self.image
            .0
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| ChartError::Write {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
    }
}

/// Load a TrueType/OpenType font (collections use their first face)
pub fn load_font(path: &Path) -> Result<FontArc, ChartError> {
    let data = fs::read(path).map_err(|e| ChartError::Font {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    FontArc::try_from_vec(data).map_err(|e| ChartError::Font {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// First loadable font among the usual system locations
pub fn find_system_font() -> Option<FontArc> {
    for candidate in FONT_SEARCH_PATHS {
        let path = Path::new(candidate);
        if !path.exists() {
            continue;
        }
        match load_font(path) {
            Ok(font) => {
                debug!("Using font {}", path.display());
                return Some(font);
            }
            Err(e) => warn!("{}", e),
        }
    }
    None
}
