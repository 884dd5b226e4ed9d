//! Chart rendering: transforms, the canvas capability, the PNG backend and
//! the heatmap composition itself.

pub mod canvas;
pub mod chart;
pub mod color;
pub mod raster;
pub mod transform;

pub use canvas::{Anchor, Canvas, Color, Label, LinePath, Rect, Stroke};
pub use chart::{ChartLayout, render_chart};
pub use color::ratio_color;
pub use raster::{RasterCanvas, find_system_font, load_font};
