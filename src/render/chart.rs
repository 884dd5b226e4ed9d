//! Outcome heatmap composition
//!
//! Plot content (grid, axes, cells) is authored in logical space, the
//! Y-up unit square covering depths `0..dimension`, and drawn through the
//! plot transform. Text and legend are authored in device space. Each
//! drawing call names its own transform, so switching between the two
//! spaces cannot compound transforms.

use std::f32::consts::FRAC_PI_2;

use imageproc::geometric_transformations::Projection;

use super::canvas::{Canvas, Color, Label, LinePath, Rect, Stroke};
use super::color::ratio_color;
use super::transform;
use crate::constants::{
    AXIS_A_TITLE, AXIS_B_TITLE, AXIS_LINE_WIDTH, GRID_LINE_ALPHA, GRID_LINE_WIDTH, LEGEND_ENTRY_STEP,
    LEGEND_FIRST_SWATCH_Y, LEGEND_LABEL_DROP, LEGEND_LABELS, LEGEND_SWATCH_SIZE, LEGEND_SWATCH_X,
    LEGEND_TEXT_X, LEGEND_TITLE, LEGEND_TITLE_Y, MAX_DIMENSION, PLOT_PADDING, PLOT_SIZE, TICK_FRACTIONS,
    TICK_LABEL_OFFSET, TITLE_SUFFIX,
};
use crate::data::Dataset;
use crate::error::ChartError;

const LEGEND_COLORS: [Color; 3] = [Color::RED, Color::GREEN, Color::BLUE];

/// Geometry of one chart, derived from the dataset's dimension
#[derive(Debug, Clone, Copy)]
pub struct ChartLayout {
    dimension: u32,
}

impl ChartLayout {
    /// Dimensions outside `1..=MAX_DIMENSION` are clamped; a validated
    /// [`Dataset`] never produces one.
    pub fn new(dimension: u32) -> Self {
        Self {
            dimension: dimension.clamp(1, MAX_DIMENSION),
        }
    }

    /// Logical unit square -> device plot region (padding inside, Y up)
    pub fn plot_transform(&self) -> Projection {
        let extent = PLOT_SIZE - 2.0 * PLOT_PADDING;
        transform::flip_y(PLOT_SIZE)
            * Projection::translate(PLOT_PADDING, PLOT_PADDING)
            * Projection::scale(extent, extent)
    }

    /// Rotation applied to everything on the second axis
    pub fn axis_b_transform(&self) -> Projection {
        transform::rotation_about(-FRAC_PI_2, PLOT_SIZE / 2.0, PLOT_SIZE / 2.0)
    }

    pub fn legend_transform(&self) -> Projection {
        Projection::translate(PLOT_SIZE, 0.0)
    }

    /// Logical side length of one cell
    pub fn cell_size(&self) -> f32 {
        1.0 / self.dimension as f32
    }

    /// Logical square for the cell at a pair of depths (lower-left corner first)
    pub fn cell_rect(&self, depth_a: u32, depth_b: u32) -> Rect {
        let d = self.dimension as f32;
        Rect::new(
            depth_a as f32 / d,
            depth_b as f32 / d,
            self.cell_size(),
            self.cell_size(),
        )
    }

    /// Faint lines at `i/dimension`, `i` in `1..=dimension`, across the full square
    pub fn grid_path(&self) -> LinePath {
        let mut path = LinePath::new();
        for i in 1..=self.dimension {
            let t = i as f32 / self.dimension as f32;
            path.move_to(t, 0.0).line_to(t, 1.0);
            path.move_to(0.0, t).line_to(1.0, t);
        }
        path
    }

    /// Bottom and left edges of the logical square
    pub fn axis_path(&self) -> LinePath {
        let mut path = LinePath::new();
        path.move_to(0.0, 0.0).line_to(1.0, 0.0);
        path.move_to(0.0, 0.0).line_to(0.0, 1.0);
        path
    }

    /// (device position along the axis, depth value) for each tick label
    pub fn ticks(&self) -> [(f32, u32); 5] {
        let extent = PLOT_SIZE - 2.0 * PLOT_PADDING;
        TICK_FRACTIONS.map(|(num, den)| {
            let position = PLOT_PADDING + extent * num as f32 / den as f32;
            // num <= den, so the quotient never exceeds the dimension
            let value = u64::from(num) * u64::from(self.dimension) / u64::from(den);
            (position, value as u32)
        })
    }
}

/// Draw the complete chart for `dataset` onto `canvas`.
///
/// Fails only if the dataset holds a record without games, which a
/// validated [`Dataset`] never does.
pub fn render_chart<C: Canvas>(
    canvas: &mut C,
    title: &str,
    dataset: &Dataset,
) -> Result<(), ChartError> {
    let layout = ChartLayout::new(dataset.dimension());
    let plot = layout.plot_transform();
    let device = transform::identity();

    canvas.clear(Color::WHITE);

    // Faint grid first, bold axes over it
    let grid = Stroke {
        color: Color::BLACK.with_alpha(GRID_LINE_ALPHA),
        width: GRID_LINE_WIDTH,
    };
    canvas.stroke(&layout.grid_path(), grid, &plot);
    let axes = Stroke {
        color: Color::BLACK,
        width: AXIS_LINE_WIDTH,
    };
    canvas.stroke(&layout.axis_path(), axes, &plot);

    // Input order is draw order: the last record at a cell wins
    for (idx, record) in dataset.records().iter().enumerate() {
        let color = ratio_color(record).ok_or_else(|| ChartError::ZeroTotalRecord {
            path: dataset.source().to_path_buf(),
            record: idx + 1,
            depth_a: record.depth_a,
            depth_b: record.depth_b,
        })?;
        canvas.fill_rect(layout.cell_rect(record.depth_a, record.depth_b), color, &plot);
    }

    let half = PLOT_SIZE / 2.0;
    let margin = PLOT_PADDING / 2.0;
    let full_title = format!("{title}{TITLE_SUFFIX}");
    canvas.draw_text(
        &Label::centered(&full_title, half, margin, Color::BLACK),
        &device,
    );
    canvas.draw_text(
        &Label::centered(AXIS_A_TITLE, half, PLOT_SIZE - margin, Color::BLACK),
        &device,
    );

    // The second axis title and ticks are laid out along the top edge, then
    // turned a quarter counter-clockwise about the canvas center onto the
    // left edge.
    let axis_b = layout.axis_b_transform();
    canvas.draw_text(
        &Label::centered(AXIS_B_TITLE, half, margin, Color::BLACK),
        &axis_b,
    );

    for (position, value) in layout.ticks() {
        let text = value.to_string();
        canvas.draw_text(
            &Label::centered(&text, position, PLOT_SIZE - TICK_LABEL_OFFSET, Color::BLACK),
            &device,
        );
        canvas.draw_text(
            &Label::centered(&text, position, TICK_LABEL_OFFSET, Color::BLACK),
            &axis_b,
        );
    }

    draw_legend(canvas, &layout.legend_transform());
    Ok(())
}

fn draw_legend<C: Canvas>(canvas: &mut C, legend: &Projection) {
    canvas.draw_text(
        &Label::centered(LEGEND_TITLE, LEGEND_TEXT_X, LEGEND_TITLE_Y, Color::BLACK),
        legend,
    );

    for (idx, (label, color)) in LEGEND_LABELS.iter().zip(LEGEND_COLORS).enumerate() {
        let top = LEGEND_FIRST_SWATCH_Y + idx as f32 * LEGEND_ENTRY_STEP;
        let swatch = Rect::new(LEGEND_SWATCH_X, top, LEGEND_SWATCH_SIZE, LEGEND_SWATCH_SIZE);
        canvas.fill_rect(swatch, color, legend);
        canvas.draw_text(
            &Label::centered(label, LEGEND_TEXT_X, top + LEGEND_LABEL_DROP, Color::BLACK),
            legend,
        );
    }
}
