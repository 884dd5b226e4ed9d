//! Fixed chart geometry and labels
//!
//! The chart has a single layout: a square plot of side `PLOT_SIZE` with a
//! legend panel to its right. All device-space positions are derived from
//! the values here.

// =============================================================================
// CANVAS GEOMETRY
// =============================================================================

/// Side of the square plot region, in device pixels
pub const PLOT_SIZE: f32 = 1024.0;
/// Padding between the plot region edge and the logical [0,1] square
pub const PLOT_PADDING: f32 = 64.0;
/// Width of the legend panel to the right of the plot
pub const LEGEND_WIDTH: f32 = 100.0;

pub const CANVAS_WIDTH: u32 = (PLOT_SIZE + LEGEND_WIDTH) as u32; // 1124
pub const CANVAS_HEIGHT: u32 = PLOT_SIZE as u32; // 1024

/// Widest grid the plot can draw: one device pixel per column
pub const MAX_DIMENSION: u32 = (PLOT_SIZE - 2.0 * PLOT_PADDING) as u32; // 896

// =============================================================================
// STROKES
// =============================================================================

pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const GRID_LINE_ALPHA: f32 = 0.25;
pub const AXIS_LINE_WIDTH: f32 = 4.0;

// =============================================================================
// TEXT
// =============================================================================

pub const TEXT_SIZE: f32 = 16.0;
pub const TITLE_SUFFIX: &str = " - Alphabeta vs. Alphabeta";
pub const AXIS_A_TITLE: &str = "Player 1 Lookahead";
pub const AXIS_B_TITLE: &str = "Player 2 Lookahead";
/// Distance of the tick labels from the plot edge
pub const TICK_LABEL_OFFSET: f32 = PLOT_PADDING - 10.0;
/// Logical fractions of the dimension that get a tick label
pub const TICK_FRACTIONS: [(u32, u32); 5] = [(0, 4), (1, 4), (2, 4), (3, 4), (4, 4)];

// =============================================================================
// LEGEND (device space, relative to the legend panel origin)
// =============================================================================

pub const LEGEND_TITLE: &str = "Legend";
pub const LEGEND_TEXT_X: f32 = 25.0;
pub const LEGEND_TITLE_Y: f32 = 100.0;
pub const LEGEND_SWATCH_X: f32 = 10.0;
pub const LEGEND_SWATCH_SIZE: f32 = 30.0;
/// Vertical distance between consecutive legend entries
pub const LEGEND_ENTRY_STEP: f32 = 100.0;
pub const LEGEND_FIRST_SWATCH_Y: f32 = 150.0;
/// Label sits this far below its swatch's top edge
pub const LEGEND_LABEL_DROP: f32 = 50.0;
pub const LEGEND_LABELS: [&str; 3] = ["Player 1 Win", "Player 2 Win", "Tie"];

// =============================================================================
// FILES
// =============================================================================

/// Default batch job list
pub const JOBS_FILE: &str = "config/graphs.toml";

/// Font locations tried when no font is configured
pub const FONT_SEARCH_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];
