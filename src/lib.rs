//! Outcome heatmaps - win/loss/tie charts over pairs of search depths
//!
//! Each chart reads an outcome table (one row per depth pair), colors every
//! cell by its A-win/B-win/tie ratios and writes a PNG with grid, axes,
//! labels and legend.

pub mod constants;
pub mod data;
pub mod error;
pub mod jobs;
pub mod logging;
pub mod render;
pub mod settings;

// Re-export commonly used types for convenience
pub use data::{Dataset, Record, load_records, parse_records};
pub use error::{ChartError, ErrorKind};
pub use jobs::{Job, JobList, JobReport, create_graph, run_batch, run_job};
pub use logging::init_logging;
pub use render::{Canvas, ChartLayout, Color, RasterCanvas, ratio_color, render_chart};
pub use settings::ChartConfig;
