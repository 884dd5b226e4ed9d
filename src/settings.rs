//! Chart rendering settings
//!
//! Only the font is configurable; everything else about the chart is fixed.

use std::path::PathBuf;

use ab_glyph::FontArc;
use tracing::warn;

use crate::error::ChartError;
use crate::render::{find_system_font, load_font};

#[derive(Debug, Clone, Default)]
pub struct ChartConfig {
    /// Font for all chart text. None = search the usual system locations.
    pub font_path: Option<PathBuf>,
}

impl ChartConfig {
    /// Resolve the font once for a whole batch.
    ///
    /// An explicitly configured font must load. Without one, a missing
    /// system font only disables text.
    pub fn load_font(&self) -> Result<Option<FontArc>, ChartError> {
        if let Some(path) = &self.font_path {
            return load_font(path).map(Some);
        }
        let font = find_system_font();
        if font.is_none() {
            warn!("No usable font found, charts will be rendered without text");
        }
        Ok(font)
    }
}
