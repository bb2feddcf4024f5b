//! Chart renderer trait.

use crate::ChartStyle;
use covstat_common::Result;
use std::path::Path;

/// Draws one kind of chart from pre-computed data into an image file.
pub trait ChartRenderer {
    /// The aggregate this renderer draws.
    type Data: ?Sized;

    /// Render `data` to a PNG at `path`, replacing any existing file.
    fn render_to_file(&self, data: &Self::Data, style: &ChartStyle, path: &Path) -> Result<()>;

    /// Title drawn above the chart.
    fn title(&self) -> &str;

    /// Short identifier used in logs.
    fn name(&self) -> &'static str;
}
