use crate::types::calendar::CalendarCell;
use crate::types::series::{BarLevel, SeriesPoint};
use crate::types::tile::TileSet;
use crate::types::view_key::ViewKey;

/// Presentation side of the pollutant view.
///
/// Implementations own every visual detail. Calls arrive synchronously from
/// [`crate::PollutantView`]; a chart is always torn down with
/// [`Renderer::clear_chart`] before the next one is drawn on the same mount
/// point. When no calendar call arrives, the displayed calendar must stay as
/// it is.
pub trait Renderer {
    fn clear_chart(&mut self);

    /// Draws the chart; `classify` maps a point's value to its colour band.
    fn render_chart(
        &mut self,
        key: &ViewKey,
        series: &[SeriesPoint],
        classify: fn(f64) -> BarLevel,
        fallback: bool,
    );

    /// Draws the six highest-concentration tiles.
    fn render_tiles(&mut self, tiles: &TileSet);

    fn render_calendar(&mut self, title: &str, cells: &[CalendarCell], fallback: bool);

    /// Shows a non-blocking notice, e.g. after a failed fetch.
    fn show_notice(&mut self, message: &str);
}
