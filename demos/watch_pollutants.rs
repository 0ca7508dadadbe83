use airsight::{
    AirSight, AirSightError, BarLevel, CalendarCell, Pollutant, PollutantView, Renderer,
    SeriesPoint, TileSet, TimeFilter, ViewEvent, ViewKey,
};

/// Prints every render call instead of drawing it.
struct ConsoleRenderer;

impl Renderer for ConsoleRenderer {
    fn clear_chart(&mut self) {}

    fn render_chart(
        &mut self,
        key: &ViewKey,
        series: &[SeriesPoint],
        classify: fn(f64) -> BarLevel,
        fallback: bool,
    ) {
        println!("chart {}{}", key, if fallback { " (fallback)" } else { "" });
        for point in series {
            println!("  {:>8} {:>6.1} {:?}", point.label, point.value, classify(point.value));
        }
    }

    fn render_tiles(&mut self, tiles: &TileSet) {
        for tile in tiles {
            println!(
                "  {:<5} day {:>2} {} {}",
                tile.pollutant,
                tile.display_day(),
                tile.month_name,
                tile.display_concentration()
            );
        }
    }

    fn render_calendar(&mut self, title: &str, cells: &[CalendarCell], _fallback: bool) {
        println!("calendar {} ({} days)", title, cells.len());
    }

    fn show_notice(&mut self, message: &str) {
        eprintln!("notice: {}", message);
    }
}

#[tokio::main]
async fn main() -> Result<(), AirSightError> {
    let client = AirSight::from_env()?;
    let key = ViewKey::new(2025, 8, Pollutant::Pm25, TimeFilter::Daily)?;
    let mut view = PollutantView::new(client, ConsoleRenderer, key);

    println!("{:?}", view.initialize().await);
    println!(
        "{:?}",
        view.handle(ViewEvent::FilterSelected(TimeFilter::Weekly)).await?
    );
    println!(
        "{:?}",
        view.handle(ViewEvent::PollutantSelected(Pollutant::O3)).await?
    );
    println!(
        "{:?}",
        view.handle(ViewEvent::DateSubmitted {
            year: 2025,
            month: 9
        })
        .await?
    );

    Ok(())
}
