//! Drives one pollutant analysis view: turns typed UI events into a fetch,
//! a [`ViewState::reconcile`] and the matching renderer calls.

use crate::error::AirSightError;
use crate::fallback;
use crate::render::Renderer;
use crate::sync::fetch_result::FetchResult;
use crate::sync::sequence::{RequestSequencer, RequestTicket};
use crate::sync::view_state::{CalendarUpdate, ChartUpdate, Reconciliation, ViewPhase, ViewState};
use crate::types::error::ViewKeyError;
use crate::types::pollutant::Pollutant;
use crate::types::series::BarLevel;
use crate::types::tile::TileSet;
use crate::types::time_filter::TimeFilter;
use crate::types::view_key::ViewKey;
use crate::utils::month_name;
use log::{debug, info, warn};

/// Anything that can produce a [`FetchResult`] for a [`ViewKey`].
///
/// [`crate::AirSight`] implements this against the HTTP backend.
#[allow(async_fn_in_trait)]
pub trait PollutantSource {
    async fn fetch(&self, key: &ViewKey) -> Result<FetchResult, AirSightError>;
}

/// A user action on the pollutant view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    FilterSelected(TimeFilter),
    PollutantSelected(Pollutant),
    /// The "Predict" action with new date controls. This is the only event
    /// that invalidates the calendar and tile cache.
    DateSubmitted { year: i32, month: u32 },
}

/// A request that has been issued but not yet completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingFetch {
    ticket: RequestTicket,
    key: ViewKey,
}

impl PendingFetch {
    pub fn ticket(&self) -> RequestTicket {
        self.ticket
    }

    pub fn key(&self) -> &ViewKey {
        &self.key
    }
}

/// How the calendar was treated by a completed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarRender {
    Untouched,
    Real,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewOutcome {
    Rendered {
        key: ViewKey,
        chart_fallback: bool,
        calendar: CalendarRender,
        /// The fetch failed and a notice was shown.
        notified: bool,
    },
    /// The response belonged to a superseded request and was dropped.
    Discarded,
}

pub struct PollutantView<S, R> {
    source: S,
    renderer: R,
    key: ViewKey,
    state: ViewState,
    sequencer: RequestSequencer,
}

impl<S: PollutantSource, R: Renderer> PollutantView<S, R> {
    pub fn new(source: S, renderer: R, key: ViewKey) -> Self {
        Self {
            source,
            renderer,
            key,
            state: ViewState::new(),
            sequencer: RequestSequencer::new(),
        }
    }

    pub fn key(&self) -> &ViewKey {
        &self.key
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Resets the view so the next completion repaints everything, and
    /// issues the first request.
    pub fn begin_initialize(&mut self) -> PendingFetch {
        self.state = ViewState::new();
        self.issue()
    }

    /// Applies `event` to the current key and issues a request for it.
    ///
    /// # Errors
    ///
    /// Returns [`ViewKeyError::MonthOutOfRange`] for a submitted month
    /// outside 1..=12; the view is left unchanged.
    pub fn begin(&mut self, event: ViewEvent) -> Result<PendingFetch, ViewKeyError> {
        self.key = match event {
            ViewEvent::FilterSelected(filter) => self.key.with_filter(filter),
            ViewEvent::PollutantSelected(pollutant) => self.key.with_pollutant(pollutant),
            ViewEvent::DateSubmitted { year, month } => {
                let key = self.key.with_date(year, month)?;
                self.state.invalidate();
                key
            }
        };
        Ok(self.issue())
    }

    fn issue(&mut self) -> PendingFetch {
        let ticket = self.sequencer.issue();
        debug!("Issued request {} for {}", ticket.get(), self.key);
        PendingFetch {
            ticket,
            key: self.key,
        }
    }

    /// Finishes `pending` with the result of its fetch and renders.
    ///
    /// Responses to superseded requests are dropped without rendering. A
    /// failed fetch shows a notice and a fallback chart and leaves the cache
    /// as it was, so the next successful fetch still repaints a view that
    /// was never initialized.
    pub fn complete(
        &mut self,
        pending: PendingFetch,
        result: Result<FetchResult, AirSightError>,
    ) -> ViewOutcome {
        if !self.sequencer.is_latest(pending.ticket) {
            debug!(
                "Discarding stale response {} for {}",
                pending.ticket.get(),
                pending.key
            );
            return ViewOutcome::Discarded;
        }

        let fetch = match result {
            Ok(fetch) => fetch,
            Err(e) => return self.fail(pending.key, e),
        };

        let Reconciliation {
            chart,
            tiles,
            calendar,
            state,
        } = std::mem::take(&mut self.state).reconcile(&pending.key, fetch);
        self.state = state;
        let key = pending.key;

        self.renderer.clear_chart();
        let chart_fallback = match chart {
            ChartUpdate::Series(series) => {
                self.renderer
                    .render_chart(&key, &series, BarLevel::classify, false);
                false
            }
            ChartUpdate::DataInvalid => {
                let series = fallback::chart_series(&key);
                self.renderer
                    .render_chart(&key, &series, BarLevel::classify, true);
                true
            }
        };

        self.renderer.render_tiles(&tiles);

        let calendar = match calendar {
            CalendarUpdate::Unchanged => CalendarRender::Untouched,
            CalendarUpdate::Refreshed { title, cells } => {
                self.renderer.render_calendar(&title, &cells, false);
                CalendarRender::Real
            }
            CalendarUpdate::DataMissing => {
                let title = format!("{} {} (Fallback)", month_name(key.month()), key.year());
                let cells = fallback::calendar(key.year(), key.month());
                self.renderer.render_calendar(&title, &cells, true);
                CalendarRender::Fallback
            }
        };

        info!("Rendered {} (chart fallback: {}, calendar: {:?})", key, chart_fallback, calendar);
        ViewOutcome::Rendered {
            key,
            chart_fallback,
            calendar,
            notified: false,
        }
    }

    // A failed fetch never touches the cache. The calendar and tiles are only
    // painted with placeholders while nothing has been shown for this window.
    fn fail(&mut self, key: ViewKey, error: AirSightError) -> ViewOutcome {
        warn!("Fetching pollutant data for {} failed: {}", key, error);
        self.renderer
            .show_notice(&format!("Could not load pollutant data: {}", error));

        self.renderer.clear_chart();
        let series = fallback::chart_series(&key);
        self.renderer
            .render_chart(&key, &series, BarLevel::classify, true);

        let calendar = if self.state.phase() == ViewPhase::Uninitialized {
            self.renderer.render_tiles(&TileSet::placeholders());
            let title = format!("{} {} (Fallback)", month_name(key.month()), key.year());
            let cells = fallback::calendar(key.year(), key.month());
            self.renderer.render_calendar(&title, &cells, true);
            CalendarRender::Fallback
        } else {
            CalendarRender::Untouched
        };

        ViewOutcome::Rendered {
            key,
            chart_fallback: true,
            calendar,
            notified: true,
        }
    }

    /// Resets the view and paints it from a fresh fetch.
    pub async fn initialize(&mut self) -> ViewOutcome {
        let pending = self.begin_initialize();
        let result = self.source.fetch(&pending.key).await;
        self.complete(pending, result)
    }

    /// Applies `event`, fetches the data for the new key and renders it.
    pub async fn handle(&mut self, event: ViewEvent) -> Result<ViewOutcome, AirSightError> {
        let pending = self.begin(event)?;
        let result = self.source.fetch(&pending.key).await;
        Ok(self.complete(pending, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::calendar::CalendarCell;
    use crate::types::series::SeriesPoint;
    use crate::types::tile::HighestTile;
    use crate::utils::days_in_month;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        ClearChart,
        Chart { len: usize, fallback: bool },
        Tiles(TileSet),
        Calendar { title: String, days: usize, fallback: bool },
        Notice(String),
    }

    #[derive(Default)]
    struct RecordingRenderer {
        calls: Vec<Call>,
    }

    impl RecordingRenderer {
        fn take(&mut self) -> Vec<Call> {
            std::mem::take(&mut self.calls)
        }
    }

    impl Renderer for RecordingRenderer {
        fn clear_chart(&mut self) {
            self.calls.push(Call::ClearChart);
        }

        fn render_chart(
            &mut self,
            _key: &ViewKey,
            series: &[SeriesPoint],
            classify: fn(f64) -> BarLevel,
            fallback: bool,
        ) {
            assert!(series.iter().all(|p| classify(p.value) != BarLevel::Invalid));
            self.calls.push(Call::Chart {
                len: series.len(),
                fallback,
            });
        }

        fn render_tiles(&mut self, tiles: &TileSet) {
            self.calls.push(Call::Tiles(tiles.clone()));
        }

        fn render_calendar(&mut self, title: &str, cells: &[CalendarCell], fallback: bool) {
            self.calls.push(Call::Calendar {
                title: title.to_string(),
                days: cells.len(),
                fallback,
            });
        }

        fn show_notice(&mut self, message: &str) {
            self.calls.push(Call::Notice(message.to_string()));
        }
    }

    /// Answers fetches from a queue and records the keys asked for.
    #[derive(Default)]
    struct ScriptedSource {
        responses: RefCell<VecDeque<Result<FetchResult, AirSightError>>>,
        requested: RefCell<Vec<ViewKey>>,
    }

    impl ScriptedSource {
        fn push(&self, response: Result<FetchResult, AirSightError>) {
            self.responses.borrow_mut().push_back(response);
        }
    }

    impl PollutantSource for ScriptedSource {
        async fn fetch(&self, key: &ViewKey) -> Result<FetchResult, AirSightError> {
            self.requested.borrow_mut().push(*key);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(AirSightError::SourceUnavailable("script exhausted".into())))
        }
    }

    fn month_fetch(year: i32, month: u32, values: &[f64]) -> FetchResult {
        FetchResult {
            series: Some(
                values
                    .iter()
                    .enumerate()
                    .map(|(i, v)| SeriesPoint::new(format!("Aug {:02}", i + 1), *v))
                    .collect(),
            ),
            highest_candidates: Vec::new(),
            calendar_cells: Some(
                (1..=days_in_month(year, month))
                    .map(|day| CalendarCell {
                        day,
                        aqi: 55.0,
                        main_pollutant: "PM10".to_string(),
                    })
                    .collect(),
            ),
            month_year: None,
        }
    }

    fn view() -> PollutantView<ScriptedSource, RecordingRenderer> {
        let key = ViewKey::new(2025, 8, Pollutant::Pm25, TimeFilter::Daily).unwrap();
        PollutantView::new(ScriptedSource::default(), RecordingRenderer::default(), key)
    }

    #[tokio::test]
    async fn test_initialize_paints_everything() {
        let mut view = view();
        view.source.push(Ok(month_fetch(2025, 8, &[12.0, 30.0])));

        let outcome = view.initialize().await;
        assert!(matches!(
            outcome,
            ViewOutcome::Rendered {
                chart_fallback: false,
                calendar: CalendarRender::Real,
                notified: false,
                ..
            }
        ));
        let calls = view.renderer_mut().take();
        assert_eq!(calls[0], Call::ClearChart);
        assert_eq!(calls[1], Call::Chart { len: 2, fallback: false });
        assert!(matches!(calls[2], Call::Tiles(_)));
        assert_eq!(
            calls[3],
            Call::Calendar {
                title: "August 2025".to_string(),
                days: 31,
                fallback: false
            }
        );
        assert_eq!(view.state().cache_window(), Some((2025, 8)));
    }

    #[tokio::test]
    async fn test_filter_click_never_repaints_calendar() -> Result<(), AirSightError> {
        let mut view = view();
        view.source.push(Ok(month_fetch(2025, 8, &[12.0, 30.0])));
        view.source.push(Ok(month_fetch(2025, 8, &[5.0, 6.0, 7.0, 8.0])));
        view.initialize().await;
        view.renderer_mut().take();

        let outcome = view.handle(ViewEvent::FilterSelected(TimeFilter::Weekly)).await?;
        assert!(matches!(
            outcome,
            ViewOutcome::Rendered {
                calendar: CalendarRender::Untouched,
                ..
            }
        ));
        let calls = view.renderer_mut().take();
        assert!(!calls.iter().any(|c| matches!(c, Call::Calendar { .. })));
        assert_eq!(calls.len(), 3);
        assert_eq!(view.key().filter(), TimeFilter::Weekly);
        assert_eq!(view.source.requested.borrow()[1].filter(), TimeFilter::Weekly);
        Ok(())
    }

    #[tokio::test]
    async fn test_date_submit_invalidates_even_for_same_month() -> Result<(), AirSightError> {
        let mut view = view();
        view.source.push(Ok(month_fetch(2025, 8, &[12.0])));
        view.source.push(Ok(month_fetch(2025, 8, &[13.0])));
        view.initialize().await;

        let outcome = view
            .handle(ViewEvent::DateSubmitted {
                year: 2025,
                month: 8,
            })
            .await?;
        assert!(matches!(
            outcome,
            ViewOutcome::Rendered {
                calendar: CalendarRender::Real,
                ..
            }
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_fetch_notifies_and_falls_back() {
        let mut view = view();
        view.source
            .push(Err(AirSightError::SourceUnavailable("offline".into())));

        let outcome = view.initialize().await;
        assert!(matches!(
            outcome,
            ViewOutcome::Rendered {
                chart_fallback: true,
                calendar: CalendarRender::Fallback,
                notified: true,
                ..
            }
        ));
        let calls = view.renderer_mut().take();
        assert!(matches!(&calls[0], Call::Notice(msg) if msg.contains("offline")));
        assert_eq!(calls[2], Call::Chart { len: 14, fallback: true });
        assert_eq!(
            calls[4],
            Call::Calendar {
                title: "August 2025 (Fallback)".to_string(),
                days: 31,
                fallback: true
            }
        );
    }

    #[tokio::test]
    async fn test_failed_first_load_recovers_on_next_success() -> Result<(), AirSightError> {
        let mut view = view();
        view.source
            .push(Err(AirSightError::SourceUnavailable("offline".into())));
        let mut recovered = month_fetch(2025, 8, &[5.0, 6.0, 7.0, 8.0]);
        recovered.highest_candidates = vec![HighestTile {
            pollutant: Pollutant::Pm10,
            date: "Aug 03".to_string(),
            day: Some(3),
            month_name: "August".to_string(),
            concentration: Some(88.0),
            unit: "µg/m³".to_string(),
        }];
        view.source.push(Ok(recovered));

        view.initialize().await;
        assert_eq!(view.state().phase(), ViewPhase::Uninitialized);
        assert!(view.state().cache_window().is_none());
        view.renderer_mut().take();

        let outcome = view.handle(ViewEvent::FilterSelected(TimeFilter::Weekly)).await?;
        assert!(matches!(
            outcome,
            ViewOutcome::Rendered {
                calendar: CalendarRender::Real,
                notified: false,
                ..
            }
        ));
        let calls = view.renderer_mut().take();
        assert!(calls.contains(&Call::Calendar {
            title: "August 2025".to_string(),
            days: 31,
            fallback: false
        }));
        assert_eq!(view.state().cache_window(), Some((2025, 8)));
        let pm10 = view
            .state()
            .cached_tiles()
            .map(|t| t.get(Pollutant::Pm10).clone());
        assert_eq!(pm10.and_then(|t| t.concentration), Some(88.0));
        Ok(())
    }

    #[tokio::test]
    async fn test_failure_after_ready_keeps_calendar_and_tiles() -> Result<(), AirSightError> {
        let mut view = view();
        view.source.push(Ok(month_fetch(2025, 8, &[12.0, 30.0])));
        view.source
            .push(Err(AirSightError::SourceUnavailable("offline".into())));
        view.initialize().await;
        let before = view.state().clone();
        view.renderer_mut().take();

        let outcome = view.handle(ViewEvent::FilterSelected(TimeFilter::Hourly)).await?;
        assert!(matches!(
            outcome,
            ViewOutcome::Rendered {
                chart_fallback: true,
                calendar: CalendarRender::Untouched,
                notified: true,
                ..
            }
        ));
        let calls = view.renderer_mut().take();
        assert!(matches!(&calls[0], Call::Notice(msg) if msg.contains("offline")));
        assert_eq!(calls[2], Call::Chart { len: 8, fallback: true });
        assert!(!calls.iter().any(|c| matches!(c, Call::Calendar { .. })));
        assert!(!calls.iter().any(|c| matches!(c, Call::Tiles(_))));
        assert_eq!(view.state(), &before);
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_month_leaves_view_unchanged() {
        let mut view = view();
        view.source.push(Ok(month_fetch(2025, 8, &[12.0])));
        view.initialize().await;

        let result = view
            .handle(ViewEvent::DateSubmitted {
                year: 2025,
                month: 0,
            })
            .await;
        assert!(matches!(
            result,
            Err(AirSightError::ViewKey(ViewKeyError::MonthOutOfRange(0)))
        ));
        assert_eq!(view.key().month(), 8);
        assert_eq!(view.state().cache_window(), Some((2025, 8)));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut view = view();
        let first = view.begin_initialize();
        let second = view
            .begin(ViewEvent::PollutantSelected(Pollutant::O3))
            .unwrap();

        // The newer response lands first.
        let outcome = view.complete(second, Ok(month_fetch(2025, 8, &[40.0, 41.0])));
        assert!(matches!(outcome, ViewOutcome::Rendered { .. }));
        view.renderer_mut().take();

        let late = view.complete(first, Ok(month_fetch(2025, 8, &[1.0])));
        assert_eq!(late, ViewOutcome::Discarded);
        assert!(view.renderer().calls.is_empty());
        assert_eq!(
            view.state().cached_tiles().map(|t| t.get(Pollutant::O3).concentration),
            Some(Some(41.0))
        );
    }
}
