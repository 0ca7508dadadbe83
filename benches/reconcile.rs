use airsight::{
    CalendarCell, FetchResult, Pollutant, SeriesPoint, TimeFilter, ViewKey, ViewState,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn month_fetch() -> FetchResult {
    FetchResult {
        series: Some(
            (1..=31)
                .map(|d| SeriesPoint::new(format!("Aug {:02}", d), (d * 7 % 60) as f64))
                .collect(),
        ),
        highest_candidates: Vec::new(),
        calendar_cells: Some(
            (1..=31)
                .map(|day| CalendarCell {
                    day,
                    aqi: 50.0,
                    main_pollutant: "PM2.5".to_string(),
                })
                .collect(),
        ),
        month_year: None,
    }
}

fn bench_reconcile(c: &mut Criterion) {
    let daily = ViewKey::new(2025, 8, Pollutant::Pm25, TimeFilter::Daily).unwrap();
    let weekly = daily.with_filter(TimeFilter::Weekly);
    let fetch = month_fetch();
    let ready = ViewState::new().reconcile(&daily, fetch.clone()).state;

    c.bench_function("reconcile_refresh", |b| {
        b.iter(|| ViewState::new().reconcile(black_box(&daily), black_box(fetch.clone())))
    });
    c.bench_function("reconcile_filter_only", |b| {
        b.iter(|| ready.clone().reconcile(black_box(&weekly), black_box(fetch.clone())))
    });
}

criterion_group!(benches, bench_reconcile);
criterion_main!(benches);
