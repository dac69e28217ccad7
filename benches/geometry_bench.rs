// Benchmark for the per-frame geometry hot path
// Measures snapping, span computation and resize validation

use chrono::{Duration, Local, TimeZone};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use resource_scheduler::geometry::{compute_span, round_to_nearest_minutes};
use resource_scheduler::interaction::{GestureRules, ResizeContext, ResizeHandle};
use resource_scheduler::models::event::Event;
use resource_scheduler::models::settings::SchedulerSettings;

fn bench_snapping(c: &mut Criterion) {
    let instant = Local.with_ymd_and_hms(2025, 1, 10, 9, 7, 0).unwrap();
    let mut group = c.benchmark_group("round_to_nearest_minutes");

    for minutes in [1i64, 15, 60].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(minutes), minutes, |b, &m| {
            b.iter(|| round_to_nearest_minutes(black_box(instant), black_box(m)));
        });
    }

    group.finish();
}

fn bench_spans(c: &mut Criterion) {
    let start = Local.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap();
    let events: Vec<_> = (0..500)
        .map(|i| (start, start + Duration::minutes(30 + i * 17)))
        .collect();

    c.bench_function("compute_span_500_events", |b| {
        b.iter(|| {
            events
                .iter()
                .map(|(s, e)| compute_span(black_box(*s), black_box(*e)).width_days)
                .sum::<f64>()
        });
    });
}

fn bench_resize_drag(c: &mut Criterion) {
    let start = Local.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap();
    let mut event = Event::new("a", "Bench", start, start + Duration::days(3)).unwrap();
    event.id = Some(1);
    let rules = GestureRules::from_settings(&SchedulerSettings::default()).unwrap();

    // One pointer sweep across two days, as a user would drag a handle
    c.bench_function("resize_sweep_200_moves", |b| {
        b.iter(|| {
            let context = ResizeContext::new(&event, ResizeHandle::Right, 0.0).unwrap();
            for step in 0..200 {
                black_box(context.propose(-(step as f32), &rules));
            }
        });
    });
}

criterion_group!(benches, bench_snapping, bench_spans, bench_resize_drag);
criterion_main!(benches);
