use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use crashcourse::schedule::{Day, slots_for_day};
use crashcourse::traffic::{BuildingRecord, FilteredView, filter_records};

const BUILDINGS_PER_SLOT: usize = 120;

fn synthetic_buildings() -> Vec<BuildingRecord> {
    let mut records = Vec::new();
    for day in Day::ALL {
        for &slot in slots_for_day(day) {
            for i in 0..BUILDINGS_PER_SLOT {
                records.push(BuildingRecord {
                    building_name: format!("Building {i}"),
                    day,
                    time_slot: slot.to_string(),
                    latitude: 30.61 + i as f64 * 1e-4,
                    longitude: -96.34 - i as f64 * 1e-4,
                    proportion_of_total_students: 0.001 * (i % 50) as f64,
                });
            }
        }
    }
    records
}

fn bench_filter(c: &mut Criterion) {
    let records = synthetic_buildings();
    let mut group = c.benchmark_group("filter_records");
    for (day, slot) in [(Day::Monday, "8:00-8:50"), (Day::Thursday, "14:20-15:35")] {
        group.bench_with_input(
            BenchmarkId::new(day.name(), slot),
            &(day, slot),
            |b, &(day, slot)| b.iter(|| black_box(filter_records(&records, day, slot))),
        );
    }
    group.finish();
}

fn bench_view_refresh(c: &mut Criterion) {
    let records = synthetic_buildings();
    c.bench_function("filtered_view_sweep_week", |b| {
        b.iter(|| {
            let mut view = FilteredView::default();
            let mut shown = 0usize;
            for day in Day::ALL {
                for &slot in slots_for_day(day) {
                    view.refresh(&records, 1, day, slot);
                    shown += view.len();
                }
            }
            black_box(shown)
        })
    });
}

criterion_group!(benches, bench_filter, bench_view_refresh);
criterion_main!(benches);
