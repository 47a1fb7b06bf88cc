use countyshade::attributes::AttributeKey;
use countyshade::scorer::{compute_weight, CountyRecord, FilterSet, Scorer};
use countyshade::stats::StatsSnapshot;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use strum::IntoEnumIterator;

// Roughly the size of the U.S. county set.
const COUNTY_COUNT: usize = 3_143;

fn synthetic_counties() -> Vec<CountyRecord> {
    (0..COUNTY_COUNT)
        .map(|i| {
            AttributeKey::iter()
                .enumerate()
                .fold(CountyRecord::new(format!("{:05}", i)), |c, (k, key)| {
                    let v = ((i * 7919 + k * 104_729) % 10_000) as f64;
                    c.with(key, v)
                })
        })
        .collect()
}

fn bench_scoring(c: &mut Criterion) {
    let counties = synthetic_counties();
    let stats = StatsSnapshot::collect(&counties);
    let filters = FilterSet::midpoints(&stats);

    c.bench_function("compute_weight_single", |b| {
        b.iter(|| compute_weight(black_box(&counties[42]), black_box(&filters), &stats))
    });

    let scorer = Scorer::new(&stats, &filters).with_selected(Some("00042"));
    c.bench_function("shade_all_counties", |b| {
        b.iter(|| scorer.shade_all(black_box(&counties)).len())
    });

    c.bench_function("collect_stats", |b| {
        b.iter(|| StatsSnapshot::collect(black_box(&counties)))
    });
}

criterion_group!(benches, bench_scoring);
criterion_main!(benches);
