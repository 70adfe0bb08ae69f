use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_core::{CivilDate, EarthlyBranch, analyze_elements, day_pillar, four_pillars, year_pillar};

fn pillar_bench(c: &mut Criterion) {
    let date = CivilDate::new(1990, 3, 15).unwrap();

    let mut group = c.benchmark_group("pillars");
    group.bench_function("year_pillar", |b| b.iter(|| year_pillar(black_box(&date))));
    group.bench_function("day_pillar", |b| b.iter(|| day_pillar(black_box(&date))));
    group.bench_function("four_pillars", |b| {
        b.iter(|| four_pillars(black_box(&date), Some(EarthlyBranch::O)))
    });
    group.finish();
}

fn tally_bench(c: &mut Criterion) {
    let date = CivilDate::new(1990, 3, 15).unwrap();
    let fp = four_pillars(&date, Some(EarthlyBranch::O));

    let mut group = c.benchmark_group("tally");
    group.bench_function("analyze_elements", |b| {
        b.iter(|| analyze_elements(black_box(&fp)))
    });
    group.finish();
}

criterion_group!(benches, pillar_bench, tally_bench);
criterion_main!(benches);
