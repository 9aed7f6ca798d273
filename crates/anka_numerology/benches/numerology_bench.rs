//! Criterion benches for the hot numerology paths (bulk catalog ingestion
//! runs these over thousands of dates).

use anka_numerology::{expression_traced, karmic_lessons, life_path_traced};
use anka_time::DateParts;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_life_path(c: &mut Criterion) {
    c.bench_function("life_path_traced", |b| {
        b.iter(|| {
            for year in -800..2100 {
                let parts = DateParts { year, month: 7, day: 5 };
                black_box(life_path_traced(black_box(parts)));
            }
        })
    });
}

fn bench_name_numbers(c: &mut Criterion) {
    c.bench_function("expression_and_lessons", |b| {
        b.iter(|| {
            let name = black_box("Wolfgang Amadeus Mozart");
            black_box(expression_traced(name));
            black_box(karmic_lessons(name));
        })
    });
}

criterion_group!(benches, bench_life_path, bench_name_numbers);
criterion_main!(benches);
