use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use strum::IntoEnumIterator;
use yahoozy_core::scoring::score;
use yahoozy_core::{Category, Roll};

fn setup_rolls() -> Vec<Roll> {
    let mut rng = fastrand::Rng::with_seed(42);
    (0..1000).map(|_| Roll::random(&mut rng)).collect()
}

fn bench_scoring(c: &mut Criterion) {
    let rolls = setup_rolls();

    c.bench_function("score_all_categories_1k_rolls", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for roll in &rolls {
                for category in Category::iter() {
                    acc += score(category, black_box(roll));
                }
            }
            black_box(acc)
        })
    });

    c.bench_function("score_full_house_1k_rolls", |b| {
        b.iter(|| {
            let mut acc = 0u32;
            for roll in &rolls {
                acc += score(Category::FullHouse, black_box(roll));
            }
            black_box(acc)
        })
    });
}

criterion_group!(benches, bench_scoring);
criterion_main!(benches);
