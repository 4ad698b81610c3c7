//! Variant expansion micro-benchmarks: mage construction cost as the number
//! of random tokens grows, and catalog matching over a built mage.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use magelore::data::{SpellMode, SpellRecord};
use magelore::magic::matcher::only_castable;
use magelore::Mage;

fn catalog() -> Vec<SpellRecord> {
    let requirements = [
        ("F", ""),
        ("FF", ""),
        ("W", "E"),
        ("FFF", "W"),
        ("E", ""),
        ("S", "D"),
        ("N", ""),
        ("", ""),
    ];
    requirements
        .iter()
        .enumerate()
        .map(|(index, (path1, path2))| SpellRecord {
            name: format!("bench spell {index}"),
            path1: path1.to_string(),
            path2: path2.to_string(),
            mode: SpellMode::Combat,
            hash: format!("s{index}"),
            mage: None,
            level: None,
            boosts: None,
        })
        .collect()
}

fn bench_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("variants");

    group.bench_function("prefix_only", |b| {
        b.iter(|| Mage::new("bench", black_box("FWWEEE"), 390).unwrap())
    });

    group.bench_function("two_random_tokens", |b| {
        b.iter(|| Mage::new("bench", black_box("FWWEEE,100FWE,10FWE"), 390).unwrap())
    });

    group.bench_function("four_random_tokens", |b| {
        b.iter(|| Mage::new("bench", black_box("FWWEEE,100FWE,10FWE,10FEDN,25SD*2"), 390).unwrap())
    });

    group.finish();
}

fn bench_matching(c: &mut Criterion) {
    let spells = catalog();
    let mage = Mage::new("bench", "FWWEEE,100FWE,10FWE", 390).unwrap();

    c.bench_function("only_castable_per_variant", |b| {
        b.iter(|| {
            for variant in &mage.variants {
                black_box(only_castable(&variant.paths, &spells));
            }
        })
    });
}

criterion_group!(benches, bench_variants, bench_matching);
criterion_main!(benches);
