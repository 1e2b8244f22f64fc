//! Keyword analysis benchmarks
//!
//! Run with: cargo bench -p listingguard-keywords

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;
use tokio::runtime::Runtime;

use listingguard_keywords::levenshtein::levenshtein_distance;
use listingguard_keywords::{KeywordIntelligence, MemoryStore};

fn prohibited_terms(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("prohibited term number {}", i))
        .collect()
}

fn benchmark_levenshtein(c: &mut Criterion) {
    let mut group = c.benchmark_group("Levenshtein");

    let cases = vec![
        ("short", "kitten", "sitting"),
        ("medium", "stainless steel water bottle", "stainless steal watter bottle"),
        (
            "long",
            "organic cotton baby blanket with hypoallergenic fill",
            "organic cotton baby blanket w/ hypoallergenic filling",
        ),
    ];

    for (name, a, b) in cases {
        group.bench_with_input(BenchmarkId::new("distance", name), &(a, b), |bench, (a, b)| {
            bench.iter(|| levenshtein_distance(black_box(a), black_box(b)));
        });
    }

    group.finish();
}

fn benchmark_single_keyword(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let engine =
        KeywordIntelligence::new(Arc::new(MemoryStore::new(prohibited_terms(500)))).unwrap();

    let cases = vec![
        ("exact", "prohibited term number 42"),
        ("fuzzy", "prohibited term numbr 42"),
        ("pattern", "best selling garlic press"),
        ("clean", "stainless steel garlic press"),
    ];

    let mut group = c.benchmark_group("Single_Keyword");
    group.sample_size(50);

    for (name, keyword) in cases {
        group.bench_with_input(BenchmarkId::new("analyze", name), &keyword, |b, keyword| {
            b.iter(|| rt.block_on(async { engine.analyze_keyword(black_box(keyword)).await.unwrap() }));
        });
    }

    group.finish();
}

fn benchmark_batch(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let engine =
        KeywordIntelligence::new(Arc::new(MemoryStore::new(prohibited_terms(500)))).unwrap();

    let mut group = c.benchmark_group("Batch");
    group.sample_size(20);

    for size in [10usize, 100, 500] {
        let keywords: Vec<String> = (0..size)
            .map(|i| format!("kitchen gadget variant {}", i))
            .collect();

        group.bench_with_input(BenchmarkId::new("analyze_batch", size), &keywords, |b, keywords| {
            b.iter(|| rt.block_on(async { engine.analyze_batch(black_box(keywords)).await.unwrap() }));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_levenshtein,
    benchmark_single_keyword,
    benchmark_batch
);
criterion_main!(benches);
