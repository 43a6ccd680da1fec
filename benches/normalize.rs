//! Benchmarks for version normalization and keyword tag extraction.
//!
//! Both run on every build invocation; these keep an eye on the regex
//! compilation and sorting they involve.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use revstamp::keywords::{parse_keywords, versions_from_keywords, Keywords};
use revstamp::version::normalize;

const DESCRIPTORS: &[(&str, &str)] = &[
    ("exact", "v1.2.0"),
    ("dirty", "v1.2.0-dirty"),
    ("distance", "v1.2.0-5-gabc1234"),
    ("distance_dirty", "v1.2.0-5-gabc1234-dirty"),
];

const KEYWORD_FILE: &str = r#"
git_refnames = " (HEAD, tag: v2.0, tag: v2.0rc1, tag: v1.9, origin/master, master)"
git_full = "1f3c9d0a7e5b4c2d1e0f9a8b7c6d5e4f3a2b1c0d"
"#;

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for (name, descriptor) in DESCRIPTORS {
        group.bench_with_input(BenchmarkId::from_parameter(name), descriptor, |b, d| {
            b.iter(|| normalize(black_box(d)))
        });
    }
    group.finish();
}

fn bench_keywords(c: &mut Criterion) {
    c.bench_function("parse_keywords", |b| {
        b.iter(|| parse_keywords(black_box(KEYWORD_FILE)))
    });

    let keywords: Keywords = parse_keywords(KEYWORD_FILE).unwrap();
    c.bench_function("versions_from_keywords", |b| {
        b.iter(|| versions_from_keywords(black_box(&keywords), "v", false))
    });
}

criterion_group!(benches, bench_normalize, bench_keywords);
criterion_main!(benches);
