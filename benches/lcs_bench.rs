//! Criterion benchmarks for LCS matrix fill, traceback and aggregation.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lcs_plagiarism::align::{fill_lcs_matrix, find_lcs};
use lcs_plagiarism::compare::accumulate_diff_stats;
use lcs_plagiarism::models::TokenSequence;

fn words(prefix: &str, size: usize) -> TokenSequence {
    (0..size).map(|i| format!("{}{}", prefix, i)).collect()
}

fn bench_lcs(c: &mut Criterion) {
    // Sentence lengths in tokens
    let sizes = [10, 50, 200];

    let mut group = c.benchmark_group("lcs");

    for size in sizes {
        // Identical sentences (longest traceback)
        let seq = words("w", size);

        group.bench_with_input(BenchmarkId::new("fill_identical", size), &size, |b, _| {
            b.iter(|| fill_lcs_matrix(black_box(&seq), black_box(&seq)))
        });

        // 70% match (typical case)
        let seq_partial: TokenSequence = (0..size)
            .map(|i| if i % 10 < 7 { format!("w{}", i) } else { format!("x{}", i) })
            .collect();

        group.bench_with_input(BenchmarkId::new("fill_70pct_match", size), &size, |b, _| {
            b.iter(|| fill_lcs_matrix(black_box(&seq), black_box(&seq_partial)))
        });

        let matrix = fill_lcs_matrix(&seq, &seq_partial);
        group.bench_with_input(BenchmarkId::new("traceback_70pct_match", size), &size, |b, _| {
            b.iter(|| find_lcs(black_box(&seq), black_box(&seq_partial), &matrix))
        });

        // No match
        let seq_nomatch = words("y", size);

        group.bench_with_input(BenchmarkId::new("fill_no_match", size), &size, |b, _| {
            b.iter(|| fill_lcs_matrix(black_box(&seq), black_box(&seq_nomatch)))
        });
    }

    group.finish();
}

fn bench_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("documents");

    // Number of lines, 20 tokens each
    let line_counts = [10, 100, 1000];

    for lines in line_counts {
        let original: Vec<TokenSequence> = (0..lines).map(|_| words("w", 20)).collect();
        let suspicious: Vec<TokenSequence> = (0..lines)
            .map(|l| {
                (0..20)
                    .map(|i| if (i + l) % 4 == 0 { format!("x{}", i) } else { format!("w{}", i) })
                    .collect()
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("accumulate", lines), &lines, |b, _| {
            b.iter(|| accumulate_diff_stats(black_box(&original), black_box(&suspicious), 0.3))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lcs, bench_documents);
criterion_main!(benches);
