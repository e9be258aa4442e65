//! Benchmarks for blockdown assembly performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks test resolution, rendering, and full assembly at
//! various document sizes.

use blockdown::{
    render_body, resolve_blocks, resolve_properties, Post, RawBlock, RawProperties, RenderOptions,
};
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Creates a synthetic raw block sequence mixing paragraphs, headings, and
/// list runs.
fn create_raw_blocks(block_count: usize) -> Vec<RawBlock> {
    let mut records = Vec::with_capacity(block_count);
    for i in 0..block_count {
        let block_type = match i % 5 {
            0 => "heading_2",
            1 | 2 => "bulleted_list_item",
            3 => "numbered_list_item",
            _ => "paragraph",
        };
        let json = format!(
            r#"{{"id": "block-{i}", "type": "{block_type}",
                "rich_text": [{{"plain_text": "Benchmark content for block {i} with enough text to be realistic."}}]}}"#,
        );
        records.push(serde_json::from_str(&json).unwrap());
    }
    records
}

fn create_raw_properties() -> RawProperties {
    serde_json::from_str(
        r#"{"title": "Benchmark Post", "description": "Synthetic post for benchmarking",
            "tags": ["bench"], "category": "testing"}"#,
    )
    .unwrap()
}

/// Benchmark raw record resolution at various sizes.
fn bench_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolution");

    for block_count in [10, 100, 500].iter() {
        let records = create_raw_blocks(*block_count);
        group.bench_with_input(
            BenchmarkId::new("blocks", block_count),
            &records,
            |b, records| {
                b.iter(|| {
                    let _ = resolve_blocks(black_box(records));
                });
            },
        );
    }

    group.finish();
}

/// Benchmark body rendering with the separator policy.
fn bench_body_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("body_rendering");

    for block_count in [10, 100, 500].iter() {
        let blocks = resolve_blocks(&create_raw_blocks(*block_count)).unwrap();
        group.bench_with_input(
            BenchmarkId::new("blocks", block_count),
            &blocks,
            |b, blocks| {
                b.iter(|| {
                    let options = RenderOptions::default();
                    let _ = render_body(black_box(blocks), &options);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark full assembly: validation, frontmatter, body, normalization.
fn bench_full_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_assembly");
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    for block_count in [10, 100, 500].iter() {
        let blocks = resolve_blocks(&create_raw_blocks(*block_count)).unwrap();
        let properties = resolve_properties(&create_raw_properties(), date);

        group.bench_with_input(
            BenchmarkId::new("blocks", block_count),
            &(blocks, properties),
            |b, (blocks, properties)| {
                b.iter(|| {
                    let options = RenderOptions::default();
                    let _ = Post::assemble("bench-page", black_box(blocks), properties, &options);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_resolution,
    bench_body_rendering,
    bench_full_assembly,
);
criterion_main!(benches);
