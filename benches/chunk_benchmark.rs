//! Benchmarks for pdfchunk.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pdfchunk::{chunk_page, chunk_pages, is_heading, ChunkOptions, PageText};

/// Synthetic page text mixing headings, paragraphs, and lists.
fn synthetic_page(sections: usize) -> String {
    let mut text = String::new();
    for i in 0..sections {
        text.push_str(&format!("Section {}\n", i + 1));
        text.push_str("The device registry records every incident reported by staff.\n");
        text.push_str("Reports are reviewed weekly by the safety committee.\n");
        text.push_str("- notify the coordinator\n");
        text.push_str("\u{2022} attach the incident form\n\n");
    }
    text
}

fn bench_heading_classifier(c: &mut Criterion) {
    c.bench_function("is_heading_title", |b| {
        b.iter(|| is_heading(black_box("Medical Device Coordination")));
    });

    c.bench_function("is_heading_sentence", |b| {
        b.iter(|| is_heading(black_box("Reports are reviewed weekly by the safety committee.")));
    });
}

fn bench_chunk_page(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_page");

    for sections in [1, 10, 100].iter() {
        let text = synthetic_page(*sections);
        group.bench_function(format!("{}_sections", sections), |b| {
            b.iter(|| chunk_page(black_box(&text)));
        });
    }

    group.finish();
}

fn bench_chunk_document(c: &mut Criterion) {
    let pages: Vec<PageText> = (1..=200)
        .map(|n| PageText::new(n, synthetic_page(5)))
        .collect();

    let mut group = c.benchmark_group("chunk_pages");
    group.bench_function("parallel_200", |b| {
        let options = ChunkOptions::default();
        b.iter(|| chunk_pages(black_box(&pages), &options));
    });
    group.bench_function("sequential_200", |b| {
        let options = ChunkOptions::default().sequential();
        b.iter(|| chunk_pages(black_box(&pages), &options));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_heading_classifier,
    bench_chunk_page,
    bench_chunk_document,
);
criterion_main!(benches);
