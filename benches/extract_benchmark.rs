//! Benchmarks for docx2artifact extraction and rendering.
//!
//! Run with: cargo bench

#[path = "../tests/common/mod.rs"]
mod common;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use docx2artifact::render::{render, ArtifactFormat, RenderOptions};

/// Builds a document body where every fifth paragraph is blank.
fn create_test_docx(paragraph_count: usize) -> Vec<u8> {
    let body: String = (0..paragraph_count)
        .map(|i| {
            if i % 5 == 4 {
                "<w:p/>".to_string()
            } else {
                common::paragraphs(&[&format!("Paragraph {} of the extraction benchmark.", i)])
            }
        })
        .collect();
    common::docx_with_body(&body)
}

/// Benchmark text extraction at various document sizes.
fn bench_text_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_extraction");

    for para_count in [10, 100, 500, 1000].iter() {
        let data = create_test_docx(*para_count);
        let size = data.len() as u64;

        group.throughput(Throughput::Bytes(size));
        group.bench_with_input(
            BenchmarkId::new("paragraphs", para_count),
            &data,
            |b, data| {
                b.iter(|| {
                    let _ = docx2artifact::extract_text_from_bytes(black_box(data));
                });
            },
        );
    }

    group.finish();
}

/// Benchmark rendering of extracted text into each artifact format.
fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    let data = create_test_docx(1000);
    let text = docx2artifact::extract_text_from_bytes(&data).unwrap();
    let options = RenderOptions::default();

    for format in ArtifactFormat::ALL {
        group.bench_with_input(BenchmarkId::new("format", format), &text, |b, text| {
            b.iter(|| {
                let _ = render(format, black_box(text), &options);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_text_extraction, bench_rendering);
criterion_main!(benches);
