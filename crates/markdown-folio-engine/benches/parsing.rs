use criterion::{Criterion, criterion_group, criterion_main};
use markdown_folio_engine::{RenderOptions, parse_document, render_document, render_markdown};
use pulldown_cmark::{Parser, html};
mod common;

fn bench_pulldown_cmark_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_post(100);
    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| {
            let mut out = String::new();
            html::push_html(&mut out, Parser::new(std::hint::black_box(&content)));
            std::hint::black_box(out);
        });
    });

    group.bench_function("render_markdown", |b| {
        b.iter(|| std::hint::black_box(render_markdown(std::hint::black_box(&content))));
    });

    group.finish();
}

fn bench_phases(c: &mut Criterion) {
    let mut group = c.benchmark_group("phases");
    group.sample_size(10);

    let content = common::generate_inline_heavy(500);
    group.bench_function("parse_document", |b| {
        b.iter(|| std::hint::black_box(parse_document(std::hint::black_box(&content))));
    });

    let doc = parse_document(&content);
    let options = RenderOptions::default();
    group.bench_function("render_document", |b| {
        b.iter(|| std::hint::black_box(render_document(&doc, &options)));
    });

    group.finish();
}

criterion_group!(benches, bench_pulldown_cmark_baseline, bench_phases);
criterion_main!(benches);
