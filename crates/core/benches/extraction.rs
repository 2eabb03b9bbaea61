use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lede_core::{Document, default_noise, extract_html, resolve_content, resolve_date, resolve_title};

fn fixture() -> String {
    std::fs::read_to_string("../../tests/fixtures/article.html").unwrap()
}

fn bench_parse(c: &mut Criterion) {
    let html = fixture();
    c.bench_function("parse", |b| b.iter(|| Document::parse(black_box(&html))));
}

fn bench_strip_noise(c: &mut Criterion) {
    let doc = Document::parse(&fixture()).unwrap();
    let noise = default_noise();
    c.bench_function("strip_noise", |b| b.iter(|| black_box(&doc).without_noise(&noise)));
}

fn bench_resolvers(c: &mut Criterion) {
    let html = fixture();
    let doc = Document::parse(&html).unwrap();
    let clean = doc.without_noise(&default_noise());

    let mut group = c.benchmark_group("resolve");
    group.bench_function("title", |b| b.iter(|| resolve_title(black_box(&doc))));
    group.bench_function("date", |b| b.iter(|| resolve_date(black_box(&doc))));
    group.bench_function("content", |b| b.iter(|| resolve_content(black_box(&clean))));
    group.finish();
}

fn bench_full_extraction(c: &mut Criterion) {
    let html = fixture();
    c.bench_function("full_extraction", |b| b.iter(|| extract_html(black_box(&html))));
}

criterion_group!(benches, bench_parse, bench_strip_noise, bench_resolvers, bench_full_extraction);
criterion_main!(benches);
