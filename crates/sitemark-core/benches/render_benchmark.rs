//! Benchmarks comparing SiteMark rendering against pulldown-cmark
//!
//! Run with: cargo bench -p sitemark-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pulldown_cmark::{html, Options, Parser as MdParser};

/// Sample document in the SiteMark dialect, which pulldown-cmark also reads.
const SAMPLE: &str = r#"# Introduction

This is a paragraph with _emphasis_, **strong text**, and `inline code`.
It links to [the docs](https://example.com/docs) and shows ![a logo](/logo.png).

## Lists

- First item with some content
- Second item with **more** content
- Third item concluding the list

1. Step one of the process
2. Step two continues
3. Step three completes

## Code Example

```
fn fibonacci(n: u64) -> u64 {
    match n {
        0 => 0,
        1 => 1,
        n => fibonacci(n - 1) + fibonacci(n - 2),
    }
}
```

## Quote

> The best code is no code at all.
> Every line of code you write is a liability.

End of document.
"#;

fn render_pulldown(input: &str) -> String {
    let parser = MdParser::new_ext(input, Options::empty());
    let mut out = String::with_capacity(input.len() * 2);
    html::push_html(&mut out, parser);
    out
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    group.throughput(Throughput::Bytes(SAMPLE.len() as u64));

    group.bench_function("sitemark", |b| {
        b.iter(|| {
            let html = sitemark_core::render_document(black_box(SAMPLE)).unwrap();
            black_box(html.len())
        })
    });

    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| black_box(render_pulldown(black_box(SAMPLE)).len()))
    });

    group.finish();
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for size in [1, 5, 10, 20].iter() {
        let content: String = SAMPLE.repeat(*size);

        group.throughput(Throughput::Bytes(content.len() as u64));

        group.bench_with_input(BenchmarkId::new("sitemark", size), &content, |b, content| {
            b.iter(|| {
                let html = sitemark_core::render_document(black_box(content)).unwrap();
                black_box(html.len())
            })
        });

        group.bench_with_input(
            BenchmarkId::new("pulldown_cmark", size),
            &content,
            |b, content| b.iter(|| black_box(render_pulldown(black_box(content)).len())),
        );
    }

    group.finish();
}

fn bench_inline_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline");

    let inline =
        "This has _emphasis_, **strong**, `code`, [link](https://example.com), and ![img](/i.png).";

    group.bench_function("sitemark_inline", |b| {
        b.iter(|| {
            let fragments = sitemark_core::inline::parse_inlines(black_box(inline)).unwrap();
            black_box(fragments.len())
        })
    });

    group.bench_function("pulldown_cmark_inline", |b| {
        b.iter(|| {
            let parser = MdParser::new_ext(black_box(inline), Options::empty());
            let events: Vec<_> = parser.collect();
            black_box(events.len())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_render, bench_scaling, bench_inline_parsing);
criterion_main!(benches);
