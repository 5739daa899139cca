//! Benchmarks for each pipeline stage, compared against pulldown-cmark
//!
//! Run with: cargo bench -p mdhtml-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mdhtml_core::{HtmlGenerator, Lexer, Parser};
use pulldown_cmark::{html as cmark_html, Options, Parser as CmarkParser};

/// Sample document exercising every construct
const SAMPLE: &str = r#"# Introduction

This is a paragraph with *emphasis*, **strong text**, and ***both at once***.
It demonstrates the basic capabilities of the converter.

## Lists

- First item with some content
- Second item with more content
- Third item concluding the list

1. Step one of the process
2. Step two continues
3. Step three completes

## Code

`inline code span`

```
fn fibonacci(n: u64) -> u64 {
    match n {
        0 => 0,
        1 => 1,
        _ => fibonacci(n - 1) + fibonacci(n - 2),
    }
}
```

## Links and Media

[project homepage](https://example.com/project)

![diagram](images/architecture.png)

## Quote

> The best code is no code at all
> Every line of code you write is a liability

---

End of document.
"#;

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    group.throughput(Throughput::Bytes(SAMPLE.len() as u64));

    group.bench_function("tokenize", |b| {
        b.iter(|| {
            let tokens = Lexer::new(black_box(SAMPLE)).tokenize();
            black_box(tokens.len())
        })
    });

    let tokens = Lexer::new(SAMPLE).tokenize();
    group.bench_function("parse", |b| {
        b.iter(|| {
            let doc = Parser::new(black_box(tokens.clone())).parse();
            black_box(doc.nodes.len())
        })
    });

    let document = Parser::new(Lexer::new(SAMPLE).tokenize()).parse();
    group.bench_function("render", |b| {
        b.iter(|| {
            let html = HtmlGenerator::new().render(black_box(&document));
            black_box(html.len())
        })
    });

    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    group.throughput(Throughput::Bytes(SAMPLE.len() as u64));

    group.bench_function("mdhtml", |b| {
        b.iter(|| {
            let html = mdhtml_core::to_html(black_box(SAMPLE));
            black_box(html.len())
        })
    });

    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| {
            let parser = CmarkParser::new_ext(black_box(SAMPLE), Options::all());
            let mut html = String::new();
            cmark_html::push_html(&mut html, parser);
            black_box(html.len())
        })
    });

    group.finish();
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for size in [1, 5, 10, 20].iter() {
        let content: String = SAMPLE.repeat(*size);
        group.throughput(Throughput::Bytes(content.len() as u64));

        group.bench_with_input(BenchmarkId::new("mdhtml", size), &content, |b, content| {
            b.iter(|| {
                let html = mdhtml_core::to_html(black_box(content));
                black_box(html.len())
            })
        });

        group.bench_with_input(
            BenchmarkId::new("pulldown_cmark", size),
            &content,
            |b, content| {
                b.iter(|| {
                    let parser = CmarkParser::new_ext(black_box(content), Options::all());
                    let mut html = String::new();
                    cmark_html::push_html(&mut html, parser);
                    black_box(html.len())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_stages, bench_end_to_end, bench_scaling);
criterion_main!(benches);
