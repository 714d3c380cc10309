//! Benchmarks for parsing, planning and rewriting Swift sources.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use std::path::Path;
use swiftorder::{parse_source, plan_file, reorder_source, OrderingRule, StructuralRewriter};

/// A file of `types` classes, each with members in reverse of the default order.
fn generate_source(types: usize) -> String {
    let mut source = String::from("import Foundation\n\n");
    for t in 0..types {
        source.push_str(&format!(
            r#"/// Type {t}.
final class Model{t} {{
    deinit {{}}

    // Accessors
    subscript(index: Int) -> Int {{ index }}

    func update(value: Int) {{
        self.value = value
    }}

    static func make() -> Model{t} {{ Model{t}() }}

    struct Snapshot {{
        func copy() -> Snapshot {{ self }}
        var value = 0
    }}

    private var value = 0
    @Published var title = ""
    static let shared = Model{t}()

    init() {{}}
    typealias ID = Int
}}

"#
        ));
    }
    source
}

fn bench_reorder(c: &mut Criterion) {
    let rules = OrderingRule::default_rules();
    let mut group = c.benchmark_group("reorder_source");

    for types in [1, 10, 100] {
        let source = generate_source(types);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(types), &source, |b, source| {
            b.iter(|| reorder_source(black_box(source), Path::new("Bench.swift"), &rules));
        });
    }
    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let rules = OrderingRule::default_rules();
    let source = generate_source(50);
    let path = Path::new("Bench.swift");

    c.bench_function("parse", |b| {
        b.iter(|| parse_source(black_box(&source), path));
    });

    let ast = match parse_source(&source, path) {
        Ok(ast) => ast,
        Err(e) => panic!("benchmark source failed to parse: {}", e),
    };
    c.bench_function("plan", |b| {
        b.iter(|| plan_file(black_box(&ast), &rules));
    });

    let plans = plan_file(&ast, &rules);
    c.bench_function("rewrite", |b| {
        b.iter(|| StructuralRewriter::new(&plans).rewrite(black_box(&ast)));
    });
}

criterion_group!(benches, bench_reorder, bench_stages);
criterion_main!(benches);
