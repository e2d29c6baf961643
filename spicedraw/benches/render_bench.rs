use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spicedraw::{SpiceParser, SpicedrawCore};
use std::fmt::Write;

/// Build a synthetic RC ladder with a shared supply rail.
fn synthetic_netlist(stages: usize) -> String {
    let mut text = String::from("Bench Ladder\nV1 VCC 0 DC 5\n");
    for i in 0..stages {
        let _ = writeln!(text, "R{i} VCC N{i} 10k");
        let _ = writeln!(text, "C{i} N{i} 0 100n");
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let text = synthetic_netlist(50);
    c.bench_function("parse_100_components", |b| {
        b.iter(|| SpiceParser::parse(black_box(&text)));
    });
}

fn bench_render(c: &mut Criterion) {
    let netlist = SpiceParser::parse(&synthetic_netlist(50));
    c.bench_function("render_100_components", |b| {
        b.iter(|| SpicedrawCore::render_to_string(black_box(&netlist)));
    });
}

criterion_group!(benches, bench_parse, bench_render);
criterion_main!(benches);
