//! Criterion benchmarks for shell signal dispatch.
//!
//! Run with:
//!   cargo bench
//!
//! Results are saved to target/criterion/

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::json;

use neural_ir_explorer::prelude::*;
use neural_ir_explorer::shell::parse_signal_lines;

fn run_signals(n: usize) -> Vec<ShellSignal> {
    (0..n)
        .map(|i| {
            if i == n / 2 {
                ShellSignal::AllDone
            } else {
                ShellSignal::run_changed(json!({ "id": format!("run-{i}"), "score_type": "tk" }))
            }
        })
        .collect()
}

/// Dispatch a burst of signals through a fresh shell.
fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    for n in [16usize, 256, 4096].iter() {
        group.throughput(Throughput::Elements(*n as u64));
        group.bench_with_input(BenchmarkId::new("burst", n), n, |b, &n| {
            let signals = run_signals(n);
            b.iter(|| {
                let mut shell = Shell::new();
                for s in signals.iter().cloned() {
                    shell.emit(s);
                }
                black_box(shell.drain().len())
            });
        });
    }

    group.finish();
}

/// Decode a JSON-lines replay file.
fn bench_decode(c: &mut Criterion) {
    let text: String = run_signals(1024)
        .iter()
        .map(|s| serde_json::to_string(s).unwrap_or_default() + "\n")
        .collect();

    c.bench_function("decode_1024_lines", |b| {
        b.iter(|| black_box(parse_signal_lines(black_box(&text)).map(|v| v.len())))
    });
}

/// Rebuild the render tree after each view state.
fn bench_render_tree(c: &mut Criterion) {
    let cfg = ShellConfig::default();
    let mut explore = ShellState::new();
    explore.apply_all_done();

    c.bench_function("render_tree", |b| {
        b.iter(|| {
            let a = RenderTree::build(black_box(&ShellState::new()), &cfg);
            let z = RenderTree::build(black_box(&explore), &cfg);
            black_box(a.contains(Component::SplashScreen) && !z.contains(Component::SplashScreen))
        })
    });
}

criterion_group!(benches, bench_dispatch, bench_decode, bench_render_tree);
criterion_main!(benches);
