//! Criterion benchmarks for the diagram layout engine.
//!
//! The diagram is recomputed on every repaint, so [`layout`] sits on the
//! render hot path.  These benchmarks track its cost across representative
//! phone-ish viewports.
//!
//! Run with:
//! ```bash
//! cargo bench --package rota-core --bench diagram_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rota_core::diagram::cells::layout;
use rota_core::diagram::grid::GridMetrics;
use rota_core::{AreaCode, HeuristicTextMeasure};

fn bench_grid_solve(c: &mut Criterion) {
    c.bench_function("grid_solve_1080x1440", |b| {
        b.iter(|| GridMetrics::solve(black_box(1080.0), black_box(1440.0)))
    });
}

fn bench_full_layout(c: &mut Criterion) {
    let measure = HeuristicTextMeasure::default();
    let mut group = c.benchmark_group("layout");

    for (w, h) in [(720.0f32, 960.0f32), (1080.0, 1440.0), (1440.0, 1920.0)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{w}x{h}")),
            &(w, h),
            |b, &(w, h)| {
                b.iter(|| {
                    layout(
                        black_box(w),
                        black_box(h),
                        black_box(AreaCode::K),
                        &measure,
                    )
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_grid_solve, bench_full_layout);
criterion_main!(benches);
