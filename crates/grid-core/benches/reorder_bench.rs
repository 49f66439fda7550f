//! Criterion benchmarks for group-aware reordering.
//!
//! A drop recomputes the move-set and splices it back into the order list.
//! Both steps are linear in the list length; these benches keep an eye on the
//! constant factor as layouts grow.
//!
//! Run with:
//! ```bash
//! cargo bench --package grid-core --bench reorder_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use grid_core::{GridConfig, LayoutState, ModuleEdit, ModuleId, ModuleSpec, Viewport};

// ── Layout fixture builders ───────────────────────────────────────────────────

/// Creates a layout with `n` modules where every `stride`-th module joins
/// group `g1`.  A stride of 0 leaves every module ungrouped.
fn build_layout(n: usize, stride: usize) -> (LayoutState, Vec<ModuleId>) {
    let mut state = LayoutState::new(GridConfig::new(6, 2));
    let mut ids = Vec::with_capacity(n);

    for i in 0..n {
        let id = state.create_module(ModuleSpec::sized(1 + (i % 6) as i64, 1));
        if stride > 0 && i % stride == 0 {
            state
                .update_module(id, ModuleEdit::GroupId(Some("g1".to_string())))
                .expect("module was just created");
        }
        ids.push(id);
    }

    (state, ids)
}

// ── Benchmarks: single module ─────────────────────────────────────────────────

/// Moves an ungrouped module from the front to the back of the desktop list.
fn bench_reorder_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder_single");

    for &count in &[8usize, 32, 128] {
        let (mut state, ids) = build_layout(count, 0);
        let first = ids[0];

        group.bench_with_input(BenchmarkId::new("modules", count), &count, |b, &n| {
            b.iter(|| {
                state.reorder(Viewport::Desktop, black_box(first), black_box(n - 1));
                state.reorder(Viewport::Desktop, black_box(first), black_box(0));
            })
        });
    }

    group.finish();
}

// ── Benchmarks: grouped move-set ──────────────────────────────────────────────

/// Drags a member of a group spread across the whole list.
fn bench_reorder_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder_group");

    for &count in &[8usize, 32, 128] {
        let (mut state, ids) = build_layout(count, 3);
        let leader = ids[0];

        group.bench_with_input(BenchmarkId::new("modules", count), &count, |b, &n| {
            b.iter(|| {
                state.reorder(Viewport::Desktop, black_box(leader), black_box(n - 1));
                state.reorder(Viewport::Desktop, black_box(leader), black_box(1));
            })
        });
    }

    group.finish();
}

/// Mobile reorder with the lock off, which never touches the desktop list.
fn bench_reorder_mobile(c: &mut Criterion) {
    let (mut state, ids) = build_layout(32, 4);
    let leader = ids[0];

    c.bench_function("reorder_mobile_unlocked", |b| {
        b.iter(|| {
            state.reorder(Viewport::Mobile, black_box(leader), black_box(20));
            state.reorder(Viewport::Mobile, black_box(leader), black_box(1));
        })
    });
}

criterion_group!(
    benches,
    bench_reorder_single,
    bench_reorder_group,
    bench_reorder_mobile,
);
criterion_main!(benches);
