//! Criterion micro-benchmarks for the fixed-point deduction passes.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use wumpus_core::Cell;
use wumpus_kb::KnowledgeBase;
use wumpus_space::GridBounds;
use wumpus_test_utils::{kb, observe, ScriptedWorld};

/// A 32×32 cave with a diagonal scatter of pits, explored along a
/// boustrophedon sweep of its pit-free cells.
fn explored(side: u32) -> (KnowledgeBase, Vec<Cell>) {
    let bounds = GridBounds::new(side, side).unwrap();
    let mut world = ScriptedWorld::new(bounds).with_monster(Cell::new(side as i32, side as i32));
    for cell in bounds.cells() {
        if cell != Cell::START && (cell.x * 7 + cell.y * 3) % 11 == 0 {
            world = world.with_pit(cell);
        }
    }
    let mut kb = kb(side, side);
    let mut visited = Vec::new();
    for x in 1..=side as i32 {
        for i in 0..side as i32 {
            let y = if x % 2 == 1 { i + 1 } else { side as i32 - i };
            let cell = Cell::new(x, y);
            if !world.is_lethal(cell) {
                observe(&mut kb, &world, cell);
                visited.push(cell);
            }
        }
    }
    (kb, visited)
}

/// Benchmark: safety propagation to convergence from scratch.
fn bench_update_safety_32(c: &mut Criterion) {
    let (kb, visited) = explored(32);
    c.bench_function("update_safety_32x32", |b| {
        b.iter(|| {
            let mut kb = kb.clone();
            black_box(kb.update_safety(&visited));
        });
    });
}

/// Benchmark: suspect refresh over every cell.
fn bench_update_kb_32(c: &mut Criterion) {
    let (mut kb, visited) = explored(32);
    kb.update_safety(&visited);
    c.bench_function("update_kb_32x32", |b| {
        b.iter(|| {
            black_box(kb.update_kb());
        });
    });
}

/// Benchmark: one full perception summary pass.
fn bench_perceptions_32(c: &mut Criterion) {
    let (mut kb, visited) = explored(32);
    kb.update_safety(&visited);
    kb.update_kb();
    c.bench_function("perceptions_32x32", |b| {
        b.iter(|| {
            black_box(kb.perceptions().count());
        });
    });
}

criterion_group!(
    benches,
    bench_update_safety_32,
    bench_update_kb_32,
    bench_perceptions_32
);
criterion_main!(benches);
