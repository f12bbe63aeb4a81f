// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use trellis_board::{BoardId, BoardStore, ItemId};
use trellis_drag::controller::DragController;

/// Builds a surface with `boards` boards of `items_per_board` items each.
fn build_surface(boards: usize, items_per_board: usize) -> (BoardStore, Vec<BoardId>, Vec<ItemId>) {
    let mut store = BoardStore::new();
    let mut board_ids = Vec::with_capacity(boards);
    let mut item_ids = Vec::with_capacity(boards * items_per_board);
    for b in 0..boards {
        let board = store.add_board(&format!("board {b}")).unwrap();
        board_ids.push(board);
        for i in 0..items_per_board {
            item_ids.push(store.add_item(board, &format!("item {i}")).unwrap());
        }
    }
    (store, board_ids, item_ids)
}

fn bench_apply_drag_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("board/apply_drag_move");

    // Hypothesis: moves are dominated by the linear id lookups, so cost grows
    // with total item count rather than with the distance moved.
    for items_per_board in [8_usize, 64, 256] {
        let (store, boards, items) = build_surface(8, items_per_board);
        group.throughput(Throughput::Elements(1));

        let first = items[0];
        let last_in_first = items[items_per_board - 1];
        group.bench_with_input(
            BenchmarkId::new("same_board_item", items_per_board),
            &store,
            |b, store| {
                b.iter_batched(
                    || store.clone(),
                    |mut store| {
                        store.apply_drag_move(first.into(), last_in_first.into());
                        black_box(store);
                    },
                    BatchSize::SmallInput,
                );
            },
        );

        let last_board_item = items[items.len() - 1];
        group.bench_with_input(
            BenchmarkId::new("cross_board_item", items_per_board),
            &store,
            |b, store| {
                b.iter_batched(
                    || store.clone(),
                    |mut store| {
                        store.apply_drag_move(first.into(), last_board_item.into());
                        black_box(store);
                    },
                    BatchSize::SmallInput,
                );
            },
        );

        let (first_board, last_board) = (boards[0], boards[boards.len() - 1]);
        group.bench_with_input(
            BenchmarkId::new("board_over_board", items_per_board),
            &store,
            |b, store| {
                b.iter_batched(
                    || store.clone(),
                    |mut store| {
                        store.apply_drag_move(first_board.into(), last_board.into());
                        black_box(store);
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_gesture_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag/gesture_stream");

    // A full drag session: start, one move per hovered item, end. Models the
    // per-frame event rate of a continuous pointer drag.
    for moves in [16_usize, 128, 1_024] {
        let (store, _, items) = build_surface(4, moves / 4 + 1);
        let dragged = items[0];
        let targets: Vec<_> = items[1..].iter().copied().take(moves).collect();
        group.throughput(Throughput::Elements(moves as u64));

        group.bench_with_input(BenchmarkId::new("live_reorder", moves), &store, |b, store| {
            b.iter_batched(
                || DragController::with_store(store.clone()),
                |mut controller| {
                    controller.drag_start(dragged.into());
                    for &over in &targets {
                        controller.drag_move(dragged.into(), Some(over.into()));
                    }
                    controller.drag_end();
                    black_box(controller);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_consistency_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("board/is_consistent");

    // The quadratic scan is the debug-assert path; measure where it stops
    // being cheap enough for release-mode validation.
    for total_items in [64_usize, 512, 4_096] {
        let (store, _, _) = build_surface(8, total_items / 8);
        group.throughput(Throughput::Elements(total_items as u64));

        group.bench_with_input(BenchmarkId::new("scan", total_items), &store, |b, store| {
            b.iter(|| black_box(store.is_consistent()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_apply_drag_move,
    bench_gesture_stream,
    bench_consistency_check
);
criterion_main!(benches);
