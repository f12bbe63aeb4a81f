// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless walkthrough of the Trellis event contract.
//!
//! Plays the part of a rendering host: it creates a small kanban surface,
//! feeds scripted drag gestures into the controller the way a gesture
//! recognizer would, and prints the surface after each change. The store
//! revision stands in for the host's "do I need to re-render?" check.

use trellis_board::BoardStore;
use trellis_drag::controller::DragController;

fn print_surface(store: &BoardStore) {
    for board in store {
        print!("  [{}]", board.title());
        for item in board.items() {
            print!(" {}", item.title());
        }
        println!();
    }
}

fn main() {
    let mut controller = DragController::new();

    let todo = controller.add_board("Todo").unwrap();
    let doing = controller.add_board("Doing").unwrap();
    let done = controller.add_board("Done").unwrap();

    let write = controller.add_item(todo, "write").unwrap();
    let review = controller.add_item(todo, "review").unwrap();
    let ship = controller.add_item(doing, "ship").unwrap();

    println!("initial surface (revision {}):", controller.store().revision());
    print_surface(controller.store());

    // Drag "write" out of Todo, across "ship", and drop it on Done. Each move
    // is applied live; the end of the gesture commits nothing further.
    let gestures = [Some(ship.into()), Some(done.into()), None];
    controller.drag_start(write.into());
    println!(
        "\ndragging '{}' ...",
        controller.item_title(write)
    );
    let mut last_revision = controller.store().revision();
    for over in gestures {
        if controller.drag_move(write.into(), over).is_some() {
            last_revision = controller.store().revision();
            println!("after move (revision {last_revision}):");
            print_surface(controller.store());
        }
    }
    controller.drag_end();
    assert_eq!(controller.store().revision(), last_revision);

    // Reorder the boards themselves: Done takes Todo's slot.
    controller.drag_start(done.into());
    controller.drag_move(done.into(), Some(todo.into()));
    controller.drag_end();

    println!("\nafter board reorder (revision {}):", controller.store().revision());
    print_surface(controller.store());

    // "review" is still resolvable wherever it lives now.
    let owner = controller.store().owner_of(review).unwrap();
    println!("\n'{}' lives on [{}]", controller.item_title(review), owner.title());
}
