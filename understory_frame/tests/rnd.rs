// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composed drag-and-resize sessions against a fake document.

mod common;

use common::{FakeDocument, at};
use kurbo::{Rect, Size};
use understory_frame::{
    Active, BoundsSpec, Cursor, Delta, Direction, MoveOutcome, PointerEvent, Position, RndConfig,
    RndController, RndHandler,
};

/// A 100x80 frame with a title bar, at the origin of a 400x400 stage.
fn stage() -> (FakeDocument, usize, usize) {
    let mut doc = FakeDocument::new(Size::new(800.0, 600.0));
    let stage = doc.add(doc.body_id(), "stage", Rect::new(0.0, 0.0, 400.0, 400.0));
    let frame = doc.add(stage, "frame", Rect::new(0.0, 0.0, 100.0, 80.0));
    let title = doc.add(frame, "title", Rect::new(0.0, 0.0, 100.0, 20.0));
    (doc, frame, title)
}

/// Owner of a controlled frame: applies every proposal and records the gestures.
#[derive(Default)]
struct Owner {
    position: Position,
    size: Size,
    log: Vec<String>,
}

impl RndHandler<usize> for Owner {
    fn on_drag(&mut self, _: &PointerEvent<usize>, _: Delta, position: Position) -> MoveOutcome {
        self.position = position;
        MoveOutcome::Apply
    }

    fn on_drag_stop(&mut self, _: &PointerEvent<usize>, _: Delta, position: Position) {
        self.log.push(format!("drag {} {}", position.left, position.top));
    }

    fn on_resize(
        &mut self,
        _: &PointerEvent<usize>,
        _: Direction,
        size: Size,
        _: Delta,
        position: Position,
    ) -> MoveOutcome {
        self.position = position;
        self.size = size;
        MoveOutcome::Apply
    }

    fn on_resize_stop(
        &mut self,
        _: &PointerEvent<usize>,
        direction: Direction,
        size: Size,
        _: Delta,
        position: Position,
    ) {
        self.log.push(format!(
            "resize {direction:?} {}x{} at {} {}",
            size.width, size.height, position.left, position.top
        ));
    }
}

#[test]
fn controlled_frame_drag_then_resize() {
    let (mut doc, frame, _) = stage();
    let mut rnd = RndController::new(RndConfig::default().with_bounds(BoundsSpec::Parent));
    let mut owner = Owner {
        size: Size::new(100.0, 80.0),
        ..Owner::default()
    };
    rnd.set_frame(owner.position, owner.size);

    let mut down = at(50.0, 40.0, frame);
    assert_eq!(
        rnd.pointer_down(&mut doc, frame, &mut down, None, &mut owner),
        Ok(Some(Active::Draggable))
    );
    rnd.pointer_move(&at(80.0, 60.0, frame), &mut owner);
    rnd.set_frame(owner.position, owner.size);
    rnd.pointer_up(&mut doc, frame, &at(80.0, 60.0, frame), &mut owner);
    assert_eq!(rnd.active(), None);
    assert_eq!(rnd.frame_style().transform.position, Position::new(30.0, 20.0));

    // The fake document moves the element along with its translate.
    doc.set_rect(frame, Rect::new(30.0, 20.0, 130.0, 100.0));
    let mut down = at(130.0, 100.0, frame);
    assert_eq!(
        rnd.pointer_down(
            &mut doc,
            frame,
            &mut down,
            Some(Direction::BottomRight),
            &mut owner
        ),
        Ok(Some(Active::Resizable))
    );
    assert!(down.is_propagation_stopped());
    rnd.pointer_move(&at(1000.0, 110.0, frame), &mut owner);
    rnd.set_frame(owner.position, owner.size);
    rnd.pointer_up(&mut doc, frame, &at(1000.0, 110.0, frame), &mut owner);

    assert_eq!(
        owner.log,
        ["drag 30 20", "resize BottomRight 370x90 at 30 20"]
    );
    assert_eq!(
        rnd.frame_style().transform.to_string(),
        "translate(30px, 20px) rotate(0deg) scale(1)"
    );
    assert_eq!(rnd.frame_style().size, Size::new(370.0, 90.0));
    assert!(!doc.listening());
}

#[test]
fn drag_handle_gates_body_presses() {
    let (mut doc, frame, title) = stage();
    let mut rnd = RndController::new(RndConfig::default().with_drag_handle("title"));
    rnd.mount(&doc, frame).unwrap();
    assert_eq!(rnd.frame_style().cursor, Cursor::Auto);

    let mut down = at(50.0, 60.0, frame);
    assert_eq!(rnd.pointer_down(&mut doc, frame, &mut down, None, &mut ()), Ok(None));

    let mut down = at(50.0, 10.0, title);
    assert_eq!(
        rnd.pointer_down(&mut doc, frame, &mut down, None, &mut ()),
        Ok(Some(Active::Draggable))
    );
}

#[test]
fn disabled_handle_falls_through_to_drag() {
    let (mut doc, frame, _) = stage();
    let mut rnd = RndController::new(RndConfig::default().with_enable_resizing(false));
    rnd.mount(&doc, frame).unwrap();
    assert!(rnd.handle_layout().is_empty());

    let mut down = at(100.0, 80.0, frame);
    assert_eq!(
        rnd.pointer_down(
            &mut doc,
            frame,
            &mut down,
            Some(Direction::BottomRight),
            &mut ()
        ),
        Ok(Some(Active::Draggable))
    );
    assert!(!down.is_propagation_stopped());
}

#[test]
fn unmount_mid_gesture_releases_the_document() {
    let (mut doc, frame, _) = stage();
    let mut rnd = RndController::new(RndConfig::default());
    rnd.mount(&doc, frame).unwrap();

    let mut down = at(10.0, 10.0, frame);
    rnd.pointer_down(&mut doc, frame, &mut down, None, &mut ())
        .unwrap();
    assert!(doc.listening());
    assert!(doc.user_select_disabled());

    rnd.unmount(&mut doc, frame);
    assert!(!doc.listening());
    assert!(!doc.user_select_disabled());
    assert_eq!(rnd.active(), None);
    assert_eq!(rnd.pointer_move(&at(20.0, 20.0, frame), &mut ()), None);
}

#[test]
fn rotated_handles_shift_their_cursors() {
    let mut rnd = RndController::<usize>::new(RndConfig::default().with_rotate(45.0));
    rnd.set_frame(Position::ORIGIN, Size::new(100.0, 100.0));
    let handles = rnd.handle_layout();
    assert_eq!(handles.len(), 8);
    let top = handles
        .iter()
        .find(|h| h.direction == Direction::Top)
        .unwrap();
    assert_eq!(top.cursor.as_css(), "nesw-resize");
    // The top handle swings right of the center line.
    assert!(top.point.x > 50.0);
}
