// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use understory_frame::{
    BoundsSpec, Direction, DragConfig, DragController, Host, PointerEvent, Position, ResizeConfig,
    ResizeController,
};

/// One frame inside one stage; side effects are dropped.
struct Stage;

const STAGE: usize = 0;
const FRAME: usize = 1;

impl Host for Stage {
    type Node = usize;

    fn bounding_rect(&self, node: usize) -> Rect {
        if node == FRAME {
            Rect::new(100.0, 100.0, 300.0, 250.0)
        } else {
            Rect::new(0.0, 0.0, 1920.0, 1080.0)
        }
    }

    fn layout_size(&self, node: usize) -> Size {
        self.bounding_rect(node).size()
    }

    fn transform(&self, _: usize) -> Option<String> {
        Some("matrix(1, 0, 0, 1, 0, 0)".into())
    }

    fn parent(&self, node: usize) -> Option<usize> {
        (node == FRAME).then_some(STAGE)
    }

    fn contains(&self, ancestor: usize, node: usize) -> bool {
        ancestor == node || ancestor == STAGE
    }

    fn query_selector(&self, _: Option<usize>, _: &str) -> Option<usize> {
        None
    }

    fn body(&self) -> usize {
        STAGE
    }

    fn viewport_size(&self) -> Size {
        Size::new(1920.0, 1080.0)
    }

    fn bind_document_listeners(&mut self, _: usize) {}

    fn unbind_document_listeners(&mut self, _: usize) {}

    fn set_user_select_disabled(&mut self, _: usize, _: bool) {}
}

fn path(steps: usize) -> Vec<PointerEvent<usize>> {
    (0..steps)
        .map(|i| {
            let t = i as f64;
            PointerEvent::new(Point::new(150.0 + t * 3.0, 150.0 + (t * 0.1).sin() * 40.0), FRAME)
        })
        .collect()
}

fn bench_drag_session(c: &mut Criterion) {
    let moves = path(240);
    c.bench_function("sessions/drag_240_moves_bounded", |b| {
        b.iter_batched(
            || {
                DragController::new(
                    DragConfig::default()
                        .with_bounds(BoundsSpec::Parent)
                        .with_grid([8.0, 8.0]),
                )
            },
            |mut drag| {
                let mut host = Stage;
                drag.mount(&host, FRAME).ok();
                drag.pointer_down(&mut host, FRAME, &PointerEvent::new(Point::new(150.0, 150.0), FRAME), &mut ())
                    .ok();
                for ev in &moves {
                    black_box(drag.pointer_move(ev, &mut ()));
                }
                let last = moves[moves.len() - 1];
                black_box(drag.pointer_up(&mut host, FRAME, &last, &mut ()))
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_rotated_resize_session(c: &mut Criterion) {
    let moves = path(240);
    c.bench_function("sessions/resize_240_moves_rotated", |b| {
        b.iter_batched(
            || {
                let mut resize = ResizeController::new(
                    ResizeConfig::default()
                        .with_rotate(33.0)
                        .with_min_size(Size::new(20.0, 20.0))
                        .with_aspect_ratio(true),
                );
                resize.set_frame(Position::new(10.0, 10.0), Size::new(200.0, 150.0));
                resize
            },
            |mut resize| {
                let mut host = Stage;
                let mut down = PointerEvent::new(Point::new(150.0, 150.0), FRAME);
                resize
                    .resize_start(&mut host, FRAME, Direction::BottomRight, &mut down, &mut ())
                    .ok();
                for ev in &moves {
                    black_box(resize.resize_move(ev, &mut ()));
                }
                let last = moves[moves.len() - 1];
                black_box(resize.resize_stop(&mut host, &last, &mut ()))
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_drag_session, bench_rotated_resize_session);
criterion_main!(benches);
