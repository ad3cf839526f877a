// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless tracing session: reveal animation, then a simulated finger.
//!
//! This example shows how a host drives `understory_touch_path`:
//! - lay the view out and install a path from `understory_arclen::shapes`,
//! - run the reveal animation by feeding frame timestamps,
//! - replay pointer events that follow the path, printing listener callbacks,
//! - inspect the scene a renderer would draw at each stage.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example trace_session`

use std::cell::Cell;
use std::rc::Rc;

use kurbo::Size;
use understory_arclen::shapes;
use understory_touch_path::animation::{AnimationState, Linear};
use understory_touch_path::{PointerEvent, Scene, TouchPath, TouchPathConfig, TouchPathEvent};

/// Frame interval of a 60Hz display, in milliseconds.
const FRAME_MS: u64 = 16;

/// Delay before the reveal starts, in milliseconds.
const REVEAL_DELAY_MS: u64 = 500;

fn describe(scene: &Scene) -> String {
    match scene {
        Scene::Empty => "nothing".to_owned(),
        Scene::Reveal { path } => format!("reveal ({} elements)", path.elements().len()),
        Scene::Trace(trace) => format!(
            "trace: {} arrows at {:.0}% opacity, traced part {}, touching {}",
            trace.arrows.len(),
            trace.arrow_opacity * 100.0,
            if trace.traced.is_some() { "visible" } else { "empty" },
            trace.touching,
        ),
    }
}

fn main() {
    env_logger::init();

    let mut touch = TouchPath::with_config(TouchPathConfig {
        step: 0.02,
        ..TouchPathConfig::default()
    })
    .expect("valid step");
    touch.set_view_size(Size::new(1080.0, 1920.0));
    touch.set_path(shapes::heart(800.0, 800.0), true);

    let last_progress = Rc::new(Cell::new(0.0));
    let sink = Rc::clone(&last_progress);
    touch.set_listener(move |event: TouchPathEvent| match event {
        TouchPathEvent::ProgressChanged(p) => sink.set(p),
        other => println!("listener: {other:?}"),
    });

    println!("path length: {:.1}", touch.path_length());

    // Reveal animation, driven by a fake frame clock.
    let duration = touch.suggested_reveal_duration();
    let mut now = 0;
    touch.animate(duration, REVEAL_DELAY_MS, Linear, now);
    let mut frames = 0;
    while touch.is_animating() {
        now += FRAME_MS;
        frames += 1;
        let state = touch.on_frame(now);
        if frames % 20 == 0 {
            println!("t={now}ms {state:?}: {}", describe(&touch.scene()));
        }
    }
    assert_eq!(touch.animation_state(), AnimationState::Idle);
    println!("animation done after {frames} frames: {}", describe(&touch.scene()));

    // A finger that starts on the path and follows it exactly.
    let start = touch.current_position().expect("path installed");
    touch.handle_pointer(PointerEvent::down(start));
    let mut moves = 0;
    while let Some(target) = touch.next_point() {
        if touch.progress() >= 1.0 {
            break;
        }
        touch.handle_pointer(PointerEvent::moved(target));
        moves += 1;
        if moves % 10 == 0 {
            println!("progress {:.2}", last_progress.get());
        }
    }
    println!("mid-gesture: {}", describe(&touch.scene()));
    touch.handle_pointer(PointerEvent::up(touch.current_position().unwrap_or(start)));

    println!(
        "traced {:.0}% in {moves} moves, final position {:?}",
        touch.progress() * 100.0,
        touch.current_position(),
    );

    touch.reset();
    println!("after reset: progress {}", touch.progress());
}
