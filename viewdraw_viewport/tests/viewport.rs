// Copyright 2025 the Viewdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport behaviour driven through synthetic input and a manual clock.

use kurbo::{Point, Rect};
use viewdraw_viewport::{
    DragPhase, EventKind, HeadlessInput, InputEvent, ListenerScope, ManualClock, PointerEvent,
    Viewport,
};

fn down(id: u64, x: f64, y: f64) -> InputEvent {
    InputEvent::PointerDown(PointerEvent::new(id, Point::new(x, y)))
}

fn moved(id: u64, x: f64, y: f64) -> InputEvent {
    InputEvent::PointerMove(PointerEvent::new(id, Point::new(x, y)))
}

fn up(id: u64, x: f64, y: f64) -> InputEvent {
    InputEvent::PointerUp(PointerEvent::new(id, Point::new(x, y)))
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

fn setup(clock: &ManualClock) -> (Viewport<&ManualClock>, HeadlessInput) {
    let mut input = HeadlessInput::new(Rect::new(10.0, 20.0, 410.0, 320.0));
    let mut viewport = Viewport::new(clock);
    viewport.attach(&mut input);
    (viewport, input)
}

#[test]
fn attach_and_detach_are_symmetric() {
    let clock = ManualClock::default();
    let mut input = HeadlessInput::default();
    let mut viewport = Viewport::new(&clock);

    viewport.attach(&mut input);
    viewport.attach(&mut input);
    assert!(viewport.is_attached());
    assert!(input.captures_gestures());
    assert_eq!(input.listeners().len(), 4);
    assert!(
        input
            .listeners()
            .contains(&(ListenerScope::Window, EventKind::PointerUp))
    );

    viewport.detach(&mut input);
    viewport.detach(&mut input);
    assert!(!viewport.is_attached());
    assert!(input.listeners().is_empty());
    assert!(!input.captures_gestures());
}

#[test]
fn detached_viewport_ignores_input() {
    let clock = ManualClock::default();
    let input = HeadlessInput::default();
    let mut viewport = Viewport::new(&clock);
    let response = viewport.handle_event(&input, &InputEvent::Wheel { delta_y: -1000.0 });
    assert!(!response.prevent_default);
    assert_eq!(viewport.state().zoom, 1.0);
}

#[test]
fn single_pointer_pans_against_the_pointer() {
    let clock = ManualClock::default();
    let (mut viewport, input) = setup(&clock);

    viewport.handle_event(&input, &down(1, 110.0, 120.0));
    viewport.handle_event(&input, &moved(1, 130.0, 110.0));
    assert_eq!(viewport.update().center, Point::new(-20.0, 10.0));

    clock.advance(100.0);
    viewport.handle_event(&input, &up(1, 130.0, 110.0));
    assert_eq!(viewport.update().center, Point::new(-20.0, 10.0));
}

#[test]
fn pan_distance_shrinks_with_zoom() {
    let clock = ManualClock::default();
    let (mut viewport, input) = setup(&clock);
    viewport.set_zoom(4.0);

    viewport.handle_event(&input, &down(1, 100.0, 100.0));
    viewport.handle_event(&input, &moved(1, 140.0, 100.0));
    assert_eq!(viewport.update().center, Point::new(-10.0, 0.0));
}

#[test]
fn wheel_zoom_is_exponential() {
    let clock = ManualClock::default();
    let (mut viewport, input) = setup(&clock);

    let response = viewport.handle_event(&input, &InputEvent::Wheel { delta_y: -500.0 });
    assert!(response.prevent_default);
    let z1 = viewport.state().zoom;
    viewport.handle_event(&input, &InputEvent::Wheel { delta_y: -500.0 });
    let z2 = viewport.state().zoom;
    assert_close(z1, 2.0_f64.sqrt());
    assert_close(z2 / z1, z1);

    viewport.handle_event(&input, &InputEvent::Wheel { delta_y: 1000.0 });
    assert_close(viewport.state().zoom, 1.0);
}

#[test]
fn pinch_scales_zoom_by_distance_ratio() {
    let clock = ManualClock::default();
    let (mut viewport, input) = setup(&clock);
    viewport.set_zoom(1.5);

    viewport.handle_event(&input, &down(1, 100.0, 100.0));
    viewport.handle_event(&input, &down(2, 200.0, 100.0));
    assert!(viewport.is_pinching());

    viewport.handle_event(&input, &moved(2, 300.0, 100.0));
    assert_close(viewport.state().zoom, 1.5 * 200.0 / 100.0);

    viewport.handle_event(&input, &moved(1, 250.0, 100.0));
    assert_close(viewport.state().zoom, 1.5 * 50.0 / 100.0);

    // Pinching never pans.
    assert_eq!(viewport.update().center, Point::ORIGIN);
}

#[test]
fn new_pinch_recalibrates_from_scratch() {
    let clock = ManualClock::default();
    let (mut viewport, input) = setup(&clock);

    viewport.handle_event(&input, &down(1, 100.0, 100.0));
    viewport.handle_event(&input, &down(2, 200.0, 100.0));
    viewport.handle_event(&input, &moved(2, 300.0, 100.0));
    assert_close(viewport.state().zoom, 2.0);

    // Lift one finger and put another down far away.
    viewport.handle_event(&input, &up(2, 300.0, 100.0));
    assert!(viewport.is_pinching());
    viewport.handle_event(&input, &down(3, 400.0, 100.0));
    viewport.handle_event(&input, &moved(3, 400.0, 100.0));
    assert_close(viewport.state().zoom, 2.0);
    viewport.handle_event(&input, &moved(3, 700.0, 100.0));
    assert_close(viewport.state().zoom, 2.0 * 600.0 / 300.0);

    viewport.handle_event(&input, &up(1, 100.0, 100.0));
    viewport.handle_event(&input, &up(3, 700.0, 100.0));
    assert!(!viewport.is_pinching());
    assert_eq!(viewport.pointer_count(), 0);
}

#[test]
fn second_pointer_stops_drag_without_flick() {
    let clock = ManualClock::default();
    let (mut viewport, input) = setup(&clock);

    viewport.handle_event(&input, &down(1, 100.0, 100.0));
    clock.advance(16.0);
    viewport.handle_event(&input, &moved(1, 120.0, 100.0));
    viewport.handle_event(&input, &down(2, 300.0, 100.0));

    assert_eq!(viewport.dragger().phase(), DragPhase::Idle);
    let before = viewport.update().center;
    clock.advance(16.0);
    assert_eq!(viewport.update().center, before);
    assert_eq!(before, Point::new(-20.0, 0.0));
}

#[test]
fn quick_release_coasts_and_settles() {
    let clock = ManualClock::default();
    let (mut viewport, input) = setup(&clock);
    viewport.update();

    viewport.handle_event(&input, &down(1, 200.0, 100.0));
    clock.advance(16.0);
    viewport.handle_event(&input, &moved(1, 205.0, 100.0));
    viewport.handle_event(&input, &up(1, 205.0, 100.0));
    assert_eq!(viewport.dragger().phase(), DragPhase::Coasting);

    let released = viewport.update().center;
    let mut last = released;
    for _ in 0..1000 {
        clock.advance(16.0);
        let center = viewport.update().center;
        // Momentum keeps moving against the pointer.
        assert!(center.x <= last.x);
        last = center;
    }
    assert!(last.x < released.x);
    assert_eq!(viewport.dragger().phase(), DragPhase::Idle);
}

#[test]
fn lingering_release_does_not_flick() {
    let clock = ManualClock::default();
    let (mut viewport, input) = setup(&clock);

    viewport.handle_event(&input, &down(1, 200.0, 100.0));
    clock.advance(16.0);
    viewport.handle_event(&input, &moved(1, 240.0, 100.0));
    clock.advance(80.0);
    viewport.handle_event(&input, &up(1, 240.0, 100.0));

    let rest = viewport.update().center;
    clock.advance(16.0);
    assert_eq!(viewport.update().center, rest);
    assert_eq!(rest, Point::new(-40.0, 0.0));
}

#[test]
fn touching_fingers_keep_the_last_zoom() {
    let clock = ManualClock::default();
    let (mut viewport, input) = setup(&clock);

    viewport.handle_event(&input, &down(1, 100.0, 100.0));
    viewport.handle_event(&input, &down(2, 200.0, 100.0));
    viewport.handle_event(&input, &moved(2, 150.0, 100.0));
    assert_close(viewport.state().zoom, 0.5);
    viewport.handle_event(&input, &moved(2, 100.0, 100.0));
    assert_close(viewport.state().zoom, 0.5);
    viewport.handle_event(&input, &up(2, 100.0, 100.0));
    viewport.handle_event(&input, &up(1, 100.0, 100.0));

    // A later pan still divides by a usable zoom.
    viewport.handle_event(&input, &down(1, 100.0, 100.0));
    clock.advance(16.0);
    viewport.handle_event(&input, &moved(1, 110.0, 100.0));
    clock.advance(16.0);
    viewport.handle_event(&input, &up(1, 110.0, 100.0));
    let mut steps = 0;
    while viewport.dragger().phase() == DragPhase::Coasting {
        clock.advance(16.0);
        let center = viewport.update().center;
        assert!(center.x.is_finite() && center.y.is_finite());
        steps += 1;
        assert!(steps < 10_000);
    }
    assert!(viewport.state().center.x < 0.0);
}

#[test]
fn set_zoom_ignores_unusable_values() {
    let clock = ManualClock::default();
    let (mut viewport, _input) = setup(&clock);
    viewport.set_zoom(3.0);
    viewport.set_zoom(0.0);
    viewport.set_zoom(f64::NAN);
    viewport.set_zoom(-2.0);
    assert_eq!(viewport.state().zoom, 3.0);
}

#[test]
fn set_center_overrides_pan() {
    let clock = ManualClock::default();
    let (mut viewport, input) = setup(&clock);
    viewport.set_center(Point::new(5.0, 6.0));
    assert_eq!(viewport.state().center, Point::new(5.0, 6.0));

    viewport.handle_event(&input, &down(1, 100.0, 100.0));
    viewport.handle_event(&input, &moved(1, 90.0, 100.0));
    assert_eq!(viewport.update().center, Point::new(15.0, 6.0));
}

#[test]
fn detach_forgets_pointers_in_flight() {
    let clock = ManualClock::default();
    let (mut viewport, mut input) = setup(&clock);
    viewport.handle_event(&input, &down(1, 100.0, 100.0));
    viewport.handle_event(&input, &down(2, 150.0, 100.0));
    viewport.detach(&mut input);
    assert_eq!(viewport.pointer_count(), 0);
    assert!(!viewport.is_pinching());

    viewport.attach(&mut input);
    viewport.handle_event(&input, &down(3, 100.0, 100.0));
    assert!(!viewport.is_pinching());
    assert!(viewport.dragger().is_dragging());
}

#[cfg(feature = "serde")]
#[test]
fn options_deserialize_with_defaults() {
    use viewdraw_viewport::{DragOptions, ViewportOptions};

    let options: ViewportOptions =
        serde_json::from_str(r#"{ "wheel_speed": 0.002, "drag": { "friction": 0.1 } }"#).unwrap();
    assert_eq!(options.wheel_speed, 0.002);
    assert_eq!(options.drag.friction, 0.1);
    assert_eq!(options.drag.max_flick, DragOptions::default().max_flick);
    assert!(options.validate().is_ok());
}
