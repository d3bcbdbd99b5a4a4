use crate::*;

use std::cell::Cell;
use std::rc::Rc;

use stepped_progress::{Axis, ConfigError, ProgressOptions, SteppedProgress, WheelEvent};

fn slider_options() -> ProgressOptions {
    ProgressOptions::for_slides(4).with_extent(800.0)
}

fn run_frames(b: &mut Binding, start_ms: u64, max_frames: u64) -> u64 {
    let mut now_ms = start_ms;
    let mut frames = 0;
    while b.frame(now_ms).is_some() {
        assert!(frames < max_frames, "binding did not settle");
        frames += 1;
        now_ms += 16;
    }
    now_ms
}

#[test]
fn frame_clock_normalizes_elapsed_time() {
    let mut clock = FrameClock::new();
    assert!(!clock.is_started());
    assert_eq!(clock.sample(100), 1.0);
    assert!(clock.is_started());

    let m = clock.sample(116);
    assert!((m - 16.0 / NOMINAL_FRAME_MS).abs() < 1e-12);

    let m = clock.sample(149);
    assert!((m - 33.0 / NOMINAL_FRAME_MS).abs() < 1e-12);

    // Long gaps are capped.
    let m = clock.sample(5_000);
    assert!((m - DEFAULT_MAX_FRAME_MS / NOMINAL_FRAME_MS).abs() < 1e-12);

    clock.reset();
    assert_eq!(clock.sample(9_000), 1.0);
}

#[test]
fn frame_clock_is_configurable() {
    let mut clock = FrameClock::new()
        .with_nominal_frame_ms(10.0)
        .with_max_frame_ms(30.0);
    clock.sample(0);
    assert_eq!(clock.sample(20), 2.0);
    assert_eq!(clock.sample(100), 3.0);
    assert_eq!(clock.sample(100), 0.0);
}

#[test]
fn frame_clock_caps_multiplier_for_ease() {
    let mut clock = FrameClock::new();
    assert_eq!(clock.sample_for(0, 0.6), 1.0);
    assert_eq!(clock.sample_for(50, 0.6), 1.0 / 0.6);

    let m = clock.sample_for(66, 0.1);
    assert!((m - 16.0 / NOMINAL_FRAME_MS).abs() < 1e-12);
}

#[test]
fn long_frames_with_high_ease_stay_within_bounds() {
    let mut surface = ManualSurface::new();
    let options = ProgressOptions::new(0.0, 3.0, 1.0)
        .with_ease(0.6)
        .with_initial(2.0)
        .with_extent(800.0);
    let mut b = Binding::attach(&mut surface, options).unwrap();
    surface.dispatch(SurfaceEvent::Wheel(WheelEvent::pixels(0.0, 800.0)));
    assert_eq!(b.controller().target(), 3.0);

    let mut now_ms = 0;
    let mut frames = 0;
    while let Some(s) = b.frame(now_ms) {
        assert!(frames < 1_000, "binding did not settle");
        assert!((0.0..=3.0).contains(&s.progress), "progress out of bounds: {}", s.progress);
        assert!(b.controller().target() <= 3.0);
        frames += 1;
        now_ms += 50;
    }
    assert_eq!(b.controller().progress(), 3.0);
}

#[test]
fn attach_registers_one_listener() {
    let mut surface = ManualSurface::new();
    let b = Binding::attach(&mut surface, slider_options()).unwrap();
    assert_eq!(surface.listener_count(), 1);
    assert_eq!(b.controller().listener_count(), 1);
    assert!(!b.is_running());
}

#[test]
fn invalid_options_attach_nothing() {
    let mut surface = ManualSurface::new();
    let err = Binding::attach(&mut surface, ProgressOptions::new(0.0, 3.0, 0.0)).unwrap_err();
    assert_eq!(err, ConfigError::NonPositiveStep(0.0));
    assert_eq!(surface.listener_count(), 0);
}

#[test]
fn wheel_events_drive_the_loop_until_settled() {
    let mut surface = ManualSurface::new();
    let mut b = Binding::attach(&mut surface, slider_options()).unwrap();

    surface.dispatch(SurfaceEvent::Wheel(WheelEvent::pixels(0.0, 480.0)));
    assert!((b.controller().target() - 0.6).abs() < 1e-12);
    assert!(b.is_running());

    let now_ms = run_frames(&mut b, 0, 10_000);
    assert!(!b.is_running());
    assert_eq!(b.controller().progress(), 1.0);
    assert!(b.frame(now_ms + 16).is_none());

    let blend = SlideBlend::from_controller(&b.controller(), 4);
    assert_eq!(
        blend,
        SlideBlend {
            prev_index: 1,
            next_index: 1,
            mix: 0.0
        }
    );
    assert!(blend.is_resting());
}

#[test]
fn pointer_drag_moves_progress_backward() {
    let mut surface = ManualSurface::new();
    let options = slider_options().with_axis(Axis::Horizontal);
    let b = Binding::attach(&mut surface, options).unwrap();

    // Moves before a pointer-down are not drags.
    surface.dispatch(SurfaceEvent::PointerMove { x: 0.0, y: 0.0 });
    assert_eq!(b.controller().target(), 0.0);

    surface.dispatch(SurfaceEvent::PointerDown { x: 400.0, y: 0.0 });
    surface.dispatch(SurfaceEvent::PointerMove { x: 0.0, y: 0.0 });
    assert_eq!(b.controller().target(), 0.5);

    surface.dispatch(SurfaceEvent::PointerMove { x: 200.0, y: 0.0 });
    assert_eq!(b.controller().target(), 0.25);

    surface.dispatch(SurfaceEvent::PointerUp);
    surface.dispatch(SurfaceEvent::PointerMove { x: -800.0, y: 0.0 });
    assert_eq!(b.controller().target(), 0.25);
}

#[test]
fn events_raised_during_render_apply_next_frame() {
    let mut surface = ManualSurface::new();
    let mut b = Binding::attach(&mut surface, slider_options()).unwrap();
    let surface = Rc::new(surface);

    let fired = Rc::new(Cell::new(false));
    let s = Rc::clone(&surface);
    let once = Rc::clone(&fired);
    b.controller_mut().on_render(move |_| {
        if !once.replace(true) {
            s.dispatch(SurfaceEvent::Wheel(WheelEvent::pixels(0.0, 800.0)));
        }
    });

    surface.dispatch(SurfaceEvent::Wheel(WheelEvent::pixels(0.0, 80.0)));
    assert!(b.frame(0).is_some());
    assert!(fired.get());
    assert!(b.controller().target() < 1.0);

    assert!(b.frame(16).is_some());
    assert!(b.controller().target() > 1.0);
}

#[test]
fn event_raised_on_settling_frame_is_applied() {
    let mut surface = ManualSurface::new();
    let mut b = Binding::attach(&mut surface, slider_options().with_initial(2.0)).unwrap();
    let surface = Rc::new(surface);

    let fired = Rc::new(Cell::new(false));
    let s = Rc::clone(&surface);
    let once = Rc::clone(&fired);
    b.controller_mut().on_render(move |_| {
        if !once.replace(true) {
            s.dispatch(SurfaceEvent::Wheel(WheelEvent::pixels(0.0, 400.0)));
        }
    });
    b.controller_mut().resume();

    // Already on a step: this frame settles, and the render handler raises input.
    assert!(b.frame(0).is_some());
    assert!(fired.get());
    assert!(!b.controller().is_running());
    assert_eq!(b.pending_events(), 1);
    assert!(b.is_running());

    assert!(b.frame(16).is_some());
    assert_eq!(b.pending_events(), 0);
    assert!(b.controller().target() > 2.0);

    run_frames(&mut b, 32, 10_000);
    assert_eq!(b.controller().progress(), 3.0);
    assert!(!b.is_running());
}

#[test]
fn events_dispatched_while_host_borrows_are_queued_in_order() {
    let mut surface = ManualSurface::new();
    let mut b = Binding::attach(&mut surface, slider_options()).unwrap();

    {
        let _held = b.controller();
        surface.dispatch(SurfaceEvent::Wheel(WheelEvent::pixels(0.0, 400.0)));
    }
    assert_eq!(b.pending_events(), 1);
    assert!(!b.controller().is_running());
    assert!(b.is_running());

    // The next event that gets through applies the queue first.
    surface.dispatch(SurfaceEvent::Wheel(WheelEvent::pixels(0.0, 80.0)));
    assert_eq!(b.pending_events(), 0);
    assert!((b.controller().target() - 0.6).abs() < 1e-12);

    run_frames(&mut b, 0, 10_000);
    assert_eq!(b.controller().progress(), 1.0);
}

#[test]
fn dispose_detaches_the_surface_listener() {
    let mut surface = ManualSurface::new();
    let mut b = Binding::attach(&mut surface, slider_options()).unwrap();
    surface.dispatch(SurfaceEvent::Wheel(WheelEvent::pixels(0.0, 400.0)));
    assert!(b.is_running());

    b.dispose();
    assert_eq!(surface.listener_count(), 0);
    assert!(!b.is_running());
    assert!(b.frame(16).is_none());

    surface.dispatch(SurfaceEvent::Wheel(WheelEvent::pixels(0.0, 400.0)));
    assert!(!b.is_running());

    b.dispose();
    assert!(b.controller().is_disposed());
}

#[test]
fn dropping_the_binding_detaches_the_listener() {
    let mut surface = ManualSurface::new();
    {
        let _b = Binding::attach(&mut surface, slider_options()).unwrap();
        assert_eq!(surface.listener_count(), 1);
    }
    assert_eq!(surface.listener_count(), 0);
    surface.dispatch(SurfaceEvent::PointerUp);
}

#[test]
fn slide_blend_brackets_progress() {
    let s = SteppedProgress::from_progress(1.25, 1.0);
    let blend = SlideBlend::from_stepped(&s, 1.0, 4);
    assert_eq!(blend.prev_index, 1);
    assert_eq!(blend.next_index, 2);
    assert_eq!(blend.mix, 0.25);
    assert!(!blend.is_resting());

    let s = SteppedProgress::from_progress(1.5, 0.5);
    let blend = SlideBlend::from_stepped(&s, 0.5, 8);
    assert_eq!((blend.prev_index, blend.next_index), (3, 3));

    let s = SteppedProgress::from_progress(5.5, 1.0);
    let blend = SlideBlend::from_stepped(&s, 1.0, 4);
    assert_eq!((blend.prev_index, blend.next_index), (3, 3));

    let blend = SlideBlend::from_stepped(&s, 1.0, 0);
    assert_eq!((blend.prev_index, blend.next_index), (0, 0));
}
