use super::*;

use crate::Easing;
use glimmer_core::{Runtime, RuntimeHandle};
use std::cell::RefCell;
use std::rc::Rc;

const FRAME_NANOS: u64 = 16_666_667;

fn channel(runtime: &Runtime, initial: f32) -> AnimationChannel {
    AnimationChannel::new(
        "test",
        initial,
        runtime.frame_clock(),
        AnimationDriver::Compositor,
    )
}

fn pump(handle: &RuntimeHandle, frame_time: &mut u64, frames: usize) {
    for _ in 0..frames {
        handle.drain_frame_callbacks(*frame_time);
        *frame_time += FRAME_NANOS;
    }
}

#[test]
fn tween_reaches_target_and_reports_finished_once() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let opacity = channel(&runtime, 0.0);
    let ends = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&ends);
    opacity.animate_to(
        1.0,
        AnimationSpec::tween(300, Easing::EaseOutQuad),
        move |end| sink.borrow_mut().push(end),
    );

    let mut time = 0;
    let mut saw_midpoint = false;
    while opacity.is_running() {
        pump(&handle, &mut time, 1);
        let value = opacity.value();
        if value > 0.0 && value < 1.0 {
            saw_midpoint = true;
            assert!(ends.borrow().is_empty(), "completion reported before settling");
        }
        assert!(time < 2_000_000_000, "tween never settled");
    }

    assert!(saw_midpoint);
    assert_eq!(opacity.value(), 1.0);
    assert_eq!(ends.borrow().as_slice(), &[AnimationEnd::Finished]);
    assert!(!handle.has_frame_callbacks());
}

#[test]
fn loop_wraps_back_to_start_each_cycle() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let sweep = channel(&runtime, 0.0);
    sweep.start_loop(0.0, 1.0, AnimationSpec::linear(100));

    handle.drain_frame_callbacks(0);
    assert_eq!(sweep.value(), 0.0);
    handle.drain_frame_callbacks(50_000_000);
    assert!((sweep.value() - 0.5).abs() < 1e-4);
    handle.drain_frame_callbacks(100_000_000);
    assert_eq!(sweep.value(), 0.0);
    handle.drain_frame_callbacks(175_000_000);
    assert!((sweep.value() - 0.75).abs() < 1e-4);
    assert!(sweep.is_running());
}

#[test]
fn stop_leaves_value_in_place_and_clears_timer() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let sweep = channel(&runtime, 0.0);
    sweep.start_loop(0.0, 1.0, AnimationSpec::linear(100));

    handle.drain_frame_callbacks(0);
    handle.drain_frame_callbacks(40_000_000);
    let mid_cycle = sweep.value();

    assert!(sweep.stop());
    assert!(!sweep.stop(), "second stop has nothing to halt");
    assert_eq!(sweep.stop_count(), 1);
    assert_eq!(sweep.value(), mid_cycle);
    assert!(!handle.has_frame_callbacks());
}

#[test]
fn replacing_a_run_interrupts_the_previous_one() {
    let runtime = Runtime::default();
    let opacity = channel(&runtime, 0.0);
    let ends = Rc::new(RefCell::new(Vec::new()));

    let first = Rc::clone(&ends);
    opacity.animate_to(1.0, AnimationSpec::linear(300), move |end| {
        first.borrow_mut().push(("first", end))
    });
    let second = Rc::clone(&ends);
    opacity.animate_to(0.0, AnimationSpec::linear(300), move |end| {
        second.borrow_mut().push(("second", end))
    });

    assert_eq!(
        ends.borrow().as_slice(),
        &[("first", AnimationEnd::Interrupted)]
    );
    assert!(opacity.is_running());
}

#[test]
fn delay_holds_start_value() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let opacity = channel(&runtime, 1.0);
    opacity.animate_to(0.0, AnimationSpec::linear(100).with_delay(50), |_| {});

    handle.drain_frame_callbacks(0);
    handle.drain_frame_callbacks(40_000_000);
    assert_eq!(opacity.value(), 1.0);
    handle.drain_frame_callbacks(100_000_000);
    assert!((opacity.value() - 0.5).abs() < 1e-4);
}

#[test]
fn web_platform_drives_on_layout_thread() {
    assert_eq!(
        AnimationDriver::for_platform(Platform::Web),
        AnimationDriver::Layout
    );
    assert_eq!(
        AnimationDriver::for_platform(Platform::Ios),
        AnimationDriver::Compositor
    );
}
