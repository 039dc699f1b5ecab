use super::*;

use crate::Platform;

use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn frame_callbacks_receive_frame_time_once() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let recorder = Rc::clone(&seen);
    let _registration = runtime
        .frame_clock()
        .with_frame_nanos(move |time| recorder.borrow_mut().push(time));

    assert!(runtime.needs_frame());
    handle.drain_frame_callbacks(16_000_000);
    handle.drain_frame_callbacks(32_000_000);

    assert_eq!(seen.borrow().as_slice(), &[16_000_000]);
    assert!(!runtime.needs_frame());
}

#[test]
fn callbacks_registered_while_draining_run_next_frame() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let outer_seen = Rc::clone(&seen);
    let inner_handle = handle.clone();
    handle.register_frame_callback(move |time| {
        outer_seen.borrow_mut().push(("outer", time));
        let inner_seen = Rc::clone(&outer_seen);
        inner_handle.register_frame_callback(move |time| {
            inner_seen.borrow_mut().push(("inner", time));
        });
    });

    handle.drain_frame_callbacks(1);
    assert_eq!(seen.borrow().as_slice(), &[("outer", 1)]);
    assert!(handle.has_frame_callbacks());

    handle.drain_frame_callbacks(2);
    assert_eq!(seen.borrow().as_slice(), &[("outer", 1), ("inner", 2)]);
}

#[test]
fn dropping_registration_cancels_callback() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let fired = Rc::new(RefCell::new(false));

    let flag = Rc::clone(&fired);
    let registration = runtime
        .frame_clock()
        .with_frame_millis(move |_| *flag.borrow_mut() = true);
    assert!(registration.is_active());
    drop(registration);

    assert!(!handle.has_frame_callbacks());
    handle.drain_frame_callbacks(1_000_000);
    assert!(!*fired.borrow());
}

#[test]
fn ui_tasks_run_in_order_on_drain() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let order = Rc::new(RefCell::new(Vec::new()));

    for index in 0..3 {
        let order = Rc::clone(&order);
        handle.enqueue_ui_task(Box::new(move || order.borrow_mut().push(index)));
    }
    assert!(handle.has_pending_ui());
    assert!(order.borrow().is_empty());

    handle.drain_ui();
    assert_eq!(order.borrow().as_slice(), &[0, 1, 2]);
    assert!(!handle.has_pending_ui());
}

#[test]
fn handle_outliving_runtime_is_inert() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    drop(runtime);

    assert!(!handle.is_alive());
    assert!(handle.register_frame_callback(|_| {}).is_none());
    let registration = handle.frame_clock().with_frame_nanos(|_| {});
    assert!(!registration.is_active());
    handle.enqueue_ui_task(Box::new(|| {}));
    assert!(!handle.has_pending_ui());
}

#[test]
fn web_platform_disables_off_thread_animation() {
    assert!(!Platform::Web.supports_off_thread_animation());
    assert!(Platform::Web.renders_vector_natively());
    assert!(Platform::Android.supports_off_thread_animation());
    assert!(!Platform::Ios.renders_vector_natively());
}

#[test]
fn needs_frame_follows_queued_work_only() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    assert!(!runtime.needs_frame());

    handle.enqueue_ui_task(Box::new(|| {}));
    assert!(runtime.needs_frame());
    handle.drain_ui();
    assert!(!runtime.needs_frame());

    let registration = runtime.frame_clock().with_frame_nanos(|_| {});
    assert!(runtime.needs_frame());
    registration.cancel();
    assert!(!runtime.needs_frame());
}
