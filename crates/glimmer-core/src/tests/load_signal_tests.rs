use super::*;

use crate::Runtime;
use futures_task::noop_waker;
use std::cell::RefCell;
use std::rc::Rc;

fn poll_once(receiver: &mut LoadReceiver) -> Poll<Option<LoadResult>> {
    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);
    Pin::new(receiver).poll(&mut cx)
}

#[test]
fn subscriber_sees_result_only_after_ui_drain() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let (sender, receiver) = load_channel(handle.clone());
    let seen = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    let _subscription = receiver.subscribe(move |result| sink.borrow_mut().push(result));

    sender.succeed();
    assert!(seen.borrow().is_empty(), "delivery must not be synchronous");

    handle.drain_ui();
    assert_eq!(seen.borrow().as_slice(), &[LoadResult::Success]);
}

#[test]
fn cancelled_subscription_ignores_late_result() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let (sender, receiver) = load_channel(handle.clone());
    let seen = Rc::new(RefCell::new(0));

    let sink = Rc::clone(&seen);
    let subscription = receiver.subscribe(move |_| *sink.borrow_mut() += 1);
    subscription.cancel();
    assert!(sender.is_cancelled());

    sender.fail("timeout");
    handle.drain_ui();
    assert_eq!(*seen.borrow(), 0);
    assert!(subscription.is_cancelled());
}

#[test]
fn cancel_between_send_and_drain_is_honoured() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let (sender, receiver) = load_channel(handle.clone());
    let seen = Rc::new(RefCell::new(0));

    let sink = Rc::clone(&seen);
    let subscription = receiver.subscribe(move |_| *sink.borrow_mut() += 1);
    sender.succeed();
    subscription.cancel();
    handle.drain_ui();

    assert_eq!(*seen.borrow(), 0);
}

#[test]
fn receiver_future_resolves_with_failure_reason() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let (sender, mut receiver) = load_channel(handle.clone());

    assert!(poll_once(&mut receiver).is_pending());
    sender.fail("404");
    assert!(poll_once(&mut receiver).is_pending());

    handle.drain_ui();
    assert_eq!(
        poll_once(&mut receiver),
        Poll::Ready(Some(LoadResult::Failure("404".into())))
    );
}

#[test]
fn dropped_sender_resolves_future_to_none() {
    let runtime = Runtime::default();
    let (sender, mut receiver) = load_channel(runtime.handle());

    drop(sender);
    assert_eq!(poll_once(&mut receiver), Poll::Ready(None));
}

#[test]
fn late_subscriber_still_gets_queued_result() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let (sender, receiver) = load_channel(handle.clone());

    sender.succeed();
    handle.drain_ui();

    let seen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen);
    let _subscription = receiver.subscribe(move |result| *sink.borrow_mut() = Some(result));
    assert!(seen.borrow().is_none());

    handle.drain_ui();
    assert_eq!(*seen.borrow(), Some(LoadResult::Success));
}
