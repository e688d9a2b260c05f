use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::thread;

use futures::executor::block_on;
use futures::future;
use futures::task::noop_waker;

use capture_guard::{Capturable, Strategy};

#[test]
fn resolves_while_alive() {
    let object = Rc::new(20);
    let add = object
        .capture()
        .future_fn(|object: Rc<i32>, value: i32| async move { *object + value });

    assert_eq!(block_on(add(1)), Some(21));
    drop(object);
    assert_eq!(block_on(add(1)), None);
}

#[test]
fn checks_liveness_on_first_poll() {
    let calls = Rc::new(Cell::new(0));
    let object = Rc::new(());

    let run = object.capture().future_fn({
        let calls = Rc::clone(&calls);
        move |_, ()| {
            calls.set(calls.get() + 1);
            async {}
        }
    });

    // Created while alive, polled after the drop.
    let pending = run(());
    drop(object);
    assert_eq!(block_on(pending), None);
    assert_eq!(calls.get(), 0);
}

#[test]
fn keeps_object_alive_while_running() {
    let object = Rc::new(String::from("running"));
    let weak = Rc::downgrade(&object);

    // Releases its own pointer right away, then yields once.
    let len = object.capture().future_fn_or_else(
        || 0,
        |object: Rc<String>, ()| {
            let len = object.len();
            drop(object);
            let mut yielded = false;
            future::poll_fn(move |cx| {
                if yielded {
                    Poll::Ready(len)
                } else {
                    yielded = true;
                    cx.waker().wake_by_ref();
                    Poll::Pending
                }
            })
        },
    );

    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);
    let mut running = Box::pin(len(()));
    assert_eq!(running.as_mut().poll(&mut cx), Poll::Pending);

    drop(object);
    assert!(weak.upgrade().is_some());

    assert_eq!(running.as_mut().poll(&mut cx), Poll::Ready(7));
    assert!(weak.upgrade().is_none());
    drop(running);

    assert_eq!(block_on(len(())), 0);
}

#[test]
fn strong_capture_outlives_owner() {
    let object = Rc::new(5);
    let double = object
        .capture_as(Strategy::Strong)
        .future_fn_or_else(|| 0, |object: Rc<i32>, ()| async move { *object * 2 });
    drop(object);

    assert_eq!(block_on(double(())), 10);
}

#[test]
fn errors_propagate() {
    let object = Rc::new(0);
    let fail = object
        .capture()
        .future_fn(|_, ()| async { Err::<(), _>("failed") });

    assert_eq!(block_on(fail(())), Some(Err("failed")));
    drop(object);
    assert_eq!(block_on(fail(())), None);
}

#[test]
fn sendable_with_arc() {
    let object = Arc::new(7u64);
    let square = object
        .capture()
        .future_fn(|object: Arc<u64>, ()| async move { *object * *object });

    let result = thread::spawn(move || block_on(square(())))
        .join()
        .unwrap();
    assert_eq!(result, Some(49));
}
