//! Cross-thread behavior of the spawned merge.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use collection_merge::future::{MergeCallback, Promise};
use collection_merge::prelude::*;
use futures_lite::future::{block_on, poll_once};

#[test]
fn completes_in_input_order_and_reports_to_callback() {
    let (done_a, a) = Promise::new();
    let (done_b, b) = Promise::new();
    let (done_c, c) = Promise::new();

    let (sender, receiver) = mpsc::channel();
    let callback: MergeCallback<u32> = Box::new(move |merged| sender.send(merged).unwrap());

    let mut merged = vec![a, b, c].spawn_merge(Some(callback));

    // Complete out of order; the worker still consults inputs in order.
    thread::spawn(move || done_c.complete(vec![5, 6]));
    thread::spawn(move || done_a.complete(vec![1, 2]));
    thread::spawn(move || done_b.complete(vec![3, 4]));

    let value = block_on(&mut merged).unwrap();
    assert_eq!(value, vec![1, 2, 3, 4, 5, 6]);

    // The callback saw the same list the promise resolved with.
    let reported = receiver.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(reported, value);
}

#[test]
fn cancelled_merge_never_completes() {
    let (done_a, a) = Promise::new();
    let (done_b, b) = Promise::new();

    let mut merged = vec![a, b].spawn_merge(None);

    // Request cancellation while the worker is at or before its first
    // input, then let that input finish: whichever checkpoint the worker
    // reaches next aborts the merge.
    merged.cancel();
    done_a.complete(vec![1]);
    drop(done_b);

    // Bounded probe, not an indefinite wait: the promise must still be
    // pending long after the worker had time to exit.
    thread::sleep(Duration::from_millis(200));
    assert!(block_on(poll_once(&mut merged)).is_none());
}

#[test]
fn failed_input_contributes_nothing() {
    let (done_a, a) = Promise::new();
    let (done_b, b) = Promise::new();
    let (done_c, c) = Promise::new();

    let mut merged = vec![a, b, c].spawn_merge(None);

    done_a.complete(vec![1]);
    // The producer for `b` goes away, so the wait on it fails. The merge
    // swallows the failure and carries on.
    drop(done_b);
    done_c.complete(vec![2]);

    assert_eq!(block_on(&mut merged).unwrap(), vec![1, 2]);
}

#[test]
fn pre_cancelled_inputs_are_skipped() {
    let (done_a, a) = Promise::new();
    let (done_b, b) = Promise::new();

    b.cancel();
    done_b.abandon();
    done_a.complete(vec![7]);

    let mut merged = vec![a, b].spawn_merge(None);
    assert_eq!(block_on(&mut merged).unwrap(), vec![7]);
}

#[test]
fn array_inputs_merge_like_vec_inputs() {
    let (done_a, a) = Promise::new();
    let (done_b, b) = Promise::new();
    done_a.complete(vec!["x"]);
    done_b.complete(vec!["y"]);

    let mut merged = [a, b].spawn_merge(None);
    assert_eq!(block_on(&mut merged).unwrap(), vec!["x", "y"]);
}

#[test]
fn merging_nothing_completes_with_nothing() {
    let inputs: Vec<Promise<Vec<u8>>> = Vec::new();
    let mut merged = inputs.spawn_merge(None);
    assert_eq!(block_on(&mut merged).unwrap(), Vec::<u8>::new());
}
