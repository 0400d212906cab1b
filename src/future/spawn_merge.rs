use std::thread;

use futures_lite::future;

use super::pending_list::PendingList;
use super::promise::{Completer, Promise};

/// Completion callback handed to [`SpawnMerge::spawn_merge`], invoked on
/// the worker thread with the merged list.
pub type MergeCallback<T> = Box<dyn FnOnce(Vec<T>) + Send>;

/// Merge every pending list in a collection on a dedicated worker thread.
///
/// This is the failure-isolating counterpart of
/// [`Merge`][crate::future::Merge]: the caller gets a [`Promise`] back
/// immediately, one worker thread per call performs the merge, and a
/// failed wait never aborts the whole operation.
pub trait SpawnMerge {
    /// The element type of the merged list.
    type Item;

    /// Starts merging this collection's pending lists on a new worker
    /// thread and returns a promise for the result.
    ///
    /// The worker consults inputs strictly in the order given, skipping any
    /// observed as already cancelled at its turn. A wait that fails is
    /// logged and contributes nothing; the merge carries on. Once every
    /// input has been consulted the promise completes with the merged
    /// list, and then `callback`, when supplied, runs on the worker thread
    /// with an equal list.
    ///
    /// Cancellation, requested at any time through the returned promise's
    /// token, is observed only between inputs; a wait already in flight
    /// is never interrupted. A worker that observes the request stops
    /// without completing: the promise then stays pending forever and the
    /// callback never runs.
    fn spawn_merge(self, callback: Option<MergeCallback<Self::Item>>) -> Promise<Vec<Self::Item>>;
}

impl<P> SpawnMerge for Vec<P>
where
    P: PendingList + Send + 'static,
    P::Item: Clone + Send + 'static,
{
    type Item = P::Item;

    fn spawn_merge(self, callback: Option<MergeCallback<P::Item>>) -> Promise<Vec<P::Item>> {
        spawn_worker(self, callback)
    }
}

impl<P, const N: usize> SpawnMerge for [P; N]
where
    P: PendingList + Send + 'static,
    P::Item: Clone + Send + 'static,
{
    type Item = P::Item;

    fn spawn_merge(self, callback: Option<MergeCallback<P::Item>>) -> Promise<Vec<P::Item>> {
        spawn_worker(Vec::from(self), callback)
    }
}

fn spawn_worker<P>(
    inputs: Vec<P>,
    callback: Option<MergeCallback<P::Item>>,
) -> Promise<Vec<P::Item>>
where
    P: PendingList + Send + 'static,
    P::Item: Clone + Send + 'static,
{
    let (completer, promise) = Promise::new();
    let token = completer.cancel_token();

    thread::spawn(move || {
        let mut merged = Vec::new();

        for (position, input) in inputs.into_iter().enumerate() {
            // Cancellation is observed here, between inputs, and nowhere
            // else; a wait already in flight runs to its end.
            if token.is_cancelled() {
                completer.abandon();
                return;
            }
            if input.is_cancelled() {
                continue;
            }
            match future::block_on(input.wait()) {
                Ok(Some(list)) => merged.extend(list),
                Ok(None) => {}
                Err(err) => {
                    // One bad input never aborts the merge.
                    log::warn!("merge input #{position} failed and contributes nothing: {err}");
                }
            }
        }

        match callback {
            Some(callback) => {
                let report = merged.clone();
                completer.complete(merged);
                callback(report);
            }
            None => completer.complete(merged),
        }
    });

    promise
}
