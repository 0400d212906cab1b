use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use super::promise::{Dropped, Promise};

/// A handle to a computation that will eventually yield an ordered list of
/// items, or nothing, or fail. The handle can also be observed as already
/// cancelled without waiting on it.
///
/// This is the input contract of the merge operations: they consult each
/// handle at most once, skipping it when
/// [`is_cancelled`][PendingList::is_cancelled] reports `true` at its turn
/// and otherwise awaiting [`wait`][PendingList::wait].
pub trait PendingList {
    /// The element type of the produced list.
    type Item;

    /// The failure observed when waiting goes wrong.
    type Error: fmt::Display;

    /// The future performing the wait.
    type Wait: Future<Output = Result<Option<Vec<Self::Item>>, Self::Error>>;

    /// Returns `true` if this handle was cancelled before completing.
    fn is_cancelled(&self) -> bool;

    /// Consumes the handle, resolving to its produced list.
    ///
    /// `Ok(None)` means the computation finished but has nothing to
    /// contribute.
    fn wait(self) -> Self::Wait;
}

impl<T> PendingList for Promise<Vec<T>> {
    type Item = T;
    type Error = Dropped;
    type Wait = Wait<T>;

    fn is_cancelled(&self) -> bool {
        Promise::is_cancelled(self)
    }

    fn wait(self) -> Wait<T> {
        Wait { promise: self }
    }
}

impl<T> PendingList for Promise<Option<Vec<T>>> {
    type Item = T;
    type Error = Dropped;
    type Wait = WaitOptional<T>;

    fn is_cancelled(&self) -> bool {
        Promise::is_cancelled(self)
    }

    fn wait(self) -> WaitOptional<T> {
        WaitOptional { promise: self }
    }
}

/// Future returned by waiting on a [`Promise`] that yields a list.
#[derive(Debug)]
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Wait<T> {
    promise: Promise<Vec<T>>,
}

impl<T> Future for Wait<T> {
    type Output = Result<Option<Vec<T>>, Dropped>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.promise)
            .poll(cx)
            .map(|resolved| resolved.map(Some))
    }
}

/// Future returned by waiting on a [`Promise`] that yields an optional
/// list, where `None` stands for "nothing to contribute".
#[derive(Debug)]
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct WaitOptional<T> {
    promise: Promise<Option<Vec<T>>>,
}

impl<T> Future for WaitOptional<T> {
    type Output = Result<Option<Vec<T>>, Dropped>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.promise).poll(cx)
    }
}
