use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll, Waker};
use std::error::Error;
use std::sync::{Arc, Mutex};

use super::CancelToken;

/// The consuming half of a write-once value: a future that resolves when
/// the paired [`Completer`] writes.
///
/// Every promise is paired at construction with a fresh [`CancelToken`],
/// reachable through [`cancel_token`][Promise::cancel_token]. The token is
/// a request channel to whoever drives the completer, not a way to resolve
/// the promise: a producer that honors the request and walks away leaves
/// the promise pending.
///
/// Awaiting the promise yields `Ok(value)` once completed, or
/// [`Err(Dropped)`][Dropped] if the completer went away without completing.
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Promise<T> {
    shared: Arc<Shared<T>>,
}

/// The producing half of a write-once value.
pub struct Completer<T> {
    shared: Arc<Shared<T>>,
    finished: bool,
}

struct Shared<T> {
    state: Mutex<State<T>>,
    token: CancelToken,
}

struct State<T> {
    value: Option<T>,
    waker: Option<Waker>,
    taken: bool,
    producer_gone: bool,
}

impl<T> Promise<T> {
    /// Creates a connected pair: the [`Completer`] writes once, the
    /// [`Promise`] resolves with what was written.
    pub fn new() -> (Completer<T>, Promise<T>) {
        let shared = Arc::new(Shared {
            state: Mutex::new(State {
                value: None,
                waker: None,
                taken: false,
                producer_gone: false,
            }),
            token: CancelToken::new(),
        });
        let completer = Completer {
            shared: Arc::clone(&shared),
            finished: false,
        };
        (completer, Promise { shared })
    }

    /// Requests cooperative cancellation of the producing side.
    pub fn cancel(&self) {
        self.shared.token.cancel();
    }

    /// Returns `true` once cancellation has been requested on the
    /// associated token.
    pub fn is_cancelled(&self) -> bool {
        self.shared.token.is_cancelled()
    }

    /// The cancellation token paired with this promise at construction.
    pub fn cancel_token(&self) -> CancelToken {
        self.shared.token.clone()
    }
}

impl<T> Future for Promise<T> {
    type Output = Result<T, Dropped>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut state = self.shared.state.lock().unwrap();

        assert!(
            !state.taken,
            "Promise must not be polled after completing"
        );

        if let Some(value) = state.value.take() {
            state.taken = true;
            return Poll::Ready(Ok(value));
        }
        if state.producer_gone {
            state.taken = true;
            return Poll::Ready(Err(Dropped));
        }
        state.waker = Some(cx.waker().clone());
        Poll::Pending
    }
}

impl<T> fmt::Debug for Promise<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.lock().unwrap();
        let status = if state.taken {
            "consumed"
        } else if state.value.is_some() {
            "completed"
        } else if state.producer_gone {
            "dropped"
        } else {
            "pending"
        };
        f.debug_struct("Promise")
            .field("state", &status)
            .field("cancelled", &self.shared.token.is_cancelled())
            .finish()
    }
}

impl<T> Completer<T> {
    /// The single completion write.
    ///
    /// Consumes the completer; the paired promise resolves with `value`.
    pub fn complete(mut self, value: T) {
        self.finished = true;
        let waker = {
            let mut state = self.shared.state.lock().unwrap();
            state.value = Some(value);
            state.waker.take()
        };
        if let Some(waker) = waker {
            waker.wake();
        }
    }

    /// Detaches without completing and without marking the producer gone:
    /// the paired promise stays pending forever.
    pub fn abandon(mut self) {
        self.finished = true;
    }

    /// Returns `true` once cancellation has been requested on the
    /// associated token.
    pub fn is_cancelled(&self) -> bool {
        self.shared.token.is_cancelled()
    }

    /// The cancellation token paired with the promise this completer
    /// feeds.
    pub fn cancel_token(&self) -> CancelToken {
        self.shared.token.clone()
    }
}

impl<T> Drop for Completer<T> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        let waker = {
            let mut state = self.shared.state.lock().unwrap();
            state.producer_gone = true;
            state.waker.take()
        };
        if let Some(waker) = waker {
            waker.wake();
        }
    }
}

impl<T> fmt::Debug for Completer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completer")
            .field("finished", &self.finished)
            .finish()
    }
}

/// The producing side of a promise went away without completing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dropped;

impl fmt::Display for Dropped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("promise completer dropped before completing")
    }
}

impl Error for Dropped {}

#[cfg(test)]
mod test {
    use super::*;
    use futures_lite::future::{block_on, poll_once};

    #[test]
    fn resolves_with_the_written_value() {
        let (completer, promise) = Promise::new();
        completer.complete(7);
        assert_eq!(block_on(promise), Ok(7));
    }

    #[test]
    fn resolves_across_threads() {
        let (completer, promise) = Promise::new();
        std::thread::spawn(move || completer.complete("late"));
        assert_eq!(block_on(promise), Ok("late"));
    }

    #[test]
    fn dropped_completer_is_an_error() {
        let (completer, promise) = Promise::<u8>::new();
        drop(completer);
        assert_eq!(block_on(promise), Err(Dropped));
    }

    #[test]
    fn abandoned_promises_stay_pending() {
        let (completer, mut promise) = Promise::<u8>::new();
        completer.abandon();
        assert!(block_on(poll_once(&mut promise)).is_none());
        assert!(block_on(poll_once(&mut promise)).is_none());
    }

    #[test]
    fn cancellation_is_shared_with_the_completer() {
        let (completer, promise) = Promise::<u8>::new();
        assert!(!completer.is_cancelled());
        promise.cancel();
        assert!(completer.is_cancelled());
        assert!(promise.is_cancelled());
    }

    #[test]
    fn cancellation_alone_does_not_resolve() {
        let (completer, mut promise) = Promise::<u8>::new();
        promise.cancel();
        assert!(block_on(poll_once(&mut promise)).is_none());
        completer.abandon();
        assert!(block_on(poll_once(&mut promise)).is_none());
    }
}
