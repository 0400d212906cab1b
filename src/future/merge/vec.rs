use super::Merge as MergeTrait;
use crate::future::PendingList;

use core::fmt;
use core::future::Future;
use core::mem;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project::pin_project;

/// A future merging every pending list in a vec.
///
/// This `struct` is created by the [`merge`] method on the [`Merge`] trait.
/// See its documentation for more.
///
/// [`merge`]: crate::future::Merge::merge
/// [`Merge`]: crate::future::Merge
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project]
pub struct Merge<P>
where
    P: PendingList,
{
    inputs: std::vec::IntoIter<P>,
    #[pin]
    waiting: Option<P::Wait>,
    merged: Vec<P::Item>,
    done: bool,
}

impl<P> Merge<P>
where
    P: PendingList,
{
    pub(crate) fn new(inputs: Vec<P>) -> Self {
        Merge {
            inputs: inputs.into_iter(),
            waiting: None,
            merged: Vec::new(),
            done: false,
        }
    }
}

impl<P> MergeTrait for Vec<P>
where
    P: PendingList,
{
    type Item = P::Item;
    type Error = P::Error;
    type Future = Merge<P>;

    fn merge(self) -> Self::Future {
        Merge::new(self)
    }
}

impl<P> fmt::Debug for Merge<P>
where
    P: PendingList,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Merge")
            .field("remaining", &self.inputs.len())
            .field("done", &self.done)
            .finish()
    }
}

impl<P> Future for Merge<P>
where
    P: PendingList,
{
    type Output = Result<Vec<P::Item>, P::Error>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        assert!(!*this.done, "Merge must not be polled after completing");

        loop {
            let waiting = match this.waiting.as_mut().as_pin_mut() {
                Some(waiting) => waiting,
                // Between waits: advance to the next input, skipping any
                // observed as already cancelled at its turn.
                None => match this.inputs.find(|input| !input.is_cancelled()) {
                    Some(input) => {
                        this.waiting.set(Some(input.wait()));
                        continue;
                    }
                    None => {
                        *this.done = true;
                        return Poll::Ready(Ok(mem::take(this.merged)));
                    }
                },
            };

            match waiting.poll(cx) {
                Poll::Ready(Ok(Some(list))) => {
                    this.merged.extend(list);
                    this.waiting.set(None);
                }
                Poll::Ready(Ok(None)) => this.waiting.set(None),
                Poll::Ready(Err(err)) => {
                    *this.done = true;
                    this.waiting.set(None);
                    return Poll::Ready(Err(err));
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crate::future::{Merge, Promise};
    use futures_lite::future::block_on;

    #[test]
    fn smoke() {
        block_on(async {
            let (done_a, a) = Promise::new();
            let (done_b, b) = Promise::new();
            done_a.complete(vec!["hello"]);
            done_b.complete(vec!["world"]);
            assert_eq!(vec![a, b].merge().await.unwrap(), vec!["hello", "world"]);
        });
    }

    #[test]
    fn skips_cancelled_inputs() {
        block_on(async {
            let (done_a, a) = Promise::new();
            let (done_b, b) = Promise::new();
            let (done_c, c) = Promise::new();

            b.cancel();
            done_b.abandon();
            done_a.complete(vec![1, 2]);
            done_c.complete(vec![3]);

            assert_eq!(vec![a, b, c].merge().await.unwrap(), vec![1, 2, 3]);
        });
    }

    #[test]
    fn resolved_nothing_contributes_nothing() {
        block_on(async {
            let (done_a, a) = Promise::new();
            let (done_b, b) = Promise::new();
            done_a.complete(Some(vec![1]));
            done_b.complete(None);
            assert_eq!(vec![a, b].merge().await.unwrap(), vec![1]);
        });
    }

    #[test]
    fn first_failed_wait_aborts() {
        block_on(async {
            let (done_a, a) = Promise::new();
            let (done_b, b) = Promise::new();
            done_a.complete(vec![1]);
            drop(done_b);
            assert!(vec![a, b].merge().await.is_err());
        });
    }

    #[test]
    fn no_inputs_merge_to_nothing() {
        block_on(async {
            let inputs: Vec<Promise<Vec<u8>>> = Vec::new();
            assert_eq!(inputs.merge().await.unwrap(), Vec::<u8>::new());
        });
    }
}
