use super::Merge as MergeTrait;
use crate::future::PendingList;

use core::fmt;
use core::future::Future;
use core::mem;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project::pin_project;

/// A future merging every pending list in a fixed-length array.
///
/// This `struct` is created by the [`merge`] method on the [`Merge`] trait.
/// See its documentation for more.
///
/// [`merge`]: crate::future::Merge::merge
/// [`Merge`]: crate::future::Merge
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project]
pub struct Merge<P, const N: usize>
where
    P: PendingList,
{
    inputs: core::array::IntoIter<P, N>,
    #[pin]
    waiting: Option<P::Wait>,
    merged: Vec<P::Item>,
    done: bool,
}

impl<P, const N: usize> Merge<P, N>
where
    P: PendingList,
{
    pub(crate) fn new(inputs: [P; N]) -> Self {
        Merge {
            inputs: inputs.into_iter(),
            waiting: None,
            merged: Vec::new(),
            done: false,
        }
    }
}

impl<P, const N: usize> MergeTrait for [P; N]
where
    P: PendingList,
{
    type Item = P::Item;
    type Error = P::Error;
    type Future = Merge<P, N>;

    fn merge(self) -> Self::Future {
        Merge::new(self)
    }
}

impl<P, const N: usize> fmt::Debug for Merge<P, N>
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

impl<P, const N: usize> Future for Merge<P, N>
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
            done_a.complete(vec![1]);
            done_b.complete(vec![2, 3]);
            assert_eq!([a, b].merge().await.unwrap(), vec![1, 2, 3]);
        });
    }

    #[test]
    fn skips_cancelled_inputs() {
        block_on(async {
            let (done_a, a) = Promise::new();
            let (done_b, b) = Promise::new();
            a.cancel();
            done_a.abandon();
            done_b.complete(vec![9]);
            assert_eq!([a, b].merge().await.unwrap(), vec![9]);
        });
    }
}
