//! Merge operations over collections of pending lists.
//!
//! A *pending list* is a handle to a computation that will eventually
//! produce an ordered list of items (or nothing at all) and that may be
//! cancelled before it completes. The [`PendingList`] trait captures that
//! contract and [`Promise`] provides the in-crate implementation of it,
//! paired with a cooperative [`CancelToken`].
//!
//! Two operations combine many pending lists into one. Both consult their
//! inputs strictly in the order given and skip inputs that are already
//! cancelled, so the merged list preserves input order and, within each
//! input, element order:
//!
//! | Name | Where it runs | On a failed wait |
//! | --- | --- | --- |
//! | [`Merge`] | at the caller's `.await` point | fail-fast: the failure aborts the merge |
//! | [`SpawnMerge`] | one dedicated worker thread per call | isolate: the failure is logged and that input contributes nothing |
//!
//! # Examples
//!
//! ```rust
//! use collection_merge::future::Promise;
//! use collection_merge::prelude::*;
//! use futures_lite::future::block_on;
//!
//! let (done_a, a) = Promise::new();
//! let (done_b, b) = Promise::new();
//! let (done_c, c) = Promise::new();
//!
//! // The second input is cancelled before it completes: it is skipped.
//! b.cancel();
//! done_b.abandon();
//! done_a.complete(vec![1]);
//! done_c.complete(vec![2, 3]);
//!
//! let merged = block_on(vec![a, b, c].merge()).unwrap();
//! assert_eq!(merged, vec![1, 2, 3]);
//! ```

pub use cancel_token::CancelToken;
pub use merge::Merge;
pub use pending_list::{PendingList, Wait, WaitOptional};
pub use promise::{Completer, Dropped, Promise};
pub use spawn_merge::{MergeCallback, SpawnMerge};

mod cancel_token;
pub(crate) mod merge;
mod pending_list;
mod promise;
mod spawn_merge;
