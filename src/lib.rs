//! Operations over in-memory sequences and over collections of pending
//! lists.
//!
//! This library has two halves. The [`collection`] module provides
//! single-pass operators over vecs, arrays, and slices: element-wise
//! transforms, in-place filtering, concatenation, membership testing, and
//! random selection. The [`future`] module provides merge operations that
//! combine the results of several still-pending computations into one
//! ordered list, either at the caller's own `.await` point or on a
//! dedicated worker thread with cooperative cancellation.
//!
//! # Examples
//!
//! Operate on plain sequences:
//!
//! ```rust
//! use collection_merge::prelude::*;
//!
//! let nums = vec![1, 2, 3];
//! assert_eq!(nums.transform(|n| n * 2), vec![2, 4, 6]);
//! assert_eq!(nums.combine(&[4, 5]), vec![1, 2, 3, 4, 5]);
//! assert!(nums.contains_similar(&2));
//! ```
//!
//! Merge the eventual results of several pending lists, preserving input
//! order:
//!
//! ```rust
//! use collection_merge::future::Promise;
//! use collection_merge::prelude::*;
//! use futures_lite::future::block_on;
//!
//! let (first_done, first) = Promise::new();
//! let (second_done, second) = Promise::new();
//! first_done.complete(vec![1, 2]);
//! second_done.complete(vec![3]);
//!
//! let merged = block_on(vec![first, second].merge()).unwrap();
//! assert_eq!(merged, vec![1, 2, 3]);
//! ```

#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

mod utils;

/// The collection-merge prelude.
pub mod prelude {
    pub use super::collection::AppendOnto as _;
    pub use super::collection::Combine as _;
    pub use super::collection::ContainsSimilar as _;
    pub use super::collection::EnsureEach as _;
    pub use super::collection::ForEach as _;
    pub use super::collection::Random as _;
    pub use super::collection::TabJoined as _;
    pub use super::collection::Transform as _;
    pub use super::collection::Trim as _;

    pub use super::future::Merge as _;
    pub use super::future::SpawnMerge as _;
}

pub mod collection;
pub mod future;

/// Helper types for merging vectors of pending lists.
pub mod vec {
    pub use crate::future::merge::vec::Merge;
}

/// Helper types for merging fixed-length arrays of pending lists.
pub mod array {
    pub use crate::future::merge::array::Merge;
}
