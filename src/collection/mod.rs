//! Single-pass operators over in-memory sequences.
//!
//! Every operator walks its input exactly once on the calling thread; there
//! is no internal concurrency and there are no retries. Borrow-only
//! operators are implemented on `[T]`, so they are available on vecs,
//! arrays, and slices alike; operators that resize or consume their input
//! are implemented on the owning container directly.
//!
//! | Name | What it does |
//! | --- | --- |
//! | [`ForEach`] | run a procedure over each element, in order |
//! | [`Transform`] | map into a new sequence of the same shape |
//! | [`Trim`] | remove matching elements in place |
//! | [`Combine`] | concatenate two sequences into a fresh vec |
//! | [`AppendOnto`] | push a vec's elements onto the end of another |
//! | [`ContainsSimilar`] | membership by equality or hash collision |
//! | [`Random`] | pick one element uniformly |
//! | [`EnsureEach`] | check a condition over every element, failing fast |
//! | [`TabJoined`] | render elements as tab-separated text |
//!
//! # Examples
//!
//! ```rust
//! use collection_merge::prelude::*;
//!
//! let mut words = vec!["alpha", "beta", "gamma"];
//! words.trim(|word| word.len() > 4);
//! assert_eq!(words, vec!["beta"]);
//!
//! let lengths = words.transform(|word| word.len());
//! assert_eq!(lengths, vec![4]);
//! ```

pub use combine::{AppendOnto, Combine};
pub use contains::ContainsSimilar;
pub use ensure::{EnsureEach, EnsureError};
pub use for_each::ForEach;
pub use random::Random;
pub use tab_joined::TabJoined;
pub use transform::Transform;
pub use trim::Trim;

mod combine;
mod contains;
mod ensure;
mod for_each;
mod random;
mod tab_joined;
mod transform;
mod trim;
