//! Utilities to implement the operations of this crate.

mod rng;

pub(crate) use rng::random_index;
