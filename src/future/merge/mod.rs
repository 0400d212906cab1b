use core::future::Future;

pub(crate) mod array;
pub(crate) mod vec;

/// Combine the eventual results of every pending list in a collection into
/// one ordered list.
pub trait Merge {
    /// The element type of the merged list.
    type Item;

    /// The failure propagated from the first wait that goes wrong.
    type Error;

    /// The future returned by [`merge`][Merge::merge].
    type Future: Future<Output = Result<Vec<Self::Item>, Self::Error>>;

    /// Merges every pending list in this collection into one list.
    ///
    /// Inputs are consulted strictly in the order given: a handle observed
    /// as already cancelled at its turn is skipped without waiting; every
    /// other handle is awaited and its list, if any, appended. The merged
    /// list preserves input order and, within each input, element order.
    ///
    /// The first failed wait aborts the merge and is returned as-is. For
    /// the variant that isolates failures instead, see
    /// [`SpawnMerge`][crate::future::SpawnMerge].
    fn merge(self) -> Self::Future;
}
