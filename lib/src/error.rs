use thiserror::Error;

/// Returned by [`SortedBlockList::copy_into`](crate::SortedBlockList::copy_into)
/// when the destination slice cannot hold every stored element.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("destination holds {capacity} elements but {required} are stored")]
pub struct CapacityError {
    pub required: usize,
    pub capacity: usize,
}
