use derive_more::{Display, Error};

/// The error returned by the checked accessors of
/// [`Vector`](super::Vector) when the requested index refers past the live
/// elements.
///
/// Unchecked access never detects this condition; only
/// [`at`](super::Vector::at), [`at_mut`](super::Vector::at_mut) and
/// [`take_at`](super::Vector::take_at) report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("index {index} out of bounds for vector of length {len}")]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The number of live elements at the time of the access.
    pub len: usize,
}
