/// Maps a requested element count to the storage capacity that must back
/// it: `0` for an empty request, otherwise the smallest power of two that
/// covers the count.
///
/// This single rule governs every growth decision a
/// [`Vector`](super::Vector) makes, and it is a documented part of the
/// contract rather than an implementation detail - capacities can be
/// asserted literally.
///
/// # Panics
/// Panics in debug builds if `count` exceeds the largest power of two
/// representable in a [`usize`]. (Such a count could never be allocated
/// anyway.)
///
/// # Examples
/// ```
/// # use contiguous_vector::contiguous::vector::capacity_for;
/// assert_eq!(capacity_for(0), 0);
/// assert_eq!(capacity_for(1), 1);
/// assert_eq!(capacity_for(5), 8);
/// assert_eq!(capacity_for(8), 8);
/// assert_eq!(capacity_for(9), 16);
/// ```
pub const fn capacity_for(count: usize) -> usize {
    if count == 0 {
        0
    } else {
        count.next_power_of_two()
    }
}
