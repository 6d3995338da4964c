//! Construction, destruction and relocation of contiguous index ranges
//! within a buffer.
//!
//! A section is the half-open range `[begin, end)` a single operation is
//! currently working on; it has no life of its own beyond that operation.
//! These functions are where the container's transactional behaviour comes
//! from: [`construct_section`] either initializes the entire section or
//! destructs exactly what it built before letting the failure continue.

use std::mem;
use std::ptr::{self, NonNull};

/// Tracks how far a construction has progressed, so the initialized prefix
/// can be unwound when the initializer returns an error or panics.
///
/// `construct_section` defuses the guard with [`mem::forget`] once the
/// whole section is built.
struct SectionGuard<T> {
    data: NonNull<T>,
    begin: usize,
    initialized: usize,
}

impl<T> Drop for SectionGuard<T> {
    fn drop(&mut self) {
        // SAFETY: [begin, initialized) are exactly the slots the current
        // construct_section call has written, all within the caller's
        // allocation.
        unsafe { destruct_section(self.data, self.begin, self.initialized) }
    }
}

/// Constructs the elements of `[begin, end)` in ascending order, obtaining
/// each value from `init`.
///
/// If `init` fails (or panics) at index `k`, the elements this call
/// constructed in `[begin, k)` are destructed in ascending order and the
/// failure continues to the caller. Slots outside `[begin, k)` are left
/// exactly as they were.
///
/// # Safety
/// `[begin, end)` must lie within the allocation behind `data`, with
/// `begin <= end`, and every slot in the range must be uninitialized.
pub(crate) unsafe fn construct_section<T, E, F>(
    data: NonNull<T>,
    begin: usize,
    end: usize,
    init: &mut F,
) -> Result<(), E>
where
    F: FnMut(usize) -> Result<T, E>,
{
    let mut guard = SectionGuard {
        data,
        begin,
        initialized: begin,
    };

    for index in begin..end {
        let value = init(index)?;
        // SAFETY: The caller guarantees [begin, end) lies within the
        // allocation, so this write is in bounds of an uninitialized slot.
        unsafe { data.add(index).write(value) };
        guard.initialized = index + 1;
    }

    mem::forget(guard);
    Ok(())
}

/// Destructs the live elements of `[begin, end)` in ascending order.
///
/// # Safety
/// `[begin, end)` must lie within the allocation behind `data`, with
/// `begin <= end`, and every slot in the range must hold a live value that
/// is not destructed again afterwards.
pub(crate) unsafe fn destruct_section<T>(data: NonNull<T>, begin: usize, end: usize) {
    for index in begin..end {
        // SAFETY: The caller guarantees the slot is in bounds, aligned and
        // holds a live value ready to drop.
        unsafe { ptr::drop_in_place(data.add(index).as_ptr()) };
    }
}

/// Relocates the elements of `[begin, end)` from `src` into the same
/// indices of `dst`.
///
/// Moves in Rust are bitwise and cannot fail. Afterwards the source slots
/// are logically uninitialized: the values now live in `dst`, and running
/// destructors on the `src` range would be a double drop.
///
/// # Safety
/// `[begin, end)` must lie within both allocations, with `begin <= end`;
/// the allocations must not overlap; the `src` range must be live and the
/// `dst` range uninitialized.
pub(crate) unsafe fn move_section<T>(src: NonNull<T>, dst: NonNull<T>, begin: usize, end: usize) {
    // SAFETY: The caller guarantees both ranges are in bounds and disjoint.
    unsafe {
        ptr::copy_nonoverlapping(src.add(begin).as_ptr(), dst.add(begin).as_ptr(), end - begin);
    }
}
