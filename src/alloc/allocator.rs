use std::alloc::{self, Layout};
use std::ptr::NonNull;

/// A capability for acquiring and releasing uninitialized storage, counted
/// in elements of `T` rather than bytes.
///
/// Collections consume this capability with an `Allocator<T> + Default`
/// bound and may construct a fresh instance for every call, so an
/// implementation must not rely on per-instance state carrying over between
/// an `allocate` and the matching `deallocate`. (Shared state behind the
/// instances - globals, thread-locals - is fine, and is exactly how an
/// instrumented allocator counts calls.)
///
/// Collections in this crate uphold two things an implementation may rely
/// on: `allocate` is only ever called with a non-zero `count` for a type
/// with a non-zero size, and `deallocate` receives exactly the pointer and
/// `count` of an earlier `allocate`, exactly once.
pub trait Allocator<T> {
    /// Acquires uninitialized storage for `count` elements of `T`.
    ///
    /// The returned pointer owns the storage until it is passed back to
    /// [`deallocate`](Allocator::deallocate).
    fn allocate(&mut self, count: usize) -> NonNull<T>;

    /// Releases storage previously acquired from
    /// [`allocate`](Allocator::allocate) on this capability type.
    ///
    /// # Safety
    /// `ptr` must have been returned by a call to `allocate` with this exact
    /// `count`, and must not be used again afterwards.
    unsafe fn deallocate(&mut self, ptr: NonNull<T>, count: usize);
}

/// The default capability: element-counted storage straight from
/// [`std::alloc`].
///
/// # Examples
/// ```
/// # use contiguous_vector::contiguous::Vector;
/// # use contiguous_vector::alloc::Global;
/// // Global is the default second type parameter of Vector.
/// let vec: Vector<u8> = Vector::new();
/// let same: Vector<u8, Global> = Vector::new();
/// assert_eq!(vec.cap(), same.cap());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Global;

impl Global {
    /// A helper function to create the [`Layout`] backing `count` elements
    /// of type `T`.
    ///
    /// # Panics
    /// Panics if the layout size would exceed [`isize::MAX`].
    fn make_layout<T>(count: usize) -> Layout {
        Layout::array::<T>(count).expect("Capacity overflow!")
    }
}

impl<T> Allocator<T> for Global {
    /// # Panics
    /// Panics if the layout size would exceed [`isize::MAX`]. In the event
    /// of an allocation error, calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    fn allocate(&mut self, count: usize) -> NonNull<T> {
        let layout = Global::make_layout::<T>(count);
        if layout.size() == 0 {
            // Collections never request zero-sized allocations, but a
            // dangling pointer keeps this total for callers that do.
            return NonNull::dangling();
        }
        NonNull::new(
            // SAFETY: Zero-sized layouts have been guarded against.
            unsafe { alloc::alloc(layout).cast() },
        )
        .unwrap_or_else(|| alloc::handle_alloc_error(layout))
    }

    unsafe fn deallocate(&mut self, ptr: NonNull<T>, count: usize) {
        let layout = Global::make_layout::<T>(count);
        if layout.size() != 0 {
            // SAFETY: The caller guarantees ptr was acquired from
            // alloc::alloc with this same layout; zero-sized layouts were
            // never allocated and are guarded against deallocation.
            unsafe { alloc::dealloc(ptr.as_ptr().cast(), layout) }
        }
    }
}
