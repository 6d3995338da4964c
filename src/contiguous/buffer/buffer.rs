use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::alloc::{Allocator, Global};

/// An owning handle over `capacity` uninitialized element slots, acquired
/// from and released to the allocator capability `A`.
///
/// A Buffer never reads or writes element contents. Whoever constructs
/// values into its slots is responsible for destructing them again before
/// the Buffer is dropped; dropping only releases the storage.
pub(crate) struct Buffer<T, A: Allocator<T> + Default = Global> {
    ptr: NonNull<T>,
    cap: usize,
    alloc: PhantomData<A>,
}

impl<T, A: Allocator<T> + Default> Buffer<T, A> {
    /// Acquires storage for `capacity` elements.
    ///
    /// No allocator call is made for a zero capacity or a zero-sized
    /// element type; the handle then carries a dangling (but well-aligned)
    /// pointer, which is all a zero-sized access ever needs.
    pub(crate) fn acquire(capacity: usize) -> Buffer<T, A> {
        let ptr = if capacity == 0 || size_of::<T>() == 0 {
            NonNull::dangling()
        } else {
            A::default().allocate(capacity)
        };

        Buffer {
            ptr,
            cap: capacity,
            alloc: PhantomData,
        }
    }

    /// Returns the number of element slots backed by this handle.
    pub(crate) const fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns the pointer to the first slot. Dangling when nothing was
    /// allocated, which is still a valid basis for zero-length slices and
    /// zero-sized-type accesses.
    pub(crate) const fn ptr(&self) -> NonNull<T> {
        self.ptr
    }
}

impl<T, A: Allocator<T> + Default> Drop for Buffer<T, A> {
    fn drop(&mut self) {
        if self.cap != 0 && size_of::<T>() != 0 {
            // SAFETY: ptr was acquired from A::allocate with exactly this
            // count; the dangling cases never reach the allocator and are
            // guarded against here.
            unsafe { A::default().deallocate(self.ptr, self.cap) }
        }
    }
}

// SAFETY: A Buffer holds its allocation exclusively through a unique
// pointer, and its slots carry no values of T until someone constructs
// them, so sending the handle is safe whenever sending T is.
unsafe impl<T: Send, A: Allocator<T> + Default> Send for Buffer<T, A> {}
// SAFETY: A Buffer exposes no interior mutability; shared references to it
// only ever read the pointer and capacity.
unsafe impl<T: Sync, A: Allocator<T> + Default> Sync for Buffer<T, A> {}
