use std::cell::{Cell, RefCell};
use std::ops::{Deref, DerefMut, Sub};
use std::ptr::NonNull;
use std::rc::Rc;

use crate::alloc::{Allocator, Global};
use crate::contiguous::Vector;

/// A unit type for exercising the zero-size code paths, which never touch
/// an allocator.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSizedType;

/// A value whose drops are tallied in a shared counter. Cloning shares the
/// counter, so a test can hand out any number of elements and read how many
/// of them have been destructed via `counter.take()`.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for CountedDrop {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}

/// A value that records its `id` into a shared log when dropped, so tests
/// can assert not just how many elements were destructed but in which
/// order.
#[derive(Debug)]
pub struct DropOrder {
    id: usize,
    log: Rc<RefCell<Vector<usize>>>,
}

impl DropOrder {
    /// Creates the shared log that [`DropOrder::new`] values report into.
    pub fn log() -> Rc<RefCell<Vector<usize>>> {
        Rc::new(RefCell::new(Vector::new()))
    }

    pub fn new(id: usize, log: &Rc<RefCell<Vector<usize>>>) -> DropOrder {
        DropOrder {
            id,
            log: Rc::clone(log),
        }
    }
}

impl Drop for DropOrder {
    fn drop(&mut self) {
        self.log.borrow_mut().push(self.id);
    }
}

/// A snapshot of how often, and for how many elements in total, the
/// [`CountingAlloc`] capability has been invoked on this thread.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AllocCounters {
    pub allocations: usize,
    pub allocated_items: usize,
    pub deallocations: usize,
    pub deallocated_items: usize,
}

impl Sub for AllocCounters {
    type Output = AllocCounters;

    fn sub(self, start: AllocCounters) -> AllocCounters {
        AllocCounters {
            allocations: self.allocations - start.allocations,
            allocated_items: self.allocated_items - start.allocated_items,
            deallocations: self.deallocations - start.deallocations,
            deallocated_items: self.deallocated_items - start.deallocated_items,
        }
    }
}

thread_local! {
    static COUNTERS: Cell<AllocCounters> = const {
        Cell::new(AllocCounters {
            allocations: 0,
            allocated_items: 0,
            deallocations: 0,
            deallocated_items: 0,
        })
    };
}

/// Runs the provided closure and returns how the [`CountingAlloc`] counters
/// changed while it ran.
pub fn with_counters(run: impl FnOnce()) -> AllocCounters {
    let start = COUNTERS.get();
    run();
    COUNTERS.get() - start
}

/// An allocation capability that counts its calls (per thread) and
/// otherwise behaves exactly like [`Global`].
///
/// The capability is constructed fresh for every call, so the tally lives
/// in a thread local rather than in the instance; read it with
/// [`with_counters`].
#[derive(Debug, Default, Clone, Copy)]
pub struct CountingAlloc;

impl<T> Allocator<T> for CountingAlloc {
    fn allocate(&mut self, count: usize) -> NonNull<T> {
        assert!(count > 0, "allocate should never see a zero count");

        let ptr = Global.allocate(count);
        let mut counters = COUNTERS.get();
        counters.allocations += 1;
        counters.allocated_items += count;
        COUNTERS.set(counters);
        ptr
    }

    unsafe fn deallocate(&mut self, ptr: NonNull<T>, count: usize) {
        assert!(count > 0, "deallocate should never see a zero count");

        // SAFETY: The caller's obligations are passed through unchanged to
        // the backing capability.
        unsafe { Global.deallocate(ptr, count) };
        let mut counters = COUNTERS.get();
        counters.deallocations += 1;
        counters.deallocated_items += count;
        COUNTERS.set(counters);
    }
}
