//! A growable contiguous collection with an explicit capacity contract and a
//! pluggable allocation capability.
//!
//! # Purpose
//! This crate provides exactly one non-trivial thing:
//! [`Vector`](contiguous::Vector), a dynamic array that manages its own
//! uninitialized storage. Unlike [`Vec`], its capacity behaviour is part of
//! the documented contract rather than an implementation detail: capacity is
//! always zero or a power of two (see
//! [`capacity_for`](contiguous::vector::capacity_for)), so callers can reason
//! about amortized cost and tests can assert capacities literally.
//!
//! # Memory
//! Storage is acquired through the [`Allocator`](alloc::Allocator)
//! capability, which is keyed by *element counts* rather than byte counts. A
//! fresh capability instance may be created for every call, so an allocator
//! carries no per-container state. The default capability,
//! [`Global`](alloc::Global), goes straight to [`std::alloc`]. This crate
//! doesn't use [`Vec`] anywhere, not even as scaffolding.
//!
//! # Error Handling
//! Construction of elements is the only thing here that can fail
//! recoverably, and it fails by returning whatever error the caller's
//! initializer produced. Every operation that builds elements either fully
//! succeeds or rolls back to the exact prior state before the error (or
//! panic) continues: partially constructed sections are destructed in
//! ascending order, and buffers acquired for the failed attempt are released.
//! Checked element access reports a strongly typed
//! [`IndexOutOfBounds`](contiguous::vector::IndexOutOfBounds) instead.
//! Running out of address space is not a recoverable error: layout overflow
//! panics and a failed allocation goes to [`std::alloc::handle_alloc_error`].

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod alloc;
pub mod contiguous;

#[cfg(test)]
pub(crate) mod util;
