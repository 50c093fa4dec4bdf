//! Allocation engine for Packwise.
//!
//! This crate provides [`Allocator`], the pure computation at the heart of
//! the order-management service: given the catalog's denominations and a
//! requested item count, it returns the fulfillment plan that ships no
//! fewer items than requested, with minimal overshoot, using the fewest
//! packs.
//!
//! The allocator holds no mutable state; concurrent calls never interfere.
//!
//! Logging levels:
//! - **DEBUG**: Per-call inputs and the chosen plan summary
//! - **TRACE**: Dynamic-program internals

pub mod allocator;

#[cfg(test)]
mod tests;

pub use allocator::Allocator;
