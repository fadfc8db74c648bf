//! Pure read-side computations.
//!
//! # Responsibility
//! - Sorting, filtering, deadline alerts and dashboard aggregates over
//!   in-memory collections.
//!
//! # Invariants
//! - Nothing in this module reads or writes storage.

pub mod filter;
pub mod notify;
pub mod stats;
