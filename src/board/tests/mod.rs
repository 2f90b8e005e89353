//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `pieces.rs` - per-piece legality predicates
//! - `board.rs` - occupancy, setup and the builder
//! - `proptest.rs` - property-based tests

mod proptest;
