//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Leaf counts against published reference values
//! - `make_unmake.rs` - Apply/undo and game history correctness
//! - `edge_cases.rs` - Special positions and rule corners
//! - `proptest.rs` - Property-based tests

mod make_unmake;
