//! Game module tests.
//!
//! - `perft.rs` - Move tree counts for known positions
//! - `draw.rs` - Fifty-move rule, repetition, insufficient material
//! - `edge_cases.rs` - En passant, castling rights, promotion, mates
//! - `proptest.rs` - Property-based tests over random playouts

mod perft;
