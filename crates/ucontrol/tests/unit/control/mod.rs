//! # Control Word Tests
//!
//! Field layout, selector codes, packing, and literal parsing.
