//! Common types and constants shared by the catalog, compiler, and emitter.
//!
//! This module provides:
//! 1. **Constants:** Word width and table geometry the hardware consumer depends on.
//! 2. **Error Handling:** Authoring defects and generator failures.

/// Table geometry and word-width constants.
pub mod constants;

/// Error types for authoring defects and artifact generation.
pub mod error;

pub use constants::{GROUP_SLOTS, OPCODE_CLASSES, TABLE_ENTRIES, WORD_BITS};
pub use error::{AuthoringDefect, GenError};
