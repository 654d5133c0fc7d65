//! Table compiler.
//!
//! Turns the catalog and the authored bindings into the 128-entry ROM image:
//! 1. **Builder:** Keyed `(class, selector)` bindings and group replication.
//! 2. **Decode Table:** The compiled groups with address arithmetic and lookup.
//! 3. **Mirfak:** The RV32IM bindings of the Mirfak core.
//! 4. **Emit:** Text serialization and the atomic artifact write.

/// Keyed table assembly.
pub mod builder;

/// Compiled decode table types.
pub mod decode;

/// Artifact serialization and file output.
pub mod emit;

/// The Mirfak RV32IM bindings.
pub mod mirfak;

pub use builder::TableBuilder;
pub use decode::{DecodeTable, OpcodeGroup, Slot};
