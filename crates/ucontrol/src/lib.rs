//! Control ROM generator for the Mirfak RV32IM decoder.
//!
//! The decoder reads a 32-bit control word from a 128-entry ROM addressed by
//! `opcode_class * 8 + funct3`. This crate produces that ROM image:
//! 1. **Control:** Field layout of the control word and a typed builder for it.
//! 2. **Catalog:** The control word of every named RV32IM decode outcome.
//! 3. **ISA:** Opcode classes and selectors that key the table.
//! 4. **Table:** Keyed assembly, validation, lookup, and the text artifact.
//! 5. **Config:** Options for embedding the generator in a build.

/// Control word catalog.
pub mod catalog;
/// Shared constants and error types.
pub mod common;
/// Generator configuration.
pub mod config;
/// Control word layout and encoding.
pub mod control;
/// Opcode classes, selectors, and instruction fields.
pub mod isa;
/// Table assembly and serialization.
pub mod table;

use std::path::Path;

use tracing::{debug, info};

pub use crate::catalog::{Catalog, Mnemonic};
pub use crate::common::{AuthoringDefect, GenError};
pub use crate::config::GeneratorConfig;
pub use crate::control::{ControlFields, ControlWord};
pub use crate::table::DecodeTable;

/// Builds, validates, and writes the Mirfak control ROM to `path`.
///
/// Nothing is written unless the catalog and table pass validation. When
/// `config.verify_after_write` is set the file is read back and compared before
/// it replaces `path`.
///
/// # Errors
///
/// Returns [`GenError::Authoring`] for catalog or table defects, [`GenError::Io`]
/// if the destination cannot be written, and [`GenError::Verify`] if the read-back
/// does not match.
pub fn generate(path: &Path, config: &GeneratorConfig) -> Result<DecodeTable, GenError> {
    config.validate()?;

    let catalog = Catalog::rv32im();
    catalog.validate()?;
    for group in catalog.aliases() {
        let names: Vec<&str> = group.iter().map(|m| m.name()).collect();
        debug!(aliases = ?names, "catalog entries share a control word");
    }

    let table = table::mirfak::build(&catalog)?;
    table.validate()?;

    info!(path = %path.display(), "generating control ROM");
    table::emit::write_artifact(&table, &config.banner, path, config.verify_after_write)?;
    Ok(table)
}
