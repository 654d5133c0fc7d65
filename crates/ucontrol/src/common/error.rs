//! Error definitions for the control ROM generator.
//!
//! Two classes of failure exist:
//! 1. **Authoring defects:** malformed catalog data or a badly assembled table. These are
//!    caught by validation before anything is written.
//! 2. **Generation failures:** configuration or destination I/O problems, plus read-back
//!    mismatches after the artifact was written.
//!
//! Unmapped decode slots are not errors; they resolve to the reserved invalid word.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A defect in the authored catalog or table.
///
/// Every variant names the offending entry so the failing build points at the data
/// that needs fixing.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthoringDefect {
    /// A control word literal does not have exactly 32 characters.
    #[error("control word `{literal}` is {len} characters wide, expected 32")]
    BadWidth {
        /// The offending literal.
        literal: String,
        /// Its character count.
        len: usize,
    },

    /// A control word literal contains something other than `0` or `1`.
    #[error("control word `{literal}` has non-binary character {ch:?} at column {column}")]
    NonBinary {
        /// The offending literal.
        literal: String,
        /// The first bad character.
        ch: char,
        /// Zero-based column of the bad character.
        column: usize,
    },

    /// A field holds a code with no assigned meaning.
    #[error("field `{field}` holds unassigned code {value:#b}")]
    UnknownFieldCode {
        /// Field name.
        field: &'static str,
        /// Raw field value.
        value: u32,
    },

    /// A named entry has the invalid bit set.
    #[error("catalog entry `{mnemonic}` sets the invalid bit ({word})")]
    InvalidBitSet {
        /// Mnemonic of the entry.
        mnemonic: &'static str,
        /// Its rendered word.
        word: String,
    },

    /// A named entry encodes to the reserved invalid word.
    #[error("catalog entry `{mnemonic}` encodes to the reserved invalid word")]
    ReservedWord {
        /// Mnemonic of the entry.
        mnemonic: &'static str,
    },

    /// A mnemonic was supplied twice while building a catalog.
    #[error("catalog entry `{mnemonic}` is defined more than once")]
    DuplicateEntry {
        /// Mnemonic of the entry.
        mnemonic: &'static str,
    },

    /// A table slot references a mnemonic the catalog does not define.
    #[error("catalog has no entry for `{mnemonic}`")]
    MissingEntry {
        /// Mnemonic that was referenced.
        mnemonic: &'static str,
    },

    /// A selector slot was bound twice.
    #[error("opcode class {class} selector {selector} bound to `{first}` and again to `{second}`")]
    DuplicateBinding {
        /// Opcode class index.
        class: u8,
        /// Selector index.
        selector: u8,
        /// Mnemonic bound first.
        first: &'static str,
        /// Mnemonic bound second.
        second: &'static str,
    },

    /// A group was replicated after some of its selectors were already bound.
    #[error("opcode class {class} cannot be replicated with `{mnemonic}`: selectors already bound")]
    ReplicateConflict {
        /// Opcode class index.
        class: u8,
        /// Mnemonic that was to be replicated.
        mnemonic: &'static str,
    },

    /// A table slot disagrees with its binding.
    #[error("table address {address}: {reason}")]
    SlotMismatch {
        /// Flat table address (`class * 8 + selector`).
        address: usize,
        /// What is wrong with the slot.
        reason: String,
    },
}

/// Errors returned by artifact generation.
#[derive(Debug, Error)]
pub enum GenError {
    /// The catalog or table failed validation.
    #[error(transparent)]
    Authoring(#[from] AuthoringDefect),

    /// Writing or reading the destination failed.
    #[error("I/O error on `{}`: {source}", path.display())]
    Io {
        /// Destination path.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },

    /// A configuration document could not be parsed.
    #[error("invalid generator config: {0}")]
    Config(#[from] serde_json::Error),

    /// A configuration value is out of range.
    #[error("invalid generator config: {0}")]
    InvalidConfig(String),

    /// The written artifact does not match the table.
    #[error("artifact `{}` failed read-back: {reason}", path.display())]
    Verify {
        /// Destination path.
        path: PathBuf,
        /// First mismatch found.
        reason: String,
    },
}

impl GenError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
