//! Control word encoding.
//!
//! This module defines how decode outcomes are packed into ROM words:
//! 1. **Layout:** Field order, widths, and bit positions.
//! 2. **Signals:** Typed codes for the multi-bit selector fields.
//! 3. **Words:** The typed field record and the packed 32-bit word.

/// Field layout of the 32-bit control word.
pub mod layout;

/// Typed selector codes.
pub mod signals;

/// Control field record and packed control word.
pub mod word;

pub use layout::{Field, LAYOUT};
pub use signals::{AluLogic, AluType, BranchType, CsrCmd, ImmSel, MemRw, OpASel, OpBSel, WbSel};
pub use word::{ControlFields, ControlWord};
