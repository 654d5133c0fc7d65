//! Control ROM geometry.
//!
//! These values are shared with the RTL memory initializer. Changing any of them
//! changes the artifact layout the hardware reads.

/// Width of one control word in bits.
pub const WORD_BITS: u32 = 32;

/// Number of selector slots per opcode group (3-bit funct3 selector).
pub const GROUP_SLOTS: usize = 8;

/// Number of opcode groups (4-bit opcode class).
pub const OPCODE_CLASSES: usize = 16;

/// Total number of addressable control words.
pub const TABLE_ENTRIES: usize = OPCODE_CLASSES * GROUP_SLOTS;
