//! RV32IM instruction-set definitions the control ROM is keyed by.
//!
//! # Contents
//!
//! * `opcodes`: Major opcodes (bits 6-0) of the instructions the core decodes.
//! * `funct3`: Selector values distinguishing instructions within a major opcode.
//! * `instruction`: Field extraction from raw instruction words.
//! * `class`: The 4-bit opcode class and 3-bit selector that address the ROM.

/// Opcode class and selector types addressing the control ROM.
pub mod class;

/// Function code 3 selector values.
pub mod funct3;

/// Raw instruction field extraction.
pub mod instruction;

/// RV32IM major opcodes.
pub mod opcodes;

pub use class::{OpcodeClass, Selector};
pub use instruction::InstructionBits;
