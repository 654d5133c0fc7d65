//! RV32IM Function Codes (funct3) as ROM selectors.
//!
//! The `funct3` field (bits 14-12) distinguishes between instructions sharing
//! the same major opcode (e.g., LB vs LH, BEQ vs BNE, ADD vs SLT). Within the
//! control ROM it is the selector indexing a group's eight slots.

use super::class::Selector;

/// Load Byte (signed).
pub const LB: Selector = Selector::from_funct3(0b000);
/// Load Halfword (signed).
pub const LH: Selector = Selector::from_funct3(0b001);
/// Load Word.
pub const LW: Selector = Selector::from_funct3(0b010);
/// Load Byte Unsigned.
pub const LBU: Selector = Selector::from_funct3(0b100);
/// Load Halfword Unsigned.
pub const LHU: Selector = Selector::from_funct3(0b101);

/// Store Byte.
pub const SB: Selector = Selector::from_funct3(0b000);
/// Store Halfword.
pub const SH: Selector = Selector::from_funct3(0b001);
/// Store Word.
pub const SW: Selector = Selector::from_funct3(0b010);

/// Branch Equal.
pub const BEQ: Selector = Selector::from_funct3(0b000);
/// Branch Not Equal.
pub const BNE: Selector = Selector::from_funct3(0b001);
/// Branch Less Than (signed).
pub const BLT: Selector = Selector::from_funct3(0b100);
/// Branch Greater or Equal (signed).
pub const BGE: Selector = Selector::from_funct3(0b101);
/// Branch Less Than Unsigned.
pub const BLTU: Selector = Selector::from_funct3(0b110);
/// Branch Greater or Equal Unsigned.
pub const BGEU: Selector = Selector::from_funct3(0b111);

/// Add / Subtract.
pub const ADD_SUB: Selector = Selector::from_funct3(0b000);
/// Shift Left Logical.
pub const SLL: Selector = Selector::from_funct3(0b001);
/// Set Less Than (signed).
pub const SLT: Selector = Selector::from_funct3(0b010);
/// Set Less Than Unsigned.
pub const SLTU: Selector = Selector::from_funct3(0b011);
/// Bitwise XOR.
pub const XOR: Selector = Selector::from_funct3(0b100);
/// Shift Right Logical / Arithmetic.
pub const SRL_SRA: Selector = Selector::from_funct3(0b101);
/// Bitwise OR.
pub const OR: Selector = Selector::from_funct3(0b110);
/// Bitwise AND.
pub const AND: Selector = Selector::from_funct3(0b111);

/// Fence.
pub const FENCE: Selector = Selector::from_funct3(0b000);
/// Instruction Fence.
pub const FENCE_I: Selector = Selector::from_funct3(0b001);

/// ECALL / EBREAK (distinguished by imm[0]).
pub const PRIV: Selector = Selector::from_funct3(0b000);
/// CSR Read/Write.
pub const CSRRW: Selector = Selector::from_funct3(0b001);
/// CSR Read/Set.
pub const CSRRS: Selector = Selector::from_funct3(0b010);
/// CSR Read/Clear.
pub const CSRRC: Selector = Selector::from_funct3(0b011);
/// CSR Read/Write Immediate.
pub const CSRRWI: Selector = Selector::from_funct3(0b101);
/// CSR Read/Set Immediate.
pub const CSRRSI: Selector = Selector::from_funct3(0b110);
/// CSR Read/Clear Immediate.
pub const CSRRCI: Selector = Selector::from_funct3(0b111);
