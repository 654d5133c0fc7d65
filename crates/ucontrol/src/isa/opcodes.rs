//! Major opcodes (bits 6..0) the Mirfak front end folds into opcode classes.
//!
//! Anything not listed here, including the whole floating-point space, has no
//! opcode class and decodes to the invalid word.

/// LB, LH, LW, LBU, LHU.
pub const OP_LOAD: u32 = 0b000_0011;
/// FENCE, FENCE.I.
pub const OP_MISC_MEM: u32 = 0b000_1111;
/// Register-immediate ALU operations.
pub const OP_IMM: u32 = 0b001_0011;
/// AUIPC.
pub const OP_AUIPC: u32 = 0b001_0111;
/// SB, SH, SW.
pub const OP_STORE: u32 = 0b010_0011;
/// Register-register ALU operations, shared with the M extension.
pub const OP_REG: u32 = 0b011_0011;
/// LUI.
pub const OP_LUI: u32 = 0b011_0111;
/// Conditional branches.
pub const OP_BRANCH: u32 = 0b110_0011;
/// JALR.
pub const OP_JALR: u32 = 0b110_0111;
/// JAL.
pub const OP_JAL: u32 = 0b110_1111;
/// ECALL, EBREAK, and the Zicsr instructions.
pub const OP_SYSTEM: u32 = 0b111_0011;

/// `funct7` under [`OP_REG`] that selects multiply/divide.
pub const FUNCT7_MULDIV: u32 = 0b000_0001;
