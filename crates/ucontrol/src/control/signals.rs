//! Typed values for the multi-bit control fields.
//!
//! This module defines the encoding of each selector field. It covers:
//! 1. **Branch Control:** One-hot branch condition.
//! 2. **ALU Control:** Operation class and logic-op selector.
//! 3. **Operand Selection:** Sources for ALU inputs and the immediate format.
//! 4. **Memory and System Control:** Access direction, writeback source, and CSR command.
//!
//! Discriminants are the raw field codes written into the ROM.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Branch condition, one bit per comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum BranchType {
    /// Not a conditional branch.
    None = 0,
    /// Branch if equal.
    Beq = 0b000001,
    /// Branch if not equal.
    Bne = 0b000010,
    /// Branch if less than (signed).
    Blt = 0b000100,
    /// Branch if greater or equal (signed).
    Bge = 0b001000,
    /// Branch if less than (unsigned).
    Bltu = 0b010000,
    /// Branch if greater or equal (unsigned).
    Bgeu = 0b100000,
}

/// CSR operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum CsrCmd {
    /// No CSR access.
    None = 0b00,
    /// Write (CSRRW/CSRRWI).
    Write = 0b01,
    /// Set bits (CSRRS/CSRRSI).
    Set = 0b10,
    /// Clear bits (CSRRC/CSRRCI).
    Clear = 0b11,
}

/// Memory access direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum MemRw {
    /// Load.
    Read = 0,
    /// Store.
    Write = 1,
}

/// ALU operation class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum AluType {
    /// Addition (or subtraction when `alu_add` allows it).
    Add = 0b00,
    /// Bitwise logic, see [`AluLogic`].
    Logic = 0b01,
    /// Shift, direction from `alu_shift`.
    Shift = 0b10,
    /// Set-less-than, signedness from `alu_cmp`.
    Compare = 0b11,
}

/// Logic operation under [`AluType::Logic`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum AluLogic {
    /// Bitwise AND.
    And = 0b00,
    /// Bitwise OR.
    Or = 0b01,
    /// Bitwise XOR.
    Xor = 0b10,
}

/// Writeback data source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum WbSel {
    /// ALU result.
    Alu = 0b00,
    /// Load data.
    Memory = 0b01,
    /// Old CSR value.
    Csr = 0b10,
    /// Return address (PC + 4).
    PcPlus4 = 0b11,
}

/// Immediate format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum ImmSel {
    /// I-type.
    I = 0b000,
    /// S-type.
    S = 0b001,
    /// B-type.
    B = 0b010,
    /// U-type.
    U = 0b011,
    /// J-type.
    J = 0b100,
}

/// Second ALU operand source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum OpBSel {
    /// Register rs2.
    Rs2 = 0b00,
    /// Decoded immediate.
    Imm = 0b01,
    /// CSR read data.
    Csr = 0b11,
}

/// First ALU operand source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum OpASel {
    /// Register rs1.
    Rs1 = 0b00,
    /// Program counter.
    Pc = 0b01,
    /// Constant zero.
    Zero = 0b11,
}
