//! Opcode classes and selectors.
//!
//! The decoder front end folds the 7-bit major opcode into a 4-bit opcode class.
//! The class picks one of sixteen ROM groups and `funct3` picks the slot within it,
//! so the ROM address of an instruction is `class * 8 + funct3`.

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use super::opcodes;
use crate::common::GROUP_SLOTS;

/// Primary index into the control ROM.
///
/// The discriminant is the group index and is part of the hardware contract.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, IntoStaticStr, TryFromPrimitive, IntoPrimitive,
)]
#[repr(u8)]
#[strum(serialize_all = "snake_case")]
pub enum OpcodeClass {
    /// LUI.
    Lui = 0,
    /// AUIPC.
    Auipc = 1,
    /// JAL.
    Jal = 2,
    /// JALR.
    Jalr = 3,
    /// Conditional branches.
    Branch = 4,
    /// Loads.
    Load = 5,
    /// Stores.
    Store = 6,
    /// Register-immediate arithmetic.
    OpImm = 7,
    /// Register-register arithmetic.
    Op = 8,
    /// FENCE and FENCE.I.
    MiscMem = 9,
    /// ECALL/EBREAK and CSR access.
    System = 10,
    /// Multiply/divide (M extension).
    MulDiv = 11,
    /// Unassigned.
    Reserved12 = 12,
    /// Unassigned.
    Reserved13 = 13,
    /// Unassigned.
    Reserved14 = 14,
    /// Unassigned.
    Reserved15 = 15,
}

impl OpcodeClass {
    /// Group index of this class (0..16).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Classifies a major opcode.
    ///
    /// `funct7` is only consulted under `OP_REG`, where it separates the M extension
    /// from base arithmetic. Returns `None` for opcodes the core does not implement.
    pub const fn classify(opcode: u32, funct7: u32) -> Option<Self> {
        let class = match opcode & 0x7F {
            opcodes::OP_LUI => Self::Lui,
            opcodes::OP_AUIPC => Self::Auipc,
            opcodes::OP_JAL => Self::Jal,
            opcodes::OP_JALR => Self::Jalr,
            opcodes::OP_BRANCH => Self::Branch,
            opcodes::OP_LOAD => Self::Load,
            opcodes::OP_STORE => Self::Store,
            opcodes::OP_IMM => Self::OpImm,
            opcodes::OP_REG if funct7 == opcodes::FUNCT7_MULDIV => Self::MulDiv,
            opcodes::OP_REG => Self::Op,
            opcodes::OP_MISC_MEM => Self::MiscMem,
            opcodes::OP_SYSTEM => Self::System,
            _ => return None,
        };
        Some(class)
    }

    /// Major opcode this class decodes, or `None` for the reserved classes.
    ///
    /// `MulDiv` shares `OP_REG` with `Op`.
    pub const fn major_opcode(self) -> Option<u32> {
        match self {
            Self::Lui => Some(opcodes::OP_LUI),
            Self::Auipc => Some(opcodes::OP_AUIPC),
            Self::Jal => Some(opcodes::OP_JAL),
            Self::Jalr => Some(opcodes::OP_JALR),
            Self::Branch => Some(opcodes::OP_BRANCH),
            Self::Load => Some(opcodes::OP_LOAD),
            Self::Store => Some(opcodes::OP_STORE),
            Self::OpImm => Some(opcodes::OP_IMM),
            Self::Op | Self::MulDiv => Some(opcodes::OP_REG),
            Self::MiscMem => Some(opcodes::OP_MISC_MEM),
            Self::System => Some(opcodes::OP_SYSTEM),
            Self::Reserved12 | Self::Reserved13 | Self::Reserved14 | Self::Reserved15 => None,
        }
    }

    /// All classes in ascending group order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

impl fmt::Display for OpcodeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &'static str = self.into();
        write!(f, "{}({})", name, self.index())
    }
}

/// Secondary index into a group: the instruction's `funct3` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Selector(u8);

impl Selector {
    /// Builds a selector from the low three bits of a `funct3` value.
    #[inline]
    pub const fn from_funct3(bits: u32) -> Self {
        Self((bits & 0x7) as u8)
    }

    /// Builds a selector, rejecting values outside 0..8.
    pub const fn new(value: u8) -> Option<Self> {
        if (value as usize) < GROUP_SLOTS {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Slot index within the group.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Raw selector value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// All eight selectors in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..GROUP_SLOTS as u8).map(Self)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03b}", self.0)
    }
}
