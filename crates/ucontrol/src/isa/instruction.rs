//! Raw instruction field extraction.
//!
//! The control ROM is addressed by three fields of the raw instruction word.
//! These helpers pull them out so a table lookup mirrors the RTL front end.

const OPCODE_SHIFT: u32 = 0;
const OPCODE_WIDTH: u32 = 7;
const FUNCT3_SHIFT: u32 = 12;
const FUNCT3_WIDTH: u32 = 3;
const FUNCT7_SHIFT: u32 = 25;
const FUNCT7_WIDTH: u32 = 7;

#[inline(always)]
const fn bits(word: u32, shift: u32, width: u32) -> u32 {
    (word >> shift) & ((1 << width) - 1)
}

/// Fields of a raw instruction that key the control ROM.
pub trait InstructionBits {
    /// Major opcode, bits 6..0.
    fn opcode(&self) -> u32;

    /// `funct3`, bits 14..12. Selects the slot within an opcode group.
    fn funct3(&self) -> u32;

    /// `funct7`, bits 31..25.
    ///
    /// The decoder only looks at it under `OP_REG`, to route the M extension.
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        bits(*self, OPCODE_SHIFT, OPCODE_WIDTH)
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        bits(*self, FUNCT3_SHIFT, FUNCT3_WIDTH)
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        bits(*self, FUNCT7_SHIFT, FUNCT7_WIDTH)
    }
}
