//! Control word bit layout.
//!
//! A control word is 32 bits partitioned into nineteen contiguous fields, listed
//! here from the most significant bit down:
//!
//! | Field          | Width | Bits    |
//! |----------------|-------|---------|
//! | `invalid`      | 1     | 31      |
//! | `is_muldiv`    | 1     | 30      |
//! | `fence_i`      | 1     | 29      |
//! | `xcall_xbreak` | 1     | 28      |
//! | `regfile_we`   | 1     | 27      |
//! | `is_jump`      | 1     | 26      |
//! | `branch_type`  | 6     | 25..20  |
//! | `csr_cmd`      | 2     | 19..18  |
//! | `mem_rw`       | 1     | 17      |
//! | `mem_en`       | 1     | 16      |
//! | `alu_type`     | 2     | 15..14  |
//! | `alu_cmp`      | 1     | 13      |
//! | `alu_shift`    | 1     | 12      |
//! | `alu_logic`    | 2     | 11..10  |
//! | `alu_add`      | 1     | 9       |
//! | `sel_wb_data`  | 2     | 8..7    |
//! | `sel_imm`      | 3     | 6..4    |
//! | `sel_op_b`     | 2     | 3..2    |
//! | `sel_op_a`     | 2     | 1..0    |
//!
//! The layout is fixed; the RTL slices the ROM output at these positions.

use strum::{EnumIter, IntoStaticStr};

use crate::common::WORD_BITS;

/// One named field of the control word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    /// Decode failed; every other field is don't-care.
    Invalid,
    /// Route to the multiply/divide unit.
    IsMuldiv,
    /// Instruction-fence semantics.
    FenceI,
    /// ECALL/EBREAK trap.
    XcallXbreak,
    /// Register file write enable.
    RegfileWe,
    /// Unconditional control transfer.
    IsJump,
    /// One-hot branch condition.
    BranchType,
    /// CSR operation.
    CsrCmd,
    /// Memory direction: read (0) or write (1).
    MemRw,
    /// Memory access enable.
    MemEn,
    /// ALU operation class.
    AluType,
    /// Signed comparison.
    AluCmp,
    /// Right shift.
    AluShift,
    /// Logic operation.
    AluLogic,
    /// Add may become subtract.
    AluAdd,
    /// Writeback source.
    SelWbData,
    /// Immediate format.
    SelImm,
    /// Second ALU operand source.
    SelOpB,
    /// First ALU operand source.
    SelOpA,
}

/// Fields in MSB-first order.
pub const LAYOUT: [Field; 19] = [
    Field::Invalid,
    Field::IsMuldiv,
    Field::FenceI,
    Field::XcallXbreak,
    Field::RegfileWe,
    Field::IsJump,
    Field::BranchType,
    Field::CsrCmd,
    Field::MemRw,
    Field::MemEn,
    Field::AluType,
    Field::AluCmp,
    Field::AluShift,
    Field::AluLogic,
    Field::AluAdd,
    Field::SelWbData,
    Field::SelImm,
    Field::SelOpB,
    Field::SelOpA,
];

const fn total_width() -> u32 {
    let mut total = 0;
    let mut i = 0;
    while i < LAYOUT.len() {
        total += LAYOUT[i].width();
        i += 1;
    }
    total
}

const _: () = assert!(total_width() == WORD_BITS, "control word fields must sum to 32 bits");

impl Field {
    /// Width of the field in bits.
    pub const fn width(self) -> u32 {
        match self {
            Self::BranchType => 6,
            Self::SelImm => 3,
            Self::CsrCmd | Self::AluType | Self::AluLogic | Self::SelWbData | Self::SelOpB | Self::SelOpA => 2,
            Self::Invalid
            | Self::IsMuldiv
            | Self::FenceI
            | Self::XcallXbreak
            | Self::RegfileWe
            | Self::IsJump
            | Self::MemRw
            | Self::MemEn
            | Self::AluCmp
            | Self::AluShift
            | Self::AluAdd => 1,
        }
    }

    /// Bit position of the field's least significant bit.
    pub const fn lsb(self) -> u32 {
        // Sum the widths of every field below this one.
        let mut shift = 0;
        let mut i = LAYOUT.len();
        while i > 0 {
            i -= 1;
            if LAYOUT[i] as u8 == self as u8 {
                break;
            }
            shift += LAYOUT[i].width();
        }
        shift
    }

    /// Mask of the field within the word.
    pub const fn mask(self) -> u32 {
        ((1u32 << self.width()) - 1) << self.lsb()
    }

    /// Places `value` into this field of `word`.
    ///
    /// # Panics
    ///
    /// Panics if `value` does not fit in the field. In a constant context this is a
    /// compile error.
    pub const fn insert(self, word: u32, value: u32) -> u32 {
        assert!(value >> self.width() == 0, "field value exceeds field width");
        (word & !self.mask()) | (value << self.lsb())
    }

    /// Reads this field from `word`, right-aligned.
    #[inline]
    pub const fn extract(self, word: u32) -> u32 {
        (word & self.mask()) >> self.lsb()
    }

    /// Field name as it appears in the RTL.
    pub fn name(self) -> &'static str {
        self.into()
    }
}
