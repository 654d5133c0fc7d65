//! Control words and their typed field record.
//!
//! [`ControlFields`] names every signal of the word with a typed value.
//! [`ControlWord::pack`] composes it into the 32-bit ROM word at the positions
//! given by [`LAYOUT`](super::layout::LAYOUT). `pack` is a `const fn`; the
//! catalog evaluates it for every entry in a `const` table.

use std::fmt;
use std::str::FromStr;

use num_enum::TryFromPrimitive;

use super::layout::Field;
use super::signals::{AluLogic, AluType, BranchType, CsrCmd, ImmSel, MemRw, OpASel, OpBSel, WbSel};
use crate::common::{AuthoringDefect, WORD_BITS};

/// Every signal of a valid control word.
///
/// The `invalid` bit is not part of the record; a word packed from fields is
/// always a valid decode. Use [`ControlWord::INVALID`] for unmapped slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ControlFields {
    /// Route to the multiply/divide unit.
    pub is_muldiv: bool,
    /// FENCE.I.
    pub fence_i: bool,
    /// ECALL/EBREAK.
    pub xcall_xbreak: bool,
    /// Register file write enable.
    pub regfile_we: bool,
    /// JAL/JALR.
    pub is_jump: bool,
    /// Branch condition.
    pub branch_type: BranchType,
    /// CSR operation.
    pub csr_cmd: CsrCmd,
    /// Memory direction.
    pub mem_rw: MemRw,
    /// Memory access enable.
    pub mem_en: bool,
    /// ALU operation class.
    pub alu_type: AluType,
    /// Signed comparison (SLT/SLTI).
    pub alu_cmp: bool,
    /// Right shift (SRL/SRA and immediates).
    pub alu_shift: bool,
    /// Logic operation.
    pub alu_logic: AluLogic,
    /// Add may become subtract (register ADD/SUB).
    pub alu_add: bool,
    /// Writeback source.
    pub sel_wb_data: WbSel,
    /// Immediate format.
    pub sel_imm: ImmSel,
    /// Second ALU operand.
    pub sel_op_b: OpBSel,
    /// First ALU operand.
    pub sel_op_a: OpASel,
}

impl ControlFields {
    /// All signals deasserted, every selector at code zero.
    pub const NONE: Self = Self {
        is_muldiv: false,
        fence_i: false,
        xcall_xbreak: false,
        regfile_we: false,
        is_jump: false,
        branch_type: BranchType::None,
        csr_cmd: CsrCmd::None,
        mem_rw: MemRw::Read,
        mem_en: false,
        alu_type: AluType::Add,
        alu_cmp: false,
        alu_shift: false,
        alu_logic: AluLogic::And,
        alu_add: false,
        sel_wb_data: WbSel::Alu,
        sel_imm: ImmSel::I,
        sel_op_b: OpBSel::Rs2,
        sel_op_a: OpASel::Rs1,
    };
}

impl Default for ControlFields {
    fn default() -> Self {
        Self::NONE
    }
}

/// A 32-bit control word as stored in the ROM.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlWord(u32);

impl ControlWord {
    /// The reserved "no valid decode" word: top bit set, everything else clear.
    pub const INVALID: Self = Self(1 << (WORD_BITS - 1));

    /// Composes a valid control word from its fields.
    pub const fn pack(f: &ControlFields) -> Self {
        let mut w = 0;
        w = Field::IsMuldiv.insert(w, f.is_muldiv as u32);
        w = Field::FenceI.insert(w, f.fence_i as u32);
        w = Field::XcallXbreak.insert(w, f.xcall_xbreak as u32);
        w = Field::RegfileWe.insert(w, f.regfile_we as u32);
        w = Field::IsJump.insert(w, f.is_jump as u32);
        w = Field::BranchType.insert(w, f.branch_type as u32);
        w = Field::CsrCmd.insert(w, f.csr_cmd as u32);
        w = Field::MemRw.insert(w, f.mem_rw as u32);
        w = Field::MemEn.insert(w, f.mem_en as u32);
        w = Field::AluType.insert(w, f.alu_type as u32);
        w = Field::AluCmp.insert(w, f.alu_cmp as u32);
        w = Field::AluShift.insert(w, f.alu_shift as u32);
        w = Field::AluLogic.insert(w, f.alu_logic as u32);
        w = Field::AluAdd.insert(w, f.alu_add as u32);
        w = Field::SelWbData.insert(w, f.sel_wb_data as u32);
        w = Field::SelImm.insert(w, f.sel_imm as u32);
        w = Field::SelOpB.insert(w, f.sel_op_b as u32);
        w = Field::SelOpA.insert(w, f.sel_op_a as u32);
        Self(w)
    }

    /// Wraps raw bits without checking them.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True if the invalid bit is set.
    #[inline]
    pub const fn is_invalid(self) -> bool {
        Field::Invalid.extract(self.0) != 0
    }

    /// Reads one field, right-aligned.
    #[inline]
    pub const fn field(self, field: Field) -> u32 {
        field.extract(self.0)
    }

    /// Recovers the typed fields of a valid word.
    ///
    /// # Errors
    ///
    /// Fails if the invalid bit is set or a selector field holds a code with no
    /// assigned meaning.
    pub fn unpack(self) -> Result<ControlFields, AuthoringDefect> {
        if self.is_invalid() {
            return Err(AuthoringDefect::UnknownFieldCode {
                field: Field::Invalid.name(),
                value: 1,
            });
        }
        let w = self.0;
        Ok(ControlFields {
            is_muldiv: flag(w, Field::IsMuldiv),
            fence_i: flag(w, Field::FenceI),
            xcall_xbreak: flag(w, Field::XcallXbreak),
            regfile_we: flag(w, Field::RegfileWe),
            is_jump: flag(w, Field::IsJump),
            branch_type: code(w, Field::BranchType)?,
            csr_cmd: code(w, Field::CsrCmd)?,
            mem_rw: code(w, Field::MemRw)?,
            mem_en: flag(w, Field::MemEn),
            alu_type: code(w, Field::AluType)?,
            alu_cmp: flag(w, Field::AluCmp),
            alu_shift: flag(w, Field::AluShift),
            alu_logic: code(w, Field::AluLogic)?,
            alu_add: flag(w, Field::AluAdd),
            sel_wb_data: code(w, Field::SelWbData)?,
            sel_imm: code(w, Field::SelImm)?,
            sel_op_b: code(w, Field::SelOpB)?,
            sel_op_a: code(w, Field::SelOpA)?,
        })
    }
}

const fn flag(word: u32, field: Field) -> bool {
    field.extract(word) != 0
}

fn code<T>(word: u32, field: Field) -> Result<T, AuthoringDefect>
where
    T: TryFromPrimitive<Primitive = u8>,
{
    let value = field.extract(word);
    T::try_from_primitive(value as u8).map_err(|_| AuthoringDefect::UnknownFieldCode {
        field: field.name(),
        value,
    })
}

impl From<&ControlFields> for ControlWord {
    fn from(fields: &ControlFields) -> Self {
        Self::pack(fields)
    }
}

impl fmt::Display for ControlWord {
    /// Renders the word as 32 binary digits, MSB first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032b}", self.0)
    }
}

impl fmt::Debug for ControlWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ControlWord({:032b})", self.0)
    }
}

impl FromStr for ControlWord {
    type Err = AuthoringDefect;

    /// Parses exactly 32 characters of `0`/`1`, MSB first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != WORD_BITS as usize {
            return Err(AuthoringDefect::BadWidth {
                literal: s.to_owned(),
                len,
            });
        }
        let mut bits = 0u32;
        for (column, ch) in s.chars().enumerate() {
            let bit = match ch {
                '0' => 0,
                '1' => 1,
                _ => {
                    return Err(AuthoringDefect::NonBinary {
                        literal: s.to_owned(),
                        ch,
                        column,
                    });
                }
            };
            bits = (bits << 1) | bit;
        }
        Ok(Self(bits))
    }
}
