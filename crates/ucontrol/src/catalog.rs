//! Control word catalog.
//!
//! Maps every named RV32IM decode outcome to its control word. Entries are
//! authored as [`ControlFields`] records and packed into [`Mnemonic::WORDS`]
//! during constant evaluation.
//!
//! # Aliasing
//!
//! Several mnemonics share one word. The load variants (`lb`, `lh`, `lw`, `lbu`,
//! `lhu`) are identical, as are the store variants and each CSR register/immediate
//! pair. Access width, sign extension, and the CSR operand source come from
//! `funct3`, which the datapath reads directly. Keep the aliases: the ROM word has
//! no field for those distinctions.

use std::collections::BTreeMap;

use strum::{EnumIter, IntoEnumIterator, IntoStaticStr, VariantArray};

use crate::common::AuthoringDefect;
use crate::control::{
    AluLogic, AluType, BranchType, ControlFields, ControlWord, CsrCmd, ImmSel, MemRw, OpASel, OpBSel, WbSel,
};

/// A named catalog entry.
///
/// Some entries cover several instructions the control word does not tell apart
/// (`SrliSrai`, `AddSub`, `EcallEbreak`, `MulDiv`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, IntoStaticStr, VariantArray)]
#[strum(serialize_all = "snake_case")]
#[allow(missing_docs)]
pub enum Mnemonic {
    Lui,
    Auipc,
    Jal,
    Jalr,
    Beq,
    Bne,
    Blt,
    Bge,
    Bltu,
    Bgeu,
    Lb,
    Lh,
    Lw,
    Lbu,
    Lhu,
    Sb,
    Sh,
    Sw,
    Addi,
    Slti,
    Sltiu,
    Xori,
    Ori,
    Andi,
    Slli,
    SrliSrai,
    AddSub,
    Sll,
    Slt,
    Sltu,
    Xor,
    SrlSra,
    Or,
    And,
    Fence,
    FenceI,
    EcallEbreak,
    Csrrw,
    Csrrs,
    Csrrc,
    Csrrwi,
    Csrrsi,
    Csrrci,
    #[strum(serialize = "muldiv")]
    MulDiv,
}

const ENTRY_COUNT: usize = Mnemonic::VARIANTS.len();

const WRITES_RD: ControlFields = ControlFields {
    regfile_we: true,
    ..ControlFields::NONE
};

const REG_IMM: ControlFields = ControlFields {
    sel_op_b: OpBSel::Imm,
    ..WRITES_RD
};

const BRANCH: ControlFields = ControlFields {
    sel_imm: ImmSel::B,
    sel_op_b: OpBSel::Imm,
    sel_op_a: OpASel::Pc,
    ..ControlFields::NONE
};

const LOAD: ControlFields = ControlFields {
    mem_en: true,
    sel_wb_data: WbSel::Memory,
    ..REG_IMM
};

const STORE: ControlFields = ControlFields {
    mem_rw: MemRw::Write,
    mem_en: true,
    sel_imm: ImmSel::S,
    sel_op_b: OpBSel::Imm,
    ..ControlFields::NONE
};

const CSR_WRITE: ControlFields = ControlFields {
    csr_cmd: CsrCmd::Write,
    sel_wb_data: WbSel::Csr,
    sel_op_b: OpBSel::Csr,
    ..WRITES_RD
};

const fn branch(branch_type: BranchType) -> ControlFields {
    ControlFields { branch_type, ..BRANCH }
}

const fn csr(csr_cmd: CsrCmd) -> ControlFields {
    ControlFields { csr_cmd, ..CSR_WRITE }
}

const fn logic(base: ControlFields, alu_logic: AluLogic) -> ControlFields {
    ControlFields {
        alu_type: AluType::Logic,
        alu_logic,
        ..base
    }
}

const fn shift(base: ControlFields, right: bool) -> ControlFields {
    ControlFields {
        alu_type: AluType::Shift,
        alu_shift: right,
        ..base
    }
}

const fn compare(base: ControlFields, signed: bool) -> ControlFields {
    ControlFields {
        alu_type: AluType::Compare,
        alu_cmp: signed,
        ..base
    }
}

impl Mnemonic {
    /// Packed word of every entry, indexed like [`Mnemonic::VARIANTS`].
    pub const WORDS: [ControlWord; ENTRY_COUNT] = {
        let mut words = [ControlWord::INVALID; ENTRY_COUNT];
        let mut i = 0;
        while i < words.len() {
            words[i] = Self::VARIANTS[i].word();
            i += 1;
        }
        words
    };

    /// Control fields of this entry.
    pub const fn fields(self) -> ControlFields {
        match self {
            Self::Lui => ControlFields {
                sel_imm: ImmSel::U,
                sel_op_a: OpASel::Zero,
                ..REG_IMM
            },
            Self::Auipc => ControlFields {
                sel_imm: ImmSel::U,
                sel_op_a: OpASel::Pc,
                ..REG_IMM
            },
            Self::Jal => ControlFields {
                is_jump: true,
                sel_wb_data: WbSel::PcPlus4,
                sel_imm: ImmSel::J,
                sel_op_a: OpASel::Pc,
                ..REG_IMM
            },
            Self::Jalr => ControlFields {
                is_jump: true,
                sel_wb_data: WbSel::PcPlus4,
                ..REG_IMM
            },
            Self::Beq => branch(BranchType::Beq),
            Self::Bne => branch(BranchType::Bne),
            Self::Blt => branch(BranchType::Blt),
            Self::Bge => branch(BranchType::Bge),
            Self::Bltu => branch(BranchType::Bltu),
            Self::Bgeu => branch(BranchType::Bgeu),
            Self::Lb | Self::Lh | Self::Lw | Self::Lbu | Self::Lhu => LOAD,
            Self::Sb | Self::Sh | Self::Sw => STORE,
            Self::Addi => REG_IMM,
            Self::Slti => compare(REG_IMM, true),
            Self::Sltiu => compare(REG_IMM, false),
            Self::Xori => logic(REG_IMM, AluLogic::Xor),
            Self::Ori => logic(REG_IMM, AluLogic::Or),
            Self::Andi => logic(REG_IMM, AluLogic::And),
            Self::Slli => shift(REG_IMM, false),
            Self::SrliSrai => shift(REG_IMM, true),
            Self::AddSub => ControlFields {
                alu_add: true,
                ..WRITES_RD
            },
            Self::Sll => shift(WRITES_RD, false),
            Self::Slt => compare(WRITES_RD, true),
            Self::Sltu => compare(WRITES_RD, false),
            Self::Xor => logic(WRITES_RD, AluLogic::Xor),
            Self::SrlSra => shift(WRITES_RD, true),
            Self::Or => logic(WRITES_RD, AluLogic::Or),
            Self::And => logic(WRITES_RD, AluLogic::And),
            Self::Fence => ControlFields::NONE,
            Self::FenceI => ControlFields {
                fence_i: true,
                ..ControlFields::NONE
            },
            Self::EcallEbreak => ControlFields {
                xcall_xbreak: true,
                ..ControlFields::NONE
            },
            Self::Csrrw | Self::Csrrwi => csr(CsrCmd::Write),
            Self::Csrrs | Self::Csrrsi => csr(CsrCmd::Set),
            Self::Csrrc | Self::Csrrci => csr(CsrCmd::Clear),
            Self::MulDiv => ControlFields {
                is_muldiv: true,
                ..WRITES_RD
            },
        }
    }

    /// Packed control word of this entry.
    pub const fn word(self) -> ControlWord {
        ControlWord::pack(&self.fields())
    }

    /// Lower-case name as used in the RTL sources.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Every catalog entry in declaration order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

/// Immutable mapping from mnemonic to control word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<Mnemonic, ControlWord>,
}

impl Catalog {
    /// The RV32IM catalog of the Mirfak core.
    pub fn rv32im() -> Self {
        Self {
            entries: Mnemonic::VARIANTS.iter().copied().zip(Mnemonic::WORDS).collect(),
        }
    }

    /// Builds a catalog from explicit entries.
    ///
    /// # Errors
    ///
    /// Returns [`AuthoringDefect::DuplicateEntry`] if a mnemonic appears twice.
    pub fn from_entries<I>(entries: I) -> Result<Self, AuthoringDefect>
    where
        I: IntoIterator<Item = (Mnemonic, ControlWord)>,
    {
        let mut map = BTreeMap::new();
        for (mnemonic, word) in entries {
            if map.insert(mnemonic, word).is_some() {
                return Err(AuthoringDefect::DuplicateEntry {
                    mnemonic: mnemonic.name(),
                });
            }
        }
        Ok(Self { entries: map })
    }

    /// Looks up the word for `mnemonic`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthoringDefect::MissingEntry`] if the catalog does not define it.
    pub fn get(&self, mnemonic: Mnemonic) -> Result<ControlWord, AuthoringDefect> {
        self.entries
            .get(&mnemonic)
            .copied()
            .ok_or(AuthoringDefect::MissingEntry {
                mnemonic: mnemonic.name(),
            })
    }

    /// The reserved invalid word.
    #[inline]
    pub const fn invalid(&self) -> ControlWord {
        ControlWord::INVALID
    }

    /// Entries in mnemonic order.
    pub fn iter(&self) -> impl Iterator<Item = (Mnemonic, ControlWord)> + '_ {
        self.entries.iter().map(|(m, w)| (*m, *w))
    }

    /// Number of named entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the catalog has no named entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Groups of mnemonics that share one control word, in word order.
    pub fn aliases(&self) -> Vec<Vec<Mnemonic>> {
        let mut by_word: BTreeMap<ControlWord, Vec<Mnemonic>> = BTreeMap::new();
        for (mnemonic, word) in self.iter() {
            by_word.entry(word).or_default().push(mnemonic);
        }
        by_word.into_values().filter(|group| group.len() > 1).collect()
    }

    /// Checks every named entry against the reserved word and the field codes.
    ///
    /// # Errors
    ///
    /// Returns the first defect found, naming the offending mnemonic.
    pub fn validate(&self) -> Result<(), AuthoringDefect> {
        for (mnemonic, word) in self.iter() {
            if word == ControlWord::INVALID {
                return Err(AuthoringDefect::ReservedWord {
                    mnemonic: mnemonic.name(),
                });
            }
            if word.is_invalid() {
                return Err(AuthoringDefect::InvalidBitSet {
                    mnemonic: mnemonic.name(),
                    word: word.to_string(),
                });
            }
            let _ = word.unpack()?;
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::rv32im()
    }
}
