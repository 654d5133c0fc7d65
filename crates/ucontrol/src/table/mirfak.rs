//! The Mirfak RV32IM decode table.
//!
//! | Class | Contents                                                          |
//! |-------|-------------------------------------------------------------------|
//! | 0-3   | LUI, AUIPC, JAL, JALR (replicated)                                |
//! | 4     | BEQ BNE - - BLT BGE BLTU BGEU                                     |
//! | 5     | LB LH LW - LBU LHU - -                                            |
//! | 6     | SB SH SW - - - - -                                                |
//! | 7     | ADDI SLLI SLTI SLTIU XORI SRLI/SRAI ORI ANDI                      |
//! | 8     | ADD/SUB SLL SLT SLTU XOR SRL/SRA OR AND                           |
//! | 9     | FENCE FENCE.I - - - - - -                                         |
//! | 10    | ECALL/EBREAK CSRRW CSRRS CSRRC - CSRRWI CSRRSI CSRRCI             |
//! | 11    | MUL/DIV (replicated)                                              |
//! | 12-15 | invalid                                                           |

use super::builder::TableBuilder;
use super::decode::DecodeTable;
use crate::catalog::{Catalog, Mnemonic};
use crate::common::AuthoringDefect;
use crate::isa::OpcodeClass;
use crate::isa::funct3 as f3;

/// Bindings of the Mirfak decoder.
///
/// # Errors
///
/// Fails only if the bindings below contradict each other.
pub fn bindings() -> Result<TableBuilder, AuthoringDefect> {
    let mut b = TableBuilder::new();

    b.replicate(OpcodeClass::Lui, Mnemonic::Lui)?;
    b.replicate(OpcodeClass::Auipc, Mnemonic::Auipc)?;
    b.replicate(OpcodeClass::Jal, Mnemonic::Jal)?;
    b.replicate(OpcodeClass::Jalr, Mnemonic::Jalr)?;

    b.bind(OpcodeClass::Branch, f3::BEQ, Mnemonic::Beq)?;
    b.bind(OpcodeClass::Branch, f3::BNE, Mnemonic::Bne)?;
    b.bind(OpcodeClass::Branch, f3::BLT, Mnemonic::Blt)?;
    b.bind(OpcodeClass::Branch, f3::BGE, Mnemonic::Bge)?;
    b.bind(OpcodeClass::Branch, f3::BLTU, Mnemonic::Bltu)?;
    b.bind(OpcodeClass::Branch, f3::BGEU, Mnemonic::Bgeu)?;

    b.bind(OpcodeClass::Load, f3::LB, Mnemonic::Lb)?;
    b.bind(OpcodeClass::Load, f3::LH, Mnemonic::Lh)?;
    b.bind(OpcodeClass::Load, f3::LW, Mnemonic::Lw)?;
    b.bind(OpcodeClass::Load, f3::LBU, Mnemonic::Lbu)?;
    b.bind(OpcodeClass::Load, f3::LHU, Mnemonic::Lhu)?;

    b.bind(OpcodeClass::Store, f3::SB, Mnemonic::Sb)?;
    b.bind(OpcodeClass::Store, f3::SH, Mnemonic::Sh)?;
    b.bind(OpcodeClass::Store, f3::SW, Mnemonic::Sw)?;

    b.bind(OpcodeClass::OpImm, f3::ADD_SUB, Mnemonic::Addi)?;
    b.bind(OpcodeClass::OpImm, f3::SLL, Mnemonic::Slli)?;
    b.bind(OpcodeClass::OpImm, f3::SLT, Mnemonic::Slti)?;
    b.bind(OpcodeClass::OpImm, f3::SLTU, Mnemonic::Sltiu)?;
    b.bind(OpcodeClass::OpImm, f3::XOR, Mnemonic::Xori)?;
    b.bind(OpcodeClass::OpImm, f3::SRL_SRA, Mnemonic::SrliSrai)?;
    b.bind(OpcodeClass::OpImm, f3::OR, Mnemonic::Ori)?;
    b.bind(OpcodeClass::OpImm, f3::AND, Mnemonic::Andi)?;

    b.bind(OpcodeClass::Op, f3::ADD_SUB, Mnemonic::AddSub)?;
    b.bind(OpcodeClass::Op, f3::SLL, Mnemonic::Sll)?;
    b.bind(OpcodeClass::Op, f3::SLT, Mnemonic::Slt)?;
    b.bind(OpcodeClass::Op, f3::SLTU, Mnemonic::Sltu)?;
    b.bind(OpcodeClass::Op, f3::XOR, Mnemonic::Xor)?;
    b.bind(OpcodeClass::Op, f3::SRL_SRA, Mnemonic::SrlSra)?;
    b.bind(OpcodeClass::Op, f3::OR, Mnemonic::Or)?;
    b.bind(OpcodeClass::Op, f3::AND, Mnemonic::And)?;

    b.bind(OpcodeClass::MiscMem, f3::FENCE, Mnemonic::Fence)?;
    b.bind(OpcodeClass::MiscMem, f3::FENCE_I, Mnemonic::FenceI)?;

    b.bind(OpcodeClass::System, f3::PRIV, Mnemonic::EcallEbreak)?;
    b.bind(OpcodeClass::System, f3::CSRRW, Mnemonic::Csrrw)?;
    b.bind(OpcodeClass::System, f3::CSRRS, Mnemonic::Csrrs)?;
    b.bind(OpcodeClass::System, f3::CSRRC, Mnemonic::Csrrc)?;
    b.bind(OpcodeClass::System, f3::CSRRWI, Mnemonic::Csrrwi)?;
    b.bind(OpcodeClass::System, f3::CSRRSI, Mnemonic::Csrrsi)?;
    b.bind(OpcodeClass::System, f3::CSRRCI, Mnemonic::Csrrci)?;

    b.replicate(OpcodeClass::MulDiv, Mnemonic::MulDiv)?;

    Ok(b)
}

/// Compiles the Mirfak decode table against `catalog`.
///
/// # Errors
///
/// Returns the first authoring defect in the bindings or a catalog entry they
/// reference but `catalog` lacks.
pub fn build(catalog: &Catalog) -> Result<DecodeTable, AuthoringDefect> {
    bindings()?.build(catalog)
}
