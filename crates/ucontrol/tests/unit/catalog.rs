//! # Catalog Tests
//!
//! Every structured entry must reproduce the control word the RTL was built
//! against, and validation must name the entry at fault.

use mirfak_ucontrol::AuthoringDefect;
use mirfak_ucontrol::catalog::{Catalog, Mnemonic};
use mirfak_ucontrol::control::ControlWord;
use rstest::rstest;
use strum::VariantArray;

#[rstest]
#[case(Mnemonic::Lui, "00001000000000000000000000110111")]
#[case(Mnemonic::Auipc, "00001000000000000000000000110101")]
#[case(Mnemonic::Jal, "00001100000000000000000111000101")]
#[case(Mnemonic::Jalr, "00001100000000000000000110000100")]
#[case(Mnemonic::Beq, "00000000000100000000000000100101")]
#[case(Mnemonic::Bne, "00000000001000000000000000100101")]
#[case(Mnemonic::Blt, "00000000010000000000000000100101")]
#[case(Mnemonic::Bge, "00000000100000000000000000100101")]
#[case(Mnemonic::Bltu, "00000001000000000000000000100101")]
#[case(Mnemonic::Bgeu, "00000010000000000000000000100101")]
#[case(Mnemonic::Lb, "00001000000000010000000010000100")]
#[case(Mnemonic::Lh, "00001000000000010000000010000100")]
#[case(Mnemonic::Lw, "00001000000000010000000010000100")]
#[case(Mnemonic::Lbu, "00001000000000010000000010000100")]
#[case(Mnemonic::Lhu, "00001000000000010000000010000100")]
#[case(Mnemonic::Sb, "00000000000000110000000000010100")]
#[case(Mnemonic::Sh, "00000000000000110000000000010100")]
#[case(Mnemonic::Sw, "00000000000000110000000000010100")]
#[case(Mnemonic::Addi, "00001000000000000000000000000100")]
#[case(Mnemonic::Slti, "00001000000000001110000000000100")]
#[case(Mnemonic::Sltiu, "00001000000000001100000000000100")]
#[case(Mnemonic::Xori, "00001000000000000100100000000100")]
#[case(Mnemonic::Ori, "00001000000000000100010000000100")]
#[case(Mnemonic::Andi, "00001000000000000100000000000100")]
#[case(Mnemonic::Slli, "00001000000000001000000000000100")]
#[case(Mnemonic::SrliSrai, "00001000000000001001000000000100")]
#[case(Mnemonic::AddSub, "00001000000000000000001000000000")]
#[case(Mnemonic::Sll, "00001000000000001000000000000000")]
#[case(Mnemonic::Slt, "00001000000000001110000000000000")]
#[case(Mnemonic::Sltu, "00001000000000001100000000000000")]
#[case(Mnemonic::Xor, "00001000000000000100100000000000")]
#[case(Mnemonic::SrlSra, "00001000000000001001000000000000")]
#[case(Mnemonic::Or, "00001000000000000100010000000000")]
#[case(Mnemonic::And, "00001000000000000100000000000000")]
#[case(Mnemonic::Fence, "00000000000000000000000000000000")]
#[case(Mnemonic::FenceI, "00100000000000000000000000000000")]
#[case(Mnemonic::EcallEbreak, "00010000000000000000000000000000")]
#[case(Mnemonic::Csrrw, "00001000000001000000000100001100")]
#[case(Mnemonic::Csrrs, "00001000000010000000000100001100")]
#[case(Mnemonic::Csrrc, "00001000000011000000000100001100")]
#[case(Mnemonic::Csrrwi, "00001000000001000000000100001100")]
#[case(Mnemonic::Csrrsi, "00001000000010000000000100001100")]
#[case(Mnemonic::Csrrci, "00001000000011000000000100001100")]
#[case(Mnemonic::MulDiv, "01001000000000000000000000000000")]
fn test_entry_matches_rtl_word(#[case] mnemonic: Mnemonic, #[case] literal: &str) {
    assert_eq!(mnemonic.word().to_string(), literal);
    assert_eq!(Catalog::rv32im().get(mnemonic), literal.parse::<ControlWord>());
}

#[test]
fn test_catalog_covers_every_mnemonic() {
    let catalog = Catalog::rv32im();
    assert_eq!(catalog.len(), 44);
    assert_eq!(catalog.len(), Mnemonic::all().count());
    assert!(!catalog.is_empty());
}

#[test]
fn test_const_word_table_matches_catalog() {
    const LUI: ControlWord = Mnemonic::WORDS[0];
    assert_eq!(LUI, Mnemonic::Lui.word());

    assert_eq!(Mnemonic::WORDS.len(), Mnemonic::VARIANTS.len());
    let catalog = Catalog::rv32im();
    for (mnemonic, word) in Mnemonic::VARIANTS.iter().zip(Mnemonic::WORDS) {
        assert_eq!(word, mnemonic.word());
        assert_eq!(catalog.get(*mnemonic), Ok(word));
    }
}

#[test]
fn test_rv32im_catalog_validates() {
    assert_eq!(Catalog::rv32im().validate(), Ok(()));
}

#[test]
fn test_invalid_word_is_reserved() {
    let catalog = Catalog::rv32im();
    assert_eq!(catalog.invalid(), ControlWord::INVALID);
    assert!(catalog.iter().all(|(_, word)| word != ControlWord::INVALID));
}

#[test]
fn test_load_store_and_csr_variants_alias() {
    let aliases = Catalog::rv32im().aliases();
    assert_eq!(aliases.len(), 5);
    assert!(aliases.contains(&vec![Mnemonic::Lb, Mnemonic::Lh, Mnemonic::Lw, Mnemonic::Lbu, Mnemonic::Lhu]));
    assert!(aliases.contains(&vec![Mnemonic::Sb, Mnemonic::Sh, Mnemonic::Sw]));
    assert!(aliases.contains(&vec![Mnemonic::Csrrw, Mnemonic::Csrrwi]));
    assert!(aliases.contains(&vec![Mnemonic::Csrrs, Mnemonic::Csrrsi]));
    assert!(aliases.contains(&vec![Mnemonic::Csrrc, Mnemonic::Csrrci]));
}

#[test]
fn test_names_match_rtl() {
    assert_eq!(Mnemonic::MulDiv.name(), "muldiv");
    assert_eq!(Mnemonic::SrliSrai.name(), "srli_srai");
    assert_eq!(Mnemonic::EcallEbreak.name(), "ecall_ebreak");
    assert_eq!(Mnemonic::FenceI.name(), "fence_i");
    assert_eq!(Mnemonic::Or.name(), "or");
}

#[test]
fn test_from_entries_rejects_duplicates() {
    let err = Catalog::from_entries([
        (Mnemonic::Addi, Mnemonic::Addi.word()),
        (Mnemonic::Addi, Mnemonic::Addi.word()),
    ])
    .unwrap_err();
    assert_eq!(err, AuthoringDefect::DuplicateEntry { mnemonic: "addi" });
}

#[test]
fn test_get_missing_entry() {
    let catalog = Catalog::from_entries([(Mnemonic::Lui, Mnemonic::Lui.word())]).unwrap();
    assert_eq!(catalog.get(Mnemonic::Lui), Ok(Mnemonic::Lui.word()));
    assert_eq!(
        catalog.get(Mnemonic::Auipc),
        Err(AuthoringDefect::MissingEntry { mnemonic: "auipc" })
    );
}

#[test]
fn test_validate_rejects_reserved_word() {
    let catalog = Catalog::from_entries([(Mnemonic::Lui, ControlWord::INVALID)]).unwrap();
    assert_eq!(
        catalog.validate(),
        Err(AuthoringDefect::ReservedWord { mnemonic: "lui" })
    );
}

#[test]
fn test_validate_rejects_invalid_bit() {
    let word = ControlWord::from_bits(0x8000_0000 | Mnemonic::Addi.word().bits());
    let catalog = Catalog::from_entries([(Mnemonic::Addi, word)]).unwrap();
    assert!(matches!(
        catalog.validate(),
        Err(AuthoringDefect::InvalidBitSet { mnemonic: "addi", .. })
    ));
}

#[test]
fn test_validate_rejects_unassigned_field_code() {
    // sel_op_a = 0b10 is unassigned.
    let catalog = Catalog::from_entries([(Mnemonic::Xor, ControlWord::from_bits(0b10))]).unwrap();
    assert_eq!(
        catalog.validate(),
        Err(AuthoringDefect::UnknownFieldCode {
            field: "sel_op_a",
            value: 0b10
        })
    );
}
