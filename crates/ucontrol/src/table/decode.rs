//! The compiled decode table.
//!
//! Sixteen opcode groups of eight slots each. The flattened order is the ROM
//! address order: `address = class * 8 + selector`.

use tracing::trace;

use crate::catalog::Mnemonic;
use crate::common::{AuthoringDefect, GROUP_SLOTS, OPCODE_CLASSES, TABLE_ENTRIES};
use crate::control::ControlWord;
use crate::isa::{InstructionBits, OpcodeClass, Selector};

/// One ROM entry: the word and the catalog entry it came from, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    binding: Option<Mnemonic>,
    word: ControlWord,
}

impl Slot {
    /// An unbound slot holding the invalid word.
    pub const INVALID: Self = Self {
        binding: None,
        word: ControlWord::INVALID,
    };

    pub(crate) const fn bound(mnemonic: Mnemonic, word: ControlWord) -> Self {
        Self {
            binding: Some(mnemonic),
            word,
        }
    }

    /// Catalog entry bound to this slot, `None` for an invalid slot.
    #[inline]
    pub const fn binding(&self) -> Option<Mnemonic> {
        self.binding
    }

    /// Word stored at this slot.
    #[inline]
    pub const fn word(&self) -> ControlWord {
        self.word
    }

    /// True if a catalog entry is bound here.
    #[inline]
    pub const fn is_bound(&self) -> bool {
        self.binding.is_some()
    }
}

/// All decode outcomes for one opcode class, indexed by selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpcodeGroup {
    class: OpcodeClass,
    slots: [Slot; GROUP_SLOTS],
}

impl OpcodeGroup {
    pub(crate) const fn new(class: OpcodeClass, slots: [Slot; GROUP_SLOTS]) -> Self {
        Self { class, slots }
    }

    /// Opcode class of this group.
    #[inline]
    pub const fn class(&self) -> OpcodeClass {
        self.class
    }

    /// Slot for `selector`.
    #[inline]
    pub const fn slot(&self, selector: Selector) -> &Slot {
        &self.slots[selector.index()]
    }

    /// All slots in selector order.
    #[inline]
    pub const fn slots(&self) -> &[Slot; GROUP_SLOTS] {
        &self.slots
    }

    /// Words in selector order.
    pub fn words(&self) -> [ControlWord; GROUP_SLOTS] {
        self.slots.map(|slot| slot.word)
    }

    /// True if every selector holds the same bound entry.
    pub fn is_replicated(&self) -> bool {
        let first = self.slots[0];
        first.is_bound() && self.slots.iter().all(|slot| *slot == first)
    }
}

/// The full 128-entry control ROM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeTable {
    groups: [OpcodeGroup; OPCODE_CLASSES],
}

impl DecodeTable {
    pub(crate) const fn from_groups(groups: [OpcodeGroup; OPCODE_CLASSES]) -> Self {
        Self { groups }
    }

    /// ROM address of `(class, selector)`.
    #[inline]
    pub const fn address(class: OpcodeClass, selector: Selector) -> usize {
        class.index() * GROUP_SLOTS + selector.index()
    }

    /// Inverse of [`DecodeTable::address`].
    pub fn locate(address: usize) -> Option<(OpcodeClass, Selector)> {
        if address >= TABLE_ENTRIES {
            return None;
        }
        let class = OpcodeClass::try_from((address / GROUP_SLOTS) as u8).ok()?;
        let selector = Selector::new((address % GROUP_SLOTS) as u8)?;
        Some((class, selector))
    }

    /// Group for `class`.
    #[inline]
    pub const fn group(&self, class: OpcodeClass) -> &OpcodeGroup {
        &self.groups[class.index()]
    }

    /// All groups in class order.
    #[inline]
    pub const fn groups(&self) -> &[OpcodeGroup; OPCODE_CLASSES] {
        &self.groups
    }

    /// Slot at `(class, selector)`.
    #[inline]
    pub const fn get(&self, class: OpcodeClass, selector: Selector) -> &Slot {
        self.group(class).slot(selector)
    }

    /// Slot at a flat ROM address.
    pub fn at(&self, address: usize) -> Option<&Slot> {
        let (class, selector) = Self::locate(address)?;
        Some(self.get(class, selector))
    }

    /// Slots with their addresses, in address order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &Slot)> + '_ {
        self.groups.iter().flat_map(|group| group.slots.iter()).enumerate()
    }

    /// Words in address order.
    pub fn words(&self) -> impl Iterator<Item = ControlWord> + '_ {
        self.entries().map(|(_, slot)| slot.word)
    }

    /// Word the decoder reads for a raw 32-bit instruction.
    ///
    /// Opcodes outside the implemented set read the invalid word.
    pub fn lookup(&self, instruction: u32) -> ControlWord {
        let Some(class) = OpcodeClass::classify(instruction.opcode(), instruction.funct7()) else {
            trace!(instruction = format_args!("{instruction:#010x}"), "unclassified opcode");
            return ControlWord::INVALID;
        };
        self.get(class, Selector::from_funct3(instruction.funct3())).word
    }

    /// Checks that slots agree with their bindings.
    ///
    /// Bound slots must hold a valid word and unbound slots must hold exactly
    /// [`ControlWord::INVALID`].
    ///
    /// # Errors
    ///
    /// Returns [`AuthoringDefect::SlotMismatch`] for the first offending address.
    pub fn validate(&self) -> Result<(), AuthoringDefect> {
        for (index, group) in self.groups.iter().enumerate() {
            if group.class.index() != index {
                return Err(AuthoringDefect::SlotMismatch {
                    address: index * GROUP_SLOTS,
                    reason: format!("group {index} holds opcode class {}", group.class),
                });
            }
        }
        for (address, slot) in self.entries() {
            match slot.binding {
                Some(mnemonic) if slot.word.is_invalid() => {
                    return Err(AuthoringDefect::SlotMismatch {
                        address,
                        reason: format!("`{}` is bound to an invalid word", mnemonic.name()),
                    });
                }
                None if slot.word != ControlWord::INVALID => {
                    return Err(AuthoringDefect::SlotMismatch {
                        address,
                        reason: format!("unbound slot holds {} instead of the invalid word", slot.word),
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }
}
