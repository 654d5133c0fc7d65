//! Keyed table assembly.
//!
//! Groups are authored by binding mnemonics to explicit `(class, selector)` keys
//! rather than by position in a list, so adding an entry cannot shift any other
//! entry's ROM address. Selectors left unbound compile to the invalid word.

use tracing::debug;

use super::decode::{DecodeTable, OpcodeGroup, Slot};
use crate::catalog::{Catalog, Mnemonic};
use crate::common::{AuthoringDefect, GROUP_SLOTS, OPCODE_CLASSES};
use crate::isa::{OpcodeClass, Selector};

/// Collects `(class, selector) -> mnemonic` bindings and compiles them against a catalog.
#[derive(Clone, Debug, Default)]
pub struct TableBuilder {
    bindings: [[Option<Mnemonic>; GROUP_SLOTS]; OPCODE_CLASSES],
}

impl TableBuilder {
    /// Creates a builder with every slot unbound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `mnemonic` to one selector of `class`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthoringDefect::DuplicateBinding`] if the slot is already bound.
    pub fn bind(&mut self, class: OpcodeClass, selector: Selector, mnemonic: Mnemonic) -> Result<(), AuthoringDefect> {
        let slot = &mut self.bindings[class.index()][selector.index()];
        if let Some(first) = *slot {
            return Err(AuthoringDefect::DuplicateBinding {
                class: class.into(),
                selector: selector.value(),
                first: first.name(),
                second: mnemonic.name(),
            });
        }
        *slot = Some(mnemonic);
        Ok(())
    }

    /// Binds `mnemonic` to all eight selectors of `class`.
    ///
    /// Used when the opcode alone determines the decode.
    ///
    /// # Errors
    ///
    /// Returns [`AuthoringDefect::ReplicateConflict`] if any selector of the group is
    /// already bound.
    pub fn replicate(&mut self, class: OpcodeClass, mnemonic: Mnemonic) -> Result<(), AuthoringDefect> {
        let group = &mut self.bindings[class.index()];
        if group.iter().any(Option::is_some) {
            return Err(AuthoringDefect::ReplicateConflict {
                class: class.into(),
                mnemonic: mnemonic.name(),
            });
        }
        *group = [Some(mnemonic); GROUP_SLOTS];
        Ok(())
    }

    /// Current binding of a slot.
    pub fn binding(&self, class: OpcodeClass, selector: Selector) -> Option<Mnemonic> {
        self.bindings[class.index()][selector.index()]
    }

    /// Resolves every binding through `catalog` and assembles the table.
    ///
    /// # Errors
    ///
    /// Returns [`AuthoringDefect::MissingEntry`] if a bound mnemonic is not in the catalog.
    pub fn build(&self, catalog: &Catalog) -> Result<DecodeTable, AuthoringDefect> {
        let mut groups = [OpcodeGroup::new(OpcodeClass::Lui, [Slot::INVALID; GROUP_SLOTS]); OPCODE_CLASSES];
        for class in OpcodeClass::all() {
            let mut slots = [Slot::INVALID; GROUP_SLOTS];
            for selector in Selector::all() {
                if let Some(mnemonic) = self.binding(class, selector) {
                    slots[selector.index()] = Slot::bound(mnemonic, catalog.get(mnemonic)?);
                }
            }
            let bound = slots.iter().filter(|slot| slot.is_bound()).count();
            debug!(%class, bound, "assembled opcode group");
            groups[class.index()] = OpcodeGroup::new(class, slots);
        }
        Ok(DecodeTable::from_groups(groups))
    }
}
