//! Interned symbols
//!
//! Symbol names are interned per heap. Interned symbols from the same `Interner` can be compared
//! directly without a reference to the `Interner` instance; two symbols are equal exactly when
//! their names are byte-for-byte equal.

use std::collections::HashMap;
use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct InternedSym {
    name_idx: u32,
}

impl fmt::Debug for InternedSym {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        // We don't have access to the `Interner` so we can't print our name
        write!(formatter, "`{:x}", self.name_idx)
    }
}

// TODO: This keeps two copies of each name. Storing `Rc<str>` in both collections would share
// the allocation.
pub struct Interner {
    names: Vec<Box<str>>,
    name_to_idx: HashMap<Box<str>, u32>,
}

impl Interner {
    pub fn new() -> Interner {
        Interner {
            names: vec![],
            name_to_idx: HashMap::new(),
        }
    }

    pub fn intern(&mut self, name: &str) -> InternedSym {
        if let Some(&name_idx) = self.name_to_idx.get(name) {
            return InternedSym { name_idx };
        }

        let name_idx = self.names.len() as u32;
        self.names.push(name.into());
        self.name_to_idx.insert(name.into(), name_idx);

        InternedSym { name_idx }
    }

    pub fn unintern(&self, interned: &InternedSym) -> &str {
        &self.names[interned.name_idx as usize]
    }

    /// Returns the number of distinct names interned
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for Interner {
    fn default() -> Interner {
        Self::new()
    }
}
