use std::fmt;

use crate::boxed::refs::Gc;
use crate::boxed::*;
use crate::intern::{InternedSym, Interner};

/// Boxed symbol
pub struct Sym {
    pub(crate) interned: InternedSym,
}

/// The canonical `t` symbol
///
/// Every heap allocates this before any other box.
pub const TRUE_SYM: Gc<Sym> = Gc::from_index(1);

impl<'a> ConstructableFrom<&'a str> for Sym {
    fn construct(value: &'a str, interner: &mut Interner) -> Sym {
        Sym {
            interned: interner.intern(value),
        }
    }
}

impl Sym {
    pub fn name<'a>(&self, heap: &'a impl AsHeap) -> &'a str {
        heap.as_heap().interner().unintern(&self.interned)
    }

    pub fn interned(&self) -> InternedSym {
        self.interned
    }
}

/// Symbols are equal when their names are equal
impl PartialEq for Sym {
    fn eq(&self, other: &Sym) -> bool {
        self.interned == other.interned
    }
}

impl fmt::Debug for Sym {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(formatter, "Sym({:?})", self.interned)
    }
}
