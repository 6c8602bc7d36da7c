use std::marker::PhantomData;
use std::{fmt, hash};

use crate::boxed::{Any, AsHeap, Boxed, DirectTagged};

/// Reference to a value on a heap
///
/// This is an index into the heap that allocated the value. Index 0 is reserved for the empty
/// list. Using a `Gc` with a heap other than the one that allocated it is a logic error.
#[repr(transparent)]
pub struct Gc<T: Boxed> {
    index: u32,
    phantom: PhantomData<T>,
}

/// Manual Clone implementation to work around Rust issue #26925
impl<T: Boxed> Clone for Gc<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Boxed> Copy for Gc<T> {}

impl<T: Boxed> Gc<T> {
    pub(crate) const fn from_index(index: u32) -> Gc<T> {
        Gc {
            index,
            phantom: PhantomData,
        }
    }

    pub(crate) fn cast<U: Boxed>(self) -> Gc<U> {
        Gc::from_index(self.index)
    }

    pub fn index(self) -> u32 {
        self.index
    }

    pub fn as_any_ref(self) -> Gc<Any> {
        self.cast()
    }
}

impl<T: DirectTagged> Gc<T> {
    /// Returns the value this handle refers to
    pub fn get<'h>(self, heap: &'h impl AsHeap) -> &'h T {
        heap.as_heap().get(self)
    }
}

/// Handles are equal when they refer to the same value
impl<T: Boxed> PartialEq for Gc<T> {
    fn eq(&self, other: &Gc<T>) -> bool {
        self.index == other.index
    }
}

impl<T: Boxed> Eq for Gc<T> {}

impl<T: Boxed> hash::Hash for Gc<T> {
    fn hash<H: hash::Hasher>(&self, hasher: &mut H) {
        self.index.hash(hasher)
    }
}

impl<T: Boxed> fmt::Debug for Gc<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(formatter, "Gc({})", self.index)
    }
}
