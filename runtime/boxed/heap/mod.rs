use crate::boxed::refs::Gc;
use crate::boxed::{DirectTagged, HeapCell, Sym, TRUE_SYM};
use crate::intern::Interner;

use crate::boxed::prelude::*;

/// Arena of boxed values
///
/// Values are never freed individually; they live until the heap itself is dropped.
pub struct Heap {
    cells: Vec<HeapCell>,
    interner: Interner,
}

impl Heap {
    /// Default capacity of the heap
    pub const DEFAULT_CAPACITY: usize = 1024;

    /// Returns an empty heap with a default capacity
    pub fn empty() -> Heap {
        Self::new(Interner::new(), Self::DEFAULT_CAPACITY)
    }

    /// Returns a new heap with the given symbol interner and capacity
    ///
    /// The canonical true symbol is allocated first so it always has the same handle.
    pub fn new(interner: Interner, count: usize) -> Heap {
        let mut heap = Heap {
            cells: Vec::with_capacity(count),
            interner,
        };

        let true_sym = Sym::new(&mut heap, "t");
        debug_assert_eq!(TRUE_SYM, true_sym);

        heap
    }

    /// Places a new boxed value on the heap
    pub fn place_box<T: DirectTagged>(&mut self, boxed: T) -> Gc<T> {
        assert!(
            self.cells.len() < u32::MAX as usize,
            "heap exhausted after {} boxes",
            self.cells.len()
        );

        self.cells.push(boxed.into_cell());

        // Index 0 is the empty list so the first cell is at index 1
        let index = self.cells.len() as u32;
        log::trace!("placed {} box at index {}", T::TYPE_TAG.to_str(), index);

        Gc::from_index(index)
    }

    /// Returns the value referenced by a typed handle
    pub fn get<T: DirectTagged>(&self, boxed_ref: Gc<T>) -> &T {
        T::from_cell(self.cell(boxed_ref.index())).unwrap_or_else(|| {
            unreachable!(
                "box at index {} is not a {}",
                boxed_ref.index(),
                T::TYPE_TAG.to_str()
            )
        })
    }

    pub(crate) fn cell(&self, index: u32) -> &HeapCell {
        match index.checked_sub(1).and_then(|i| self.cells.get(i as usize)) {
            Some(cell) => cell,
            None => unreachable!("box index {} is not allocated on this heap", index),
        }
    }

    /// Returns the symbol interner associated with this heap
    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    /// Returns a mutable reference to the symbol interner associated with this heap
    pub fn interner_mut(&mut self) -> &mut Interner {
        &mut self.interner
    }

    /// Returns the number of allocated boxes
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the heap contains no boxes
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Object that can be used as a heap
pub trait AsHeap {
    /// Returns this object as a heap
    fn as_heap(&self) -> &Heap;

    /// Returns this object as a mutable heap
    fn as_heap_mut(&mut self) -> &mut Heap;
}

impl AsHeap for Heap {
    fn as_heap(&self) -> &Heap {
        self
    }

    fn as_heap_mut(&mut self) -> &mut Heap {
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::boxed::{Any, Int, Str};

    #[test]
    fn basic_alloc() {
        let mut heap = Heap::new(Interner::new(), 1);

        let string1 = Str::new(&mut heap, "HELLO");
        let string2 = Str::new(&mut heap, "WORLD");

        assert_eq!("HELLO", string1.get(&heap).as_str());
        assert_eq!("WORLD", string2.get(&heap).as_str());
    }

    #[test]
    fn true_sym_preallocated() {
        let heap = Heap::empty();

        assert_eq!(1, heap.len());
        assert_eq!("t", TRUE_SYM.get(&heap).name(&heap));
    }

    #[test]
    fn handles_are_sequential() {
        let mut heap = Heap::empty();

        let first = Int::new(&mut heap, 1);
        let second = Int::new(&mut heap, 2);

        assert_eq!(first.index() + 1, second.index());
        assert_ne!(Gc::<Any>::NIL, first.as_any_ref());
        assert_eq!(3, heap.len());
    }

    #[test]
    #[should_panic]
    fn foreign_handle() {
        let mut other_heap = Heap::empty();
        let foreign_int = Int::new(&mut other_heap, 1);

        let heap = Heap::empty();
        foreign_int.get(&heap);
    }
}
