use std::iter;
use std::iter::FusedIterator;

use crate::abitype::{BoxedAbiType, EncodeBoxedAbiType};
use crate::boxed::refs::Gc;
use crate::boxed::{Any, AsHeap, Boxed, Downcastable, Heap, TypeTag};

/// List node
///
/// A pair shares its head with any other reference to it. Its rest is always another pair or the
/// empty list; lists built through the runtime are always proper.
pub struct Pair {
    list_length: usize,
    pub(crate) head: Gc<Any>,
    pub(crate) rest: Gc<List>,
}

impl Pair {
    #[allow(clippy::new_ret_no_self)]
    pub fn new(heap: &mut impl AsHeap, head: Gc<Any>, rest: Gc<List>) -> Gc<Pair> {
        let heap = heap.as_heap_mut();
        let list_length = rest.len(heap) + 1;

        heap.place_box(Pair {
            list_length,
            head,
            rest,
        })
    }

    pub fn len(&self) -> usize {
        self.list_length
    }

    pub fn is_empty(&self) -> bool {
        // This is to make Clippy happy since we have `len`
        false
    }

    pub fn head(&self) -> Gc<Any> {
        self.head
    }

    pub fn rest(&self) -> Gc<List> {
        self.rest
    }

    /// Iterates over every element of the list starting at this pair
    pub fn iter<'h>(
        &self,
        heap: &'h impl AsHeap,
    ) -> iter::Chain<iter::Once<Gc<Any>>, ListIterator<'h>> {
        iter::once(self.head).chain(self.rest.iter(heap))
    }
}

impl Gc<Pair> {
    pub fn as_list(self) -> Gc<List> {
        self.cast()
    }
}

/// Proper list; either a [`Pair`] or the empty list
pub struct List {
    _private: (),
}

impl Boxed for List {}

impl EncodeBoxedAbiType for List {
    const BOXED_ABI_TYPE: BoxedAbiType = BoxedAbiType::List;
}

impl Downcastable for List {
    fn has_tag(type_tag: Option<TypeTag>) -> bool {
        matches!(type_tag, None | Some(TypeTag::Pair))
    }
}

pub enum ListSubtype<'a> {
    Pair(&'a Pair),
    Nil,
}

impl List {
    /// Returns the empty list
    pub fn empty() -> Gc<List> {
        Gc::<Any>::NIL.cast()
    }

    /// Creates a new list containing the passed `elems`
    #[allow(clippy::new_ret_no_self)]
    pub fn new(
        heap: &mut impl AsHeap,
        elems: impl DoubleEndedIterator<Item = Gc<Any>>,
    ) -> Gc<List> {
        Self::new_with_tail(heap, elems, Self::empty())
    }

    /// Creates a list with a head of `elems` and the specified tail list
    pub fn new_with_tail(
        heap: &mut impl AsHeap,
        elems: impl DoubleEndedIterator<Item = Gc<Any>>,
        tail: Gc<List>,
    ) -> Gc<List> {
        elems.rfold(tail, |tail, elem| Pair::new(heap, elem, tail).as_list())
    }
}

impl Gc<List> {
    pub fn is_empty(self) -> bool {
        self.as_any_ref().is_nil()
    }

    pub fn as_subtype<'h>(self, heap: &'h impl AsHeap) -> ListSubtype<'h> {
        if self.is_empty() {
            ListSubtype::Nil
        } else {
            ListSubtype::Pair(heap.as_heap().get(self.cast::<Pair>()))
        }
    }

    pub fn len(self, heap: &impl AsHeap) -> usize {
        match self.as_subtype(heap) {
            ListSubtype::Pair(pair) => pair.len(),
            ListSubtype::Nil => 0,
        }
    }

    pub fn iter<'h>(self, heap: &'h impl AsHeap) -> ListIterator<'h> {
        ListIterator {
            heap: heap.as_heap(),
            head: self,
        }
    }
}

pub struct ListIterator<'h> {
    heap: &'h Heap,
    head: Gc<List>,
}

impl<'h> Iterator for ListIterator<'h> {
    type Item = Gc<Any>;

    fn next(&mut self) -> Option<Gc<Any>> {
        match self.head.as_subtype(self.heap) {
            ListSubtype::Pair(pair) => {
                self.head = pair.rest;
                Some(pair.head)
            }
            ListSubtype::Nil => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.head.len(self.heap);
        (len, Some(len))
    }
}

impl<'h> ExactSizeIterator for ListIterator<'h> {}
impl<'h> FusedIterator for ListIterator<'h> {}
