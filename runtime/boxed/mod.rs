//! Boxed values allocated on a task's heap
//!
//! Every value visible to compiled code is referenced through a [`Gc`] handle. The empty list is
//! a reserved handle that is never allocated; every other value lives in a [`HeapCell`] whose
//! variant is the value's [`TypeTag`].

mod heap;
pub mod refs;
mod types;

pub use crate::boxed::heap::{AsHeap, Heap};
pub use crate::boxed::types::int::Int;
pub use crate::boxed::types::list::{List, ListIterator, ListSubtype, Pair};
pub use crate::boxed::types::str::Str;
pub use crate::boxed::types::sym::{Sym, TRUE_SYM};

use crate::abitype::{BoxedAbiType, EncodeBoxedAbiType};
use crate::boxed::refs::Gc;
use crate::intern::Interner;

pub mod prelude {
    pub use super::AsHeap;
    pub use super::ConstructableFrom;
    pub use super::Downcastable;
}

/// Type that can be referenced through a [`Gc`] handle
pub trait Boxed: Sized {}

/// Any boxed value, including the empty list
pub struct Any {
    _private: (),
}

impl Boxed for Any {}

impl EncodeBoxedAbiType for Any {
    const BOXED_ABI_TYPE: BoxedAbiType = BoxedAbiType::Any;
}

pub trait Downcastable: Boxed {
    /// Returns true if a value with the given type tag is a member of this type
    ///
    /// The empty list has no type tag and is represented by `None`.
    fn has_tag(type_tag: Option<TypeTag>) -> bool;
}

impl Downcastable for Any {
    fn has_tag(_: Option<TypeTag>) -> bool {
        true
    }
}

/// Boxed type stored directly in a heap cell
pub trait DirectTagged: Boxed {
    const TYPE_TAG: TypeTag;

    fn from_cell(cell: &HeapCell) -> Option<&Self>;
    fn into_cell(self) -> HeapCell;
}

impl<T: DirectTagged> EncodeBoxedAbiType for T {
    const BOXED_ABI_TYPE: BoxedAbiType = BoxedAbiType::UniqueTagged(T::TYPE_TAG);
}

impl<T: DirectTagged> Downcastable for T {
    fn has_tag(type_tag: Option<TypeTag>) -> bool {
        type_tag == Some(Self::TYPE_TAG)
    }
}

pub trait ConstructableFrom<T>: DirectTagged {
    /// Creates a new instance for the given value
    fn construct(value: T, interner: &mut Interner) -> Self;

    fn new(heap: &mut impl AsHeap, value: T) -> Gc<Self> {
        let heap = heap.as_heap_mut();
        let boxed = Self::construct(value, heap.interner_mut());
        heap.place_box(boxed)
    }
}

macro_rules! define_direct_tagged_boxes {
    ($($name:ident),*) => {
        /// Tag identifying the type of a heap allocated value
        ///
        /// The discriminants are part of the ABI shared with the compiler.
        #[repr(u8)]
        #[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
        pub enum TypeTag {
            $( $name ),*
        }

        impl TypeTag {
            pub fn to_str(self) -> &'static str {
                match self {
                    $(
                        TypeTag::$name => {
                            stringify!($name)
                        }
                    )*
                }
            }
        }

        /// Storage for a single value on the heap
        pub enum HeapCell {
            $( $name($name) ),*
        }

        impl HeapCell {
            pub fn type_tag(&self) -> TypeTag {
                match self {
                    $(
                        HeapCell::$name(_) => TypeTag::$name
                    ),*
                }
            }
        }

        pub enum AnySubtype<'a> {
            Nil,
            $( $name(&'a $name) ),*
        }

        impl<'a> AnySubtype<'a> {
            fn from_cell(cell: &'a HeapCell) -> AnySubtype<'a> {
                match cell {
                    $(
                        HeapCell::$name(boxed) => AnySubtype::$name(boxed)
                    ),*
                }
            }
        }

        $(
            impl Boxed for $name {}

            impl DirectTagged for $name {
                const TYPE_TAG: TypeTag = TypeTag::$name;

                fn from_cell(cell: &HeapCell) -> Option<&$name> {
                    if let HeapCell::$name(boxed) = cell {
                        Some(boxed)
                    } else {
                        None
                    }
                }

                fn into_cell(self) -> HeapCell {
                    HeapCell::$name(self)
                }
            }
        )*
    }
}

define_direct_tagged_boxes! {
    Int,
    Pair,
    Sym,
    Str
}

impl Gc<Any> {
    /// The empty list
    pub const NIL: Gc<Any> = Gc::from_index(0);

    /// Returns true if this is the empty list
    ///
    /// This never consults the heap.
    pub fn is_nil(self) -> bool {
        self.index() == 0
    }

    /// Returns the type tag of this value or `None` for the empty list
    pub fn type_tag(self, heap: &impl AsHeap) -> Option<TypeTag> {
        if self.is_nil() {
            None
        } else {
            Some(heap.as_heap().cell(self.index()).type_tag())
        }
    }

    pub fn as_subtype<'h>(self, heap: &'h impl AsHeap) -> AnySubtype<'h> {
        if self.is_nil() {
            AnySubtype::Nil
        } else {
            AnySubtype::from_cell(heap.as_heap().cell(self.index()))
        }
    }

    pub fn downcast_ref<T: Downcastable>(self, heap: &impl AsHeap) -> Option<Gc<T>> {
        if T::has_tag(self.type_tag(heap)) {
            Some(self.cast())
        } else {
            None
        }
    }

    pub fn is_int(self, heap: &impl AsHeap) -> bool {
        self.type_tag(heap) == Some(TypeTag::Int)
    }

    pub fn is_pair(self, heap: &impl AsHeap) -> bool {
        self.type_tag(heap) == Some(TypeTag::Pair)
    }

    pub fn is_sym(self, heap: &impl AsHeap) -> bool {
        self.type_tag(heap) == Some(TypeTag::Sym)
    }

    pub fn is_str(self, heap: &impl AsHeap) -> bool {
        self.type_tag(heap) == Some(TypeTag::Str)
    }
}

/// Returns the canonical true symbol if `value` is true, otherwise the empty list
pub fn t_or_nil(value: bool) -> Gc<Any> {
    if value {
        TRUE_SYM.as_any_ref()
    } else {
        Gc::<Any>::NIL
    }
}
