//! Type encoding for Rust types
//!
//! This is a system of traits used to encode Rust types in a form understandable by the Kons
//! compiler. It's used to ensure type safety across the boundary between compiled code and the
//! primitives implemented in Rust.

use crate::binding::{ArgList, Never};
use crate::boxed;
use crate::boxed::refs;

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum BoxedAbiType {
    Any,
    UniqueTagged(boxed::TypeTag),
    List,
}

/// Encoded type for any boxed or unboxed value
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum AbiType {
    /// Unboxed boolean value
    ///
    /// This is identical to [`bool`] in Rust and C
    Bool,

    /// Unboxed signed 32bit integer
    ///
    /// This is identical to [`i32`] in Rust and `int32_t` in C
    Int,

    /// [Boxed value](crate::boxed)
    Boxed(BoxedAbiType),

    /// Variable length run of boxed arguments
    ///
    /// See [`ArgList`]
    ArgList,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum RetAbiType {
    Void,
    Never,
    Inhabited(AbiType),
}

pub trait EncodeAbiType {
    const ABI_TYPE: AbiType;
}

impl EncodeAbiType for i32 {
    const ABI_TYPE: AbiType = AbiType::Int;
}

impl EncodeAbiType for bool {
    const ABI_TYPE: AbiType = AbiType::Bool;
}

impl<T: boxed::Boxed> EncodeAbiType for refs::Gc<T>
where
    T: EncodeBoxedAbiType,
{
    const ABI_TYPE: AbiType = AbiType::Boxed(T::BOXED_ABI_TYPE);
}

impl<'a> EncodeAbiType for ArgList<'a> {
    const ABI_TYPE: AbiType = AbiType::ArgList;
}

pub trait EncodeBoxedAbiType {
    const BOXED_ABI_TYPE: BoxedAbiType;
}

pub trait EncodeRetAbiType {
    const RET_ABI_TYPE: RetAbiType;
}

impl<T: EncodeAbiType> EncodeRetAbiType for T {
    const RET_ABI_TYPE: RetAbiType = RetAbiType::Inhabited(Self::ABI_TYPE);
}

impl EncodeRetAbiType for () {
    const RET_ABI_TYPE: RetAbiType = RetAbiType::Void;
}

impl EncodeRetAbiType for Never {
    const RET_ABI_TYPE: RetAbiType = RetAbiType::Never;
}

impl From<boxed::TypeTag> for AbiType {
    fn from(type_tag: boxed::TypeTag) -> AbiType {
        AbiType::Boxed(BoxedAbiType::UniqueTagged(type_tag))
    }
}
