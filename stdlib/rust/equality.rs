use kons_runtime::boxed;
use kons_runtime::boxed::prelude::*;
use kons_runtime::boxed::refs::Gc;
use kons_runtime::boxed::AnySubtype;
use kons_runtime::task::Task;

/// Returns true if `lhs` and `rhs` are `eq`
///
/// Integers compare by value and symbols by name. Strings and pairs are never `eq`, even to
/// themselves.
pub fn is_eq(heap: &impl AsHeap, lhs: Gc<boxed::Any>, rhs: Gc<boxed::Any>) -> bool {
    match (lhs.as_subtype(heap), rhs.as_subtype(heap)) {
        (AnySubtype::Nil, AnySubtype::Nil) => true,
        (AnySubtype::Int(lhs_int), AnySubtype::Int(rhs_int)) => lhs_int == rhs_int,
        (AnySubtype::Sym(lhs_sym), AnySubtype::Sym(rhs_sym)) => lhs_sym == rhs_sym,
        _ => false,
    }
}

/// Returns true if `value` is the empty list
///
/// The empty list is the only false value.
pub fn is_null(value: Gc<boxed::Any>) -> bool {
    value.is_nil()
}

/// Returns true if `value` is the empty list or anything other than a pair
pub fn is_atom(heap: &impl AsHeap, value: Gc<boxed::Any>) -> bool {
    !value.is_pair(heap)
}

#[kons_rfi_derive::rust_fun("(Any -> Any)")]
pub fn stdlib_atom(task: &mut Task, value: Gc<boxed::Any>) -> Gc<boxed::Any> {
    boxed::t_or_nil(is_atom(task, value))
}

#[kons_rfi_derive::rust_fun("(Any Any -> Any)")]
pub fn stdlib_eq(task: &mut Task, lhs: Gc<boxed::Any>, rhs: Gc<boxed::Any>) -> Gc<boxed::Any> {
    boxed::t_or_nil(is_eq(task, lhs, rhs))
}

#[kons_rfi_derive::rust_fun("(Any -> Any)")]
pub fn stdlib_not(value: Gc<boxed::Any>) -> Gc<boxed::Any> {
    boxed::t_or_nil(is_null(value))
}

#[kons_rfi_derive::rust_fun("(Any Any -> Any)")]
pub fn stdlib_and(lhs: Gc<boxed::Any>, rhs: Gc<boxed::Any>) -> Gc<boxed::Any> {
    boxed::t_or_nil(!is_null(lhs) && !is_null(rhs))
}

#[kons_rfi_derive::rust_fun("(Any Any -> Any)")]
pub fn stdlib_or(lhs: Gc<boxed::Any>, rhs: Gc<boxed::Any>) -> Gc<boxed::Any> {
    boxed::t_or_nil(!is_null(lhs) || !is_null(rhs))
}
