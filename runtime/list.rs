//! List algebra over boxed values
//!
//! `cons`, `car`, `cdr` and their second and third order compositions.

use crate::boxed::prelude::*;
use crate::boxed::refs::Gc;
use crate::boxed::{Any, List, Pair, TypeTag};
use crate::error::{Error, Result};

/// Returns a new list with a head of `head` and a tail of `tail`
///
/// An integer tail is wrapped in a one element list of its own, so `(cons x 5)` is the proper
/// list `(x 5)` rather than a dotted pair. Symbol and string tails are rejected.
pub fn cons(heap: &mut impl AsHeap, head: Gc<Any>, tail: Gc<Any>) -> Result<Gc<Pair>> {
    let rest = match tail.type_tag(&*heap) {
        None => List::empty(),
        Some(TypeTag::Int) => Pair::new(heap, tail, List::empty()).as_list(),
        Some(TypeTag::Pair) => tail.cast(),
        found @ Some(TypeTag::Sym) | found @ Some(TypeTag::Str) => {
            return Err(Error::WrongType { op: "cons", found });
        }
    };

    Ok(Pair::new(heap, head, rest))
}

fn as_pair<'h>(heap: &'h impl AsHeap, op: &'static str, value: Gc<Any>) -> Result<&'h Pair> {
    match value.downcast_ref::<Pair>(heap) {
        Some(pair_ref) => Ok(pair_ref.get(heap)),
        None => Err(Error::WrongType {
            op,
            found: value.type_tag(heap),
        }),
    }
}

pub fn car(heap: &impl AsHeap, value: Gc<Any>) -> Result<Gc<Any>> {
    as_pair(heap, "car", value).map(Pair::head)
}

pub fn cdr(heap: &impl AsHeap, value: Gc<Any>) -> Result<Gc<List>> {
    as_pair(heap, "cdr", value).map(Pair::rest)
}

/// Applies `car` for each `a` and `cdr` for each `d` in `path`, starting from the right
fn cxr(heap: &impl AsHeap, path: &str, value: Gc<Any>) -> Result<Gc<Any>> {
    path.bytes().rev().try_fold(value, |value, step| match step {
        b'a' => car(heap, value),
        b'd' => cdr(heap, value).map(Gc::as_any_ref),
        other => unreachable!("invalid accessor path step {:?}", other as char),
    })
}

pub fn caar(heap: &impl AsHeap, value: Gc<Any>) -> Result<Gc<Any>> {
    cxr(heap, "aa", value)
}

pub fn cadr(heap: &impl AsHeap, value: Gc<Any>) -> Result<Gc<Any>> {
    cxr(heap, "ad", value)
}

pub fn cdar(heap: &impl AsHeap, value: Gc<Any>) -> Result<Gc<Any>> {
    cxr(heap, "da", value)
}

pub fn cddr(heap: &impl AsHeap, value: Gc<Any>) -> Result<Gc<Any>> {
    cxr(heap, "dd", value)
}

pub fn caaar(heap: &impl AsHeap, value: Gc<Any>) -> Result<Gc<Any>> {
    cxr(heap, "aaa", value)
}

pub fn caadr(heap: &impl AsHeap, value: Gc<Any>) -> Result<Gc<Any>> {
    cxr(heap, "aad", value)
}

pub fn cadar(heap: &impl AsHeap, value: Gc<Any>) -> Result<Gc<Any>> {
    cxr(heap, "ada", value)
}

pub fn caddr(heap: &impl AsHeap, value: Gc<Any>) -> Result<Gc<Any>> {
    cxr(heap, "add", value)
}

pub fn cdadr(heap: &impl AsHeap, value: Gc<Any>) -> Result<Gc<Any>> {
    cxr(heap, "dad", value)
}

pub fn cddar(heap: &impl AsHeap, value: Gc<Any>) -> Result<Gc<Any>> {
    cxr(heap, "dda", value)
}

pub fn cdddr(heap: &impl AsHeap, value: Gc<Any>) -> Result<Gc<Any>> {
    cxr(heap, "ddd", value)
}

/// Returns a new proper list of `elems` in order
///
/// One pair is allocated per element. No elements returns the empty list.
pub fn list(heap: &mut impl AsHeap, elems: &[Gc<Any>]) -> Gc<List> {
    List::new(heap, elems.iter().copied())
}
