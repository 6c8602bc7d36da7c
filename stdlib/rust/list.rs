use kons_runtime::binding::*;
use kons_runtime::error::{Error, Result};
use kons_runtime::list;

use kons_runtime::boxed;
use kons_runtime::boxed::prelude::*;
use kons_runtime::boxed::refs::Gc;
use kons_runtime::task::Task;

use crate::equality::{is_eq, is_null};

fn as_list(
    heap: &impl AsHeap,
    op: &'static str,
    value: Gc<boxed::Any>,
) -> Result<Gc<boxed::List>> {
    value
        .downcast_ref::<boxed::List>(heap)
        .ok_or_else(|| Error::WrongType {
            op,
            found: value.type_tag(heap),
        })
}

/// Returns the number of elements in a list
pub fn length(heap: &impl AsHeap, value: Gc<boxed::Any>) -> Result<usize> {
    as_list(heap, "length", value).map(|boxed_list| boxed_list.len(heap))
}

/// Returns a new list of the elements of `lhs` followed by `rhs`
///
/// The pairs of `rhs` are shared with the returned list.
pub fn append(
    heap: &mut impl AsHeap,
    lhs: Gc<boxed::Any>,
    rhs: Gc<boxed::Any>,
) -> Result<Gc<boxed::List>> {
    let lhs = as_list(&*heap, "append", lhs)?;
    let rhs = as_list(&*heap, "append", rhs)?;

    let lhs_elems: Vec<Gc<boxed::Any>> = lhs.iter(&*heap).collect();
    Ok(boxed::List::new_with_tail(heap, lhs_elems.into_iter(), rhs))
}

/// Returns the first entry of `alist` whose head is `eq` to `key`
///
/// Entries that aren't pairs are skipped. The empty list is returned if no entry matches.
pub fn assoc(
    heap: &impl AsHeap,
    key: Gc<boxed::Any>,
    alist: Gc<boxed::Any>,
) -> Result<Gc<boxed::Any>> {
    let alist = as_list(heap, "assoc", alist)?;

    for entry in alist.iter(heap) {
        if let Some(pair_ref) = entry.downcast_ref::<boxed::Pair>(heap) {
            if is_eq(heap, key, pair_ref.get(heap).head()) {
                return Ok(entry);
            }
        }
    }

    Ok(Gc::<boxed::Any>::NIL)
}

#[kons_rfi_derive::rust_fun("(Any Any -> Pair)")]
pub fn stdlib_cons(
    task: &mut Task,
    head: Gc<boxed::Any>,
    tail: Gc<boxed::Any>,
) -> Gc<boxed::Pair> {
    let result = list::cons(task, head, tail);
    task.unwrap_or_panic(result)
}

#[kons_rfi_derive::rust_fun("(Any -> Any)")]
pub fn stdlib_car(task: &mut Task, value: Gc<boxed::Any>) -> Gc<boxed::Any> {
    let result = list::car(task, value);
    task.unwrap_or_panic(result)
}

#[kons_rfi_derive::rust_fun("(Any -> List)")]
pub fn stdlib_cdr(task: &mut Task, value: Gc<boxed::Any>) -> Gc<boxed::List> {
    let result = list::cdr(task, value);
    task.unwrap_or_panic(result)
}

macro_rules! define_cxr_funs {
    ($( $entry_name:ident => $accessor:ident ),*) => {
        $(
            #[kons_rfi_derive::rust_fun("(Any -> Any)")]
            pub fn $entry_name(task: &mut Task, value: Gc<boxed::Any>) -> Gc<boxed::Any> {
                let result = list::$accessor(task, value);
                task.unwrap_or_panic(result)
            }
        )*
    };
}

define_cxr_funs! {
    stdlib_caar => caar,
    stdlib_cadr => cadr,
    stdlib_cdar => cdar,
    stdlib_cddr => cddr,
    stdlib_caaar => caaar,
    stdlib_caadr => caadr,
    stdlib_cadar => cadar,
    stdlib_caddr => caddr,
    stdlib_cdadr => cdadr,
    stdlib_cddar => cddar,
    stdlib_cdddr => cdddr
}

#[kons_rfi_derive::rust_fun("(Any ... -> List)")]
pub fn stdlib_list(task: &mut Task, elems: ArgList<'_>) -> Gc<boxed::List> {
    list::list(task, elems.as_slice())
}

#[kons_rfi_derive::rust_fun("(Any -> Int)")]
pub fn stdlib_length(task: &mut Task, value: Gc<boxed::Any>) -> Gc<boxed::Int> {
    let result = length(task, value);
    let len = task.unwrap_or_panic(result);

    let result =
        i32::try_from(len).map_err(|_| format!("length: {} does not fit in an Int", len));
    let len = task.unwrap_or_panic(result);

    boxed::Int::new(task, len)
}

#[kons_rfi_derive::rust_fun("(Any -> Any)")]
pub fn stdlib_null(value: Gc<boxed::Any>) -> Gc<boxed::Any> {
    boxed::t_or_nil(is_null(value))
}

#[kons_rfi_derive::rust_fun("(Any Any -> List)")]
pub fn stdlib_append(
    task: &mut Task,
    lhs: Gc<boxed::Any>,
    rhs: Gc<boxed::Any>,
) -> Gc<boxed::List> {
    let result = append(task, lhs, rhs);
    task.unwrap_or_panic(result)
}

#[kons_rfi_derive::rust_fun("(Any Any -> Any)")]
pub fn stdlib_assoc(
    task: &mut Task,
    key: Gc<boxed::Any>,
    alist: Gc<boxed::Any>,
) -> Gc<boxed::Any> {
    let result = assoc(task, key, alist);
    task.unwrap_or_panic(result)
}
