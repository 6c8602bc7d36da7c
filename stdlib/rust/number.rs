use kons_runtime::error::{Error, Result};

use kons_runtime::boxed;
use kons_runtime::boxed::prelude::*;
use kons_runtime::boxed::refs::Gc;
use kons_runtime::task::Task;

fn int_operands(
    heap: &impl AsHeap,
    op: &'static str,
    lhs: Gc<boxed::Any>,
    rhs: Gc<boxed::Any>,
) -> Result<(i32, i32)> {
    match (
        lhs.downcast_ref::<boxed::Int>(heap),
        rhs.downcast_ref::<boxed::Int>(heap),
    ) {
        (Some(lhs_int), Some(rhs_int)) => {
            Ok((lhs_int.get(heap).value(), rhs_int.get(heap).value()))
        }
        _ => Err(Error::UnexpectedTypes {
            op,
            lhs: lhs.type_tag(heap),
            rhs: rhs.type_tag(heap),
        }),
    }
}

pub fn gt(heap: &impl AsHeap, lhs: Gc<boxed::Any>, rhs: Gc<boxed::Any>) -> Result<bool> {
    int_operands(heap, "GT", lhs, rhs).map(|(lhs, rhs)| lhs > rhs)
}

/// Multiplies two integers, wrapping on overflow
pub fn mul(heap: &impl AsHeap, lhs: Gc<boxed::Any>, rhs: Gc<boxed::Any>) -> Result<i32> {
    int_operands(heap, "MUL", lhs, rhs).map(|(lhs, rhs)| lhs.wrapping_mul(rhs))
}

/// Subtracts `rhs` from `lhs`, wrapping on overflow
pub fn sub(heap: &impl AsHeap, lhs: Gc<boxed::Any>, rhs: Gc<boxed::Any>) -> Result<i32> {
    int_operands(heap, "SUB", lhs, rhs).map(|(lhs, rhs)| lhs.wrapping_sub(rhs))
}

#[kons_rfi_derive::rust_fun("(Any -> Any)")]
pub fn stdlib_numberp(task: &mut Task, value: Gc<boxed::Any>) -> Gc<boxed::Any> {
    boxed::t_or_nil(value.is_int(task))
}

#[kons_rfi_derive::rust_fun("(Any Any -> Any)")]
pub fn stdlib_gt(task: &mut Task, lhs: Gc<boxed::Any>, rhs: Gc<boxed::Any>) -> Gc<boxed::Any> {
    let result = gt(task, lhs, rhs);
    boxed::t_or_nil(task.unwrap_or_panic(result))
}

#[kons_rfi_derive::rust_fun("(Any Any -> Int)")]
pub fn stdlib_mul(task: &mut Task, lhs: Gc<boxed::Any>, rhs: Gc<boxed::Any>) -> Gc<boxed::Int> {
    let result = mul(task, lhs, rhs);
    let product = task.unwrap_or_panic(result);

    boxed::Int::new(task, product)
}

#[kons_rfi_derive::rust_fun("(Any Any -> Int)")]
pub fn stdlib_sub(task: &mut Task, lhs: Gc<boxed::Any>, rhs: Gc<boxed::Any>) -> Gc<boxed::Int> {
    let result = sub(task, lhs, rhs);
    let difference = task.unwrap_or_panic(result);

    boxed::Int::new(task, difference)
}
