use kons_runtime::error::{Error, Result};

use kons_runtime::boxed;
use kons_runtime::boxed::refs::Gc;
use kons_runtime::task::Task;

/// Fails if `value` is the empty list
pub fn check_assertion(value: Gc<boxed::Any>) -> Result<()> {
    if value.is_nil() {
        Err(Error::AssertionFailed)
    } else {
        Ok(())
    }
}

#[kons_rfi_derive::rust_fun("(Any -> Any)")]
pub fn stdlib_assert(task: &mut Task, value: Gc<boxed::Any>) -> Gc<boxed::Any> {
    let result = check_assertion(value);
    task.unwrap_or_panic(result);

    Gc::<boxed::Any>::NIL
}
