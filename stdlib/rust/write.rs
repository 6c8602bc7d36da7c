use std::io;
use std::io::prelude::*;

use kons_runtime::boxed;
use kons_runtime::boxed::prelude::*;
use kons_runtime::boxed::refs::Gc;
use kons_runtime::task::Task;
use kons_runtime_syntax::writer::write_boxed;

/// Writes a representation of `value` followed by a newline
pub fn print(w: &mut dyn Write, heap: &impl AsHeap, value: Gc<boxed::Any>) -> io::Result<()> {
    write_boxed(w, heap, value)?;
    w.write_all(b"\n")
}

#[kons_rfi_derive::rust_fun("(Any ->! ())")]
pub fn stdlib_print(task: &mut Task, value: Gc<boxed::Any>) {
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let result = print(&mut output, task, value)
        .and_then(|()| output.flush())
        .map_err(|err| format!("Unable to print: {}", err));

    task.unwrap_or_panic(result)
}
