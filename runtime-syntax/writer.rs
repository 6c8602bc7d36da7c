use std::io::{Result, Write};

use kons_runtime::boxed;
use kons_runtime::boxed::refs::Gc;
use kons_runtime::boxed::AsHeap;

fn write_boxed_seq(
    w: &mut dyn Write,
    heap: &impl AsHeap,
    elems: impl Iterator<Item = Gc<boxed::Any>>,
) -> Result<()> {
    let mut has_prev = false;
    for elem in elems {
        if has_prev {
            write!(w, " ")?;
        } else {
            has_prev = true;
        }

        write_boxed(w, heap, elem)?;
    }

    Ok(())
}

/// Writes a representation of the passed box to the writer
///
/// Strings are written between double quotes without escaping their contents.
pub fn write_boxed(w: &mut dyn Write, heap: &impl AsHeap, any_ref: Gc<boxed::Any>) -> Result<()> {
    use kons_runtime::boxed::AnySubtype;

    match any_ref.as_subtype(heap) {
        AnySubtype::Nil => write!(w, "()"),
        AnySubtype::Int(int_ref) => write!(w, "{}", int_ref.value()),
        AnySubtype::Sym(sym) => write!(w, "{}", sym.name(heap)),
        AnySubtype::Pair(pair) => {
            write!(w, "(")?;
            write_boxed_seq(w, heap, pair.iter(heap))?;
            write!(w, ")")
        }
        AnySubtype::Str(s) => write!(w, "\"{}\"", s.as_str()),
    }
}
