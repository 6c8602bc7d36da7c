#![warn(clippy::all)]
#![warn(rust_2018_idioms)]

//! Primitives linked against compiled Kons programs

pub mod equality;
use crate::equality::*;
pub mod list;
use crate::list::*;
pub mod number;
use crate::number::*;
pub mod testing;
use crate::testing::*;
pub mod write;
use crate::write::*;

use kons_runtime::define_rust_module;

define_rust_module!(KONS_STDLIB_RUST_EXPORTS, {
    "cons" => stdlib_cons,
    "car" => stdlib_car,
    "cdr" => stdlib_cdr,
    "caar" => stdlib_caar,
    "cadr" => stdlib_cadr,
    "cdar" => stdlib_cdar,
    "cddr" => stdlib_cddr,
    "caaar" => stdlib_caaar,
    "caadr" => stdlib_caadr,
    "cadar" => stdlib_cadar,
    "caddr" => stdlib_caddr,
    "cdadr" => stdlib_cdadr,
    "cddar" => stdlib_cddar,
    "cdddr" => stdlib_cdddr,
    "list" => stdlib_list,
    "length" => stdlib_length,
    "null" => stdlib_null,
    "append" => stdlib_append,
    "assoc" => stdlib_assoc,
    "atom" => stdlib_atom,
    "eq" => stdlib_eq,
    "numberp" => stdlib_numberp,
    "not" => stdlib_not,
    "and" => stdlib_and,
    "or" => stdlib_or,
    "assert" => stdlib_assert,
    "GT" => stdlib_gt,
    "MUL" => stdlib_mul,
    "SUB" => stdlib_sub,
    "print" => stdlib_print
});
