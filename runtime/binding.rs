//! Macros and types for defining modules of Rust primitives

use std::marker::PhantomData;
use std::{fmt, slice};

use crate::abitype::{AbiType, RetAbiType};
use crate::boxed::refs::Gc;
use crate::boxed::Any;

#[derive(Debug)]
pub struct RustFun {
    pub lisp_type: &'static str,
    pub takes_task: bool,
    pub params: &'static [AbiType],
    pub ret: RetAbiType,
    pub symbol: &'static str,
}

pub type RustExports = &'static [(&'static str, &'static RustFun)];

// TODO: Replace with ! once it's stable
pub enum Never {}

/// Run of arguments passed to a variadic primitive
///
/// Compiled code passes variadic arguments as a pointer to its first argument and the number of
/// arguments.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct ArgList<'a> {
    elems: *const Gc<Any>,
    len: usize,
    phantom: PhantomData<&'a [Gc<Any>]>,
}

impl<'a> ArgList<'a> {
    pub fn from_slice(elems: &'a [Gc<Any>]) -> ArgList<'a> {
        ArgList {
            elems: elems.as_ptr(),
            len: elems.len(),
            phantom: PhantomData,
        }
    }

    pub fn as_slice(&self) -> &'a [Gc<Any>] {
        if self.len == 0 {
            return &[];
        }

        // SAFETY: compiled code passes a pointer to `len` initialised arguments that outlive the
        // call; `from_slice` borrows its source for `'a`
        unsafe { slice::from_raw_parts(self.elems, self.len) }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<'a> fmt::Debug for ArgList<'a> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.as_slice()).finish()
    }
}

/// Defines a new module of Rust primitives
///
/// The first argument should be an identifier in the form of `KONS_{PACKAGE_NAME}_RUST_EXPORTS`
/// where `{PACKAGE_NAME}` is the uppercased name of the package. For example, the package `stdlib`
/// uses `KONS_STDLIB_RUST_EXPORTS`. This must be unique to prevent symbol conflicts when linking
/// several modules into one program.
///
/// The second argument is a mapping of export names to Rust functions. These are defined using
/// the `kons_rfi_derive::rust_fun` attribute macro.
#[macro_export]
macro_rules! define_rust_module {
    ($exports_sym:ident, { $( $export_name:expr => $desc_name:ident ),* $(,)? }) => {
        #[no_mangle]
        pub static $exports_sym: $crate::binding::RustExports = &[
            $(
                ($export_name, &$desc_name)
            ),*
        ];
    };
}
