#![warn(clippy::all)]
#![warn(rust_2018_idioms)]

//! Attribute macro for exposing Rust functions to compiled Kons code

use quote::quote;
use syn::{parse_macro_input, ItemFn, LitStr, Token};

fn arg_is_task(arg: &syn::PatType) -> bool {
    if !matches!(*arg.ty, syn::Type::Reference(_)) {
        return false;
    }

    match *arg.pat {
        syn::Pat::Ident(ref pat_ident) => pat_ident.ident == "task",
        _ => false,
    }
}

/// Exports a Rust function to compiled code
///
/// The attribute takes the Lisp-level signature of the function as a string literal:
///
/// ```ignore
/// #[rust_fun("(Any -> Any)")]
/// pub fn stdlib_car(task: &mut Task, value: Gc<Any>) -> Gc<Any> { .. }
/// ```
///
/// The function is renamed to `kons_{name}_entry_point` and given an unmangled `"C-unwind"` ABI.
/// A `RustFun` descriptor for it is defined under its original name. If the first parameter is
/// a reference named `task` the entry point is passed the current task.
#[proc_macro_attribute]
pub fn rust_fun(
    attrs: proc_macro::TokenStream,
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let lisp_type = parse_macro_input!(attrs as LitStr);

    // Parse the input tokens into a syntax tree
    let mut input_fn = parse_macro_input!(input as ItemFn);
    let vis = input_fn.vis.clone();

    // Rename the function so the descriptor can take its original name
    let descriptor_ident = input_fn.sig.ident.clone();
    let entry_point_name = format!("kons_{}_entry_point", input_fn.sig.ident);
    let span = input_fn.sig.ident.span();
    input_fn.sig.ident = proc_macro2::Ident::new(&entry_point_name, span);

    // Task panics unwind through the entry point to the task boundary
    input_fn.sig.abi = Some(syn::Abi {
        extern_token: Token![extern](span),
        name: Some(LitStr::new("C-unwind", span)),
    });

    let takes_task = input_fn
        .sig
        .inputs
        .first()
        .map(|arg| match arg {
            syn::FnArg::Typed(pat_type) => arg_is_task(pat_type),
            syn::FnArg::Receiver(_) => false,
        })
        .unwrap_or(false);

    let mut param_iter = input_fn.sig.inputs.iter();
    if takes_task {
        param_iter.next();
    }

    let mut param_types = vec![];
    for arg in param_iter {
        match arg {
            syn::FnArg::Typed(pat_type) => param_types.push(pat_type.ty.clone()),
            syn::FnArg::Receiver(receiver) => {
                return syn::Error::new_spanned(receiver, "RFI functions cannot take `self`")
                    .to_compile_error()
                    .into();
            }
        }
    }

    let ret_type = match input_fn.sig.output {
        syn::ReturnType::Default => quote!(()),
        syn::ReturnType::Type(_, ref ret_type) => quote!(#ret_type),
    };

    let expanded = quote! {
        #[allow(non_upper_case_globals)]
        #vis const #descriptor_ident: ::kons_runtime::binding::RustFun =
            ::kons_runtime::binding::RustFun {
                lisp_type: #lisp_type,
                takes_task: #takes_task,
                params: &[#(
                    <#param_types as ::kons_runtime::abitype::EncodeAbiType>::ABI_TYPE
                ),*],
                ret: <#ret_type as ::kons_runtime::abitype::EncodeRetAbiType>::RET_ABI_TYPE,
                symbol: #entry_point_name,
            };

        #[no_mangle]
        #input_fn
    };

    expanded.into()
}
