#![warn(clippy::all)]
#![warn(rust_2018_idioms)]

use std::collections::HashMap;

use kons_runtime::abitype::{AbiType, BoxedAbiType, RetAbiType};
use kons_runtime::binding::{ArgList, RustFun};
use kons_runtime::boxed;
use kons_runtime::boxed::prelude::*;
use kons_runtime::boxed::refs::Gc;
use kons_runtime::boxed::{Int, Str, Sym, TypeTag, TRUE_SYM};
use kons_runtime::compiler_support::run_task;
use kons_runtime::task::Task;
use kons_runtime_syntax::writer::write_boxed;

use kons_stdlib::equality::*;
use kons_stdlib::list::*;
use kons_stdlib::number::*;
use kons_stdlib::testing::*;
use kons_stdlib::KONS_STDLIB_RUST_EXPORTS;

fn int(task: &mut Task, value: i32) -> Gc<boxed::Any> {
    Int::new(task, value).as_any_ref()
}

fn rendered(task: &Task, value: Gc<boxed::Any>) -> String {
    let mut output: Vec<u8> = vec![];
    write_boxed(&mut output, task, value).unwrap();
    String::from_utf8(output).unwrap()
}

fn exports() -> HashMap<&'static str, &'static RustFun> {
    KONS_STDLIB_RUST_EXPORTS.iter().copied().collect()
}

#[test]
fn cons_and_accessors() {
    let mut task = Task::new();

    let head = int(&mut task, 1);
    let pair = kons_stdlib_cons_entry_point(&mut task, head, Gc::<boxed::Any>::NIL).as_any_ref();
    assert_eq!(head, kons_stdlib_car_entry_point(&mut task, pair));
    assert!(kons_stdlib_cdr_entry_point(&mut task, pair).is_empty());

    let x = Sym::new(&mut task, "x").as_any_ref();
    let five = int(&mut task, 5);
    let int_tail = kons_stdlib_cons_entry_point(&mut task, x, five).as_any_ref();
    assert_eq!(five, kons_stdlib_cadr_entry_point(&mut task, int_tail));
    assert!(kons_stdlib_cddr_entry_point(&mut task, int_tail).is_nil());
    assert_eq!("(x 5)", rendered(&task, int_tail));

    let nested = kons_stdlib_cons_entry_point(&mut task, int_tail, pair).as_any_ref();
    assert_eq!("((x 5) 1)", rendered(&task, nested));
    assert_eq!(x, kons_stdlib_caar_entry_point(&mut task, nested));
    assert_eq!(five, kons_stdlib_cadar_entry_point(&mut task, nested));
    assert!(kons_stdlib_cddar_entry_point(&mut task, nested).is_nil());
}

#[test]
fn variadic_list() {
    let mut task = Task::new();

    let elems = [int(&mut task, 1), int(&mut task, 2), int(&mut task, 3)];
    let boxed_list = kons_stdlib_list_entry_point(&mut task, ArgList::from_slice(&elems));
    assert_eq!("(1 2 3)", rendered(&task, boxed_list.as_any_ref()));

    let empty = kons_stdlib_list_entry_point(&mut task, ArgList::from_slice(&[]));
    assert!(empty.is_empty());
    assert_eq!("()", rendered(&task, empty.as_any_ref()));

    let length = kons_stdlib_length_entry_point(&mut task, boxed_list.as_any_ref());
    assert_eq!(3, length.get(&task).value());
}

#[test]
fn predicates() {
    let mut task = Task::new();
    let nil = Gc::<boxed::Any>::NIL;
    let t = TRUE_SYM.as_any_ref();

    let zero = int(&mut task, 0);
    let three = int(&mut task, 3);
    let other_three = int(&mut task, 3);
    let four = int(&mut task, 4);
    let a_str = Str::new(&mut task, "a").as_any_ref();
    let other_a_str = Str::new(&mut task, "a").as_any_ref();
    let one_elem = kons_stdlib_cons_entry_point(&mut task, three, nil).as_any_ref();

    assert_eq!(t, kons_stdlib_eq_entry_point(&mut task, nil, nil));
    assert_eq!(nil, kons_stdlib_eq_entry_point(&mut task, nil, zero));
    assert_eq!(t, kons_stdlib_eq_entry_point(&mut task, three, other_three));
    assert_eq!(nil, kons_stdlib_eq_entry_point(&mut task, three, four));
    assert_eq!(nil, kons_stdlib_eq_entry_point(&mut task, a_str, other_a_str));

    assert_eq!(t, kons_stdlib_atom_entry_point(&mut task, nil));
    assert_eq!(nil, kons_stdlib_atom_entry_point(&mut task, one_elem));

    assert_eq!(t, kons_stdlib_numberp_entry_point(&mut task, three));
    assert_eq!(nil, kons_stdlib_numberp_entry_point(&mut task, a_str));
    assert_eq!(nil, kons_stdlib_numberp_entry_point(&mut task, nil));

    assert_eq!(t, kons_stdlib_null_entry_point(nil));
    assert_eq!(nil, kons_stdlib_null_entry_point(one_elem));
    assert_eq!(t, kons_stdlib_not_entry_point(nil));
    assert_eq!(nil, kons_stdlib_not_entry_point(zero));
}

#[test]
fn arithmetic() {
    let mut task = Task::new();
    let four = int(&mut task, 4);
    let five = int(&mut task, 5);
    let three = int(&mut task, 3);

    assert_eq!(
        TRUE_SYM.as_any_ref(),
        kons_stdlib_gt_entry_point(&mut task, five, three)
    );
    assert!(kons_stdlib_gt_entry_point(&mut task, three, five).is_nil());

    let product = kons_stdlib_mul_entry_point(&mut task, four, five);
    assert_eq!(20, product.get(&task).value());

    let difference = kons_stdlib_sub_entry_point(&mut task, four, five);
    assert_eq!(-1, difference.get(&task).value());
}

#[test]
fn append_and_assoc() {
    let mut task = Task::new();
    let nil = Gc::<boxed::Any>::NIL;

    let one = int(&mut task, 1);
    let two = int(&mut task, 2);
    let lhs = kons_stdlib_list_entry_point(&mut task, ArgList::from_slice(&[one])).as_any_ref();
    let rhs = kons_stdlib_list_entry_point(&mut task, ArgList::from_slice(&[two])).as_any_ref();

    let appended = kons_stdlib_append_entry_point(&mut task, lhs, rhs).as_any_ref();
    assert_eq!("(1 2)", rendered(&task, appended));

    let key = Sym::new(&mut task, "k").as_any_ref();
    let entry = kons_stdlib_list_entry_point(&mut task, ArgList::from_slice(&[key, one]));
    let alist =
        kons_stdlib_list_entry_point(&mut task, ArgList::from_slice(&[entry.as_any_ref()]));

    let lookup = Sym::new(&mut task, "k").as_any_ref();
    assert_eq!(
        entry.as_any_ref(),
        kons_stdlib_assoc_entry_point(&mut task, lookup, alist.as_any_ref())
    );
    assert_eq!(
        nil,
        kons_stdlib_assoc_entry_point(&mut task, one, alist.as_any_ref())
    );
}

#[test]
fn passing_assert() {
    let mut task = Task::new();
    let zero = int(&mut task, 0);

    assert!(kons_stdlib_assert_entry_point(&mut task, zero).is_nil());
}

#[test]
fn fatal_errors() {
    let result = run_task(|task| {
        let one = Int::new(task, 1).as_any_ref();
        kons_stdlib_car_entry_point(task, one);
    });
    assert_eq!(Err("Wrong type for car: Int (tag 0)".to_owned()), result);

    let result = run_task(|task| {
        kons_stdlib_assert_entry_point(task, Gc::<boxed::Any>::NIL);
    });
    assert_eq!(Err("Assertion failed".to_owned()), result);

    let result = run_task(|task| {
        let x = Sym::new(task, "x").as_any_ref();
        let three = Int::new(task, 3).as_any_ref();
        kons_stdlib_gt_entry_point(task, x, three);
    });
    assert_eq!(
        Err("GT: Unexpected types (Sym (tag 2), Int (tag 0))".to_owned()),
        result
    );

    let result = run_task(|task| {
        let head = Int::new(task, 1).as_any_ref();
        let tail = Str::new(task, "tail").as_any_ref();
        kons_stdlib_cons_entry_point(task, head, tail);
    });
    assert_eq!(Err("Wrong type for cons: Str (tag 3)".to_owned()), result);
}

#[test]
fn core_functions_report_errors() {
    let mut task = Task::new();
    let x = Sym::new(&mut task, "x").as_any_ref();
    let three = int(&mut task, 3);

    assert!(gt(&task, x, three).is_err());
    assert!(length(&task, three).is_err());
    assert!(check_assertion(Gc::<boxed::Any>::NIL).is_err());
    assert!(is_atom(&task, x));
    assert!(!is_eq(&task, x, three));
}

#[test]
fn export_table() {
    let exports = exports();
    assert_eq!(30, exports.len());

    let unary = [
        "car", "cdr", "caar", "cadr", "cdar", "cddr", "caaar", "caadr", "cadar", "caddr", "cdadr",
        "cddar", "cdddr", "length", "null", "atom", "numberp", "not", "assert", "print",
    ];

    for name in unary.iter() {
        let rust_fun = exports[name];
        assert_eq!(1, rust_fun.params.len(), "{} should take one argument", name);
        assert_eq!(AbiType::Boxed(BoxedAbiType::Any), rust_fun.params[0]);
    }

    for name in [
        "cons", "append", "assoc", "eq", "and", "or", "GT", "MUL", "SUB",
    ].iter() {
        assert_eq!(2, exports[name].params.len(), "{} should take two arguments", name);
    }

    let list = exports["list"];
    assert_eq!(&[AbiType::ArgList], list.params);
    assert_eq!(
        RetAbiType::Inhabited(AbiType::Boxed(BoxedAbiType::List)),
        list.ret
    );

    let mul = exports["MUL"];
    assert!(mul.takes_task);
    assert_eq!("kons_stdlib_mul_entry_point", mul.symbol);
    assert_eq!(
        RetAbiType::Inhabited(AbiType::Boxed(BoxedAbiType::UniqueTagged(TypeTag::Int))),
        mul.ret
    );

    let null = exports["null"];
    assert!(!null.takes_task);
    assert_eq!("(Any -> Any)", null.lisp_type);

    assert_eq!(RetAbiType::Void, exports["print"].ret);
}
