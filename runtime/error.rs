//! Runtime errors
//!
//! Primitives report errors as values. Compiled code never sees them directly: the exported
//! entry points turn them into a task panic, which terminates the program.

use thiserror::Error;

use crate::boxed::TypeTag;

fn describe_tag(type_tag: &Option<TypeTag>) -> String {
    match type_tag {
        Some(type_tag) => format!("{} (tag {})", type_tag.to_str(), *type_tag as u8),
        None => "()".to_owned(),
    }
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// Operation received a value of a type it does not accept
    ///
    /// `found` is `None` for the empty list.
    #[error("Wrong type for {op}: {}", describe_tag(.found))]
    WrongType {
        op: &'static str,
        found: Option<TypeTag>,
    },

    /// Binary numeric operation received a non-integer operand
    #[error("{op}: Unexpected types ({}, {})", describe_tag(.lhs), describe_tag(.rhs))]
    UnexpectedTypes {
        op: &'static str,
        lhs: Option<TypeTag>,
        rhs: Option<TypeTag>,
    },

    #[error("Assertion failed")]
    AssertionFailed,
}

pub type Result<T> = std::result::Result<T, Error>;
