//! Runtime support for compiled Kons programs
//!
//! This provides the boxed object model that compiled code allocates into, the list algebra
//! built on top of it and the task boundary that turns runtime errors into process exit.

#![warn(clippy::all)]
#![warn(rust_2018_idioms)]

pub mod abitype;
pub mod binding;
pub mod boxed;
pub mod compiler_support;
pub mod error;
pub mod intern;
pub mod list;
pub mod task;
