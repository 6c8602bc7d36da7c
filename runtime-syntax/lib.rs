//! This crate contains functionality for writing boxed values at runtime

#![warn(clippy::all)]
#![warn(rust_2018_idioms)]

pub mod writer;
