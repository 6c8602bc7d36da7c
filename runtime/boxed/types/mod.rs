pub mod int;
pub mod list;
pub mod str;
pub mod sym;
