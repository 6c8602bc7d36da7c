use std::fmt;

use crate::boxed::*;
use crate::intern::Interner;

/// Boxed signed 32bit integer
pub struct Int {
    value: i32,
}

impl ConstructableFrom<i32> for Int {
    fn construct(value: i32, _: &mut Interner) -> Int {
        Int { value }
    }
}

impl Int {
    pub fn value(&self) -> i32 {
        self.value
    }
}

impl PartialEq for Int {
    fn eq(&self, other: &Int) -> bool {
        self.value() == other.value()
    }
}

impl fmt::Debug for Int {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(formatter, "Int({:?})", self.value)
    }
}
