use std::fmt;

use crate::boxed::*;
use crate::intern::Interner;

/// Boxed immutable string
pub struct Str {
    value: Box<str>,
}

impl<'a> ConstructableFrom<&'a str> for Str {
    fn construct(value: &'a str, _: &mut Interner) -> Str {
        Str {
            value: value.into(),
        }
    }
}

impl Str {
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl PartialEq for Str {
    fn eq(&self, other: &Str) -> bool {
        self.as_str() == other.as_str()
    }
}

impl fmt::Debug for Str {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(formatter, "Str({:?})", self.as_str())
    }
}
