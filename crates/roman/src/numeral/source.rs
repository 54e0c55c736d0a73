//! Anything that can be read as a numeral character sequence.

use std::borrow::Cow;

use super::types::{Numeral, Symbol};
use crate::error::{Result, RomanError};

/// A decodable numeral: a single symbol character, a string, or an absent value.
///
/// `decode` and `compare` are generic over this trait so a `char` can be compared
/// against a `&str` without per-kind overloads.
pub trait NumeralSource {
    /// Character sequence to decode. Fails with `NullInput` when no value is present.
    fn numeral_text(&self) -> Result<Cow<'_, str>>;
}

/// Heterogeneous operand for callers that keep symbols and strings in one collection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    Symbol(char),
    Text(String),
}

impl From<char> for Operand {
    fn from(c: char) -> Self {
        Operand::Symbol(c)
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::Text(s.to_owned())
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Operand::Text(s)
    }
}

impl NumeralSource for str {
    fn numeral_text(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Borrowed(self))
    }
}

impl NumeralSource for String {
    fn numeral_text(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Borrowed(self.as_str()))
    }
}

impl NumeralSource for char {
    fn numeral_text(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Owned(self.to_string()))
    }
}

impl NumeralSource for Symbol {
    fn numeral_text(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Owned(self.as_char().to_string()))
    }
}

impl NumeralSource for Numeral {
    fn numeral_text(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Owned(self.to_string()))
    }
}

impl NumeralSource for Operand {
    fn numeral_text(&self) -> Result<Cow<'_, str>> {
        match self {
            Operand::Symbol(c) => c.numeral_text(),
            Operand::Text(s) => s.numeral_text(),
        }
    }
}

impl<T: NumeralSource + ?Sized> NumeralSource for &T {
    fn numeral_text(&self) -> Result<Cow<'_, str>> {
        (**self).numeral_text()
    }
}

impl<T: NumeralSource> NumeralSource for Option<T> {
    fn numeral_text(&self) -> Result<Cow<'_, str>> {
        match self {
            Some(inner) => inner.numeral_text(),
            None => Err(RomanError::NullInput),
        }
    }
}
