//! Symbol table and the range-checked `Numeral` value.
//!
//! - `Symbol`: the seven standard numerals, declared in ascending value order.
//! - `SYMBOLS`, `POWERS_OF_TEN`: compile-time tables; values strictly increase with index.
//! - `Numeral`: an integer known to lie in `MIN_VALUE..=MAX_VALUE`.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RomanError};

/// Smallest integer with a roman spelling.
pub const MIN_VALUE: u16 = 1;
/// Largest integer with a roman spelling (no symbol exists for 5000).
pub const MAX_VALUE: u16 = 3999;

/// One of the seven standard numeral symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
}

/// All symbols, ascending by value.
pub const SYMBOLS: [Symbol; 7] = [
    Symbol::I,
    Symbol::V,
    Symbol::X,
    Symbol::L,
    Symbol::C,
    Symbol::D,
    Symbol::M,
];

/// Symbols worth a power of ten: the only ones that may repeat or prefix a larger symbol.
pub const POWERS_OF_TEN: [Symbol; 4] = [Symbol::I, Symbol::X, Symbol::C, Symbol::M];

impl Symbol {
    #[inline]
    pub const fn value(self) -> u16 {
        match self {
            Symbol::I => 1,
            Symbol::V => 5,
            Symbol::X => 10,
            Symbol::L => 50,
            Symbol::C => 100,
            Symbol::D => 500,
            Symbol::M => 1000,
        }
    }

    /// Upper-case letter for this symbol.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Symbol::I => 'I',
            Symbol::V => 'V',
            Symbol::X => 'X',
            Symbol::L => 'L',
            Symbol::C => 'C',
            Symbol::D => 'D',
            Symbol::M => 'M',
        }
    }

    /// Case-insensitive lookup; `None` for anything outside `IVXLCDM`/`ivxlcdm`.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' | 'i' => Some(Symbol::I),
            'V' | 'v' => Some(Symbol::V),
            'X' | 'x' => Some(Symbol::X),
            'L' | 'l' => Some(Symbol::L),
            'C' | 'c' => Some(Symbol::C),
            'D' | 'd' => Some(Symbol::D),
            'M' | 'm' => Some(Symbol::M),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_power_of_ten(self) -> bool {
        matches!(self, Symbol::I | Symbol::X | Symbol::C | Symbol::M)
    }
}

impl TryFrom<char> for Symbol {
    type Error = RomanError;

    fn try_from(c: char) -> Result<Self> {
        Symbol::from_char(c).ok_or(RomanError::InvalidSymbol(c))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Integer in `MIN_VALUE..=MAX_VALUE`; displays as its canonical spelling.
///
/// Ordering follows the numeric value, so `Vec<Numeral>` sorts like the numbers it holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Numeral(u16);

impl Numeral {
    pub fn new(value: impl Into<i64>) -> Result<Self> {
        let value = value.into();
        if value < i64::from(MIN_VALUE) || value > i64::from(MAX_VALUE) {
            return Err(RomanError::out_of_range(value));
        }
        // Range-checked above.
        Ok(Self(value as u16))
    }

    #[inline]
    pub fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::encode::write_canonical(self.0, f)
    }
}

/// Lenient parse followed by a range check: `"mim"` parses, `"MMMM"` does not.
impl FromStr for Numeral {
    type Err = RomanError;

    fn from_str(s: &str) -> Result<Self> {
        let value = super::decode::decode_numeral(Some(s))?;
        let value = i64::try_from(value).unwrap_or(i64::MAX);
        Numeral::new(value)
    }
}

impl TryFrom<i32> for Numeral {
    type Error = RomanError;
    fn try_from(value: i32) -> Result<Self> {
        Numeral::new(value)
    }
}

impl TryFrom<i64> for Numeral {
    type Error = RomanError;
    fn try_from(value: i64) -> Result<Self> {
        Numeral::new(value)
    }
}

impl TryFrom<u32> for Numeral {
    type Error = RomanError;
    fn try_from(value: u32) -> Result<Self> {
        Numeral::new(value)
    }
}

impl From<Numeral> for u16 {
    fn from(n: Numeral) -> u16 {
        n.0
    }
}
