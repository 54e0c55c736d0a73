//! Decoding: symbols and symbol strings to integers.

use super::source::NumeralSource;
use super::types::Symbol;
use crate::error::{Result, RomanError};

/// Value of a single symbol character (case-insensitive).
#[inline]
pub fn decode_symbol(c: char) -> Result<u16> {
    Symbol::try_from(c).map(Symbol::value)
}

/// Value of a symbol string, scanned right to left.
///
/// The accumulator is seeded with the last symbol. Each earlier symbol is added when it is
/// at least the previously scanned value and subtracted otherwise. No canonical-form check
/// is made: `IL` and `MIM` decode to 49 and 1999, and `MMMM` decodes to 4000.
///
/// The accumulator never falls below the previously scanned value (adjacent table values
/// differ by a factor of 2 or 5), so the result is always positive.
pub fn decode_numeral(s: Option<&str>) -> Result<u64> {
    let s = s.ok_or(RomanError::NullInput)?;
    let mut chars = s.chars().rev();
    let Some(tail) = chars.next() else {
        return Err(RomanError::EmptyInput);
    };

    let mut last = u64::from(decode_symbol(tail)?);
    let mut total = last;
    for c in chars {
        let current = u64::from(decode_symbol(c)?);
        if current >= last {
            total += current;
        } else {
            total -= current;
        }
        last = current;
    }
    Ok(total)
}

/// Decode any numeral source: a `char`, `&str`, `String`, `Symbol`, `Operand` or `Option`.
pub fn decode<S: NumeralSource + ?Sized>(input: &S) -> Result<u64> {
    let text = input.numeral_text()?;
    decode_numeral(Some(text.as_ref()))
}
