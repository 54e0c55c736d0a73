//! Encoding: integers to canonical numerals.
//!
//! Model
//! - Split the value into decimal places (thousands, hundreds, tens, ones).
//! - Each nonzero digit `d` at a place with symbols `one` (10^p), `five` (5·10^p) and
//!   `ten` (10^(p+1)) takes one of four shapes:
//!   `1..=3` repeats `one`; `4` is `one five`; `5..=8` is `five` then `d-5` × `one`;
//!   `9` is `one ten`.
//! - Subtraction only ever pairs a power of ten with the symbol worth 5× or 10× it,
//!   and thousands only repeat `M` since the range ends at 3999.

use std::fmt;

use super::decode::decode;
use super::source::NumeralSource;
use super::types::{Numeral, Symbol, MAX_VALUE};
use crate::error::Result;

#[derive(Clone, Copy, Debug)]
struct Place {
    one: Symbol,
    five: Symbol,
    ten: Symbol,
    scale: u16,
}

/// Sub-thousand places, most significant first.
const PLACES: [Place; 3] = [
    Place {
        one: Symbol::C,
        five: Symbol::D,
        ten: Symbol::M,
        scale: 100,
    },
    Place {
        one: Symbol::X,
        five: Symbol::L,
        ten: Symbol::C,
        scale: 10,
    },
    Place {
        one: Symbol::I,
        five: Symbol::V,
        ten: Symbol::X,
        scale: 1,
    },
];

#[inline]
fn repeat<W: fmt::Write + ?Sized>(out: &mut W, symbol: Symbol, times: u16) -> fmt::Result {
    for _ in 0..times {
        out.write_char(symbol.as_char())?;
    }
    Ok(())
}

fn write_digit<W: fmt::Write + ?Sized>(out: &mut W, digit: u16, place: Place) -> fmt::Result {
    match digit {
        0 => Ok(()),
        1..=3 => repeat(out, place.one, digit),
        4 => {
            out.write_char(place.one.as_char())?;
            out.write_char(place.five.as_char())
        }
        5..=8 => {
            out.write_char(place.five.as_char())?;
            repeat(out, place.one, digit - 5)
        }
        9 => {
            out.write_char(place.one.as_char())?;
            out.write_char(place.ten.as_char())
        }
        _ => unreachable!("decimal digit out of range: {digit}"),
    }
}

/// Canonical spelling of `value`; callers guarantee `value <= MAX_VALUE`.
pub(crate) fn write_canonical<W: fmt::Write + ?Sized>(value: u16, out: &mut W) -> fmt::Result {
    debug_assert!(value <= MAX_VALUE);
    repeat(out, Symbol::M, value / 1000)?;
    for place in PLACES {
        write_digit(out, (value / place.scale) % 10, place)?;
    }
    Ok(())
}

/// Write the canonical spelling of `numeral` into `out`.
pub fn encode_into<W: fmt::Write + ?Sized>(numeral: Numeral, out: &mut W) -> fmt::Result {
    write_canonical(numeral.value(), out)
}

/// Canonical numeral for `n`. Fails with `OutOfRange` outside `1..=3999`.
pub fn encode(n: i64) -> Result<String> {
    let numeral = Numeral::new(n)?;
    // At most 15 symbols (MMMDCCCLXXXVIII).
    let mut out = String::with_capacity(15);
    // Writing into a String cannot fail.
    let _ = encode_into(numeral, &mut out);
    Ok(out)
}

/// Whether `input` is spelled exactly as `encode` would spell its value (ignoring ASCII case).
///
/// Decoding errors propagate; a spelling whose value falls outside the range is not canonical.
pub fn is_canonical<S: NumeralSource + ?Sized>(input: &S) -> Result<bool> {
    let value = decode(input)?;
    let Ok(numeral) = Numeral::new(i64::try_from(value).unwrap_or(i64::MAX)) else {
        return Ok(false);
    };
    let text = input.numeral_text()?;
    Ok(numeral.to_string().eq_ignore_ascii_case(&text))
}
