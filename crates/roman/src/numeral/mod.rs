//! Roman numerals (symbols `IVXLCDM`, values `1..=3999`).
//!
//! Purpose
//! - Decode symbol sequences to integers with the positional add/subtract rule.
//! - Encode integers to their unique canonical spelling.
//! - Order numerals of any source kind (single symbol or string) by value.
//!
//! Contract
//! - `decode(encode(n)) == n` for every `n` in `MIN_VALUE..=MAX_VALUE`.
//! - Decoding accepts non-canonical spellings (`IL`, `MIM`); encoding never emits them.
//!
//! Code cross-refs: `Symbol`, `Numeral`, `NumeralSource`, `RomanComparer`

mod compare;
mod decode;
mod encode;
mod source;
mod types;

pub use compare::{compare, sort_numerals, RomanComparer};
pub use decode::{decode, decode_numeral, decode_symbol};
pub use encode::{encode, encode_into, is_canonical};
pub use source::{NumeralSource, Operand};
pub use types::{Numeral, Symbol, MAX_VALUE, MIN_VALUE, POWERS_OF_TEN, SYMBOLS};
