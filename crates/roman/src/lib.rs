//! Roman numeral codec and comparator.
//!
//! Layout
//! - `numeral::types`: the seven-symbol table and the power-of-ten subset.
//! - `numeral::decode`: lenient right-to-left decoding of symbols and strings.
//! - `numeral::encode`: canonical digit-by-digit encoding of `1..=3999`.
//! - `numeral::compare`: value ordering over any `NumeralSource`.
//!
//! API Policy
//! - Everything is a pure function over immutable tables; no I/O, no logging.
//! - Decoding is lenient (`IL`, `MIM` decode), encoding is canonical-only.

pub mod error;
pub mod numeral;

pub use error::{Result, RomanError};
pub use numeral::{
    compare, decode, decode_numeral, decode_symbol, encode, encode_into, is_canonical,
    sort_numerals, Numeral, NumeralSource, Operand, RomanComparer, Symbol, MAX_VALUE, MIN_VALUE,
    POWERS_OF_TEN, SYMBOLS,
};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{Result, RomanError};
    pub use crate::numeral::{
        compare, decode, encode, sort_numerals, Numeral, NumeralSource, Operand, RomanComparer,
        Symbol,
    };
}
