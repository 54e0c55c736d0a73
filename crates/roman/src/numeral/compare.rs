//! Value ordering over numeral sources.

use std::cmp::Ordering;

use super::decode::decode;
use super::source::NumeralSource;
use crate::error::Result;

/// Order two numerals by decoded value. Operand kinds may differ (`'X'` vs `"ix"`).
///
/// Distinct spellings of one value (`"MIM"`, `"MCMXCIX"`) compare `Equal`.
pub fn compare<A, B>(a: &A, b: &B) -> Result<Ordering>
where
    A: NumeralSource + ?Sized,
    B: NumeralSource + ?Sized,
{
    let left = decode(a)?;
    let right = decode(b)?;
    Ok(left.cmp(&right))
}

/// Stable in-place sort by decoded value.
///
/// Every key is decoded before anything moves, so on error the slice is left untouched.
pub fn sort_numerals<S: NumeralSource>(items: &mut [S]) -> Result<()> {
    let keys = items.iter().map(decode).collect::<Result<Vec<u64>>>()?;
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by_key(|&i| keys[i]);
    apply_permutation(items, order);
    Ok(())
}

/// Rearrange `items` so that position `k` holds the element previously at `order[k]`.
fn apply_permutation<S>(items: &mut [S], mut order: Vec<usize>) {
    for start in 0..order.len() {
        let mut current = start;
        while order[current] != start {
            let next = order[current];
            items.swap(current, next);
            order[current] = current;
            current = next;
        }
        order[current] = current;
    }
}

/// Reusable comparator object; useful where a value rather than a function is expected.
#[derive(Clone, Copy, Debug, Default)]
pub struct RomanComparer;

impl RomanComparer {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    pub fn compare<A, B>(&self, a: &A, b: &B) -> Result<Ordering>
    where
        A: NumeralSource + ?Sized,
        B: NumeralSource + ?Sized,
    {
        compare(a, b)
    }

    /// Sort key for `input`: its decoded value.
    #[inline]
    pub fn key<S: NumeralSource + ?Sized>(&self, input: &S) -> Result<u64> {
        decode(input)
    }
}
