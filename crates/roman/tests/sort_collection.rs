//! Sorting a random assortment of numerals by value.

use rand::{rngs::StdRng, Rng, SeedableRng};
use roman::{decode, encode, sort_numerals, Operand, RomanComparer, MAX_VALUE, MIN_VALUE};

const COLLECTION_SIZE: usize = 500;

fn random_numerals(seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..COLLECTION_SIZE)
        .map(|_| {
            let n: i64 = rng.gen_range(i64::from(MIN_VALUE)..=i64::from(MAX_VALUE));
            encode(n).unwrap()
        })
        .collect()
}

#[test]
fn sorted_collection_is_non_decreasing() {
    let mut list = random_numerals(7);
    sort_numerals(&mut list).unwrap();
    for pair in list.windows(2) {
        let left = decode(&pair[0]).unwrap();
        let right = decode(&pair[1]).unwrap();
        assert!(left <= right, "{} is not <= {}", pair[0], pair[1]);
    }
}

#[test]
fn comparer_drives_slice_sort() {
    let cmp = RomanComparer::new();
    let mut list = random_numerals(11);
    // Every entry is canonical, so unwrap inside the closure is safe here.
    list.sort_by(|a, b| cmp.compare(a, b).unwrap());
    let mut keyed = random_numerals(11);
    keyed.sort_by_key(|s| cmp.key(s).unwrap());
    assert_eq!(list, keyed);
}

#[test]
fn mixed_symbols_and_strings_sort_together() {
    let mut rng = StdRng::seed_from_u64(3);
    let letters = ['i', 'V', 'x', 'L', 'c', 'D', 'm'];
    let mut items: Vec<Operand> = (0..64)
        .map(|k| {
            if k % 2 == 0 {
                Operand::Symbol(letters[rng.gen_range(0..letters.len())])
            } else {
                Operand::Text(encode(rng.gen_range(1..=3999)).unwrap())
            }
        })
        .collect();
    sort_numerals(&mut items).unwrap();
    let values: Vec<u64> = items.iter().map(|op| decode(op).unwrap()).collect();
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
}
