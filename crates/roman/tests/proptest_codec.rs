use proptest::prelude::*;
use roman::{compare, decode, encode, is_canonical, Numeral, RomanError, MAX_VALUE, MIN_VALUE};

fn in_range() -> impl Strategy<Value = i64> {
    i64::from(MIN_VALUE)..=i64::from(MAX_VALUE)
}

const SYMBOL_CHARS: [char; 14] = [
    'I', 'V', 'X', 'L', 'C', 'D', 'M', 'i', 'v', 'x', 'l', 'c', 'd', 'm',
];

/// Arbitrary (often non-canonical) spellings over the seven symbols, mixed case.
fn lenient_numeral() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(SYMBOL_CHARS.to_vec()), 1..24)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_round_trip(n in in_range()) {
        let text = encode(n).unwrap();
        prop_assert_eq!(decode(&text).unwrap() as i64, n);
    }

    #[test]
    fn prop_encode_uses_only_standard_symbols(n in in_range()) {
        let text = encode(n).unwrap();
        prop_assert!(!text.is_empty());
        prop_assert!(text.chars().all(|c| "IVXLCDM".contains(c)));
        // Pure: a second call spells the same string.
        prop_assert_eq!(&text, &encode(n).unwrap());
        prop_assert!(is_canonical(&text).unwrap());
    }

    #[test]
    fn prop_case_insensitive(s in lenient_numeral()) {
        let v = decode(&s).unwrap();
        prop_assert_eq!(decode(&s.to_uppercase()).unwrap(), v);
        prop_assert_eq!(decode(&s.to_lowercase()).unwrap(), v);
    }

    #[test]
    fn prop_lenient_decode_is_positive(s in lenient_numeral()) {
        prop_assert!(decode(&s).unwrap() >= 1);
    }

    #[test]
    fn prop_compare_matches_decoded_values(a in lenient_numeral(), b in lenient_numeral()) {
        let want = decode(&a).unwrap().cmp(&decode(&b).unwrap());
        prop_assert_eq!(compare(&a, &b).unwrap(), want);
        prop_assert_eq!(compare(&b, &a).unwrap(), want.reverse());
    }

    #[test]
    fn prop_encode_out_of_range(n in prop_oneof![i64::MIN..1i64, 4000i64..i64::MAX]) {
        prop_assert_eq!(
            encode(n),
            Err(RomanError::OutOfRange { value: n, min: 1, max: 3999 })
        );
    }

    #[test]
    fn prop_numeral_parse_canonicalizes(s in lenient_numeral()) {
        let value = decode(&s).unwrap();
        match s.parse::<Numeral>() {
            Ok(n) => {
                prop_assert_eq!(u64::from(n.value()), value);
                prop_assert_eq!(n.to_string(), encode(value as i64).unwrap());
            }
            Err(e) => {
                prop_assert!(value > u64::from(MAX_VALUE));
                let is_out_of_range = matches!(e, RomanError::OutOfRange { .. });
                prop_assert!(is_out_of_range);
            }
        }
    }
}
