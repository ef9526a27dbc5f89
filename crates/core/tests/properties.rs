// Path: crates/core/tests/properties.rs
use classify_core::{classify_token, concat_string, is_integer_token, process, TokenClass};
use num_bigint::BigUint;
use proptest::prelude::*;

fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,30}",
        "[a-zA-Z]{1,8}",
        "[!@#$%&*+\\-.]{0,4}",
        "[a-zA-Z0-9 .+\\-]{0,10}",
    ]
}

proptest! {
    #[test]
    fn every_token_lands_in_exactly_one_bucket(tokens in prop::collection::vec(token(), 0..40)) {
        let r = process(&tokens);
        prop_assert_eq!(r.token_count(), tokens.len());

        let mut odd = r.odd_numbers.iter();
        let mut even = r.even_numbers.iter();
        let mut alpha = r.alphabets.iter();
        let mut special = r.special_characters.iter();
        for t in &tokens {
            match classify_token(t) {
                TokenClass::Odd => prop_assert_eq!(odd.next(), Some(t)),
                TokenClass::Even => prop_assert_eq!(even.next(), Some(t)),
                TokenClass::Alpha => prop_assert_eq!(alpha.next(), Some(&t.to_uppercase())),
                TokenClass::Special => prop_assert_eq!(special.next(), Some(t)),
            }
        }
    }

    #[test]
    fn sum_counts_only_integer_tokens(tokens in prop::collection::vec(token(), 0..40)) {
        let expected: BigUint = tokens
            .iter()
            .filter(|t| is_integer_token(t))
            .map(|t| t.parse::<BigUint>().unwrap())
            .sum();
        prop_assert_eq!(process(&tokens).sum, expected.to_string());
    }

    #[test]
    fn concat_string_alternates_case(tokens in prop::collection::vec(token(), 0..40)) {
        let letters: usize = tokens
            .iter()
            .map(|t| t.chars().filter(|c| c.is_ascii_alphabetic()).count())
            .sum();
        let s = concat_string(&tokens);
        prop_assert_eq!(s.chars().count(), letters);
        for (i, c) in s.chars().enumerate() {
            if i % 2 == 0 {
                prop_assert!(c.is_ascii_uppercase());
            } else {
                prop_assert!(c.is_ascii_lowercase());
            }
        }
    }

    #[test]
    fn concat_string_ignores_classification(tokens in prop::collection::vec(token(), 0..20)) {
        let joined: String = tokens.concat();
        prop_assert_eq!(concat_string(&tokens), concat_string(&[joined]));
    }
}
