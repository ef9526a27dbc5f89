// Path: crates/core/src/classifier.rs
use crate::predicate::{is_alpha_token, is_integer_token, parity, Parity};
use classify_types::ClassificationResult;
use num_bigint::BigUint;

/// The bucket a single token is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    Odd,
    Even,
    Alpha,
    Special,
}

enum Classified {
    Number(BigUint, Parity),
    Alpha,
    Special,
}

// Integer check runs first; no token can satisfy both predicates.
fn classify(token: &str) -> Classified {
    if is_integer_token(token) {
        // Cannot fail on an all-digit string.
        if let Some(value) = BigUint::parse_bytes(token.as_bytes(), 10) {
            let p = parity(&value);
            return Classified::Number(value, p);
        }
    }
    if is_alpha_token(token) {
        Classified::Alpha
    } else {
        Classified::Special
    }
}

/// Classifies one token without touching any aggregate.
pub fn classify_token(token: &str) -> TokenClass {
    match classify(token) {
        Classified::Number(_, Parity::Odd) => TokenClass::Odd,
        Classified::Number(_, Parity::Even) => TokenClass::Even,
        Classified::Alpha => TokenClass::Alpha,
        Classified::Special => TokenClass::Special,
    }
}

/// Collects every letter of every token in input order, reverses the
/// sequence, and renders even positions upper-case and odd positions
/// lower-case.
///
/// Letters are taken from all tokens, including tokens classified as
/// special (`"12a"` contributes `a`). A letter whose case mapping expands
/// (`ß` upper-cases to `SS`) still occupies a single position.
pub fn concat_string<S: AsRef<str>>(tokens: &[S]) -> String {
    let letters: Vec<char> = tokens
        .iter()
        .flat_map(|t| t.as_ref().chars())
        .filter(|c| c.is_alphabetic())
        .collect();

    let mut out = String::with_capacity(letters.len());
    for (i, c) in letters.iter().rev().enumerate() {
        if i % 2 == 0 {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Partitions `tokens` into odd, even, alphabetic and special buckets in a
/// single pass, sums the integer tokens, and derives `concat_string`.
///
/// Total over its input: the empty list yields empty buckets and `sum == "0"`.
pub fn process<S: AsRef<str>>(tokens: &[S]) -> ClassificationResult {
    let mut result = ClassificationResult::default();
    let mut sum = BigUint::default();

    for token in tokens {
        let token = token.as_ref();
        match classify(token) {
            Classified::Number(value, p) => {
                sum += value;
                match p {
                    Parity::Odd => result.odd_numbers.push(token.to_string()),
                    Parity::Even => result.even_numbers.push(token.to_string()),
                }
            }
            Classified::Alpha => result.alphabets.push(token.to_uppercase()),
            Classified::Special => result.special_characters.push(token.to_string()),
        }
    }

    result.sum = sum.to_string();
    result.concat_string = concat_string(tokens);

    tracing::debug!(
        target: "classify",
        tokens = tokens.len(),
        odd = result.odd_numbers.len(),
        even = result.even_numbers.len(),
        alphabets = result.alphabets.len(),
        special = result.special_characters.len(),
        sum = %result.sum,
        "classified input"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn scenario_mixed_numbers_letters_and_symbol() {
        let r = process(&["a", "1", "334", "4", "R", "$"]);
        assert_eq!(r.odd_numbers, strs(&["1"]));
        assert_eq!(r.even_numbers, strs(&["334", "4"]));
        assert_eq!(r.alphabets, strs(&["A", "R"]));
        assert_eq!(r.special_characters, strs(&["$"]));
        assert_eq!(r.sum, "339");
        assert_eq!(r.concat_string, "Ra");
    }

    #[test]
    fn scenario_several_symbols() {
        let r = process(&["2", "a", "y", "4", "&", "-", "*", "5", "92", "b"]);
        assert_eq!(r.odd_numbers, strs(&["5"]));
        assert_eq!(r.even_numbers, strs(&["2", "4", "92"]));
        assert_eq!(r.alphabets, strs(&["A", "Y", "B"]));
        assert_eq!(r.special_characters, strs(&["&", "-", "*"]));
        assert_eq!(r.sum, "103");
        assert_eq!(r.concat_string, "ByA");
    }

    #[test]
    fn scenario_letters_only() {
        let r = process(&["A", "ABcD", "DOE"]);
        assert!(r.odd_numbers.is_empty());
        assert!(r.even_numbers.is_empty());
        assert_eq!(r.alphabets, strs(&["A", "ABCD", "DOE"]));
        assert!(r.special_characters.is_empty());
        assert_eq!(r.sum, "0");
        assert_eq!(r.concat_string, "EoDdCbAa");
    }

    #[test]
    fn empty_input() {
        let r = process::<&str>(&[]);
        assert_eq!(r, ClassificationResult::default());
    }

    #[test]
    fn empty_and_mixed_tokens_are_special() {
        let r = process(&["123", "abc", "12a", "", "0", "XYZ", "!@#", "999"]);
        assert_eq!(r.odd_numbers, strs(&["123", "999"]));
        assert_eq!(r.even_numbers, strs(&["0"]));
        assert_eq!(r.alphabets, strs(&["ABC", "XYZ"]));
        assert_eq!(r.special_characters, strs(&["12a", "", "!@#"]));
        assert_eq!(r.sum, "1122");
        assert_eq!(r.concat_string, "ZyXaCbA");
    }

    #[test]
    fn special_token_still_contributes_letters() {
        let r = process(&["12a"]);
        assert_eq!(r.special_characters, strs(&["12a"]));
        assert_eq!(r.sum, "0");
        assert_eq!(r.concat_string, "A");

        assert_eq!(concat_string(&["x1", "9", "y$z"]), "ZyX");
    }

    #[test]
    fn signed_and_decimal_tokens_do_not_reach_the_sum() {
        let r = process(&["+5", "-5", "3.14", "10"]);
        assert_eq!(r.special_characters, strs(&["+5", "-5", "3.14"]));
        assert_eq!(r.even_numbers, strs(&["10"]));
        assert_eq!(r.sum, "10");
    }

    #[test]
    fn sum_beyond_machine_words() {
        let r = process(&[
            "999999999999999999999",
            "1",
            "340282366920938463463374607431768211455",
        ]);
        assert_eq!(r.odd_numbers.len(), 3);
        assert!(r.even_numbers.is_empty());
        assert_eq!(r.sum, "340282366920938464463374607431768211455");
    }

    #[test]
    fn leading_zeros_keep_original_text() {
        let r = process(&["007", "010"]);
        assert_eq!(r.odd_numbers, strs(&["007"]));
        assert_eq!(r.even_numbers, strs(&["010"]));
        assert_eq!(r.sum, "17");
    }

    #[test]
    fn classify_token_matches_buckets() {
        assert_eq!(classify_token("7"), TokenClass::Odd);
        assert_eq!(classify_token("0"), TokenClass::Even);
        assert_eq!(classify_token("Zed"), TokenClass::Alpha);
        assert_eq!(classify_token(""), TokenClass::Special);
        assert_eq!(classify_token("a1"), TokenClass::Special);
    }

    #[test]
    fn non_ascii_letters() {
        let r = process(&["é", "ß"]);
        assert_eq!(r.alphabets, strs(&["É", "SS"]));
        // reversed: ß, é -> "SS" + "é"
        assert_eq!(r.concat_string, "SSé");
    }
}
