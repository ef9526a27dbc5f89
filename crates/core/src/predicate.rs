// Path: crates/core/src/predicate.rs
use num_bigint::BigUint;

/// Returns `true` iff `s` is non-empty and consists only of ASCII digits.
///
/// Signs, decimal points, whitespace and separators are all rejected, so
/// `"+5"`, `"-5"`, `"3.14"` and `" 7"` are not integers. Non-ASCII digits
/// (e.g. `"٣"`) are rejected as well.
pub fn is_integer_token(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `true` iff `s` is non-empty and every character is alphabetic.
///
/// Alphabetic means the Unicode `Alphabetic` property, so `"é"` and `"Ω"`
/// qualify while digits, punctuation and whitespace do not.
pub fn is_alpha_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphabetic)
}

/// Parity of a validated integer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

/// Even iff the lowest bit is clear.
pub fn parity(n: &BigUint) -> Parity {
    if n.bit(0) {
        Parity::Odd
    } else {
        Parity::Even
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_predicate_accepts_plain_digits() {
        for s in ["0", "1", "92", "334", "007", "999999999999999999999"] {
            assert!(is_integer_token(s), "{s:?} should be an integer");
        }
    }

    #[test]
    fn integer_predicate_rejects_everything_else() {
        for s in [
            "", "+5", "-5", "3.14", "12.0", "1a", "a1", "abc", "$", " 7", "7 ", "1,000", "٣",
        ] {
            assert!(!is_integer_token(s), "{s:?} should not be an integer");
        }
    }

    #[test]
    fn alpha_predicate() {
        for s in ["a", "A", "ABcD", "DOE", "é", "straße"] {
            assert!(is_alpha_token(s), "{s:?} should be alphabetic");
        }
        for s in ["", "1", "a1", "1a", "abc123", "$", "-", "a b", "3.14"] {
            assert!(!is_alpha_token(s), "{s:?} should not be alphabetic");
        }
    }

    #[test]
    fn parity_of_small_and_wide_values() {
        assert_eq!(parity(&BigUint::from(0u32)), Parity::Even);
        assert_eq!(parity(&BigUint::from(7u32)), Parity::Odd);
        assert_eq!(parity(&BigUint::from(334u32)), Parity::Even);
        let wide: BigUint = "999999999999999999999".parse().unwrap();
        assert_eq!(parity(&wide), Parity::Odd);
        let wide_even: BigUint = "18446744073709551616".parse().unwrap();
        assert_eq!(parity(&wide_even), Parity::Even);
    }
}
