// Path: crates/types/src/result.rs
use serde::{Deserialize, Serialize};

/// The partition of an input token list into numeric, alphabetic and special
/// buckets, together with the numeric sum and the alternating-case string.
///
/// Every input token lands in exactly one of the four bucket vectors, and each
/// vector preserves the input order of the tokens it received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Tokens that are valid non-negative integers with an odd value.
    pub odd_numbers: Vec<String>,
    /// Tokens that are valid non-negative integers with an even value.
    pub even_numbers: Vec<String>,
    /// Purely alphabetic tokens, upper-cased.
    pub alphabets: Vec<String>,
    /// Every remaining token, unmodified (including empty strings).
    pub special_characters: Vec<String>,
    /// Decimal rendering of the sum of all integer tokens.
    pub sum: String,
    /// Reversed letters of the whole input in alternating case.
    pub concat_string: String,
}

impl ClassificationResult {
    /// Total number of tokens across the four buckets.
    pub fn token_count(&self) -> usize {
        self.odd_numbers.len()
            + self.even_numbers.len()
            + self.alphabets.len()
            + self.special_characters.len()
    }
}

impl Default for ClassificationResult {
    fn default() -> Self {
        Self {
            odd_numbers: Vec::new(),
            even_numbers: Vec::new(),
            alphabets: Vec::new(),
            special_characters: Vec::new(),
            sum: "0".to_string(),
            concat_string: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_zero_sum() {
        let r = ClassificationResult::default();
        assert_eq!(r.sum, "0");
        assert!(r.concat_string.is_empty());
        assert_eq!(r.token_count(), 0);
    }

    #[test]
    fn serializes_with_snake_case_fields() {
        let r = ClassificationResult {
            odd_numbers: vec!["1".into()],
            even_numbers: vec!["4".into()],
            alphabets: vec!["A".into()],
            special_characters: vec!["$".into()],
            sum: "5".into(),
            concat_string: "A".into(),
        };
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["odd_numbers"][0], "1");
        assert_eq!(v["even_numbers"][0], "4");
        assert_eq!(v["special_characters"][0], "$");
        assert_eq!(v["concat_string"], "A");
        assert_eq!(r.token_count(), 4);
    }
}
