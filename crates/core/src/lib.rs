// Path: crates/core/src/lib.rs
#![forbid(unsafe_code)]
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # Classify Core
//!
//! The classifier/transformer. Given an ordered list of tokens it produces a
//! [`ClassificationResult`]: odd and even integers, upper-cased alphabetic
//! tokens, everything else as "special", the arbitrary-precision sum of the
//! integer tokens, and a reversed alternating-case string built from every
//! letter in the input.
//!
//! Everything here is synchronous, allocation-only and free of shared state,
//! so concurrent callers need no coordination.

/// The single-pass classifier and the alternating-case derivation.
pub mod classifier;
/// Token-level predicates and parity.
pub mod predicate;

pub use classifier::{classify_token, concat_string, process, TokenClass};
pub use classify_types::ClassificationResult;
pub use predicate::{is_alpha_token, is_integer_token, parity, Parity};
