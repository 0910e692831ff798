//! Proof-of-work primitives.
//!
//! Okapi does not validate proof-of-work; the difficulty threshold is carried
//! opaquely so that headers round-trip and hash correctly.

pub mod difficulty;

#[cfg(any(test, feature = "proptest-impl"))]
mod arbitrary;
