//! Tests for transactions.

mod prop;
mod vectors;
