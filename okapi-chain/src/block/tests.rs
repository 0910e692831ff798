//! Block test cases.

mod prop;
