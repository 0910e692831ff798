//! Core eCash data structures.
//!
//! This crate provides definitions of core data structures for eCash, for use
//! by other Okapi crates: amounts, blocks, transactions, transparent scripts
//! and addresses, network parameters, and the consensus-critical wire
//! serialization they share.

#![doc(html_root_url = "https://docs.rs/okapi_chain")]
// Standard lints
#![warn(missing_docs)]
#![allow(clippy::try_err)]
#![deny(clippy::await_holding_lock)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate serde;

pub mod amount;
pub mod block;
pub mod fmt;
pub mod parameters;
pub mod serialization;
pub mod transaction;
pub mod transparent;
pub mod work;
