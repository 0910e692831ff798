//! Implementation of eCash consensus checks.
//!
//! More specifically, this crate implements *semantic* validity checks for
//! blocks, as defined below.
//!
//! ## Verification levels
//!
//! Okapi's implementation of the eCash consensus rules is oriented around
//! three telescoping notions of validity:
//!
//! 1. *Structural Validity*, or whether the format and structure of the
//!    object are valid. For instance, a coinbase script must fit in 100
//!    bytes, and transaction counts must be canonically encoded.
//!
//! 2. *Semantic Validity*, or whether the object could potentially be
//!    valid. For instance, a block's coinbase must pay the miner fund, and
//!    its header time must not be too far in the future.
//!
//! 3. *Contextual Validity*, or whether a semantically valid block is
//!    actually valid in the context of a particular chain state: whether it
//!    extends the best chain, whether its transactions spend unspent
//!    outputs, and so on.
//!
//! *Structural validity* is enforced by the definitions of data structures
//! in `okapi-chain`. *Semantic validity* is enforced by the code in this
//! crate. *Contextual validity* is out of scope here: the verifier takes
//! the contextual inputs it needs, like the median-time-past, as part of
//! each request.

#![doc(html_root_url = "https://docs.rs/okapi_consensus")]
// Standard lints
#![warn(missing_docs)]
#![allow(clippy::try_err)]
#![deny(clippy::await_holding_lock)]
#![forbid(unsafe_code)]

mod config;

pub mod block;
pub mod error;
pub mod parameters;

pub use config::Config;

/// A boxed [`std::error::Error`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
