//! Block verification for Okapi.
//!
//! Verification is *stateless*: every check here reads only the block and
//! the consensus parameters, plus the contextual inputs carried by the
//! request (the median-time-past, and an optional verification time).
//!
//! Verification is provided via a `tower::Service`, to support backpressure
//! and batch verification.

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use chrono::{DateTime, Utc};
use futures_util::FutureExt;
use tower::{buffer::Buffer, Service};
use tracing_futures::Instrument;

use okapi_chain::{
    block::{self, Block},
    parameters::Network,
};

use crate::{error::BlockError, BoxError, Config};

pub mod check;
pub mod subsidy;


/// A service that verifies blocks.
#[derive(Debug)]
struct BlockVerifier {
    /// The network the verifier checks blocks against.
    network: Network,

    /// Whether the miner fund rule is enforced.
    miner_fund_enabled: bool,
}

/// A block verification request.
///
/// Carries the contextual inputs that stateless verification cannot derive
/// from the block itself.
#[derive(Clone, Debug)]
pub struct Request {
    /// The block to verify.
    pub block: Arc<Block>,

    /// The median of the previous 11 block times.
    ///
    /// Miner fund eras activate by median-time-past, so the caller supplies
    /// it with the block.
    pub median_time_past: DateTime<Utc>,

    /// The verification time used by the header time check, usually `None`
    /// for [`Utc::now`].
    ///
    /// The header time check is non-deterministic, so tests can pin this
    /// time to get deterministic results.
    pub now: Option<DateTime<Utc>>,
}

impl Request {
    /// Create a request to verify `block` at `median_time_past`, using the
    /// current time for the header time check.
    pub fn new(block: Arc<Block>, median_time_past: DateTime<Utc>) -> Self {
        Request {
            block,
            median_time_past,
            now: None,
        }
    }
}

impl Service<Request> for BlockVerifier {
    type Response = block::Hash;
    type Error = BoxError;
    type Future =
        Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send + 'static>>;

    fn poll_ready(&mut self, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        // Verification is CPU-bound and stateless, so the verifier is
        // always ready.
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let network = self.network;
        let miner_fund_enabled = self.miner_fund_enabled;

        let Request {
            block,
            median_time_past,
            now,
        } = request;

        let hash = block.hash();
        let span = tracing::debug_span!("block_verify", %hash);

        async move {
            // Check that a generated block has a parseable height.
            // We check the height of parsed blocks when we deserialize them.
            let height = block
                .coinbase_height()
                .ok_or(BlockError::MissingHeight(hash))?;
            if height > block::Height::MAX {
                Err(BlockError::MaxHeight(height, hash, block::Height::MAX))?;
            }

            // Field validity and structure checks, cheapest first.
            let now = now.unwrap_or_else(Utc::now);
            check::time_is_valid_at(&block.header, now, &height, &hash)?;
            check::coinbase_is_first(&block)?;

            let transaction_hashes: Vec<_> =
                block.transactions.iter().map(|tx| tx.hash()).collect();
            check::merkle_root_validity(&block, &transaction_hashes)?;

            check::subsidy_is_valid(&block, network)?;
            check::miner_fund_is_valid(&block, network, median_time_past, miner_fund_enabled)?;

            tracing::trace!(?height, "verified block");
            metrics::gauge!("block.verified.block.height").set(height.0 as f64);
            metrics::counter!("block.verified.block.count").increment(1);

            Ok(hash)
        }
        .instrument(span)
        .boxed()
    }
}

/// Return a block verification service for `network`, using `config`.
///
/// The returned type is opaque to allow instrumentation or other wrappers,
/// but can be boxed for storage. It is also `Clone` to allow sharing of a
/// verification service.
pub fn init(
    config: &Config,
    network: Network,
) -> impl Service<
    Request,
    Response = block::Hash,
    Error = BoxError,
    Future = impl Future<Output = Result<block::Hash, BoxError>>,
> + Send
       + Clone
       + 'static {
    let miner_fund_enabled = config.miner_fund_enabled(network);

    Buffer::new(
        BlockVerifier {
            network,
            miner_fund_enabled,
        },
        1,
    )
}
