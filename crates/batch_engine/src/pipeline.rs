//! Per-batch market-data pipeline.
//!
//! Control flow for one pricing request: records are grouped first
//! (sequentially, so intra-batch order is preserved), then each batch
//! issues one reference-data gather for the volatility axis it needs.
//! Batches share no mutable state once grouped, so the per-batch gathers
//! may fan out in parallel.

use std::collections::HashMap;

use num_traits::Float;
use rayon::prelude::*;
use tracing::debug;

use batch_market::{BatchedVolSurface, KeyMask, MarketDataError, VolatilityProvider};

use crate::fingerprint::Fingerprint;
use crate::group::OptionBatch;

/// Builds the equity key mask for one batch.
///
/// `mask.unique_keys()[mask.mask()[i]]` is the underlier of instrument
/// `i` of the batch.
pub fn equity_mask(batch: &OptionBatch) -> KeyMask<String> {
    KeyMask::from_keys(batch.equities())
}

/// Gathers the batched volatility surface for one batch.
///
/// One provider query for the batch's distinct underliers, re-aligned
/// and fanned back out to instrument rows through the mask.
///
/// # Errors
///
/// Propagates [`MarketDataError`] from the provider query or the gather
/// unchanged; a missing underlier fails the whole batch.
pub fn vol_surface_for_batch<T, P>(
    batch: &OptionBatch,
    provider: &P,
) -> Result<BatchedVolSurface<T>, MarketDataError>
where
    T: Float,
    P: VolatilityProvider<T> + ?Sized,
{
    let mask = equity_mask(batch);
    debug!(
        instruments = batch.len(),
        unique_equities = mask.num_unique(),
        "gathering batched volatility surface"
    );
    BatchedVolSurface::gather(provider, &mask)
}

/// Gathers batched volatility surfaces for all batches in parallel.
///
/// Batches are independent after grouping, so the per-batch gathers run
/// on the rayon thread pool. The first failing batch fails the whole
/// call.
pub fn vol_surfaces_for_batches<T, P>(
    groups: &HashMap<Fingerprint, OptionBatch>,
    provider: &P,
) -> Result<HashMap<Fingerprint, BatchedVolSurface<T>>, MarketDataError>
where
    T: Float + Send,
    P: VolatilityProvider<T> + Sync,
{
    groups
        .par_iter()
        .map(|(&fingerprint, batch)| {
            vol_surface_for_batch(batch, provider).map(|surface| (fingerprint, surface))
        })
        .collect()
}
