//! Drives protect → reveal round trips through a [`ProtectApi`] client.

use std::time::Instant;

use log::debug;

use tokenloop_client::ProtectApi;
use tokenloop_client::extract::{
    extract_protected, extract_protected_list, extract_restored, extract_restored_list,
};
use tokenloop_common::{BulkResult, IterationResult};

/// Run one protect → reveal round trip for a single value.
///
/// The reveal call always fires, with an empty protected value when no
/// token could be extracted, so the reveal endpoint's error handling is
/// exercised rather than skipped. Elapsed time spans both calls.
/// HTTP-level failures are captured inside the responses and never abort
/// the round trip.
pub async fn run_iteration(api: &impl ProtectApi, data: &str) -> IterationResult {
    let started = Instant::now();

    let protect_response = api.protect(data).await;
    let protected_token = extract_protected(&protect_response.body);

    let reveal_response = api
        .reveal(protected_token.as_deref().unwrap_or_default())
        .await;
    let restored = extract_restored(&reveal_response.body);

    IterationResult {
        data: data.to_owned(),
        protect_response,
        reveal_response,
        protected_token,
        restored,
        elapsed: started.elapsed(),
    }
}

/// Run bulk round trips over `inputs` in contiguous batches of at most
/// `batch_size` items; the final batch may be shorter.
///
/// Batches are processed sequentially. The bulk reveal is fed whatever
/// tokens were extracted, even when fewer than the inputs; positional
/// correspondence is best-effort. Every batch produces a [`BulkResult`],
/// HTTP failures included, so no batch is ever dropped.
pub async fn run_bulk(
    api: &impl ProtectApi,
    inputs: &[String],
    batch_size: usize,
) -> Vec<BulkResult> {
    // chunks() rejects a zero chunk size
    let batch_size = batch_size.max(1);
    let mut results = Vec::with_capacity(inputs.len().div_ceil(batch_size));

    for batch in inputs.chunks(batch_size) {
        let started = Instant::now();

        let protect_response = api.protect_bulk(batch).await;
        let protected_tokens = extract_protected_list(&protect_response.body);
        debug!(
            "extracted {} token(s) from a batch of {}",
            protected_tokens.len(),
            batch.len()
        );

        let reveal_response = api.reveal_bulk(&protected_tokens).await;
        let restored_values = extract_restored_list(&reveal_response.body);

        results.push(BulkResult {
            inputs: batch.to_vec(),
            protect_response,
            reveal_response,
            protected_tokens,
            restored_values,
            elapsed: started.elapsed(),
        });
    }

    results
}
