//! Per-round-trip result records for the iterative and bulk runners.

use std::time::Duration;

use crate::response::ApiResponse;

/// Outcome of one protect → reveal round trip for a single value.
///
/// Held only long enough to be reported and aggregated.
#[derive(Debug, Clone)]
pub struct IterationResult {
    /// The input value sent to protect.
    pub data: String,
    pub protect_response: ApiResponse,
    pub reveal_response: ApiResponse,
    /// Token extracted from the protect response, when one was found.
    pub protected_token: Option<String>,
    /// Value extracted from the reveal response, when one was found.
    pub restored: Option<String>,
    /// Wall-clock time across both calls.
    pub elapsed: Duration,
}

impl IterationResult {
    /// Whether the revealed value equals the original input.
    /// False when no value was restored.
    #[must_use]
    pub fn matched(&self) -> bool {
        self.restored.as_deref() == Some(self.data.as_str())
    }

    /// Whether both calls came back 2xx.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.protect_response.is_success() && self.reveal_response.is_success()
    }
}

/// Outcome of one bulk protect → bulk reveal round trip for a batch.
#[derive(Debug, Clone)]
pub struct BulkResult {
    /// The batch of input values, in request order.
    pub inputs: Vec<String>,
    pub protect_response: ApiResponse,
    pub reveal_response: ApiResponse,
    /// Tokens extracted from the bulk protect response, in response order.
    pub protected_tokens: Vec<String>,
    /// Values extracted from the bulk reveal response, in response order.
    pub restored_values: Vec<String>,
    /// Wall-clock time across both calls.
    pub elapsed: Duration,
}

impl BulkResult {
    /// Count of positions where the revealed value equals the input.
    /// Pairs are truncated to the shorter of the two lists.
    #[must_use]
    pub fn matches(&self) -> usize {
        self.inputs
            .iter()
            .zip(&self.restored_values)
            .filter(|(input, restored)| input == restored)
            .count()
    }

    /// Whether both calls came back 2xx.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.protect_response.is_success() && self.reveal_response.is_success()
    }
}
