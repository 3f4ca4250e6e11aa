//! Aggregates per-iteration and per-batch results into run summaries.

use std::time::Duration;

use tokenloop_common::{BulkResult, IterationResult};

/// Summary counts and timings of an iterative run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Iterations attempted (every recorded result).
    pub attempted: usize,
    /// Iterations where both calls returned 2xx.
    pub successful: usize,
    /// Iterations where the revealed value matched the input.
    pub matched: usize,
    /// Wall-clock time across the whole run.
    pub wall_time: Duration,
    /// Sum of the individual iteration durations.
    pub iteration_time: Duration,
}

impl RunSummary {
    #[must_use]
    pub fn from_results(results: &[IterationResult], wall_time: Duration) -> Self {
        Self {
            attempted: results.len(),
            successful: results.iter().filter(|r| r.success()).count(),
            matched: results.iter().filter(|r| r.matched()).count(),
            wall_time,
            iteration_time: results.iter().map(|r| r.elapsed).sum(),
        }
    }

    /// Arithmetic mean of the per-iteration durations, in seconds.
    #[must_use]
    pub fn average_iteration_time(&self) -> f64 {
        if self.attempted == 0 {
            0.0
        } else {
            self.iteration_time.as_secs_f64() / self.attempted as f64
        }
    }
}

/// Summary counts and timings of a bulk run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkSummary {
    /// Batches processed.
    pub batches: usize,
    /// Total items across all batches.
    pub items: usize,
    /// Positional input/restored matches across all batches.
    pub matched: usize,
    /// Wall-clock time across the whole bulk run, launch to finish.
    pub wall_time: Duration,
    /// Sum of the individual batch durations.
    pub batch_time: Duration,
}

impl BulkSummary {
    #[must_use]
    pub fn from_results(results: &[BulkResult], wall_time: Duration) -> Self {
        Self {
            batches: results.len(),
            items: results.iter().map(|b| b.inputs.len()).sum(),
            matched: results.iter().map(BulkResult::matches).sum(),
            wall_time,
            batch_time: results.iter().map(|b| b.elapsed).sum(),
        }
    }

    /// Mean batch duration, in seconds.
    #[must_use]
    pub fn average_batch_time(&self) -> f64 {
        if self.batches == 0 {
            0.0
        } else {
            self.batch_time.as_secs_f64() / self.batches as f64
        }
    }

    /// Mean per-item time, in seconds. Based on summed batch time rather
    /// than wall-clock, mirroring the iterative mode's arithmetic mean.
    #[must_use]
    pub fn average_item_time(&self) -> f64 {
        if self.items == 0 {
            0.0
        } else {
            self.batch_time.as_secs_f64() / self.items as f64
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::json;

    use tokenloop_common::ApiResponse;

    use super::*;

    fn iteration(status: u16, data: &str, restored: Option<&str>, millis: u64) -> IterationResult {
        IterationResult {
            data: data.to_owned(),
            protect_response: ApiResponse::new(Some(status), json!({})),
            reveal_response: ApiResponse::new(Some(status), json!({})),
            protected_token: Some("tok".to_owned()),
            restored: restored.map(str::to_owned),
            elapsed: Duration::from_millis(millis),
        }
    }

    #[test]
    fn run_summary_counts_success_and_matches() {
        let results = vec![
            iteration(200, "001", Some("001"), 100),
            iteration(200, "002", Some("xxx"), 200),
            iteration(500, "003", None, 300),
        ];
        let summary = RunSummary::from_results(&results, Duration::from_millis(700));

        assert_eq!(summary.attempted, 3);
        assert_eq!(summary.successful, 2);
        assert_eq!(summary.matched, 1);
        assert_eq!(summary.wall_time, Duration::from_millis(700));
        assert_eq!(summary.iteration_time, Duration::from_millis(600));
        assert!((summary.average_iteration_time() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn empty_run_summary_has_zero_average() {
        let summary = RunSummary::from_results(&[], Duration::ZERO);
        assert_eq!(summary.attempted, 0);
        assert!((summary.average_iteration_time() - 0.0).abs() < f64::EPSILON);
    }

    fn batch(status: u16, inputs: &[&str], restored: &[&str], millis: u64) -> BulkResult {
        BulkResult {
            inputs: inputs.iter().map(|s| (*s).to_owned()).collect(),
            protect_response: ApiResponse::new(Some(status), json!({})),
            reveal_response: ApiResponse::new(Some(status), json!({})),
            protected_tokens: Vec::new(),
            restored_values: restored.iter().map(|s| (*s).to_owned()).collect(),
            elapsed: Duration::from_millis(millis),
        }
    }

    #[test]
    fn bulk_summary_sums_items_matches_and_batch_time() {
        let results = vec![
            batch(200, &["001", "002"], &["001", "002"], 400),
            batch(500, &["003", "004"], &[], 100),
        ];
        let summary = BulkSummary::from_results(&results, Duration::from_millis(600));

        assert_eq!(summary.batches, 2);
        assert_eq!(summary.items, 4);
        assert_eq!(summary.matched, 2);
        assert_eq!(summary.wall_time, Duration::from_millis(600));
        assert_eq!(summary.batch_time, Duration::from_millis(500));
        assert!((summary.average_batch_time() - 0.25).abs() < 1e-9);
        // per-item average uses summed batch time, not wall-clock
        assert!((summary.average_item_time() - 0.125).abs() < 1e-9);
    }

    #[test]
    fn empty_bulk_summary_has_zero_averages() {
        let summary = BulkSummary::from_results(&[], Duration::ZERO);
        assert!((summary.average_batch_time() - 0.0).abs() < f64::EPSILON);
        assert!((summary.average_item_time() - 0.0).abs() < f64::EPSILON);
    }
}
