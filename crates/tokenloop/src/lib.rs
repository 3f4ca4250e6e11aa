//! # tokenloop
//!
//! Core orchestration for the protect/reveal benchmarking harness: the
//! single-item and bulk round-trip runners, and aggregation of their
//! results into run summaries.
//!
//! Everything runs sequentially: one request at a time through a
//! [`ProtectApi`] client, failures folded into the per-round-trip records
//! rather than aborting the run.
//!
//! ## Example
//!
//! ```no_run
//! use tokenloop::{run_iteration, HttpProtectClient, RunConfig};
//!
//! # async fn example() -> Result<(), tokenloop::ClientError> {
//! let config = RunConfig::default();
//! let client = HttpProtectClient::new(&config)?;
//! let result = run_iteration(&client, "0123456789123").await;
//! println!("match={} in {:.4}s", result.matched(), result.elapsed.as_secs_f64());
//! # Ok(())
//! # }
//! ```

pub mod report;
pub mod runner;

pub use tokenloop_client::*;
pub use tokenloop_common::*;

pub use report::{BulkSummary, RunSummary};
pub use runner::{run_bulk, run_iteration};
