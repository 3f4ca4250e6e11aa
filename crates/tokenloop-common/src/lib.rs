//! # tokenloop-common
//!
//! Shared types for the tokenloop protect/reveal benchmarking harness:
//! - [`ApiResponse`], the uniform outcome of one HTTP call
//! - [`IterationResult`] and [`BulkResult`], per-round-trip records
//! - [`RunConfig`], the immutable configuration of one run
//! - the zero-padded numeric sequence generator feeding successive inputs
//!
//! ## Example
//!
//! ```
//! use tokenloop_common::{increment_numeric_string, ApiResponse};
//!
//! let next = increment_numeric_string("0099")?;
//! assert_eq!(next, "0100");
//!
//! let response = ApiResponse::new(Some(200), serde_json::json!({"token": "x"}));
//! assert!(response.is_success());
//! # Ok::<(), tokenloop_common::SequenceError>(())
//! ```

pub mod config;
pub mod response;
pub mod result;
pub mod sequence;

pub use config::RunConfig;
pub use response::ApiResponse;
pub use result::{BulkResult, IterationResult};
pub use sequence::{SequenceError, increment_numeric_string};
