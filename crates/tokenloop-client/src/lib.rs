//! # tokenloop-client
//!
//! Transport client and response normalization for protect/reveal
//! tokenization APIs.
//!
//! The [`ProtectApi`] trait is the seam between the runners and the wire:
//! the real [`HttpProtectClient`] implements it over reqwest, and tests
//! drive the runners through mock implementations. Request execution never
//! surfaces errors: every outcome, HTTP error statuses and transport
//! failures included, is folded into an
//! [`ApiResponse`](tokenloop_common::ApiResponse) so callers can treat
//! failures as data.
//!
//! ## Example
//!
//! ```no_run
//! use tokenloop_client::{HttpProtectClient, ProtectApi};
//! use tokenloop_common::RunConfig;
//!
//! # async fn example() -> Result<(), tokenloop_client::ClientError> {
//! let client = HttpProtectClient::new(&RunConfig::default())?;
//! let response = client.protect("0123456789123").await;
//! println!("protect status: {:?}", response.status);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use tokenloop_common::ApiResponse;

pub mod client;
pub mod error;
pub mod extract;
pub mod wire;

pub use client::HttpProtectClient;
pub use error::ClientError;

/// Operations of a protect/reveal tokenization service.
///
/// Implementations must be thread-safe (`Send + Sync`). Every operation
/// returns an [`ApiResponse`], never an error; failures are data.
#[async_trait]
pub trait ProtectApi: Send + Sync {
    /// Tokenize a single value.
    async fn protect(&self, data: &str) -> ApiResponse;

    /// Detokenize a single token.
    async fn reveal(&self, protected: &str) -> ApiResponse;

    /// Tokenize a batch of values in one call.
    async fn protect_bulk(&self, items: &[String]) -> ApiResponse;

    /// Detokenize a batch of tokens in one call.
    async fn reveal_bulk(&self, protected: &[String]) -> ApiResponse;
}
