//! Oracle clients.
//!
//! An [`Oracle`] is the external black-box service asked to produce corpus
//! phrases and to invert encoded text. Both capabilities return `None` on
//! any non-success status or transport failure: those are recoverable by
//! contract (logged, scored as contributing nothing) and must never abort
//! sibling requests in a batch.

pub mod anthropic;
pub mod fake;
pub mod parse;

use async_trait::async_trait;

#[async_trait]
pub trait Oracle: Send + Sync {
    /// Ask for a natural English phrase of approximately `target_len`
    /// characters. `None` is a recoverable failure, not retried here.
    async fn generate_phrase(&self, target_len: usize) -> Option<String>;

    /// Ask the oracle to invert the cipher on `encoded` and return its
    /// best-effort plaintext answer. `None` means the call itself failed;
    /// a present-but-wrong answer is still `Some`.
    async fn decode(&self, encoded: &str) -> Option<String>;

    fn provider_name(&self) -> &'static str;
}
