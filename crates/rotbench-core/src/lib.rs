//! rotbench core: evaluates whether an LLM oracle can invert a Caesar
//! cipher, scoring case-insensitive exact matches across a range of shift
//! strengths.
//!
//! The pipeline: [`corpus::Corpus::ensure`] loads (and if needed grows) the
//! phrase corpus, [`engine::runner::Runner`] encodes sampled phrases with
//! [`cipher::shift`] and fans decode calls out to an [`providers::Oracle`],
//! and [`report::RunReport::summarize`] rolls the per-strength tallies into
//! the final accuracy report.

pub mod cipher;
pub mod config;
pub mod corpus;
pub mod engine;
pub mod errors;
pub mod providers;
pub mod report;

pub use config::EvalConfig;
pub use errors::RotbenchError;
