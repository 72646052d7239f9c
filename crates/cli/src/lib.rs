#![deny(missing_docs)]
//! Shared batch machinery for the docport rewrite binaries.

/// Batch runner: collect, transform, conditionally write back, summarize.
pub mod runner;

pub use runner::{MARKDOWN_EXTENSIONS, RunSummary, run};
