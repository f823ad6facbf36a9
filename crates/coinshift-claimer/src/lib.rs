/*
[INPUT]:  Public API exports for coinshift-claimer crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod campaign;
pub mod config;
pub mod pipeline;

// Re-export main types for convenience
pub use config::{AccountConfig, ClaimConfig};
pub use pipeline::{AccountOutcome, AccountReport, ClaimPipeline, PipelineStep};
