//! CLI command implementations.
//!
//! Each command is implemented in its own module and orchestrates the
//! library components for one analysis pipeline.

pub mod inlining;
pub mod unrolling;

// Re-export main command functions
pub use inlining::{execute_inlining, InliningArgs};
pub use unrolling::{execute_unrolling, UnrollingArgs};
