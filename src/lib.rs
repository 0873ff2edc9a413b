//! Benchplot
//!
//! Analysis and chart generation for compiler micro-benchmark results.
//!
//! The library turns headerless CSV result files into per-group summary
//! statistics and fixed-layout PNG comparison charts. The `benchplot` CLI
//! wires these pieces into two pipelines, one per benchmark family.

pub mod charts;
pub mod commands;
pub mod data;
pub mod stats;
