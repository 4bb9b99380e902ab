//! # recall-observability
//!
//! Tracing subscriber setup and span macros shared by the workspace.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_with_filter};
