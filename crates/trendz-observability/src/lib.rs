//! Observability for the Nxt Trendz workloads.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging with request context
//! - `LogSink` - Where entries go: stderr, memory, or `tracing`

mod logging;
mod sink;

pub use logging::*;
pub use sink::*;

// Re-export RequestId from trendz-core for convenience
pub use trendz_core::RequestId;
