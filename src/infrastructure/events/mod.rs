//! Event Sink Implementations
//!
//! Provides concrete implementations of InventoryEventSink:
//! - TracingEventSink: structured log records
//! - JsonEventSink: NDJSON output for CI/automation

mod json;
mod tracing_sink;

pub use json::JsonEventSink;
pub use tracing_sink::TracingEventSink;
