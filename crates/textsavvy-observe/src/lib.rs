//! Observability setup for textsavvy.

pub mod tracing_setup;
