//! Enhancement pipeline logic and host port definitions for textsavvy.
//!
//! This crate defines the "ports" (provider, settings, notifier, and host
//! document traits) that the infrastructure layer implements. It depends only
//! on `textsavvy-types` -- never on `textsavvy-providers` or any HTTP/IO
//! crate.

pub mod box_provider;
pub mod command;
pub mod fallback;
pub mod notify;
pub mod pipeline;
pub mod provider;
pub mod quote;
pub mod sanitize;
pub mod selection;
pub mod settings;
pub mod transform;
