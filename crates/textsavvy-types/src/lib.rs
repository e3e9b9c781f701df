//! Shared domain types for textsavvy.
//!
//! This crate contains the data shapes used across the text-enhancement
//! pipeline: provider identifiers, requests, fallback outcomes, settings,
//! notifications, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod command;
pub mod config;
pub mod enhance;
pub mod error;
pub mod notify;
