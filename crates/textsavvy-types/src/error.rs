use thiserror::Error;

use crate::enhance::{AttemptFailure, ProviderId};

/// Errors from a single provider call.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("empty response")]
    EmptyResponse,

    #[error("missing credential")]
    MissingCredential,
}

/// Errors from selection location and mutation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// Nothing is selected, or the selection is blank. Benign: callers treat
    /// this as a silent no-op, never as a user-visible failure.
    #[error("no selection")]
    NoSelection,

    /// The selection handle no longer points at live document content.
    /// Recoverable: log and discard, do not retry.
    #[error("stale selection")]
    Stale,
}

/// Terminal errors for one enhancement operation.
#[derive(Debug, Error)]
pub enum EnhanceError {
    /// Every provider in the order failed. Carries one diagnostic per
    /// provider, in attempt order. Logged, never retried automatically.
    #[error("all providers failed ({} attempted)", diagnostics.len())]
    AllProvidersFailed { diagnostics: Vec<AttemptFailure> },

    /// The sole configured provider requires a credential and none is set.
    /// Statically knowable, so surfaced before any network attempt.
    #[error("provider '{0}' requires a credential and none is configured")]
    MissingCredential(ProviderId),

    /// The selection went stale between extraction and write-back.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// The settings store could not be read.
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Errors from the settings store.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("malformed settings value for key '{key}': {reason}")]
    Malformed { key: String, reason: String },
}
