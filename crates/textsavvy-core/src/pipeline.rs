//! The end-to-end enhancement pipeline.
//!
//! One user trigger drives one operation: locate the selection, build the
//! prompt, run the fallback chain, write the sanitized winner back, and emit
//! a best-effort notification when a fallback provider handled the request.
//!
//! Concurrency model: one logical operation per trigger. A new trigger
//! replaces rather than queues the prior one -- the [`TriggerGate`] cancels
//! the previous trigger's token, and an in-flight older operation that
//! resolves after being superseded discards its own write-back instead of
//! landing a stale mutation.

use std::sync::{Arc, Mutex};

use tokio_util::sync::CancellationToken;

use textsavvy_types::enhance::{EnhancementRequest, FallbackOutcome};
use textsavvy_types::error::{EnhanceError, SelectionError};
use textsavvy_types::notify::Notification;

use crate::command::build_prompt;
use crate::notify::Notifier;
use crate::provider::ProviderFactory;
use crate::selection::{self, HostDocument};
use crate::settings::{SettingsStore, load_settings};

/// Latest-trigger-wins token dispenser.
///
/// Each call to [`TriggerGate::arm`] cancels the token handed out for the
/// previous trigger and returns a fresh one. An operation checks its token
/// before writing back; a cancelled token means a newer trigger superseded
/// it.
#[derive(Default)]
pub struct TriggerGate {
    current: Mutex<CancellationToken>,
}

impl TriggerGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the previous trigger's token and arm a new one.
    pub fn arm(&self) -> CancellationToken {
        let mut current = self.current.lock().expect("trigger gate lock poisoned");
        current.cancel();
        let token = CancellationToken::new();
        *current = token.clone();
        token
    }
}

/// Drives enhancement operations against a host document.
pub struct Enhancer<F, S, N> {
    factory: F,
    store: S,
    notifier: N,
    gate: Arc<TriggerGate>,
}

impl<F, S, N> Enhancer<F, S, N>
where
    F: ProviderFactory,
    S: SettingsStore,
    N: Notifier,
{
    pub fn new(factory: F, store: S, notifier: N) -> Self {
        Self {
            factory,
            store,
            notifier,
            gate: Arc::new(TriggerGate::new()),
        }
    }

    /// The trigger gate, shared so hosts can wire other cancellation sources.
    pub fn trigger_gate(&self) -> Arc<TriggerGate> {
        Arc::clone(&self.gate)
    }

    /// Run one enhancement against the current selection in `doc`.
    ///
    /// Returns `Ok(None)` for the silent no-op cases: nothing (or only
    /// whitespace) selected, or the operation was superseded by a newer
    /// trigger before its write-back landed. Returns the fallback outcome on
    /// success so callers can inspect diagnostics.
    pub async fn enhance_selection<D: HostDocument>(
        &self,
        doc: &D,
        prompt_template: &str,
    ) -> Result<Option<FallbackOutcome>, EnhanceError> {
        let token = self.gate.arm();

        let mut ctx = match selection::locate(doc) {
            Ok(ctx) => ctx,
            Err(SelectionError::NoSelection) => {
                tracing::debug!("Nothing selected, skipping");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };
        let source_text = ctx.text()?;

        // Fresh read on every trigger so preference changes apply immediately.
        let settings = load_settings(&self.store).await?;

        let prompt = build_prompt(prompt_template, &source_text);
        let Some(request) =
            EnhancementRequest::new(prompt, source_text, settings.provider_order())
        else {
            tracing::debug!("Selection is blank, skipping");
            return Ok(None);
        };

        let chain = self.factory.build(&settings);
        let outcome = chain.run(&request).await?;

        if token.is_cancelled() {
            tracing::warn!("Superseded by a newer trigger, discarding result");
            return Ok(None);
        }

        if let Err(err) = selection::apply(&mut ctx, &outcome.final_text) {
            tracing::warn!(error = %err, "Selection mutation failed, discarding result");
            return Err(err.into());
        }

        if outcome.used_fallback {
            // Best-effort: never blocks or fails the mutation that already landed.
            self.notifier
                .notify(&Notification::fallback_used(format!(
                    "Enhanced using fallback provider '{}'",
                    outcome.used_provider
                )))
                .await;
        }

        Ok(Some(outcome))
    }
}
