//! BoxTextProvider -- object-safe dynamic dispatch wrapper for TextProvider.
//!
//! 1. Define an object-safe `TextProviderDyn` trait with boxed futures
//! 2. Blanket-impl `TextProviderDyn` for all `T: TextProvider`
//! 3. `BoxTextProvider` wraps `Box<dyn TextProviderDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use textsavvy_types::enhance::{GenerationRequest, ProviderId};
use textsavvy_types::error::ProviderError;

use crate::provider::TextProvider;

/// Object-safe version of [`TextProvider`] with boxed futures.
///
/// This trait exists solely to enable dynamic dispatch (`dyn TextProviderDyn`).
/// A blanket implementation is provided for all types implementing
/// `TextProvider`.
pub trait TextProviderDyn: Send + Sync {
    fn id(&self) -> ProviderId;

    fn requires_credential(&self) -> bool;

    fn has_credential(&self) -> bool;

    fn generate_boxed<'a>(
        &'a self,
        request: &'a GenerationRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String, ProviderError>> + Send + 'a>>;
}

/// Blanket implementation: any `TextProvider` automatically implements
/// `TextProviderDyn`.
impl<T: TextProvider> TextProviderDyn for T {
    fn id(&self) -> ProviderId {
        TextProvider::id(self)
    }

    fn requires_credential(&self) -> bool {
        TextProvider::requires_credential(self)
    }

    fn has_credential(&self) -> bool {
        TextProvider::has_credential(self)
    }

    fn generate_boxed<'a>(
        &'a self,
        request: &'a GenerationRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String, ProviderError>> + Send + 'a>> {
        Box::pin(self.generate(request))
    }
}

/// Type-erased text provider for runtime chain assembly.
///
/// Since `TextProvider` uses RPITIT, it cannot be used as a trait object
/// directly. `BoxTextProvider` provides equivalent methods that delegate to
/// the inner `TextProviderDyn` trait object, so a fallback chain can hold
/// heterogeneous providers in one `Vec`.
pub struct BoxTextProvider {
    inner: Box<dyn TextProviderDyn + Send + Sync>,
}

impl BoxTextProvider {
    /// Wrap a concrete `TextProvider` in a type-erased box.
    pub fn new<T: TextProvider + 'static>(provider: T) -> Self {
        Self {
            inner: Box::new(provider),
        }
    }

    pub fn id(&self) -> ProviderId {
        self.inner.id()
    }

    pub fn requires_credential(&self) -> bool {
        self.inner.requires_credential()
    }

    pub fn has_credential(&self) -> bool {
        self.inner.has_credential()
    }

    /// Send one generation request and return the raw response text.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<String, ProviderError> {
        self.inner.generate_boxed(request).await
    }
}
