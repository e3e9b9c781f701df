//! Infrastructure implementations for textsavvy.
//!
//! Concrete providers behind the `TextProvider` port (Gemini, Pollinations),
//! the file-backed settings store, and the chain factory that wires them
//! together from the current user settings.

pub mod chain;
pub mod gemini;
pub mod pollinations;
pub mod settings;

pub use chain::HttpProviderFactory;
pub use gemini::GeminiProvider;
pub use pollinations::PollinationsProvider;
pub use settings::FileSettingsStore;
