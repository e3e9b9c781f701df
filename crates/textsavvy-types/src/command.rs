//! Declarative command descriptors.
//!
//! A menu item or keyboard shortcut in the host maps 1:1 onto a
//! [`CommandSpec`]. Registration against the host menu system is a one-time
//! external call; the core only dispatches on the identifier.

use serde::{Deserialize, Serialize};

/// A static case transform applied to selected text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseKind {
    Sentence,
    Lower,
    Upper,
    Capitalized,
    Alternating,
    Inverse,
    Title,
    Slugify,
}

/// What a command does when triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    /// Run the AI enhancement pipeline with this prompt template. The
    /// selected text is appended to the template.
    Enhance { prompt_template: &'static str },
    /// Apply a pure case transform to the selected text.
    Transform(CaseKind),
}

/// One entry in the declarative command table.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    /// Stable identifier used by the host trigger surface.
    pub id: &'static str,
    /// Human-readable menu label.
    pub label: &'static str,
    pub action: CommandAction,
}
