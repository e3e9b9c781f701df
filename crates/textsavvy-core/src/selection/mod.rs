//! Selection ports: how the pipeline sees the host document.
//!
//! The host environment (a browser page in the original deployment) is
//! abstracted behind the [`HostDocument`] trait pair so the pipeline is
//! testable without a live document. A selection is either a range inside a
//! focused text-input control or an arbitrary rich-content range; exactly one
//! variant is populated per extraction and the context is discarded once the
//! mutation completes or the action aborts.
//!
//! All offsets are character offsets into the control value.

use textsavvy_types::error::SelectionError;

pub mod locator;
pub mod memory;
pub mod mutator;

pub use locator::locate;
pub use mutator::apply;

/// A focused single-line or multi-line text-input control.
pub trait FieldControl: Send {
    /// Current full value of the control.
    fn value(&self) -> Result<String, SelectionError>;

    /// Current selection offsets `(start, end)` with `start <= end`.
    fn selection_range(&self) -> Result<(usize, usize), SelectionError>;

    /// Replace the `[start, end)` slice of the value with `text`, collapse
    /// the cursor to just after the inserted text, and emit a change
    /// notification so surrounding reactive UI observes the new value.
    fn splice(&mut self, start: usize, end: usize, text: &str) -> Result<(), SelectionError>;
}

/// A document-level selection range over arbitrary rich content.
pub trait RichRange: Send {
    /// Concatenated text of every text-bearing descendant of the range, in
    /// document order. Whitespace and existing newlines are preserved;
    /// element boundaries contribute nothing.
    fn extract_text(&self) -> Result<String, SelectionError>;

    /// Delete the range's current content, insert a single text node holding
    /// `text` verbatim, and collapse the selection so no stale range
    /// persists. Rendering of control characters in `text` is the host
    /// document's concern.
    fn replace_with_text(&mut self, text: &str) -> Result<(), SelectionError>;
}

/// The host document: supplies selection handles on demand.
///
/// `focused_field` must return `Some` only when the focused element is a
/// text-input control that supports a selection range; anything else routes
/// through `selection_range`.
pub trait HostDocument: Send + Sync {
    type Field: FieldControl;
    type Range: RichRange;

    fn focused_field(&self) -> Option<Self::Field>;

    fn selection_range(&self) -> Option<Self::Range>;
}

/// An extracted selection, ready for mutation.
///
/// Invariant: the `Field` offsets satisfy `start < end <= value length` at
/// extraction time (an empty selection never produces a context).
pub enum SelectionContext<D: HostDocument> {
    Field {
        control: D::Field,
        start: usize,
        end: usize,
    },
    Rich {
        range: D::Range,
    },
}

impl<D: HostDocument> std::fmt::Debug for SelectionContext<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionContext::Field { start, end, .. } => f
                .debug_struct("Field")
                .field("start", start)
                .field("end", end)
                .finish_non_exhaustive(),
            SelectionContext::Rich { .. } => f.debug_struct("Rich").finish_non_exhaustive(),
        }
    }
}

impl<D: HostDocument> SelectionContext<D> {
    /// The selected text this context was extracted from.
    pub fn text(&self) -> Result<String, SelectionError> {
        match self {
            SelectionContext::Field {
                control,
                start,
                end,
            } => {
                let value = control.value()?;
                Ok(value.chars().skip(*start).take(end - start).collect())
            }
            SelectionContext::Rich { range } => range.extract_text(),
        }
    }
}
