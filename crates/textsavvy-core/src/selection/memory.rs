//! In-memory host document.
//!
//! A minimal [`HostDocument`] implementation backed by shared state. Used by
//! the test suite and by embedders that drive the pipeline without a live
//! document. Field controls and rich ranges are cheap cloneable handles; the
//! holder of a clone can inspect mutation results or detach the handle to
//! simulate a document that changed underneath an in-flight operation.

use std::sync::{Arc, Mutex};

use textsavvy_types::error::SelectionError;

use super::{FieldControl, HostDocument, RichRange};

/// A node in a cloned rich-content fragment: either a text segment or an
/// element wrapping child nodes. Elements contribute no text of their own.
#[derive(Debug, Clone)]
pub enum Node {
    Text(String),
    Element(Vec<Node>),
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    pub fn element(children: Vec<Node>) -> Self {
        Node::Element(children)
    }
}

/// Depth-first, document-order concatenation of every text segment.
fn walk_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(t) => out.push_str(t),
            Node::Element(children) => walk_text(children, out),
        }
    }
}

struct FieldState {
    value: String,
    selection: (usize, usize),
    change_events: u32,
    detached: bool,
}

/// Handle to an in-memory text-input control.
#[derive(Clone)]
pub struct MemoryField {
    state: Arc<Mutex<FieldState>>,
}

impl MemoryField {
    pub fn new(value: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            state: Arc::new(Mutex::new(FieldState {
                value: value.into(),
                selection: (start, end),
                change_events: 0,
                detached: false,
            })),
        }
    }

    /// Simulate the control being removed from the document.
    pub fn detach(&self) {
        self.lock().detached = true;
    }

    pub fn current_value(&self) -> String {
        self.lock().value.clone()
    }

    pub fn selection(&self) -> (usize, usize) {
        self.lock().selection
    }

    /// Number of change notifications emitted so far.
    pub fn change_events(&self) -> u32 {
        self.lock().change_events
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FieldState> {
        self.state.lock().expect("field state lock poisoned")
    }
}

impl FieldControl for MemoryField {
    fn value(&self) -> Result<String, SelectionError> {
        let state = self.lock();
        if state.detached {
            return Err(SelectionError::Stale);
        }
        Ok(state.value.clone())
    }

    fn selection_range(&self) -> Result<(usize, usize), SelectionError> {
        let state = self.lock();
        if state.detached {
            return Err(SelectionError::Stale);
        }
        Ok(state.selection)
    }

    fn splice(&mut self, start: usize, end: usize, text: &str) -> Result<(), SelectionError> {
        let mut state = self.lock();
        if state.detached {
            return Err(SelectionError::Stale);
        }
        if start > end || end > state.value.chars().count() {
            return Err(SelectionError::Stale);
        }

        let prefix: String = state.value.chars().take(start).collect();
        let suffix: String = state.value.chars().skip(end).collect();
        state.value = format!("{prefix}{text}{suffix}");

        let caret = start + text.chars().count();
        state.selection = (caret, caret);
        state.change_events += 1;
        Ok(())
    }
}

struct RangeState {
    nodes: Vec<Node>,
    collapsed: bool,
    detached: bool,
}

/// Handle to an in-memory rich-content selection range.
#[derive(Clone)]
pub struct MemoryRange {
    state: Arc<Mutex<RangeState>>,
}

impl MemoryRange {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self {
            state: Arc::new(Mutex::new(RangeState {
                nodes,
                collapsed: false,
                detached: false,
            })),
        }
    }

    /// Simulate the range's content being removed from the document.
    pub fn detach(&self) {
        self.lock().detached = true;
    }

    pub fn node_count(&self) -> usize {
        self.lock().nodes.len()
    }

    /// Current concatenated text of the range content.
    pub fn content_text(&self) -> String {
        let mut out = String::new();
        walk_text(&self.lock().nodes, &mut out);
        out
    }

    pub fn is_collapsed(&self) -> bool {
        self.lock().collapsed
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RangeState> {
        self.state.lock().expect("range state lock poisoned")
    }
}

impl RichRange for MemoryRange {
    fn extract_text(&self) -> Result<String, SelectionError> {
        let state = self.lock();
        if state.detached {
            return Err(SelectionError::Stale);
        }
        let mut out = String::new();
        walk_text(&state.nodes, &mut out);
        Ok(out)
    }

    fn replace_with_text(&mut self, text: &str) -> Result<(), SelectionError> {
        let mut state = self.lock();
        if state.detached {
            return Err(SelectionError::Stale);
        }
        state.nodes = vec![Node::Text(text.to_string())];
        state.collapsed = true;
        Ok(())
    }
}

/// In-memory host document holding at most one focused field and one rich
/// range.
#[derive(Default)]
pub struct MemoryDocument {
    field: Option<MemoryField>,
    range: Option<MemoryRange>,
}

impl MemoryDocument {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Document with a focused text control; returns the field handle for
    /// inspection.
    pub fn with_field(value: impl Into<String>, start: usize, end: usize) -> (Self, MemoryField) {
        let field = MemoryField::new(value, start, end);
        (
            Self {
                field: Some(field.clone()),
                range: None,
            },
            field,
        )
    }

    /// Document with a rich-content selection; returns the range handle for
    /// inspection.
    pub fn with_rich(nodes: Vec<Node>) -> (Self, MemoryRange) {
        let range = MemoryRange::new(nodes);
        (
            Self {
                field: None,
                range: Some(range.clone()),
            },
            range,
        )
    }

    pub fn set_rich(&mut self, nodes: Vec<Node>) {
        self.range = Some(MemoryRange::new(nodes));
    }
}

impl HostDocument for MemoryDocument {
    type Field = MemoryField;
    type Range = MemoryRange;

    fn focused_field(&self) -> Option<MemoryField> {
        self.field.clone()
    }

    fn selection_range(&self) -> Option<MemoryRange> {
        self.range.clone()
    }
}
