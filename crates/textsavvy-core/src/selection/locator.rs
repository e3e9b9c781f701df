//! Finds and extracts the user's current text selection.
//!
//! Form-field selections take precedence over rich-content selections: when a
//! text control is focused, only its own range is considered -- there is no
//! fall-through to the document selection. Read-only: locating never mutates
//! the host document.

use textsavvy_types::error::SelectionError;

use super::{FieldControl, HostDocument, RichRange, SelectionContext};

/// Locate the current selection in `doc`.
///
/// Returns [`SelectionError::NoSelection`] when nothing usable is selected:
/// no focused control and no document range, an empty (collapsed) field
/// range, or a selection whose text is blank. Callers treat that error as a
/// silent no-op, not a user-visible failure.
pub fn locate<D: HostDocument>(doc: &D) -> Result<SelectionContext<D>, SelectionError> {
    if let Some(control) = doc.focused_field() {
        let (start, end) = control.selection_range()?;
        if start == end {
            return Err(SelectionError::NoSelection);
        }

        let value = control.value()?;
        let len = value.chars().count();
        if start > end || end > len {
            // Host reported offsets that no longer fit the value.
            return Err(SelectionError::Stale);
        }

        let selected: String = value.chars().skip(start).take(end - start).collect();
        if selected.trim().is_empty() {
            return Err(SelectionError::NoSelection);
        }

        return Ok(SelectionContext::Field {
            control,
            start,
            end,
        });
    }

    let Some(range) = doc.selection_range() else {
        return Err(SelectionError::NoSelection);
    };

    let text = range.extract_text()?;
    if text.trim().is_empty() {
        return Err(SelectionError::NoSelection);
    }

    Ok(SelectionContext::Rich { range })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::memory::{MemoryDocument, Node};

    #[test]
    fn test_field_selection_produces_field_context() {
        let (doc, _field) = MemoryDocument::with_field("hello world", 6, 11);
        let ctx = locate(&doc).unwrap();
        assert!(matches!(ctx, SelectionContext::Field { start: 6, end: 11, .. }));
        assert_eq!(ctx.text().unwrap(), "world");
    }

    #[test]
    fn test_collapsed_field_selection_is_no_selection() {
        let (doc, _field) = MemoryDocument::with_field("hello", 3, 3);
        assert_eq!(locate(&doc).unwrap_err(), SelectionError::NoSelection);
    }

    #[test]
    fn test_blank_field_selection_is_no_selection() {
        let (doc, _field) = MemoryDocument::with_field("a   b", 1, 4);
        assert_eq!(locate(&doc).unwrap_err(), SelectionError::NoSelection);
    }

    #[test]
    fn test_out_of_bounds_field_offsets_are_stale() {
        let (doc, _field) = MemoryDocument::with_field("ab", 1, 9);
        assert_eq!(locate(&doc).unwrap_err(), SelectionError::Stale);
    }

    #[test]
    fn test_focused_field_takes_precedence_over_rich_range() {
        let (mut doc, _field) = MemoryDocument::with_field("field text", 0, 5);
        doc.set_rich(vec![Node::text("rich text")]);
        let ctx = locate(&doc).unwrap();
        assert_eq!(ctx.text().unwrap(), "field");
    }

    #[test]
    fn test_rich_extraction_is_document_order_and_whitespace_preserving() {
        let (doc, _range) = MemoryDocument::with_rich(vec![
            Node::text("The quick "),
            Node::element(vec![
                Node::text("brown "),
                Node::element(vec![Node::text("fox\n")]),
            ]),
            Node::text("jumps"),
        ]);

        let ctx = locate(&doc).unwrap();
        assert_eq!(ctx.text().unwrap(), "The quick brown fox\njumps");
    }

    #[test]
    fn test_blank_rich_selection_is_no_selection() {
        let (doc, _range) =
            MemoryDocument::with_rich(vec![Node::text("  "), Node::element(vec![Node::text("\n")])]);
        assert_eq!(locate(&doc).unwrap_err(), SelectionError::NoSelection);
    }

    #[test]
    fn test_empty_document_is_no_selection() {
        let doc = MemoryDocument::empty();
        assert_eq!(locate(&doc).unwrap_err(), SelectionError::NoSelection);
    }

    #[test]
    fn test_locate_does_not_mutate_the_document() {
        let (doc, field) = MemoryDocument::with_field("hello world", 0, 5);
        let _ = locate(&doc).unwrap();
        assert_eq!(field.current_value(), "hello world");
        assert_eq!(field.change_events(), 0);
    }
}
