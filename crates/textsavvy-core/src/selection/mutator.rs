//! Writes transformed text back into the original selection location.
//!
//! Field contexts splice the control value; rich contexts replace the range
//! content with a single text node. Stale handles (the document changed under
//! us between extraction and write-back) surface as
//! [`SelectionError::Stale`](textsavvy_types::error::SelectionError::Stale),
//! which callers log and discard without retrying.

use textsavvy_types::error::SelectionError;

use super::{FieldControl, HostDocument, RichRange, SelectionContext};

/// Apply `text` to the location `ctx` was extracted from.
pub fn apply<D: HostDocument>(
    ctx: &mut SelectionContext<D>,
    text: &str,
) -> Result<(), SelectionError> {
    match ctx {
        SelectionContext::Field {
            control,
            start,
            end,
        } => control.splice(*start, *end, text),
        SelectionContext::Rich { range } => range.replace_with_text(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::locate;
    use crate::selection::memory::{MemoryDocument, Node};

    #[test]
    fn test_field_splice_is_prefix_text_suffix() {
        // For all non-blank field selections [s, e): the new value equals
        // value[0:s] + text + value[e:].
        let (doc, field) = MemoryDocument::with_field("one two three", 4, 7);
        let mut ctx = locate(&doc).unwrap();

        apply(&mut ctx, "TWO").unwrap();

        assert_eq!(field.current_value(), "one TWO three");
    }

    #[test]
    fn test_field_splice_collapses_cursor_after_inserted_text() {
        let (doc, field) = MemoryDocument::with_field("one two three", 4, 7);
        let mut ctx = locate(&doc).unwrap();

        apply(&mut ctx, "longer replacement").unwrap();

        let caret = 4 + "longer replacement".chars().count();
        assert_eq!(field.selection(), (caret, caret));
    }

    #[test]
    fn test_field_splice_emits_change_event() {
        let (doc, field) = MemoryDocument::with_field("abc", 0, 3);
        let mut ctx = locate(&doc).unwrap();

        apply(&mut ctx, "xyz").unwrap();

        assert_eq!(field.change_events(), 1);
    }

    #[test]
    fn test_field_splice_with_multibyte_offsets() {
        let (doc, field) = MemoryDocument::with_field("héllo wörld", 6, 11);
        let mut ctx = locate(&doc).unwrap();

        apply(&mut ctx, "mönde").unwrap();

        assert_eq!(field.current_value(), "héllo mönde");
    }

    #[test]
    fn test_rich_replacement_is_single_verbatim_text_node() {
        let (doc, range) = MemoryDocument::with_rich(vec![
            Node::text("old "),
            Node::element(vec![Node::text("content")]),
        ]);
        let mut ctx = locate(&doc).unwrap();

        apply(&mut ctx, "new\ncontent\twith controls").unwrap();

        assert_eq!(range.node_count(), 1);
        assert_eq!(range.content_text(), "new\ncontent\twith controls");
        assert!(range.is_collapsed());
    }

    #[test]
    fn test_stale_field_is_reported_not_panicked() {
        let (doc, field) = MemoryDocument::with_field("hello", 0, 5);
        let mut ctx = locate(&doc).unwrap();

        field.detach();

        assert_eq!(
            apply(&mut ctx, "replacement").unwrap_err(),
            SelectionError::Stale
        );
        assert_eq!(field.change_events(), 0);
    }

    #[test]
    fn test_stale_rich_range_is_reported_not_panicked() {
        let (doc, range) = MemoryDocument::with_rich(vec![Node::text("hello")]);
        let mut ctx = locate(&doc).unwrap();

        range.detach();

        assert_eq!(
            apply(&mut ctx, "replacement").unwrap_err(),
            SelectionError::Stale
        );
    }
}
