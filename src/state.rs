// Host-side editor snapshots the marker plugin reads from.
// The editor host owns these and hands them over on every view update.

use crate::document::{Document, Line};
use std::ops::Range;

#[derive(Clone, Debug)]
pub struct EditorState {
    pub doc: Document,
    pub tab_size: usize,
    /// Width of one indentation step in columns
    pub indent_unit: usize,
    /// Character offset of the primary cursor
    pub cursor: usize,
}

impl EditorState {
    pub fn new(doc: Document) -> Self {
        EditorState {
            doc,
            tab_size: 4,
            indent_unit: 2,
            cursor: 0,
        }
    }

    pub fn with_tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = tab_size;
        self
    }

    pub fn with_indent_unit(mut self, indent_unit: usize) -> Self {
        self.indent_unit = indent_unit;
        self
    }

    /// Place the cursor at the start of a 1-based line
    pub fn with_cursor_on_line(mut self, number: usize) -> Self {
        if let Some(line) = self.doc.line(number) {
            self.cursor = line.from;
        }
        self
    }

    /// The line holding the primary cursor
    pub fn current_line(&self) -> Line<'_> {
        self.doc.line_at(self.cursor)
    }
}

/// What the editor currently shows: a state plus the character ranges on screen
#[derive(Clone, Debug)]
pub struct EditorView {
    pub state: EditorState,
    pub visible_ranges: Vec<Range<usize>>,
}

impl EditorView {
    pub fn new(state: EditorState, visible_ranges: Vec<Range<usize>>) -> Self {
        EditorView {
            state,
            visible_ranges,
        }
    }

    /// A view showing the whole document
    pub fn full(state: EditorState) -> Self {
        let end = state.doc.len();
        EditorView::new(state, vec![0..end])
    }
}

/// Change notification delivered by the host after each transaction or scroll
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewUpdate {
    pub doc_changed: bool,
    pub viewport_changed: bool,
}
