// View plugin keeping the indentation marker decorations in sync with the editor

use super::MarkerConfig;
use super::render::{LineDecoration, render};
use super::theme::MarkerTheme;
use crate::document::Line;
use crate::indentation::{IndentOptions, IndentationMap};
use crate::state::{EditorState, EditorView, ViewUpdate};
use std::collections::BTreeMap;

/// Lines touched by the view's visible ranges, each once, in document order
pub fn visible_lines(view: &EditorView) -> Vec<Line<'_>> {
    let doc = &view.state.doc;
    let mut lines = BTreeMap::new();

    for range in &view.visible_ranges {
        let to = range.end.min(doc.len());
        let mut pos = range.start;

        while pos <= to {
            let line = doc.line_at(pos);
            lines.entry(line.number).or_insert(line);
            pos = line.to + 1;
        }
    }

    lines.into_values().collect()
}

/// The line holding the primary cursor
pub fn current_line(state: &EditorState) -> Line<'_> {
    state.current_line()
}

/// Columns per indentation level; a zero width counts as one
fn effective_unit_width(state: &EditorState) -> usize {
    state.indent_unit.max(1)
}

pub struct IndentMarkers {
    config: MarkerConfig,
    theme: MarkerTheme,
    unit_width: usize,
    current_line: usize,
    map: IndentationMap,
    decorations: Vec<LineDecoration>,
}

impl IndentMarkers {
    pub fn new(view: &EditorView, config: MarkerConfig, theme: MarkerTheme) -> Self {
        let unit_width = effective_unit_width(&view.state);
        let (map, decorations) = generate(view, &config, &theme, unit_width);
        IndentMarkers {
            config,
            theme,
            unit_width,
            current_line: current_line(&view.state).number,
            map,
            decorations,
        }
    }

    pub fn decorations(&self) -> &[LineDecoration] {
        &self.decorations
    }

    /// Indentation resolved by the last pass
    pub fn map(&self) -> &IndentationMap {
        &self.map
    }

    /// Bring the decorations up to date with `view`
    ///
    /// Returns true if they were regenerated. A new pass runs when the text
    /// or the viewport changed, when the indent unit changed, or when the
    /// cursor moved to another line while active blocks are highlighted.
    pub fn update(&mut self, view: &EditorView, update: ViewUpdate) -> bool {
        let unit_width = effective_unit_width(&view.state);
        let unit_width_changed = unit_width != self.unit_width;
        self.unit_width = unit_width;

        let line_number = current_line(&view.state).number;
        let line_changed = line_number != self.current_line;
        self.current_line = line_number;

        let active_block_changed = self.config.highlight_active_block && line_changed;

        if !(update.doc_changed
            || update.viewport_changed
            || unit_width_changed
            || active_block_changed)
        {
            return false;
        }

        tracing::debug!(
            doc_changed = update.doc_changed,
            viewport_changed = update.viewport_changed,
            unit_width_changed,
            active_block_changed,
            "regenerating indentation markers"
        );
        (self.map, self.decorations) = generate(view, &self.config, &self.theme, self.unit_width);
        true
    }
}

fn generate(
    view: &EditorView,
    config: &MarkerConfig,
    theme: &MarkerTheme,
    unit_width: usize,
) -> (IndentationMap, Vec<LineDecoration>) {
    let state = &view.state;
    let lines = visible_lines(view);

    let active_line = config
        .highlight_active_block
        .then(|| current_line(state).number);
    let options = IndentOptions {
        tab_size: state.tab_size,
        unit_width,
    };
    let map = IndentationMap::build(&state.doc, lines.iter().copied(), options, active_line);

    let decorations = render(
        &lines,
        &map,
        unit_width,
        config.hide_first_indent,
        &theme.thickness,
    );

    tracing::trace!(
        lines = lines.len(),
        resolved = map.len(),
        decorated = decorations.len(),
        "indentation marker pass"
    );
    (map, decorations)
}
