use super::theme::{ACTIVE_MARKER_COLOR_PROPERTY, MARKER_COLOR_PROPERTY, MARKERS_PROPERTY};
use crate::document::Line;
use crate::indentation::{IndentEntry, IndentationMap};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerColor {
    Inactive,
    Active,
}

impl MarkerColor {
    pub fn property(&self) -> &'static str {
        match self {
            MarkerColor::Inactive => MARKER_COLOR_PROPERTY,
            MarkerColor::Active => ACTIVE_MARKER_COLOR_PROPERTY,
        }
    }
}

/// A run of `columns` guides starting at indent stop `start`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkerLayer {
    pub color: MarkerColor,
    pub start: usize,
    pub columns: usize,
}

impl MarkerLayer {
    /// One background layer: a repeating gradient one indent unit wide,
    /// clipped to the run of guides
    pub fn to_css(&self, unit_width: usize, thickness: &str) -> String {
        let gradient = format!(
            "repeating-linear-gradient(to right, var({}) 0 {thickness}, transparent {thickness} {unit_width}ch)",
            self.color.property()
        );
        // one pixel less than the full width hides rounding artifacts
        format!(
            "{gradient} {}.5ch/calc({}ch - 1px) no-repeat",
            self.start * unit_width,
            unit_width * self.columns
        )
    }
}

/// Guides to draw for one line
///
/// With an active block, the guide at the active depth is highlighted and the
/// guides before and after it stay inactive. `hide_first_indent` drops the
/// guide in the first column, including an active one.
pub fn marker_layers(entry: &IndentEntry, hide_first_indent: bool) -> Vec<MarkerLayer> {
    let level = entry.level;
    if level == 0 {
        return Vec::new();
    }

    let start_at = usize::from(hide_first_indent);
    let mut layers = Vec::new();

    match entry.active {
        Some(active) => {
            let before_active = active.saturating_sub(start_at + 1);
            if before_active > 0 {
                layers.push(MarkerLayer {
                    color: MarkerColor::Inactive,
                    start: start_at,
                    columns: before_active,
                });
            }
            if active > start_at {
                layers.push(MarkerLayer {
                    color: MarkerColor::Active,
                    start: active - 1,
                    columns: 1,
                });
            }
            if level > active {
                layers.push(MarkerLayer {
                    color: MarkerColor::Inactive,
                    start: active,
                    columns: level - active,
                });
            }
        }
        None => {
            if level > start_at {
                layers.push(MarkerLayer {
                    color: MarkerColor::Inactive,
                    start: start_at,
                    columns: level - start_at,
                });
            }
        }
    }

    layers
}

/// Decoration for a single line, applied by the host at `from`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineDecoration {
    pub line: usize,
    pub from: usize,
    pub layers: Vec<MarkerLayer>,
    /// CSS background composite of all layers
    pub background: String,
}

impl LineDecoration {
    pub const CLASS_NAME: &'static str = "cm-indent-markers";

    /// Inline style attribute payload
    pub fn style(&self) -> String {
        format!("{MARKERS_PROPERTY}: {}", self.background)
    }
}

/// Build decorations for the given lines
///
/// Lines at the top level (and lines left without guides) get nothing.
pub fn render(
    lines: &[Line<'_>],
    map: &IndentationMap,
    unit_width: usize,
    hide_first_indent: bool,
    thickness: &str,
) -> Vec<LineDecoration> {
    let mut decorations = Vec::new();

    for line in lines {
        let entry = &map[line.number];
        let layers = marker_layers(entry, hide_first_indent);
        if layers.is_empty() {
            continue;
        }

        let background = layers
            .iter()
            .map(|layer| layer.to_css(unit_width, thickness))
            .collect::<Vec<_>>()
            .join(",");

        decorations.push(LineDecoration {
            line: line.number,
            from: line.from,
            layers,
            background,
        });
    }

    decorations
}
