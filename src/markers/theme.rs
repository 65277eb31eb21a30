use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Custom property holding the inactive marker color
pub const MARKER_COLOR_PROPERTY: &str = "--indent-marker-bg-color";
/// Custom property holding the active marker color
pub const ACTIVE_MARKER_COLOR_PROPERTY: &str = "--indent-marker-active-bg-color";
/// Custom property each decorated line sets to its gradient stack
pub const MARKERS_PROPERTY: &str = "--indent-markers";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerColors {
    pub marker: String,
    pub active: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerTheme {
    /// Width of each guide; integer pixel values render best
    pub thickness: String,
    pub light: MarkerColors,
    pub dark: MarkerColors,
}

impl Default for MarkerTheme {
    fn default() -> Self {
        Self {
            thickness: "1px".to_string(),
            light: MarkerColors {
                marker: "#F0F1F2".to_string(), // background-higher
                active: "#E4E5E6".to_string(), // background-highest
            },
            dark: MarkerColors {
                marker: "#2B3245".to_string(),
                active: "#3C445C".to_string(),
            },
        }
    }
}

impl MarkerTheme {
    /// Base stylesheet the host installs once per editor
    ///
    /// Markers are drawn by a `::before` overlay so lines keep their own
    /// background.
    pub fn stylesheet(&self) -> String {
        let mut css = String::new();

        for (selector, colors) in [(".cm-light", &self.light), (".cm-dark", &self.dark)] {
            // writing into a String cannot fail
            let _ = write!(
                css,
                "{selector} {{\n  {MARKER_COLOR_PROPERTY}: {};\n  {ACTIVE_MARKER_COLOR_PROPERTY}: {};\n}}\n",
                colors.marker, colors.active
            );
        }

        css.push_str(".cm-line {\n  position: relative;\n}\n");
        let _ = write!(
            css,
            ".cm-indent-markers::before {{\n  content: \"\";\n  position: absolute;\n  top: 0;\n  left: 2px;\n  right: 0;\n  bottom: 0;\n  background: var({MARKERS_PROPERTY});\n  pointer-events: none;\n}}\n"
        );

        css
    }
}
