// Indentation guides drawn as layered background gradients on each line

pub mod plugin;
pub mod render;
pub mod theme;

use serde::{Deserialize, Serialize};

pub use plugin::{IndentMarkers, current_line, visible_lines};
pub use render::{LineDecoration, MarkerColor, MarkerLayer, marker_layers, render};
pub use theme::{MarkerColors, MarkerTheme};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// Style the guide of the block around the cursor differently
    pub highlight_active_block: bool,
    /// Omit the guides in the first column
    pub hide_first_indent: bool,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        MarkerConfig {
            highlight_active_block: true,
            hide_first_indent: false,
        }
    }
}
