// Plain rectangle and viewport types shared by the layout code.
// All values are CSS pixels relative to the viewport unless noted.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Rect {
            left,
            top,
            width,
            height,
        }
    }

    /// A rectangle of the given size at the origin, for elements whose
    /// position is not yet known
    pub fn sized(width: f64, height: f64) -> Self {
        Rect::new(0.0, 0.0, width, height)
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub scroll_x: f64,
    #[serde(default)]
    pub scroll_y: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Viewport {
            width,
            height,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }

    pub fn with_scroll(mut self, scroll_x: f64, scroll_y: f64) -> Self {
        self.scroll_x = scroll_x;
        self.scroll_y = scroll_y;
        self
    }

    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Clearance kept from the viewport edges
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HitZone {
    pub x_margin: f64,
    pub y_margin: f64,
}

impl HitZone {
    pub fn new(x_margin: f64, y_margin: f64) -> Self {
        HitZone { x_margin, y_margin }
    }
}

/// Format a pixel length the way a browser prints numbers: `26px`, `26.5px`
pub fn px(value: f64) -> String {
    // avoid printing "-0px"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}px")
}
