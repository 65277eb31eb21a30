// Placement of a floating element (tooltip, popover) next to an anchor.
//
// Everything here is a pure function of the rectangles and the viewport; the
// host calls `compute_position` again whenever the anchor moves, the page
// scrolls or the window is resized, and applies the result as inline styles.

use super::placement::{Alignment, Axis, Placement};
use crate::geometry::{HitZone, Rect, Viewport, px};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionOptions {
    /// Preferred side of the anchor
    pub placement: Placement,
    /// Preferred alignment along the cross axis
    pub alignment: Alignment,
    /// Horizontal clearance before hitting the edge of the screen
    pub hit_zone_x_margin: f64,
    /// Vertical clearance before hitting the edge of the screen
    pub hit_zone_y_margin: f64,
    /// Shift the floating element so the arrow points at the anchor's middle
    pub shift: bool,
    pub arrow_padding: f64,
    pub arrow_size: f64,
    /// Distance from the viewport edge in `screen` alignment
    pub min_margin: f64,
}

impl Default for PositionOptions {
    fn default() -> Self {
        PositionOptions {
            placement: Placement::PreferTop,
            alignment: Alignment::PreferCenter,
            hit_zone_x_margin: 20.0,
            hit_zone_y_margin: 20.0,
            shift: true,
            arrow_padding: 10.0,
            arrow_size: 8.0,
            min_margin: 10.0,
        }
    }
}

impl PositionOptions {
    pub fn hit_zone(&self) -> HitZone {
        HitZone::new(self.hit_zone_x_margin, self.hit_zone_y_margin)
    }
}

/// CSS offsets for an absolutely positioned element
///
/// An empty string leaves that side unconstrained.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsolutePosition {
    pub left: String,
    pub top: String,
    pub right: String,
    pub bottom: String,
}

impl AbsolutePosition {
    /// The non-empty sides as `(property, value)` pairs, in CSS order
    pub fn declarations(&self) -> Vec<(&'static str, &str)> {
        [
            ("top", self.top.as_str()),
            ("right", self.right.as_str()),
            ("bottom", self.bottom.as_str()),
            ("left", self.left.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatingPosition {
    pub float: AbsolutePosition,
    pub arrow: AbsolutePosition,
}

/// Pick the side of the anchor the floating element goes to
///
/// `auto` uses a midpoint test on the anchor's top edge rather than measuring
/// the free space. A float too wide for the viewport is always placed
/// vertically. Without a usable viewport the preference is returned as its
/// plain side.
pub fn compute_placement(
    anchor: &Rect,
    float: &Rect,
    preferred: Placement,
    viewport: &Viewport,
    hit_zone: HitZone,
) -> Placement {
    if !viewport.has_area() {
        return preferred.side();
    }

    let (page_width, page_height) = (viewport.width, viewport.height);

    match preferred {
        Placement::Auto => {
            if anchor.top > page_height / 2.0 {
                Placement::Top
            } else {
                Placement::Bottom
            }
        }
        _ if preferred == Placement::PreferTop
            || float.width + hit_zone.x_margin >= page_width =>
        {
            if anchor.top > float.height + hit_zone.y_margin {
                Placement::Top
            } else {
                Placement::Bottom
            }
        }
        Placement::PreferBottom => {
            if anchor.bottom() + float.height + hit_zone.y_margin > page_height {
                Placement::Top
            } else {
                Placement::Bottom
            }
        }
        Placement::PreferLeft => {
            if anchor.left > float.width + hit_zone.x_margin {
                Placement::Left
            } else {
                Placement::Right
            }
        }
        Placement::PreferRight => {
            if anchor.right() + float.width + hit_zone.x_margin > page_width {
                Placement::Left
            } else {
                Placement::Right
            }
        }
        side => side,
    }
}

/// Pick the cross-axis alignment of the floating element
///
/// A float that does not fit the viewport width with both margins switches
/// to `screen`. Explicit alignments are kept otherwise; `auto` and
/// `prefer-center` react to the nearby edges. On the x axis only the bottom
/// edge is checked.
pub fn compute_alignment(
    anchor: &Rect,
    float: &Rect,
    preferred: Alignment,
    axis: Axis,
    viewport: &Viewport,
    hit_zone: HitZone,
) -> Alignment {
    let fallback = match (preferred, axis) {
        (Alignment::Auto, Axis::Y) | (Alignment::PreferCenter, _) => Alignment::Center,
        (Alignment::Auto, Axis::X) => Alignment::Start,
        (concrete, _) => concrete,
    };

    let (page_width, page_height) = (viewport.width, viewport.height);
    if page_width <= 0.0 {
        return fallback;
    }

    if float.width + hit_zone.x_margin * 2.0 >= page_width {
        return Alignment::Screen;
    }

    if preferred.is_concrete() {
        return preferred;
    }

    let overflows_right = anchor.left + float.width > page_width - hit_zone.x_margin;
    let overflows_left = anchor.left - float.width - hit_zone.x_margin < 0.0;

    match axis {
        Axis::Y if overflows_right && overflows_left => Alignment::Center,
        Axis::Y if overflows_right => Alignment::End,
        Axis::Y if overflows_left => Alignment::Start,
        Axis::X if anchor.top + float.height > page_height - hit_zone.y_margin => Alignment::End,
        _ if preferred == Alignment::PreferCenter => Alignment::Center,
        _ => Alignment::Start,
    }
}

/// Compute CSS offsets for the floating element and its arrow
///
/// Offsets are relative to a box covering the anchor, which is how the host
/// mounts the floating element.
pub fn compute_position(
    anchor: &Rect,
    float: &Rect,
    viewport: &Viewport,
    options: &PositionOptions,
) -> FloatingPosition {
    let axis = options.placement.axis();
    let hit_zone = options.hit_zone();

    let alignment = compute_alignment(anchor, float, options.alignment, axis, viewport, hit_zone);
    let placement = compute_placement(anchor, float, options.placement, viewport, hit_zone);

    // the anchor's left edge in document coordinates
    let left = anchor.left + viewport.scroll_x;
    let width = anchor.width;
    let height = anchor.height;

    let arrow_size = options.arrow_size;
    let half_arrow = arrow_size / 2.0;
    let padding = options.arrow_padding;

    let mut pos = FloatingPosition::default();

    match placement {
        Placement::Top => {
            pos.float.bottom = format!("calc(100% + {})", px(arrow_size));
            pos.arrow.top = format!("calc(100% - {})", px(half_arrow));
        }
        Placement::Bottom => {
            pos.float.top = format!("calc(100% + {})", px(arrow_size));
            pos.arrow.bottom = format!("calc(100% - {})", px(half_arrow));
        }
        Placement::Left => {
            pos.float.right = format!("calc(100% + {})", px(arrow_size));
            pos.arrow.right = px(-half_arrow);
        }
        Placement::Right => {
            pos.float.left = format!("calc(100% + {})", px(arrow_size));
            pos.arrow.left = px(-half_arrow);
        }
        _ => {}
    }

    let centered_arrow = format!("calc(50% - {})", px(half_arrow));

    match (axis, alignment) {
        (_, Alignment::Screen) => {
            pos.float.left = px(options.min_margin - left);
            pos.float.right = "auto".to_string();
            pos.arrow.left = px(left - options.min_margin + width / 2.0 - half_arrow);
        }
        (Axis::Y, alignment) => {
            let shift = if options.shift {
                width / 2.0 - half_arrow - padding
            } else {
                0.0
            };
            match alignment {
                Alignment::Start => {
                    pos.float.left = px(shift);
                    pos.float.right = "auto".to_string();
                    pos.arrow.left = px(padding);
                }
                Alignment::Center => {
                    pos.float.left = px(width / 2.0 - float.width / 2.0);
                    pos.float.right = "auto".to_string();
                    pos.arrow.left = centered_arrow;
                }
                Alignment::End => {
                    pos.float.left = "auto".to_string();
                    pos.float.right = px(shift);
                    pos.arrow.right = px(padding);
                }
                _ => {}
            }
        }
        (Axis::X, alignment) => {
            let shift = if options.shift {
                height / 2.0 - half_arrow - padding
            } else {
                0.0
            };
            // keep the arrow inside floats shorter than two paddings
            let arrow_offset = if float.height < padding * 2.0 {
                float.height / 2.0
            } else {
                padding
            };
            match alignment {
                Alignment::Start => {
                    pos.float.top = px(shift);
                    pos.arrow.top = px(arrow_offset);
                }
                Alignment::Center => {
                    pos.float.top = px(height / 2.0 - float.height / 2.0);
                    pos.arrow.top = centered_arrow;
                }
                Alignment::End => {
                    pos.float.bottom = px(shift);
                    pos.arrow.bottom = px(arrow_offset);
                }
                _ => {}
            }
        }
    }

    tracing::trace!(%placement, %alignment, %axis, "computed floating position");

    pos
}
