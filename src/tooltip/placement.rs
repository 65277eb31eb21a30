use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side of the anchor the floating element goes to, or a policy for picking one
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    Left,
    Right,
    Top,
    Bottom,
    #[default]
    Auto,
    PreferLeft,
    PreferRight,
    PreferTop,
    PreferBottom,
}

impl Placement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Placement::Left => "left",
            Placement::Right => "right",
            Placement::Top => "top",
            Placement::Bottom => "bottom",
            Placement::Auto => "auto",
            Placement::PreferLeft => "prefer-left",
            Placement::PreferRight => "prefer-right",
            Placement::PreferTop => "prefer-top",
            Placement::PreferBottom => "prefer-bottom",
        }
    }

    /// The side a preference leans towards; `auto` falls back to bottom
    pub fn side(&self) -> Placement {
        match self {
            Placement::PreferLeft => Placement::Left,
            Placement::PreferRight => Placement::Right,
            Placement::PreferTop => Placement::Top,
            Placement::PreferBottom | Placement::Auto => Placement::Bottom,
            side => *side,
        }
    }

    /// Axis the floating element is laid out along
    pub fn axis(&self) -> Axis {
        match self {
            Placement::Auto
            | Placement::Top
            | Placement::Bottom
            | Placement::PreferTop
            | Placement::PreferBottom => Axis::Y,
            Placement::Left | Placement::Right | Placement::PreferLeft | Placement::PreferRight => {
                Axis::X
            }
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Placement {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Placement::Left),
            "right" => Ok(Placement::Right),
            "top" => Ok(Placement::Top),
            "bottom" => Ok(Placement::Bottom),
            "auto" => Ok(Placement::Auto),
            "prefer-left" => Ok(Placement::PreferLeft),
            "prefer-right" => Ok(Placement::PreferRight),
            "prefer-top" => Ok(Placement::PreferTop),
            "prefer-bottom" => Ok(Placement::PreferBottom),
            other => Err(ParseError::Placement(other.to_string())),
        }
    }
}

/// Alignment along the cross axis, or a policy for picking one
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    Start,
    Center,
    End,
    /// Full-width mode pinned to the viewport edge
    Screen,
    #[default]
    Auto,
    PreferCenter,
}

impl Alignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Start => "start",
            Alignment::Center => "center",
            Alignment::End => "end",
            Alignment::Screen => "screen",
            Alignment::Auto => "auto",
            Alignment::PreferCenter => "prefer-center",
        }
    }

    pub fn is_concrete(&self) -> bool {
        !matches!(self, Alignment::Auto | Alignment::PreferCenter)
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alignment {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Alignment::Start),
            "center" => Ok(Alignment::Center),
            "end" => Ok(Alignment::End),
            "screen" => Ok(Alignment::Screen),
            "auto" => Ok(Alignment::Auto),
            "prefer-center" => Ok(Alignment::PreferCenter),
            other => Err(ParseError::Alignment(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
        })
    }
}
