//! Robot state and heading arithmetic.

use crate::error::PlacementError;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cardinal direction the robot is facing.
///
/// The table's origin is the south-west corner, so North is `+Y` and East is `+X`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Rotates 90 degrees counter-clockwise.
    pub fn left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Rotates 90 degrees clockwise.
    pub fn right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Unit step taken by a MOVE in this heading.
    pub fn step(self) -> IVec2 {
        match self {
            Self::North => IVec2::Y,
            Self::East => IVec2::X,
            Self::South => IVec2::NEG_Y,
            Self::West => IVec2::NEG_X,
        }
    }

    /// Canonical upper-case name, as used in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Heading {
    type Err = PlacementError;

    /// Accepts the full name or its initial, upper case only.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "N" | "NORTH" => Ok(Self::North),
            "E" | "EAST" => Ok(Self::East),
            "S" | "SOUTH" => Ok(Self::South),
            "W" | "WEST" => Ok(Self::West),
            other => Err(PlacementError::UnknownDirection(other.to_owned())),
        }
    }
}

/// Where the robot stands and which way it faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Table cell, `(0, 0)` being the south-west corner.
    pub position: IVec2,

    /// Current facing.
    pub heading: Heading,
}

impl Placement {
    pub fn new(x: i32, y: i32, heading: Heading) -> Self {
        Self {
            position: IVec2::new(x, y),
            heading,
        }
    }

    /// The cell one step ahead. Not bounds-checked.
    pub fn ahead(&self) -> IVec2 {
        self.position + self.heading.step()
    }

    pub fn turned_left(self) -> Self {
        Self {
            heading: self.heading.left(),
            ..self
        }
    }

    pub fn turned_right(self) -> Self {
        Self {
            heading: self.heading.right(),
            ..self
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x={}, y={}, facing={}",
            self.position.x, self.position.y, self.heading
        )
    }
}

/// The robot's lifecycle.
///
/// There is no heading or position until the first valid PLACE; the `Unplaced`
/// variant carries nothing, so an unset robot can never be reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Robot {
    #[default]
    Unplaced,
    Placed(Placement),
}

impl Robot {
    pub fn is_placed(&self) -> bool {
        matches!(self, Self::Placed(_))
    }

    pub fn placement(&self) -> Option<Placement> {
        match self {
            Self::Placed(p) => Some(*p),
            Self::Unplaced => None,
        }
    }

    /// Overwrites the state. Callers validate `placement` against the table first.
    pub(crate) fn place(&mut self, placement: Placement) {
        *self = Self::Placed(placement);
    }
}
