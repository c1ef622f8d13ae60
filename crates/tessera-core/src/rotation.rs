//! Quarter-turn rotations applied to placed tiles.

use std::fmt;

/// A clockwise quarter-turn rotation applied to a tile.
///
/// Rotating a tile turns its artwork; which edge label faces which
/// compass direction afterwards is resolved by
/// [`TileDef::effective_edges`](crate::TileDef::effective_edges), the
/// single edge-resolution point in the workspace.
///
/// # Examples
///
/// ```
/// use tessera_core::Rotation;
///
/// assert_eq!(Rotation::R90.degrees(), 90);
/// assert_eq!(Rotation::R90.then(Rotation::R270), Rotation::R0);
/// assert_eq!(Rotation::from_degrees(180), Some(Rotation::R180));
/// assert_eq!(Rotation::from_degrees(45), None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rotation {
    /// No rotation.
    #[default]
    R0,
    /// 90 degrees clockwise.
    R90,
    /// 180 degrees.
    R180,
    /// 270 degrees clockwise.
    R270,
}

impl Rotation {
    /// All rotations in ascending angle order.
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    /// The rotation angle in degrees.
    pub fn degrees(self) -> u16 {
        match self {
            Self::R0 => 0,
            Self::R90 => 90,
            Self::R180 => 180,
            Self::R270 => 270,
        }
    }

    /// Number of clockwise quarter turns (0..=3).
    pub fn quarter_turns(self) -> u8 {
        match self {
            Self::R0 => 0,
            Self::R90 => 1,
            Self::R180 => 2,
            Self::R270 => 3,
        }
    }

    /// Parse a degree value. Anything other than 0/90/180/270 is `None`.
    pub fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees {
            0 => Some(Self::R0),
            90 => Some(Self::R90),
            180 => Some(Self::R180),
            270 => Some(Self::R270),
            _ => None,
        }
    }

    /// The rotation reached by `turns` clockwise quarter turns from R0.
    pub fn from_quarter_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => Self::R0,
            1 => Self::R90,
            2 => Self::R180,
            _ => Self::R270,
        }
    }

    /// Compose rotations: `self` followed by `other`.
    pub fn then(self, other: Rotation) -> Rotation {
        Self::from_quarter_turns(self.quarter_turns() + other.quarter_turns())
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}
