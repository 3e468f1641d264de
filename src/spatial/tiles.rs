//! Tile definitions, edge socket codes and rotation variants
//!
//! A tile is an immutable record: a display label, an orientation tag and,
//! for edge-matching catalogs, one socket code per side. Socket codes are
//! matched against the reverse of the neighbouring code so that asymmetric
//! edges only pair with their mirror image.

use std::fmt;

/// Index of a tile in the active catalog (0-based, stable for one run)
pub type TileId = usize;

/// Orthogonal neighbour directions, in socket order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row - 1
    North,
    /// Towards col + 1
    East,
    /// Towards row + 1
    South,
    /// Towards col - 1
    West,
}

impl Direction {
    /// All directions in socket order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Socket slot of this direction
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// Direction for a socket slot, wrapping modulo four
    pub const fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Self::North,
            1 => Self::East,
            2 => Self::South,
            _ => Self::West,
        }
    }

    /// Direction facing back towards this one
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Neighbour of `(row, col)` in this direction, if it lies inside the grid
    pub const fn step(
        self,
        row: usize,
        col: usize,
        dimensions: (usize, usize),
    ) -> Option<[usize; 2]> {
        match self {
            Self::North if row > 0 => Some([row - 1, col]),
            Self::East if col + 1 < dimensions.1 => Some([row, col + 1]),
            Self::South if row + 1 < dimensions.0 => Some([row + 1, col]),
            Self::West if col > 0 => Some([row, col - 1]),
            _ => None,
        }
    }
}

/// Orientation tag of a tile, informational to the solver
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// Base orientation
    #[default]
    R0,
    /// One clockwise quarter turn
    R90,
    /// Two quarter turns
    R180,
    /// Three quarter turns
    R270,
}

impl Rotation {
    /// Rotations generated for asymmetric tiles, in order
    pub const TURNS: [Self; 3] = [Self::R90, Self::R180, Self::R270];

    /// Rotation angle in degrees
    pub const fn degrees(self) -> u16 {
        match self {
            Self::R0 => 0,
            Self::R90 => 90,
            Self::R180 => 180,
            Self::R270 => 270,
        }
    }

    /// Number of clockwise quarter turns
    pub const fn quarter_turns(self) -> usize {
        match self {
            Self::R0 => 0,
            Self::R90 => 1,
            Self::R180 => 2,
            Self::R270 => 3,
        }
    }
}

/// Symbol sequence on one edge of a tile
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SocketCode(Vec<char>);

impl SocketCode {
    /// Build a socket code from its symbols
    pub fn new(code: &str) -> Self {
        Self(code.chars().collect())
    }

    /// Number of symbols in the code
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Test if the code has no symbols
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Code read in the opposite direction
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self(self.0.iter().rev().copied().collect())
    }

    /// Test whether two facing edges may touch
    ///
    /// Codes match when one equals the other read backwards. Codes of
    /// different lengths never match.
    pub fn matches(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().eq(other.0.iter().rev())
    }
}

impl fmt::Display for SocketCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|symbol| write!(f, "{symbol}"))
    }
}

impl From<&str> for SocketCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Socket codes for the four sides of a tile, indexed by `Direction`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EdgeSockets([SocketCode; 4]);

impl EdgeSockets {
    /// Build sockets from north, east, south and west codes
    pub fn new(north: &str, east: &str, south: &str, west: &str) -> Self {
        Self([
            SocketCode::new(north),
            SocketCode::new(east),
            SocketCode::new(south),
            SocketCode::new(west),
        ])
    }

    /// Code on the given side
    pub const fn side(&self, direction: Direction) -> &SocketCode {
        match direction {
            Direction::North => &self.0[0],
            Direction::East => &self.0[1],
            Direction::South => &self.0[2],
            Direction::West => &self.0[3],
        }
    }

    /// Test if all four sides carry the same code
    ///
    /// Such tiles look identical in every orientation and are not rotated.
    pub fn is_uniform(&self) -> bool {
        let north = self.side(Direction::North);
        Direction::ALL
            .iter()
            .all(|&direction| self.side(direction) == north)
    }

    /// Sockets after turning the tile clockwise
    ///
    /// A quarter turn moves the west code to the north side, north to east,
    /// east to south and south to west.
    #[must_use]
    pub fn rotated(&self, rotation: Rotation) -> Self {
        let turns = rotation.quarter_turns();
        let source = |direction: Direction| {
            self.side(Direction::from_index(direction.index() + 4 - turns))
                .clone()
        };
        Self([
            source(Direction::North),
            source(Direction::East),
            source(Direction::South),
            source(Direction::West),
        ])
    }
}

/// Immutable description of one tile
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileDefinition {
    /// Display payload, opaque to the solver
    pub label: String,
    /// Orientation of the underlying image
    pub rotation: Rotation,
    /// Edge codes for socket-matching catalogs, `None` for value catalogs
    pub sockets: Option<EdgeSockets>,
}

impl TileDefinition {
    /// Tile with edge sockets in its base orientation
    pub fn with_sockets(label: &str, sockets: EdgeSockets) -> Self {
        Self {
            label: label.to_string(),
            rotation: Rotation::R0,
            sockets: Some(sockets),
        }
    }

    /// Tile whose value is its own id
    pub fn value(label: &str) -> Self {
        Self {
            label: label.to_string(),
            rotation: Rotation::R0,
            sockets: None,
        }
    }

    /// Copy of this tile turned clockwise
    #[must_use]
    pub fn rotated(&self, rotation: Rotation) -> Self {
        Self {
            label: self.label.clone(),
            rotation,
            sockets: self.sockets.as_ref().map(|sockets| sockets.rotated(rotation)),
        }
    }

    /// Label including the orientation for rotated variants
    pub fn display_name(&self) -> String {
        match self.rotation {
            Rotation::R0 => self.label.clone(),
            rotation => format!("{}@{}", self.label, rotation.degrees()),
        }
    }
}

/// Append rotated variants of every asymmetric tile
///
/// Tiles whose four codes are identical are left as they are. Variants are
/// appended after all base tiles, grouped per base tile in 90/180/270 order.
pub fn expand_rotations(tiles: Vec<TileDefinition>) -> Vec<TileDefinition> {
    let mut variants = Vec::new();
    for tile in &tiles {
        let Some(sockets) = &tile.sockets else {
            continue;
        };
        if sockets.is_uniform() {
            continue;
        }
        variants.extend(Rotation::TURNS.iter().map(|&turn| tile.rotated(turn)));
    }

    let mut expanded = tiles;
    expanded.extend(variants);
    expanded
}
