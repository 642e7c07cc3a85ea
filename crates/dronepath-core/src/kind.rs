//! The closed [`CellKind`] alphabet.

use std::fmt;

/// Classification of a single grid square.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Open,
    Obstacle,
    Start,
    Goal,
}

impl CellKind {
    /// Every kind, in symbol-table order.
    pub const ALL: [CellKind; 4] = [
        CellKind::Obstacle,
        CellKind::Open,
        CellKind::Start,
        CellKind::Goal,
    ];

    /// Parse a grid symbol. Returns `None` for characters outside the
    /// alphabet.
    #[inline]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'X' => Some(Self::Obstacle),
            '.' => Some(Self::Open),
            'S' => Some(Self::Start),
            'G' => Some(Self::Goal),
            _ => None,
        }
    }

    /// The symbol this kind is written as.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Self::Obstacle => 'X',
            Self::Open => '.',
            Self::Start => 'S',
            Self::Goal => 'G',
        }
    }

    /// Whether an agent may occupy a cell of this kind.
    #[inline]
    pub const fn is_traversable(self) -> bool {
        !matches!(self, Self::Obstacle)
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Open => "open",
            Self::Obstacle => "obstacle",
            Self::Start => "start",
            Self::Goal => "goal",
        };
        f.write_str(name)
    }
}
