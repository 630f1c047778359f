use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::Vertex;

/// Side to move in a game state.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Turn {
    Cop,
    Robber,
}

impl Turn {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Turn::Cop => Turn::Robber,
            Turn::Robber => Turn::Cop,
        }
    }
}

/// A position of the game: where both players stand and who moves next.
///
/// Identity is structural; there is no separate state id outside of a
/// [`crate::arena::MoveGraph`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct GameState {
    pub cop: Vertex,
    pub robber: Vertex,
    pub turn: Turn,
}

impl GameState {
    #[inline]
    pub fn new(cop: Vertex, robber: Vertex, turn: Turn) -> Self {
        Self { cop, robber, turn }
    }

    /// Both players on the same vertex.
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.cop == self.robber
    }

    /// The vertex of the player who moves next.
    #[inline]
    pub fn mover(&self) -> Vertex {
        match self.turn {
            Turn::Cop => self.cop,
            Turn::Robber => self.robber,
        }
    }

    /// The state reached when the player to move goes to `to`.
    #[inline]
    pub fn advance(&self, to: Vertex) -> Self {
        match self.turn {
            Turn::Cop => Self::new(to, self.robber, Turn::Robber),
            Turn::Robber => Self::new(self.cop, to, Turn::Cop),
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.turn {
            Turn::Cop => 'C',
            Turn::Robber => 'R',
        };
        write!(f, "({}, {}, {tag})", self.cop, self.robber)
    }
}
