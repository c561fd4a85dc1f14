use std::fmt;

use super::piece::Piece;
use super::square::Square;

/// A square of a built board, either empty or holding exactly one piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Tile {
    Empty(Square),
    Occupied(Square, Piece),
}

impl Tile {
    pub fn new(coordinate: Square, piece: Option<Piece>) -> Self {
        match piece {
            Some(piece) => Tile::Occupied(coordinate, piece),
            None => Tile::Empty(coordinate),
        }
    }

    pub fn coordinate(&self) -> Square {
        match self {
            Tile::Empty(coordinate) | Tile::Occupied(coordinate, _) => *coordinate,
        }
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Tile::Occupied(..))
    }

    pub fn piece(&self) -> Option<&Piece> {
        match self {
            Tile::Empty(_) => None,
            Tile::Occupied(_, piece) => Some(piece),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Empty(_) => write!(f, "-"),
            Tile::Occupied(_, piece) => write!(f, "{}", piece),
        }
    }
}
