use std::fmt;

use super::square::{Square, FIRST_RANK, EIGHTH_RANK, SECOND_RANK, SEVENTH_RANK};

/// The side a piece or player belongs to. White starts on ranks 1 and 2 and
/// moves towards rank 8, which is the top of the board (square index 0).
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Alliance {
    Black = 0,
    White = 1,
}

const UP_DIRECTION: i32 = -1;
const DOWN_DIRECTION: i32 = 1;

impl Alliance {
    pub const ALL: [Alliance; 2] = [Alliance::Black, Alliance::White];

    pub fn opposite(&self) -> Self {
        match self {
            Alliance::Black => Alliance::White,
            Alliance::White => Alliance::Black,
        }
    }

    pub fn is_white(&self) -> bool {
        *self == Alliance::White
    }

    pub fn is_black(&self) -> bool {
        *self == Alliance::Black
    }

    /// The sign of a one rank step forward, in square indices.
    pub fn direction(&self) -> i32 {
        match self {
            Alliance::White => UP_DIRECTION,
            Alliance::Black => DOWN_DIRECTION,
        }
    }

    pub fn opposite_direction(&self) -> i32 {
        -self.direction()
    }

    pub fn is_pawn_promotion_square(&self, square: Square) -> bool {
        match self {
            Alliance::White => EIGHTH_RANK[square.index()],
            Alliance::Black => FIRST_RANK[square.index()],
        }
    }

    pub fn is_pawn_start_square(&self, square: Square) -> bool {
        match self {
            Alliance::White => SECOND_RANK[square.index()],
            Alliance::Black => SEVENTH_RANK[square.index()],
        }
    }
}

impl fmt::Display for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alliance_str = match self {
            Alliance::Black => "Black",
            Alliance::White => "White",
        };
        write!(f, "{}", alliance_str)
    }
}
