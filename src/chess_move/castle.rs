use std::fmt;

use crate::board::{error::BoardError, piece::Piece, square::Square, Board};

use super::{successor_builder, ChessMove};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl fmt::Display for CastleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastleSide::KingSide => write!(f, "O-O"),
            CastleSide::QueenSide => write!(f, "O-O-O"),
        }
    }
}

/// Moves the king two squares towards a rook and hops the rook over it, in a
/// single move. Castles are generated by the player, never by the king's own
/// move generation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CastleChessMove {
    side: CastleSide,
    king: Piece,
    to_square: Square,
    rook: Piece,
    rook_to_square: Square,
}

impl CastleChessMove {
    pub fn new(
        side: CastleSide,
        king: Piece,
        to_square: Square,
        rook: Piece,
        rook_to_square: Square,
    ) -> Self {
        Self {
            side,
            king,
            to_square,
            rook,
            rook_to_square,
        }
    }

    pub fn side(&self) -> CastleSide {
        self.side
    }

    pub fn piece(&self) -> &Piece {
        &self.king
    }

    pub fn rook(&self) -> &Piece {
        &self.rook
    }

    pub fn from_square(&self) -> Square {
        self.king.position()
    }

    pub fn to_square(&self) -> Square {
        self.to_square
    }

    pub fn rook_from_square(&self) -> Square {
        self.rook.position()
    }

    pub fn rook_to_square(&self) -> Square {
        self.rook_to_square
    }

    pub fn execute(&self, board: &Board) -> Result<Board, BoardError> {
        let chess_move = ChessMove::Castle(*self);
        let castled_rook = Piece::with_first_move(
            self.rook.piece_type(),
            self.rook.alliance(),
            self.rook_to_square,
            false,
        );
        let mut builder = successor_builder(board, &self.king, &[self.rook.position()]);
        builder
            .set_piece(self.king.move_piece(&chess_move))
            .set_piece(castled_rook)
            .set_move_transition(chess_move);
        builder.build()
    }
}
