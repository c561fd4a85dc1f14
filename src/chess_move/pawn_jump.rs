use crate::board::{error::BoardError, piece::Piece, square::Square, Board};

use super::{successor_builder, ChessMove};

/// A pawn's two square advance from its starting rank. The pawn becomes the
/// en passant pawn of the resulting board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PawnJumpChessMove {
    piece: Piece,
    to_square: Square,
}

impl PawnJumpChessMove {
    pub fn new(piece: Piece, to_square: Square) -> Self {
        Self { piece, to_square }
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn from_square(&self) -> Square {
        self.piece.position()
    }

    pub fn to_square(&self) -> Square {
        self.to_square
    }

    pub fn execute(&self, board: &Board) -> Result<Board, BoardError> {
        let chess_move = ChessMove::PawnJump(*self);
        let moved_pawn = self.piece.move_piece(&chess_move);
        let mut builder = successor_builder(board, &self.piece, &[]);
        builder
            .set_piece(moved_pawn)
            .set_en_passant_pawn(moved_pawn)
            .set_move_transition(chess_move);
        builder.build()
    }
}
