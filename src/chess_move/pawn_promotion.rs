use crate::board::{error::BoardError, piece::Piece, piece::PieceType, square::Square, Board};

use super::standard::StandardChessMove;
use super::{successor_builder, ChessMove};

/// Wraps the pawn move or capture that reaches the last rank. Executing it
/// plays the wrapped move, then swaps the pawn for the promoted piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PawnPromotionChessMove {
    inner: StandardChessMove,
    promote_to: PieceType,
}

impl PawnPromotionChessMove {
    pub fn new(inner: StandardChessMove) -> Self {
        Self {
            inner,
            promote_to: PieceType::Queen,
        }
    }

    pub fn inner(&self) -> &StandardChessMove {
        &self.inner
    }

    pub fn promote_to(&self) -> PieceType {
        self.promote_to
    }

    pub fn piece(&self) -> &Piece {
        self.inner.piece()
    }

    pub fn from_square(&self) -> Square {
        self.inner.from_square()
    }

    pub fn to_square(&self) -> Square {
        self.inner.to_square()
    }

    pub fn captured_piece(&self) -> Option<&Piece> {
        self.inner.captured_piece()
    }

    pub fn execute(&self, board: &Board) -> Result<Board, BoardError> {
        let pawn_moved_board = self.inner.execute(board)?;
        let promoted_pawn = self
            .inner
            .piece()
            .move_piece(&ChessMove::Standard(self.inner));
        let mut builder = successor_builder(&pawn_moved_board, &promoted_pawn, &[]);
        builder
            .set_piece(promoted_pawn.promotion_piece(self.promote_to))
            .set_move_maker(pawn_moved_board.next_move_maker())
            .set_move_transition(ChessMove::PawnPromotion(*self));
        builder.build()
    }
}
