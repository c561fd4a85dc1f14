use crate::board::{error::BoardError, piece::Piece, square::Square, Board};

use super::{successor_builder, ChessMove};

/// A pawn capturing the enemy pawn that just jumped past it. The captured
/// pawn stands beside the capturing pawn, not on the destination square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct EnPassantChessMove {
    piece: Piece,
    to_square: Square,
    captured: Piece,
}

impl EnPassantChessMove {
    pub fn new(piece: Piece, to_square: Square, captured: Piece) -> Self {
        Self {
            piece,
            to_square,
            captured,
        }
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

    pub fn captured_piece(&self) -> &Piece {
        &self.captured
    }

    pub fn execute(&self, board: &Board) -> Result<Board, BoardError> {
        let chess_move = ChessMove::EnPassant(*self);
        let mut builder = successor_builder(board, &self.piece, &[self.captured.position()]);
        builder
            .set_piece(self.piece.move_piece(&chess_move))
            .set_move_transition(chess_move);
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::{D4, E3, E4};
    use crate::board::Alliance;
    use crate::chess_position;

    #[test]
    fn test_en_passant_removes_passed_pawn() {
        let board = chess_position! {
            black_to_move:
            ....k...
            ........
            ........
            ........
            ...pP...
            ........
            ........
            ....K...
        };
        let pawn = *board.get(D4).unwrap();
        let captured = *board.get(E4).unwrap();
        let next = EnPassantChessMove::new(pawn, E3, captured)
            .execute(&board)
            .unwrap();
        println!("{}", next);

        assert!(!next.is_occupied(E4));
        assert!(!next.is_occupied(D4));
        assert_eq!(Alliance::Black, next.get(E3).unwrap().alliance());
        assert_eq!(1, next.white_pieces().len());
    }
}
