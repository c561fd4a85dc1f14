use crate::board::{error::BoardError, piece::Piece, square::Square, Board};

use super::{successor_builder, ChessMove};

/// A piece moving to a square, either empty (a quiet move) or held by an
/// enemy piece that is captured.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct StandardChessMove {
    piece: Piece,
    to_square: Square,
    capture: Option<Piece>,
}

impl StandardChessMove {
    pub fn new(piece: Piece, to_square: Square, capture: Option<Piece>) -> Self {
        Self {
            piece,
            to_square,
            capture,
        }
    }

    pub fn quiet(piece: Piece, to_square: Square) -> Self {
        Self::new(piece, to_square, None)
    }

    pub fn attack(piece: Piece, to_square: Square, captured: Piece) -> Self {
        Self::new(piece, to_square, Some(captured))
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

    pub fn captured_piece(&self) -> Option<&Piece> {
        self.capture.as_ref()
    }

    pub fn is_attack(&self) -> bool {
        self.capture.is_some()
    }

    pub fn execute(&self, board: &Board) -> Result<Board, BoardError> {
        let chess_move = ChessMove::Standard(*self);
        let excluded: Vec<Square> = self.capture.iter().map(|piece| piece.position()).collect();
        let mut builder = successor_builder(board, &self.piece, &excluded);
        builder
            .set_piece(self.piece.move_piece(&chess_move))
            .set_move_transition(chess_move);
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::{D5, E4, G1, F3};
    use crate::board::{Alliance, PieceType};
    use crate::chess_position;

    #[test]
    fn test_quiet_move_relocates_piece() {
        let board = Board::create_standard_board();
        let knight = *board.get(G1).unwrap();
        let quiet = StandardChessMove::quiet(knight, F3);
        let next = quiet.execute(&board).unwrap();
        println!("{}", next);

        assert!(!next.is_occupied(G1));
        let moved = next.get(F3).unwrap();
        assert_eq!(PieceType::Knight, moved.piece_type());
        assert!(!moved.is_first_move());
        assert_eq!(Alliance::Black, next.next_move_maker());
        assert_eq!(&ChessMove::Standard(quiet), next.transition_move());
        assert_eq!(None, next.en_passant_pawn());
    }

    #[test]
    fn test_attack_removes_captured_piece() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ...p....
            ....P...
            ........
            ........
            ....K...
        };
        let pawn = *board.get(E4).unwrap();
        let captured = *board.get(D5).unwrap();
        let attack = StandardChessMove::attack(pawn, D5, captured);
        let next = attack.execute(&board).unwrap();
        println!("{}", next);

        assert!(attack.is_attack());
        assert_eq!(Alliance::White, next.get(D5).unwrap().alliance());
        assert!(next.black_pieces().iter().all(|piece| piece.is_king()));
        assert_eq!(2, next.white_pieces().len());
        assert!(!next.is_occupied(E4));
    }
}
