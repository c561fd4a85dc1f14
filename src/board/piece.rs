use std::fmt;

use crate::chess_move::ChessMove;
use crate::move_generation::{self, PieceMoveList};

use super::alliance::Alliance;
use super::square::Square;
use super::Board;

#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    /// Material value, used to order captured pieces.
    pub fn value(&self) -> u32 {
        match self {
            PieceType::Pawn => 100,
            PieceType::Knight => 320,
            PieceType::Bishop => 330,
            PieceType::Rook => 500,
            PieceType::Queen => 900,
            PieceType::King => 10000,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }

    pub fn from_char(c: char) -> Option<PieceType> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceType::Pawn),
            'N' => Some(PieceType::Knight),
            'B' => Some(PieceType::Bishop),
            'R' => Some(PieceType::Rook),
            'Q' => Some(PieceType::Queen),
            'K' => Some(PieceType::King),
            _ => None,
        }
    }

    pub fn is_king(&self) -> bool {
        *self == PieceType::King
    }

    pub fn is_pawn(&self) -> bool {
        *self == PieceType::Pawn
    }

    pub fn is_rook(&self) -> bool {
        *self == PieceType::Rook
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A piece on a particular square. Pieces are values: moving one produces a
/// new `Piece` at the destination rather than changing this one.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub struct Piece {
    piece_type: PieceType,
    alliance: Alliance,
    position: Square,
    first_move: bool,
    /// Only ever set on a king that reached its square by castling.
    castled: bool,
}

impl Piece {
    /// A piece that has not moved yet.
    pub fn new(piece_type: PieceType, alliance: Alliance, position: Square) -> Self {
        Self::with_first_move(piece_type, alliance, position, true)
    }

    pub fn with_first_move(
        piece_type: PieceType,
        alliance: Alliance,
        position: Square,
        first_move: bool,
    ) -> Self {
        Self {
            piece_type,
            alliance,
            position,
            first_move,
            castled: false,
        }
    }

    pub fn piece_type(&self) -> PieceType {
        self.piece_type
    }

    pub fn alliance(&self) -> Alliance {
        self.alliance
    }

    pub fn position(&self) -> Square {
        self.position
    }

    pub fn is_first_move(&self) -> bool {
        self.first_move
    }

    pub fn is_castled(&self) -> bool {
        self.castled
    }

    pub fn is_king(&self) -> bool {
        self.piece_type.is_king()
    }

    pub fn is_rook(&self) -> bool {
        self.piece_type.is_rook()
    }

    pub fn is_king_side_castle_capable(&self) -> bool {
        self.is_king() && self.first_move && !self.castled
    }

    pub fn is_queen_side_castle_capable(&self) -> bool {
        self.is_king() && self.first_move && !self.castled
    }

    pub fn piece_value(&self) -> u32 {
        self.piece_type.value()
    }

    /// Every pseudo-legal move of this piece on `board`: geometrically valid,
    /// but not yet checked for leaving its own king attacked.
    pub fn calculate_legal_moves(&self, board: &Board) -> PieceMoveList {
        move_generation::calculate_legal_moves(self, board)
    }

    /// The incarnation of this piece after `chess_move` lands it on its
    /// destination square.
    pub fn move_piece(&self, chess_move: &ChessMove) -> Piece {
        let destination = chess_move.to_square().unwrap_or(self.position);
        Piece {
            piece_type: self.piece_type,
            alliance: self.alliance,
            position: destination,
            first_move: false,
            castled: self.is_king() && chess_move.is_castling_move(),
        }
    }

    /// The piece a pawn on this square turns into when promoted.
    pub fn promotion_piece(&self, promote_to: PieceType) -> Piece {
        Piece::with_first_move(promote_to, self.alliance, self.position, false)
    }

    /// Uppercase for white pieces, lowercase for black.
    pub fn to_char(&self) -> char {
        match self.alliance {
            Alliance::White => self.piece_type.to_char(),
            Alliance::Black => self.piece_type.to_char().to_ascii_lowercase(),
        }
    }

    pub fn from_char(c: char, position: Square) -> Option<Piece> {
        let piece_type = PieceType::from_char(c)?;
        let alliance = if c.is_ascii_uppercase() {
            Alliance::White
        } else {
            Alliance::Black
        };
        Some(Piece::new(piece_type, alliance, position))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::{E1, E2, E4, F1, G1, H1};
    use crate::chess_move::{CastleChessMove, CastleSide, PawnJumpChessMove};

    #[test]
    fn test_piece_char_round_trip() {
        for c in "PNBRQKpnbrqk".chars() {
            let piece = Piece::from_char(c, E4).unwrap();
            assert_eq!(c, piece.to_char());
        }
        assert_eq!(None, Piece::from_char('x', E4));
    }

    #[test]
    fn test_structural_equality() {
        let a = Piece::new(PieceType::Knight, Alliance::White, E4);
        let b = Piece::new(PieceType::Knight, Alliance::White, E4);
        let moved = Piece::with_first_move(PieceType::Knight, Alliance::White, E4, false);
        assert_eq!(a, b);
        assert_ne!(a, moved);
        assert_ne!(a, Piece::new(PieceType::Knight, Alliance::Black, E4));
        assert_ne!(a, Piece::new(PieceType::Bishop, Alliance::White, E4));
    }

    #[test]
    fn test_move_piece_clears_first_move() {
        let pawn = Piece::new(PieceType::Pawn, Alliance::White, E2);
        let chess_move = ChessMove::PawnJump(PawnJumpChessMove::new(pawn, E4));
        let moved = pawn.move_piece(&chess_move);
        assert_eq!(E4, moved.position());
        assert!(!moved.is_first_move());
        assert_eq!(PieceType::Pawn, moved.piece_type());
        assert!(pawn.is_first_move(), "the moved-from piece is untouched");
    }

    #[test]
    fn test_castled_king() {
        let king = Piece::new(PieceType::King, Alliance::White, E1);
        let rook = Piece::new(PieceType::Rook, Alliance::White, H1);
        assert!(king.is_king_side_castle_capable());
        let castle = ChessMove::Castle(CastleChessMove::new(
            CastleSide::KingSide,
            king,
            G1,
            rook,
            F1,
        ));
        let castled = king.move_piece(&castle);
        assert!(castled.is_castled());
        assert!(!castled.is_king_side_castle_capable());
        assert!(!castled.is_queen_side_castle_capable());
        assert_eq!(G1, castled.position());
    }

    #[test]
    fn test_piece_values() {
        assert_eq!(100, PieceType::Pawn.value());
        assert_eq!(900, PieceType::Queen.value());
        assert!(PieceType::ALL
            .iter()
            .all(|piece_type| piece_type.value() <= PieceType::King.value()));
    }
}
