use core::fmt;

use crate::board::{error::BoardError, piece::Piece, square::Square, Board};

use super::castle::CastleChessMove;
use super::en_passant::EnPassantChessMove;
use super::pawn_jump::PawnJumpChessMove;
use super::pawn_promotion::PawnPromotionChessMove;
use super::standard::StandardChessMove;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChessMove {
    Standard(StandardChessMove),
    PawnJump(PawnJumpChessMove),
    EnPassant(EnPassantChessMove),
    Castle(CastleChessMove),
    PawnPromotion(PawnPromotionChessMove),
    /// Stands in for "no move": the transition of a board that was built
    /// directly, or a coordinate pair that matched no legal move.
    Null,
}

macro_rules! delegate_to_variants {
    ($self:ident, $method:ident, $($variant:ident),*) => {
        match $self {
            $(ChessMove::$variant(m) => Some(m.$method()),)*
            ChessMove::Null => None,
        }
    };
}

impl ChessMove {
    pub fn from_square(&self) -> Option<Square> {
        delegate_to_variants!(self, from_square, Standard, PawnJump, EnPassant, Castle, PawnPromotion)
    }

    pub fn to_square(&self) -> Option<Square> {
        delegate_to_variants!(self, to_square, Standard, PawnJump, EnPassant, Castle, PawnPromotion)
    }

    pub fn moved_piece(&self) -> Option<&Piece> {
        delegate_to_variants!(self, piece, Standard, PawnJump, EnPassant, Castle, PawnPromotion)
    }

    pub fn captured_piece(&self) -> Option<&Piece> {
        match self {
            ChessMove::Standard(m) => m.captured_piece(),
            ChessMove::EnPassant(m) => Some(m.captured_piece()),
            ChessMove::PawnPromotion(m) => m.captured_piece(),
            ChessMove::PawnJump(_) | ChessMove::Castle(_) | ChessMove::Null => None,
        }
    }

    pub fn is_attack(&self) -> bool {
        self.captured_piece().is_some()
    }

    pub fn is_castling_move(&self) -> bool {
        matches!(self, ChessMove::Castle(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ChessMove::Null)
    }

    /// Builds the position that follows this move. No legality checks are
    /// made here; that is the player's job.
    #[must_use = "move execution may fail"]
    pub fn execute(&self, board: &Board) -> Result<Board, BoardError> {
        match self {
            ChessMove::Standard(m) => m.execute(board),
            ChessMove::PawnJump(m) => m.execute(board),
            ChessMove::EnPassant(m) => m.execute(board),
            ChessMove::Castle(m) => m.execute(board),
            ChessMove::PawnPromotion(m) => m.execute(board),
            ChessMove::Null => Err(BoardError::NullMoveExecution),
        }
    }

    /// Coordinate notation, e.g. `e2e4`, as typed at the `pvp` prompt.
    pub fn to_coordinates(&self) -> String {
        match (self.from_square(), self.to_square()) {
            (Some(from), Some(to)) => format!("{}{}", from, to),
            _ => "0000".to_string(),
        }
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let annotation = match self {
            ChessMove::Standard(m) => match m.captured_piece() {
                Some(captured) => format!(" capturing {}", captured),
                None => "".to_string(),
            },
            ChessMove::PawnJump(_) => " (pawn jump)".to_string(),
            ChessMove::EnPassant(m) => format!(" en passant capturing {}", m.captured_piece()),
            ChessMove::Castle(m) => format!(" ({})", m.side()),
            ChessMove::PawnPromotion(m) => {
                let capture = match m.captured_piece() {
                    Some(captured) => format!(" capturing {}", captured),
                    None => "".to_string(),
                };
                format!("{} promoting to {}", capture, m.promote_to())
            }
            ChessMove::Null => return write!(f, "null move"),
        };
        let piece = match self.moved_piece() {
            Some(piece) => piece.to_char(),
            None => '?',
        };
        write!(f, "{} {}{}", piece, self.to_coordinates(), annotation)
    }
}

impl fmt::Debug for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format!("{}", self).fmt(f)
    }
}
