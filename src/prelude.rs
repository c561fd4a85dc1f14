//! Common types re-exported for convenience.

pub use crate::board::square::Square;
pub use crate::board::{Alliance, Board, BoardError, Builder, Piece, PieceType, Tile};
pub use crate::chess_move::{
    CastleChessMove, CastleSide, ChessMove, EnPassantChessMove, MoveFactory, PawnJumpChessMove,
    PawnPromotionChessMove, StandardChessMove,
};
pub use crate::player::{MoveStatus, MoveTransition, Player};
