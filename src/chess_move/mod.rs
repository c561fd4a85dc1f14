pub mod algebraic_notation;
pub mod castle;
pub mod chess_move;
pub mod en_passant;
pub mod move_factory;
pub mod pawn_jump;
pub mod pawn_promotion;
pub mod standard;

pub use castle::{CastleChessMove, CastleSide};
pub use chess_move::ChessMove;
pub use en_passant::EnPassantChessMove;
pub use move_factory::MoveFactory;
pub use pawn_jump::PawnJumpChessMove;
pub use pawn_promotion::PawnPromotionChessMove;
pub use standard::StandardChessMove;

use crate::board::{Board, Builder, Piece, Square};

/// Starts the builder for the position after `moved` leaves its square: every
/// piece on `board` except `moved` and anything standing on `excluded` is
/// carried over, and the move passes to the other side.
fn successor_builder(board: &Board, moved: &Piece, excluded: &[Square]) -> Builder {
    let mut builder = Builder::new();
    board
        .all_pieces()
        .filter(|piece| piece.position() != moved.position())
        .filter(|piece| !excluded.contains(&piece.position()))
        .for_each(|piece| {
            builder.set_piece(*piece);
        });
    builder.set_move_maker(moved.alliance().opposite());
    builder
}
