use crate::board::{square::Square, Board};

use super::ChessMove;

/// Resolves coordinate input into one of the board's legal moves. This type
/// has no values; call its associated functions directly.
pub enum MoveFactory {}

impl MoveFactory {
    /// The first legal move on `board`, of either side, going from `from` to
    /// `to`, or `ChessMove::Null` when there is none.
    pub fn create_move(board: &Board, from: Square, to: Square) -> ChessMove {
        board
            .all_legal_moves()
            .find(|chess_move| {
                chess_move.from_square() == Some(from) && chess_move.to_square() == Some(to)
            })
            .copied()
            .unwrap_or(ChessMove::Null)
    }
}
