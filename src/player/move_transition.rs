use std::borrow::Cow;

use crate::board::Board;
use crate::chess_move::ChessMove;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveStatus {
    Done,
    /// Not one of the player's legal moves, the null move, or a castle
    /// attempted while in check.
    IllegalMove,
    /// The move would leave the mover's own king attacked.
    LeavesPlayerInCheck,
}

impl MoveStatus {
    pub fn is_done(&self) -> bool {
        *self == MoveStatus::Done
    }
}

/// The outcome of `Player::make_move`. When the move is rejected the
/// resulting board is the board the move was attempted on.
#[derive(Clone, Debug)]
pub struct MoveTransition<'a> {
    from_board: &'a Board,
    to_board: Cow<'a, Board>,
    chess_move: ChessMove,
    status: MoveStatus,
}

impl<'a> MoveTransition<'a> {
    pub(crate) fn new(
        from_board: &'a Board,
        to_board: Cow<'a, Board>,
        chess_move: ChessMove,
        status: MoveStatus,
    ) -> Self {
        Self {
            from_board,
            to_board,
            chess_move,
            status,
        }
    }

    pub fn from_board(&self) -> &'a Board {
        self.from_board
    }

    pub fn to_board(&self) -> &Board {
        &self.to_board
    }

    pub fn chess_move(&self) -> &ChessMove {
        &self.chess_move
    }

    pub fn status(&self) -> MoveStatus {
        self.status
    }

    /// Takes the resulting board, cloning it only if the move was rejected.
    pub fn into_board(self) -> Board {
        self.to_board.into_owned()
    }
}
