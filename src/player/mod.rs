//! Per-side legality: the player's king, its legal moves including castles,
//! check detection, and the `make_move` entry point that advances a game.

mod castle;
mod move_transition;

#[cfg(test)]
mod tests;

pub use move_transition::{MoveStatus, MoveTransition};

use std::borrow::Cow;
use std::fmt;

use log::debug;

use crate::board::{Alliance, Board, BoardError, Piece, Square};
use crate::chess_move::ChessMove;

/// What a board knows about one side: its king, its legal moves and whether
/// it is in check. Computed once when the board is built.
#[derive(Clone, PartialEq, Debug)]
pub struct PlayerState {
    alliance: Alliance,
    king: Piece,
    legal_moves: Vec<ChessMove>,
    in_check: bool,
}

impl PlayerState {
    /// A state with no moves, used while the board's move sets are computed.
    pub(crate) fn new(alliance: Alliance, king: Piece) -> Self {
        Self {
            alliance,
            king,
            legal_moves: Vec::new(),
            in_check: false,
        }
    }

    /// Settles check first, then appends the castles that are available,
    /// since a king in check may not castle.
    pub(crate) fn calculate(
        board: &Board,
        alliance: Alliance,
        king: Piece,
        standard_moves: Vec<ChessMove>,
        opponent_moves: &[ChessMove],
    ) -> Self {
        let in_check = attacks_on_tile(king.position(), opponent_moves).next().is_some();
        let mut legal_moves = standard_moves;
        legal_moves.extend(castle::calculate_king_castles(
            board,
            &king,
            in_check,
            opponent_moves,
        ));
        Self {
            alliance,
            king,
            legal_moves,
            in_check,
        }
    }

    pub fn legal_moves(&self) -> &[ChessMove] {
        &self.legal_moves
    }
}

/// Every move in `moves` that lands on `square`.
pub fn attacks_on_tile(square: Square, moves: &[ChessMove]) -> impl Iterator<Item = &ChessMove> {
    moves
        .iter()
        .filter(move |chess_move| chess_move.to_square() == Some(square))
}

/// One side of a board, as seen from that board.
#[derive(Clone, Copy)]
pub struct Player<'a> {
    board: &'a Board,
    state: &'a PlayerState,
}

impl<'a> Player<'a> {
    pub(crate) fn new(board: &'a Board, state: &'a PlayerState) -> Self {
        Self { board, state }
    }

    pub fn alliance(&self) -> Alliance {
        self.state.alliance
    }

    pub fn king(&self) -> &'a Piece {
        &self.state.king
    }

    pub fn active_pieces(&self) -> &'a [Piece] {
        self.board.pieces(self.alliance())
    }

    /// Pseudo-legal moves plus available castles. Moves that would leave the
    /// king attacked are still in here; `make_move` rejects them.
    pub fn legal_moves(&self) -> &'a [ChessMove] {
        &self.state.legal_moves
    }

    pub fn is_in_check(&self) -> bool {
        self.state.in_check
    }

    pub fn opponent(&self) -> Player<'a> {
        self.board.player(self.alliance().opposite())
    }

    pub fn is_move_legal(&self, chess_move: &ChessMove) -> bool {
        self.state.legal_moves.contains(chess_move)
    }

    /// Attempts `chess_move`. A rejected move comes back as a transition
    /// whose board is this player's board; only `MoveStatus::Done` advances
    /// the game.
    pub fn make_move(&self, chess_move: &ChessMove) -> Result<MoveTransition<'a>, BoardError> {
        if chess_move.is_null()
            || !self.is_move_legal(chess_move)
            || (chess_move.is_castling_move() && self.is_in_check())
        {
            return Ok(self.reject(chess_move, MoveStatus::IllegalMove));
        }

        let transition_board = chess_move.execute(self.board)?;
        let mover_king = transition_board.current_player().opponent().king().position();
        let exposes_king = attacks_on_tile(
            mover_king,
            transition_board.current_player().legal_moves(),
        )
        .next()
        .is_some();
        if exposes_king {
            return Ok(self.reject(chess_move, MoveStatus::LeavesPlayerInCheck));
        }

        debug!("{} played {}", self.alliance(), chess_move);
        Ok(MoveTransition::new(
            self.board,
            Cow::Owned(transition_board),
            *chess_move,
            MoveStatus::Done,
        ))
    }

    /// In check with no move that gets out of it.
    pub fn is_in_checkmate(&self) -> Result<bool, BoardError> {
        Ok(self.is_in_check() && !self.has_escape_moves()?)
    }

    /// Not in check, but every move would leave the king attacked.
    pub fn is_in_stalemate(&self) -> Result<bool, BoardError> {
        Ok(!self.is_in_check() && !self.has_escape_moves()?)
    }

    fn has_escape_moves(&self) -> Result<bool, BoardError> {
        for chess_move in self.legal_moves() {
            if self.make_move(chess_move)?.status().is_done() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn reject(&self, chess_move: &ChessMove, status: MoveStatus) -> MoveTransition<'a> {
        debug!("{} cannot play {}: {:?}", self.alliance(), chess_move, status);
        MoveTransition::new(self.board, Cow::Borrowed(self.board), *chess_move, status)
    }
}

impl fmt::Display for Player<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.alliance())
    }
}

impl fmt::Debug for Player<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("alliance", &self.state.alliance)
            .field("king", &self.state.king)
            .field("in_check", &self.state.in_check)
            .field("legal_moves", &self.state.legal_moves.len())
            .finish()
    }
}
