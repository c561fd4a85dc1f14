pub mod player_vs_player;
pub mod position_counter;
pub mod random_playout;

use std::fmt;

use crate::board::{Alliance, Board, BoardError};

/// Options shared by the game loops.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub starting_position: Board,
    /// Stop after this many plies, if set.
    pub max_moves: Option<usize>,
    /// Seed for random move selection; a fresh seed is drawn when unset.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_position: Board::create_standard_board(),
            max_moves: None,
            seed: None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameEnding {
    /// The given side has been checkmated.
    Checkmate(Alliance),
    Stalemate,
}

impl fmt::Display for GameEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEnding::Checkmate(loser) => {
                write!(f, "checkmate! {} wins", loser.opposite())
            }
            GameEnding::Stalemate => write!(f, "stalemate!"),
        }
    }
}

/// How the game on `board` has ended, if it has.
pub fn game_ending(board: &Board) -> Result<Option<GameEnding>, BoardError> {
    let current_player = board.current_player();
    if current_player.is_in_checkmate()? {
        return Ok(Some(GameEnding::Checkmate(current_player.alliance())));
    }
    if current_player.is_in_stalemate()? {
        return Ok(Some(GameEnding::Stalemate));
    }
    Ok(None)
}
