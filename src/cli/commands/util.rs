//! Shared utilities for CLI commands.

use std::process;

use chess_rules::board::{Board, BoardError};
use chess_rules::game::GameConfig;

pub(crate) fn create_config(max_moves: Option<usize>, seed: Option<u64>) -> GameConfig {
    GameConfig {
        starting_position: Board::create_standard_board(),
        max_moves,
        seed,
    }
}

/// Reports an engine fault and exits; there is nothing to recover.
pub(crate) fn exit_on_error<T>(result: Result<T, BoardError>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => {
            eprintln!("error: {}", error);
            process::exit(1);
        }
    }
}
