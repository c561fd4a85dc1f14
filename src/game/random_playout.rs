use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Board, BoardError};
use crate::chess_move::ChessMove;

use super::{game_ending, GameConfig, GameEnding};

/// Why a playout stopped.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PlayoutResult {
    Ended(GameEnding),
    MoveLimitReached,
}

/// Plays uniformly random legal moves for both sides, starting from the
/// configured position, until the game ends or the move limit is reached.
/// Every position is handed to `on_position`, the final one included.
pub fn random_playout<F>(config: &GameConfig, mut on_position: F) -> Result<PlayoutResult, BoardError>
where
    F: FnMut(&Board, usize),
{
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut board = config.starting_position.clone();
    let mut ply = 0;

    loop {
        on_position(&board, ply);

        if let Some(ending) = game_ending(&board)? {
            info!("game over after {} plies: {}", ply, ending);
            return Ok(PlayoutResult::Ended(ending));
        }
        if config.max_moves.map_or(false, |max_moves| ply >= max_moves) {
            info!("stopping after {} plies", ply);
            return Ok(PlayoutResult::MoveLimitReached);
        }

        let mut candidates: Vec<ChessMove> = board.current_player().legal_moves().to_vec();
        candidates.shuffle(&mut rng);

        let mut next_board = None;
        for chess_move in candidates.iter() {
            let transition = board.current_player().make_move(chess_move)?;
            if transition.status().is_done() {
                debug!("ply {}: {}", ply + 1, chess_move.to_algebraic(&board));
                next_board = Some(transition.into_board());
                break;
            }
        }

        // game_ending has already ruled out a position without a playable move
        board = match next_board {
            Some(next_board) => next_board,
            None => return Ok(PlayoutResult::Ended(GameEnding::Stalemate)),
        };
        ply += 1;
    }
}

/// The `watch` loop: prints every position and the final result.
pub fn watch(config: &GameConfig) -> Result<PlayoutResult, BoardError> {
    let result = random_playout(config, |board, ply| {
        if ply > 0 {
            println!(
                "{} played {}",
                board.next_move_maker().opposite(),
                board.transition_move()
            );
        }
        println!("{}", board);
    })?;

    match result {
        PlayoutResult::Ended(ending) => println!("{}", ending),
        PlayoutResult::MoveLimitReached => println!("move limit reached"),
    }
    Ok(result)
}
