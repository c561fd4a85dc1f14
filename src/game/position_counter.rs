use std::time::{Duration, Instant};

use log::debug;
use rayon::prelude::*;

use crate::board::{Board, BoardError};
use crate::chess_move::ChessMove;

/// Counts the positions reachable from `board` in exactly `depth` plies,
/// playing every move through `Player::make_move` so that only legal
/// moves are counted. Root moves are counted in parallel.
pub fn count_positions(board: &Board, depth: u8) -> Result<usize, BoardError> {
    if depth == 0 {
        return Ok(1);
    }
    let candidates: Vec<ChessMove> = board.current_player().legal_moves().to_vec();
    candidates
        .par_iter()
        .map(|chess_move| count_after_move(board, chess_move, depth))
        .sum()
}

fn count_positions_inner(board: &Board, depth: u8) -> Result<usize, BoardError> {
    if depth == 0 {
        return Ok(1);
    }
    let mut count = 0;
    for chess_move in board.current_player().legal_moves() {
        count += count_after_move(board, chess_move, depth)?;
    }
    Ok(count)
}

fn count_after_move(board: &Board, chess_move: &ChessMove, depth: u8) -> Result<usize, BoardError> {
    let transition = board.current_player().make_move(chess_move)?;
    if !transition.status().is_done() {
        return Ok(0);
    }
    count_positions_inner(transition.to_board(), depth - 1)
}

/// Prints the position count for every depth up to `depth`, with timings.
pub fn run_count_positions(board: &Board, depth: u8) -> Result<(), BoardError> {
    let mut total_positions = 0;
    let mut total_duration = Duration::from_secs(0);

    for depth in 1..=depth {
        let starting_time = Instant::now();
        let count = count_positions(board, depth)?;
        let duration = starting_time.elapsed();
        let positions_per_second = count as f64 / duration.as_secs_f64();
        debug!("depth {} counted in {:?}", depth, duration);

        total_positions += count;
        total_duration += duration;

        println!(
            "depth: {}, positions: {}, positions per second: {}",
            depth, count, positions_per_second
        );
    }

    println!(
        "total positions: {}, total duration: {:?}, positions per second: {}",
        total_positions,
        total_duration,
        total_positions as f64 / total_duration.as_secs_f64()
    );
    Ok(())
}
