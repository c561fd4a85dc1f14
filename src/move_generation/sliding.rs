use crate::board::square::{EIGHTH_COLUMN, FIRST_COLUMN};
use crate::board::{piece::Piece, square::Square, Board};

use super::{standard_move, PieceMoveList};

const BISHOP_OFFSETS: [i32; 4] = [-9, -7, 7, 9];
const ROOK_OFFSETS: [i32; 4] = [-8, -1, 1, 8];
const QUEEN_OFFSETS: [i32; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

pub fn generate_bishop_moves(moves: &mut PieceMoveList, piece: &Piece, board: &Board) {
    generate_sliding_moves(moves, piece, board, &BISHOP_OFFSETS);
}

pub fn generate_rook_moves(moves: &mut PieceMoveList, piece: &Piece, board: &Board) {
    generate_sliding_moves(moves, piece, board, &ROOK_OFFSETS);
}

pub fn generate_queen_moves(moves: &mut PieceMoveList, piece: &Piece, board: &Board) {
    generate_sliding_moves(moves, piece, board, &QUEEN_OFFSETS);
}

/// Walks each ray until it leaves the board, reaches a file edge, or runs
/// into a piece. An enemy piece ends the ray with a capture.
fn generate_sliding_moves(
    moves: &mut PieceMoveList,
    piece: &Piece,
    board: &Board,
    offsets: &[i32],
) {
    for &offset in offsets {
        let mut current = piece.position();
        loop {
            if is_column_exclusion(current, offset) {
                break;
            }
            current = match current.offset(offset) {
                Some(next) => next,
                None => break,
            };
            moves.extend(standard_move(piece, current, board));
            if board.is_occupied(current) {
                break;
            }
        }
    }
}

/// Steps that would leave the a-file to the west or the h-file to the east.
fn is_column_exclusion(position: Square, offset: i32) -> bool {
    let index = position.index();
    (FIRST_COLUMN[index] && matches!(offset, -9 | -1 | 7))
        || (EIGHTH_COLUMN[index] && matches!(offset, -7 | 1 | 9))
}
