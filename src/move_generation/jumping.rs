use crate::board::square::{EIGHTH_COLUMN, FIRST_COLUMN, SECOND_COLUMN, SEVENTH_COLUMN};
use crate::board::{piece::Piece, square::Square, Board};

use super::{standard_move, PieceMoveList};

const KNIGHT_OFFSETS: [i32; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];
const KING_OFFSETS: [i32; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

pub fn generate_knight_moves(moves: &mut PieceMoveList, piece: &Piece, board: &Board) {
    generate_jumping_moves(moves, piece, board, &KNIGHT_OFFSETS, is_knight_exclusion);
}

pub fn generate_king_moves(moves: &mut PieceMoveList, piece: &Piece, board: &Board) {
    generate_jumping_moves(moves, piece, board, &KING_OFFSETS, is_king_exclusion);
}

fn generate_jumping_moves(
    moves: &mut PieceMoveList,
    piece: &Piece,
    board: &Board,
    offsets: &[i32],
    is_exclusion: fn(Square, i32) -> bool,
) {
    let position = piece.position();
    for &offset in offsets {
        if is_exclusion(position, offset) {
            continue;
        }
        let destination = match position.offset(offset) {
            Some(destination) => destination,
            None => continue,
        };
        moves.extend(standard_move(piece, destination, board));
    }
}

fn is_knight_exclusion(position: Square, offset: i32) -> bool {
    let index = position.index();
    (FIRST_COLUMN[index] && matches!(offset, -17 | -10 | 6 | 15))
        || (SECOND_COLUMN[index] && matches!(offset, -10 | 6))
        || (SEVENTH_COLUMN[index] && matches!(offset, -6 | 10))
        || (EIGHTH_COLUMN[index] && matches!(offset, -15 | -6 | 10 | 17))
}

fn is_king_exclusion(position: Square, offset: i32) -> bool {
    let index = position.index();
    (FIRST_COLUMN[index] && matches!(offset, -9 | -1 | 7))
        || (EIGHTH_COLUMN[index] && matches!(offset, -7 | 1 | 9))
}
