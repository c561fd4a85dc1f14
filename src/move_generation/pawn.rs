use crate::board::square::{EIGHTH_COLUMN, FIRST_COLUMN};
use crate::board::{piece::Piece, square::Square, Alliance, Board};
use crate::chess_move::{
    ChessMove, EnPassantChessMove, PawnJumpChessMove, PawnPromotionChessMove, StandardChessMove,
};

use super::PieceMoveList;

const SINGLE_STEP: i32 = 8;
const DOUBLE_STEP: i32 = 16;
const EAST_ATTACK: i32 = 7;
const WEST_ATTACK: i32 = 9;

pub fn generate_pawn_moves(moves: &mut PieceMoveList, piece: &Piece, board: &Board) {
    let alliance = piece.alliance();
    let position = piece.position();
    let direction = alliance.direction();

    if let Some(destination) = position.offset(direction * SINGLE_STEP) {
        if !board.is_occupied(destination) {
            moves.push(promote_if_last_rank(
                alliance,
                StandardChessMove::quiet(*piece, destination),
            ));
        }
    }

    if piece.is_first_move() && alliance.is_pawn_start_square(position) {
        let behind = position.offset(direction * SINGLE_STEP);
        let destination = position.offset(direction * DOUBLE_STEP);
        if let (Some(behind), Some(destination)) = (behind, destination) {
            if !board.is_occupied(behind) && !board.is_occupied(destination) {
                moves.push(ChessMove::PawnJump(PawnJumpChessMove::new(
                    *piece,
                    destination,
                )));
            }
        }
    }

    // Seen from white, offset 7 attacks towards the h-file and 9 towards the
    // a-file. For black both are mirrored.
    let east_blocked = (EIGHTH_COLUMN[position.index()] && alliance.is_white())
        || (FIRST_COLUMN[position.index()] && alliance.is_black());
    if !east_blocked {
        let beside = position.offset(alliance.opposite_direction());
        generate_pawn_attack(moves, piece, board, direction * EAST_ATTACK, beside);
    }

    let west_blocked = (FIRST_COLUMN[position.index()] && alliance.is_white())
        || (EIGHTH_COLUMN[position.index()] && alliance.is_black());
    if !west_blocked {
        let beside = position.offset(-alliance.opposite_direction());
        generate_pawn_attack(moves, piece, board, direction * WEST_ATTACK, beside);
    }
}

/// A diagonal capture onto an enemy piece, or an en passant capture of the
/// board's en passant pawn when it stands on `beside`.
fn generate_pawn_attack(
    moves: &mut PieceMoveList,
    piece: &Piece,
    board: &Board,
    offset: i32,
    beside: Option<Square>,
) {
    let destination = match piece.position().offset(offset) {
        Some(destination) => destination,
        None => return,
    };

    match board.get(destination) {
        Some(occupant) if occupant.alliance() != piece.alliance() => {
            moves.push(promote_if_last_rank(
                piece.alliance(),
                StandardChessMove::attack(*piece, destination, *occupant),
            ));
        }
        Some(_) => {}
        None => {
            if let Some(en_passant_pawn) = board.en_passant_pawn() {
                if Some(en_passant_pawn.position()) == beside
                    && en_passant_pawn.alliance() != piece.alliance()
                {
                    moves.push(ChessMove::EnPassant(EnPassantChessMove::new(
                        *piece,
                        destination,
                        *en_passant_pawn,
                    )));
                }
            }
        }
    }
}

fn promote_if_last_rank(alliance: Alliance, pawn_move: StandardChessMove) -> ChessMove {
    if alliance.is_pawn_promotion_square(pawn_move.to_square()) {
        ChessMove::PawnPromotion(PawnPromotionChessMove::new(pawn_move))
    } else {
        ChessMove::Standard(pawn_move)
    }
}
