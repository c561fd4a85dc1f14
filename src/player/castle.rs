use log::trace;

use crate::board::square::{A1, A8, B1, B8, C1, C8, D1, D8, E1, E8, F1, F8, G1, G8, H1, H8};
use crate::board::{Alliance, Board, Piece, Square};
use crate::chess_move::{CastleChessMove, CastleSide, ChessMove};

use super::attacks_on_tile;

struct CastleLayout {
    side: CastleSide,
    king_square: Square,
    king_to_square: Square,
    rook_square: Square,
    rook_to_square: Square,
    /// Squares between king and rook.
    empty_squares: &'static [Square],
    /// Squares the king passes through, which must not be attacked.
    transit_squares: &'static [Square],
}

const WHITE_CASTLES: [CastleLayout; 2] = [
    CastleLayout {
        side: CastleSide::KingSide,
        king_square: E1,
        king_to_square: G1,
        rook_square: H1,
        rook_to_square: F1,
        empty_squares: &[F1, G1],
        transit_squares: &[F1, G1],
    },
    CastleLayout {
        side: CastleSide::QueenSide,
        king_square: E1,
        king_to_square: C1,
        rook_square: A1,
        rook_to_square: D1,
        empty_squares: &[B1, C1, D1],
        transit_squares: &[C1, D1],
    },
];

const BLACK_CASTLES: [CastleLayout; 2] = [
    CastleLayout {
        side: CastleSide::KingSide,
        king_square: E8,
        king_to_square: G8,
        rook_square: H8,
        rook_to_square: F8,
        empty_squares: &[F8, G8],
        transit_squares: &[F8, G8],
    },
    CastleLayout {
        side: CastleSide::QueenSide,
        king_square: E8,
        king_to_square: C8,
        rook_square: A8,
        rook_to_square: D8,
        empty_squares: &[B8, C8, D8],
        transit_squares: &[C8, D8],
    },
];

/// The castles `king` may make on `board`, given the opponent's moves.
pub fn calculate_king_castles(
    board: &Board,
    king: &Piece,
    in_check: bool,
    opponent_moves: &[ChessMove],
) -> Vec<ChessMove> {
    let mut castles = Vec::new();
    if !king.is_first_move() || in_check {
        return castles;
    }

    let layouts = match king.alliance() {
        Alliance::White => &WHITE_CASTLES,
        Alliance::Black => &BLACK_CASTLES,
    };
    for layout in layouts {
        if let Some(castle) = castle_for_layout(board, king, layout, opponent_moves) {
            trace!("{} may castle {}", king.alliance(), layout.side);
            castles.push(ChessMove::Castle(castle));
        }
    }
    castles
}

fn castle_for_layout(
    board: &Board,
    king: &Piece,
    layout: &CastleLayout,
    opponent_moves: &[ChessMove],
) -> Option<CastleChessMove> {
    let capable = match layout.side {
        CastleSide::KingSide => king.is_king_side_castle_capable(),
        CastleSide::QueenSide => king.is_queen_side_castle_capable(),
    };
    if !capable || king.position() != layout.king_square {
        return None;
    }
    if layout.empty_squares.iter().any(|&square| board.is_occupied(square)) {
        return None;
    }

    let rook = board.get(layout.rook_square)?;
    if !rook.is_rook() || !rook.is_first_move() || rook.alliance() != king.alliance() {
        return None;
    }

    let transit_attacked = layout
        .transit_squares
        .iter()
        .any(|&square| attacks_on_tile(square, opponent_moves).next().is_some());
    if transit_attacked {
        trace!("{} {} denied: transit square attacked", king.alliance(), layout.side);
        return None;
    }

    Some(CastleChessMove::new(
        layout.side,
        *king,
        layout.king_to_square,
        *rook,
        layout.rook_to_square,
    ))
}
