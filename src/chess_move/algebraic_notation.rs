use crate::board::{piece::Piece, square::Square, Board};

use super::ChessMove;

const CAPTURE_CHAR: &str = "x";
const PROMOTION_CHAR: &str = "=";

impl ChessMove {
    /// Standard algebraic notation for this move, played from `board`:
    /// `e4`, `Nf3`, `Nbd2`, `Qxd5`, `exd5`, `O-O`, `e8=Q`. Check and
    /// checkmate suffixes are not added.
    pub fn to_algebraic(&self, board: &Board) -> String {
        match self {
            ChessMove::Null => "--".to_string(),
            ChessMove::Castle(m) => m.side().to_string(),
            ChessMove::PawnPromotion(m) => format!(
                "{}{}{}",
                ChessMove::Standard(*m.inner()).to_algebraic(board),
                PROMOTION_CHAR,
                m.promote_to()
            ),
            ChessMove::Standard(_) | ChessMove::PawnJump(_) | ChessMove::EnPassant(_) => {
                match (self.moved_piece(), self.to_square()) {
                    (Some(piece), Some(to_square)) => {
                        algebraic_piece_move(self, piece, to_square, board)
                    }
                    _ => "--".to_string(),
                }
            }
        }
    }
}

fn algebraic_piece_move(
    chess_move: &ChessMove,
    piece: &Piece,
    to_square: Square,
    board: &Board,
) -> String {
    let capture_chars = if chess_move.is_attack() {
        CAPTURE_CHAR
    } else {
        ""
    };

    if piece.piece_type().is_pawn() {
        let file_chars = if chess_move.is_attack() {
            file_char(piece.position()).to_string()
        } else {
            "".to_string()
        };
        return format!("{}{}{}", file_chars, capture_chars, to_square);
    }

    format!(
        "{}{}{}{}",
        piece.piece_type(),
        disambiguating_chars(piece, to_square, board),
        capture_chars,
        to_square
    )
}

/// Origin squares of the other pieces of the same type and side that can
/// legally reach `to_square` from `board`.
fn ambiguous_origins(piece: &Piece, to_square: Square, board: &Board) -> Vec<Square> {
    let player = board.player(piece.alliance());
    player
        .legal_moves()
        .iter()
        .filter(|other| other.to_square() == Some(to_square))
        .filter(|other| {
            other.moved_piece().map_or(false, |other_piece| {
                other_piece.piece_type() == piece.piece_type()
                    && other_piece.position() != piece.position()
            })
        })
        .filter(|other| {
            player
                .make_move(other)
                .map_or(false, |transition| transition.status().is_done())
        })
        .filter_map(|other| other.from_square())
        .collect()
}

/// The origin file, rank or both, whichever tells this move apart from every
/// other legal move of the same piece type onto `to_square`.
fn disambiguating_chars(piece: &Piece, to_square: Square, board: &Board) -> String {
    let from_square = piece.position();
    let rivals = ambiguous_origins(piece, to_square, board);
    if rivals.is_empty() {
        return "".to_string();
    }

    let shares_file = rivals.iter().any(|rival| rival.column() == from_square.column());
    let shares_rank = rivals.iter().any(|rival| rival.rank() == from_square.rank());
    match (shares_file, shares_rank) {
        (true, true) => from_square.to_string(),
        (true, false) => from_square.rank().to_string(),
        (false, _) => file_char(from_square).to_string(),
    }
}

fn file_char(square: Square) -> char {
    (b'a' + square.column() as u8) as char
}
