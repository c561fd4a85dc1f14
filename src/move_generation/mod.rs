//! Pseudo-legal move generation, one function per piece type.
//!
//! Squares are plain indices, so a step that crosses the a- or h-file edge
//! would wrap around onto the neighbouring rank. Every generator guards
//! against that with the column tables in `board::square`, per offset.

mod jumping;
mod pawn;
mod sliding;

use smallvec::SmallVec;

use crate::board::{piece::Piece, piece::PieceType, square::Square, Board};
use crate::chess_move::{ChessMove, StandardChessMove};

/// A list of chess moves that is optimized for small sizes.
pub type PieceMoveList = SmallVec<[ChessMove; 32]>;

/// Every move `piece` could make on `board`, before checking whether the move
/// would leave its own king attacked. Castles are not included.
pub fn calculate_legal_moves(piece: &Piece, board: &Board) -> PieceMoveList {
    let mut moves = PieceMoveList::new();
    match piece.piece_type() {
        PieceType::Pawn => pawn::generate_pawn_moves(&mut moves, piece, board),
        PieceType::Knight => jumping::generate_knight_moves(&mut moves, piece, board),
        PieceType::King => jumping::generate_king_moves(&mut moves, piece, board),
        PieceType::Bishop => sliding::generate_bishop_moves(&mut moves, piece, board),
        PieceType::Rook => sliding::generate_rook_moves(&mut moves, piece, board),
        PieceType::Queen => sliding::generate_queen_moves(&mut moves, piece, board),
    }
    moves
}

/// A quiet move onto an empty square or a capture of an enemy piece. Returns
/// `None` when the square holds a piece of the mover's own side.
fn standard_move(piece: &Piece, destination: Square, board: &Board) -> Option<ChessMove> {
    match board.get(destination) {
        None => Some(ChessMove::Standard(StandardChessMove::quiet(
            *piece,
            destination,
        ))),
        Some(occupant) if occupant.alliance() != piece.alliance() => Some(ChessMove::Standard(
            StandardChessMove::attack(*piece, destination, *occupant),
        )),
        Some(_) => None,
    }
}
