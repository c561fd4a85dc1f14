use rustc_hash::FxHashMap;

use crate::chess_move::ChessMove;

use super::alliance::Alliance;
use super::error::BoardError;
use super::piece::Piece;
use super::square::{Square, NUM_TILES};
use super::Board;

/// Scratch space for assembling the next position. A `Builder` is filled in
/// square by square and then turned into an immutable `Board`.
#[derive(Clone, Debug)]
pub struct Builder {
    board_config: FxHashMap<Square, Piece>,
    next_move_maker: Alliance,
    en_passant_pawn: Option<Piece>,
    transition_move: Option<ChessMove>,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            board_config: FxHashMap::default(),
            next_move_maker: Alliance::White,
            en_passant_pawn: None,
            transition_move: None,
        }
    }
}

impl Builder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Places `piece` on its own square, replacing whatever was there.
    pub fn set_piece(&mut self, piece: Piece) -> &mut Self {
        self.board_config.insert(piece.position(), piece);
        self
    }

    pub fn set_move_maker(&mut self, next_move_maker: Alliance) -> &mut Self {
        self.next_move_maker = next_move_maker;
        self
    }

    pub fn set_en_passant_pawn(&mut self, en_passant_pawn: Piece) -> &mut Self {
        self.en_passant_pawn = Some(en_passant_pawn);
        self
    }

    pub fn set_move_transition(&mut self, transition_move: ChessMove) -> &mut Self {
        self.transition_move = Some(transition_move);
        self
    }

    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.board_config.get(&square)
    }

    pub fn next_move_maker(&self) -> Alliance {
        self.next_move_maker
    }

    pub fn en_passant_pawn(&self) -> Option<Piece> {
        self.en_passant_pawn
    }

    pub fn transition_move(&self) -> Option<ChessMove> {
        self.transition_move
    }

    pub fn build(&self) -> Result<Board, BoardError> {
        Board::new(self)
    }

    /// Reads an 8x8 diagram, rank 8 first, one character per square: piece
    /// letters as in `Piece::to_char` and `.` for an empty square. Whitespace
    /// is ignored. Every piece is placed as not having moved yet.
    pub fn from_diagram(diagram: &str, next_move_maker: Alliance) -> Result<Self, BoardError> {
        let squares: Vec<char> = diagram.chars().filter(|c| !c.is_whitespace()).collect();
        if squares.len() != NUM_TILES {
            return Err(BoardError::InvalidDiagram {
                msg: format!("expected 64 squares, got {}", squares.len()),
            });
        }

        let mut builder = Self::new();
        builder.set_move_maker(next_move_maker);
        for (index, &c) in squares.iter().enumerate() {
            if c == '.' {
                continue;
            }
            let square = Square::new(index as u8);
            let piece = Piece::from_char(c, square).ok_or_else(|| BoardError::InvalidDiagram {
                msg: format!("unknown piece `{}` on {}", c, square),
            })?;
            builder.set_piece(piece);
        }

        Ok(builder)
    }
}
