pub mod alliance;
pub mod error;
pub mod piece;
pub mod square;
pub mod tile;

mod builder;
mod display;

pub use alliance::Alliance;
pub use builder::Builder;
pub use error::BoardError;
pub use piece::{Piece, PieceType};
pub use square::Square;
pub use tile::Tile;

use log::debug;

use crate::chess_move::ChessMove;
use crate::player::{Player, PlayerState};

use self::square::{NUM_TILES, ORDERED};

pub const STANDARD_LAYOUT: &str = "
    rnbqkbnr
    pppppppp
    ........
    ........
    ........
    ........
    PPPPPPPP
    RNBQKBNR
";

/// An immutable chess position. Construction lays out the tiles, splits the
/// pieces by alliance, generates every pseudo-legal move for both sides and
/// settles each player's king, check status and castling options. Successor
/// positions are produced by executing a move, never by changing a board.
#[derive(Clone, PartialEq, Debug)]
pub struct Board {
    tiles: [Tile; NUM_TILES],
    white_pieces: Vec<Piece>,
    black_pieces: Vec<Piece>,
    en_passant_pawn: Option<Piece>,
    transition_move: ChessMove,
    next_move_maker: Alliance,
    white_player: PlayerState,
    black_player: PlayerState,
}

impl Default for Board {
    fn default() -> Self {
        Self::create_standard_board()
    }
}

impl Board {
    pub fn new(builder: &Builder) -> Result<Self, BoardError> {
        let tiles = create_game_board(builder);
        let white_pieces = calculate_active_pieces(&tiles, Alliance::White);
        let black_pieces = calculate_active_pieces(&tiles, Alliance::Black);
        let white_king = establish_king(&white_pieces, Alliance::White)?;
        let black_king = establish_king(&black_pieces, Alliance::Black)?;

        let mut board = Self {
            tiles,
            white_pieces,
            black_pieces,
            en_passant_pawn: builder.en_passant_pawn(),
            transition_move: builder.transition_move().unwrap_or(ChessMove::Null),
            next_move_maker: builder.next_move_maker(),
            white_player: PlayerState::new(Alliance::White, white_king),
            black_player: PlayerState::new(Alliance::Black, black_king),
        };

        let white_standard_moves = board.calculate_legal_moves(&board.white_pieces);
        let black_standard_moves = board.calculate_legal_moves(&board.black_pieces);
        board.white_player = PlayerState::calculate(
            &board,
            Alliance::White,
            white_king,
            white_standard_moves.clone(),
            &black_standard_moves,
        );
        board.black_player = PlayerState::calculate(
            &board,
            Alliance::Black,
            black_king,
            black_standard_moves,
            &white_standard_moves,
        );

        debug!(
            "built board: {} to move, {} white pieces ({} moves), {} black pieces ({} moves)",
            board.next_move_maker,
            board.white_pieces.len(),
            board.white_player.legal_moves().len(),
            board.black_pieces.len(),
            board.black_player.legal_moves().len(),
        );

        Ok(board)
    }

    /// The initial position, white to move.
    pub fn create_standard_board() -> Self {
        Builder::from_diagram(STANDARD_LAYOUT, Alliance::White)
            .and_then(|builder| builder.build())
            .expect("the standard layout should be a valid position")
    }

    pub fn tile(&self, square: Square) -> &Tile {
        &self.tiles[square.index()]
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn get(&self, square: Square) -> Option<&Piece> {
        self.tile(square).piece()
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.tile(square).is_occupied()
    }

    pub fn white_pieces(&self) -> &[Piece] {
        &self.white_pieces
    }

    pub fn black_pieces(&self) -> &[Piece] {
        &self.black_pieces
    }

    pub fn pieces(&self, alliance: Alliance) -> &[Piece] {
        match alliance {
            Alliance::White => &self.white_pieces,
            Alliance::Black => &self.black_pieces,
        }
    }

    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.white_pieces.iter().chain(self.black_pieces.iter())
    }

    /// White's legal moves followed by black's, castles included.
    pub fn all_legal_moves(&self) -> impl Iterator<Item = &ChessMove> {
        self.white_player
            .legal_moves()
            .iter()
            .chain(self.black_player.legal_moves().iter())
    }

    pub fn white_player(&self) -> Player<'_> {
        Player::new(self, &self.white_player)
    }

    pub fn black_player(&self) -> Player<'_> {
        Player::new(self, &self.black_player)
    }

    pub fn player(&self, alliance: Alliance) -> Player<'_> {
        match alliance {
            Alliance::White => self.white_player(),
            Alliance::Black => self.black_player(),
        }
    }

    pub fn current_player(&self) -> Player<'_> {
        self.player(self.next_move_maker)
    }

    pub fn next_move_maker(&self) -> Alliance {
        self.next_move_maker
    }

    /// The pawn that double-stepped on the previous ply, if any.
    pub fn en_passant_pawn(&self) -> Option<&Piece> {
        self.en_passant_pawn.as_ref()
    }

    /// The move that produced this board, or the null move for a position
    /// that was built directly.
    pub fn transition_move(&self) -> &ChessMove {
        &self.transition_move
    }

    /// True when either side is in check.
    pub fn is_threatened_immediate(&self) -> bool {
        self.white_player().is_in_check() || self.black_player().is_in_check()
    }

    /// True when the side to move is checkmated or stalemated.
    pub fn is_end_game(&self) -> Result<bool, BoardError> {
        let current_player = self.current_player();
        Ok(current_player.is_in_checkmate()? || current_player.is_in_stalemate()?)
    }

    fn calculate_legal_moves(&self, pieces: &[Piece]) -> Vec<ChessMove> {
        let mut legal_moves = Vec::with_capacity(48);
        for piece in pieces {
            legal_moves.extend(piece.calculate_legal_moves(self));
        }
        legal_moves
    }
}

fn create_game_board(builder: &Builder) -> [Tile; NUM_TILES] {
    ORDERED.map(|square| Tile::new(square, builder.piece_at(square).copied()))
}

fn calculate_active_pieces(tiles: &[Tile], alliance: Alliance) -> Vec<Piece> {
    tiles
        .iter()
        .filter_map(|tile| tile.piece())
        .filter(|piece| piece.alliance() == alliance)
        .copied()
        .collect()
}

fn establish_king(pieces: &[Piece], alliance: Alliance) -> Result<Piece, BoardError> {
    let mut kings = pieces.iter().filter(|piece| piece.is_king());
    match (kings.next(), kings.count()) {
        (Some(king), 0) => Ok(*king),
        (None, _) => Err(BoardError::KingNotEstablished { alliance, count: 0 }),
        (Some(_), others) => Err(BoardError::KingNotEstablished {
            alliance,
            count: others + 1,
        }),
    }
}

#[cfg(test)]
mod tests;
