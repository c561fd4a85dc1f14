//! A chess rules engine over immutable positions: move generation for every
//! piece, move execution, castling, check, checkmate and stalemate.

pub mod board;
pub mod chess_move;
pub mod game;
pub mod input_handler;
pub mod move_generation;
pub mod player;
pub mod prelude;
