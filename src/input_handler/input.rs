//! Move input parsing for the interactive game loop.

use std::io;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::{Board, Square};
use crate::chess_move::{ChessMove, MoveFactory};

static COORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([a-h][1-8])([a-h][1-8])$").expect("COORD_RE regex should be valid"));
static ALG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([NBRQK]?[a-h]?[1-8]?x?[a-h][1-8](=[Q])?|O-O(-O)?)[+#]?$")
        .expect("ALG_RE regex should be valid")
});

#[derive(Error, Debug)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveInput {
    Coordinate { from: Square, to: Square },
    Algebraic { notation: String },
    Quit,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input == "quit" {
            return Ok(MoveInput::Quit);
        }

        if let Some(caps) = COORD_RE.captures(input) {
            let from = Square::from_algebraic(&caps[1]);
            let to = Square::from_algebraic(&caps[2]);
            if let (Some(from), Some(to)) = (from, to) {
                return Ok(MoveInput::Coordinate { from, to });
            }
        }

        if let Some(caps) = ALG_RE.captures(input) {
            return Ok(MoveInput::Algebraic {
                notation: caps[1].to_string(),
            });
        }

        Err(InputError::InvalidInput {
            input: input.to_string(),
        })
    }
}

impl MoveInput {
    /// The move on `board` this input refers to. Coordinates may name either
    /// side's move; algebraic notation is matched against the side to move.
    /// Unmatched input resolves to `ChessMove::Null`.
    pub fn resolve(&self, board: &Board) -> ChessMove {
        match self {
            MoveInput::Coordinate { from, to } => MoveFactory::create_move(board, *from, *to),
            MoveInput::Algebraic { notation } => board
                .current_player()
                .legal_moves()
                .iter()
                .find(|chess_move| chess_move.to_algebraic(board) == *notation)
                .copied()
                .unwrap_or(ChessMove::Null),
            MoveInput::Quit => ChessMove::Null,
        }
    }
}

/// Reads one line from stdin and parses it as a move.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|error| InputError::IOError {
            error: error.to_string(),
        })?;
    input.trim().parse()
}
