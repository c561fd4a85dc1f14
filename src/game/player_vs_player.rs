use crate::board::BoardError;
use crate::chess_move::ChessMove;
use crate::input_handler::{self, MoveInput};
use crate::player::MoveStatus;

use super::{game_ending, GameConfig};

/// Two humans at one terminal take turns entering moves, either as
/// coordinates (`e2e4`) or in algebraic notation (`Nf3`).
pub fn player_vs_player(config: &GameConfig) -> Result<(), BoardError> {
    let mut board = config.starting_position.clone();
    loop {
        println!("{}", board);

        if let Some(ending) = game_ending(&board)? {
            println!("{}", ending);
            return Ok(());
        }

        let current_player = board.current_player();
        if current_player.is_in_check() {
            println!("{} is in check", current_player);
        }
        println!("{} to move:", current_player);

        let input = match input_handler::parse_move_input() {
            Ok(MoveInput::Quit) => return Ok(()),
            Ok(input) => input,
            Err(error) => {
                println!("{}", error);
                continue;
            }
        };

        let chess_move = input.resolve(&board);
        if chess_move == ChessMove::Null {
            println!("no such move, try again");
            continue;
        }

        let transition = current_player.make_move(&chess_move)?;
        let played = chess_move.to_algebraic(&board);
        match transition.status() {
            MoveStatus::Done => {
                println!("{} played {}", current_player, played);
                board = transition.into_board();
            }
            MoveStatus::IllegalMove => println!("{} is not a legal move", played),
            MoveStatus::LeavesPlayerInCheck => {
                println!("{} would leave your king in check", played)
            }
        }
    }
}
