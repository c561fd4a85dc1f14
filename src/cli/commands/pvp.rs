//! PvP command - play a game against another human.

use chess_rules::game::player_vs_player::player_vs_player;
use structopt::StructOpt;

use super::util::{create_config, exit_on_error};
use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {}

impl Command for PvpArgs {
    fn execute(self) {
        let config = create_config(None, None);
        exit_on_error(player_vs_player(&config));
    }
}
