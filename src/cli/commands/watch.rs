//! Watch command - watch both sides play random legal moves.

use chess_rules::game::random_playout::watch;
use structopt::StructOpt;

use super::util::{create_config, exit_on_error};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(long = "max-moves", default_value = "200", help = "Stop after this many plies")]
    pub max_moves: usize,
    #[structopt(long, help = "Seed for the random move choice")]
    pub seed: Option<u64>,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = create_config(Some(self.max_moves), self.seed);
        exit_on_error(watch(&config));
    }
}
