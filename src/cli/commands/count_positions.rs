//! Count positions command - count possible positions at a given depth.

use chess_rules::game::position_counter::run_count_positions;
use structopt::StructOpt;

use super::util::{create_config, exit_on_error};
use super::Command;

#[derive(StructOpt)]
pub struct CountPositionsArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
}

impl Command for CountPositionsArgs {
    fn execute(self) {
        let config = create_config(None, None);
        exit_on_error(run_count_positions(&config.starting_position, self.depth));
    }
}
