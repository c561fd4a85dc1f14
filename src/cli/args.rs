//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{count_positions::CountPositionsArgs, pvp::PvpArgs, watch::WatchArgs};

#[derive(StructOpt)]
#[structopt(name = "chess", about = "A chess rules engine implemented in Rust ♛")]
pub enum Chess {
    #[structopt(
        name = "pvp",
        about = "Play a game against another human on this local machine. Enter moves as coordinates (`e2e4`) or in algebraic notation (`Nf3`), or `quit` to stop."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "watch",
        about = "Watch both sides play random legal moves until the game ends or `--max-moves` plies have been played. Pass `--seed` to replay the same game."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "count-positions",
        about = "Count the number of positions reachable in exactly 1 to `--depth` plies (default: 4) from the starting position, and report the time it took to do so."
    )]
    CountPositions(CountPositionsArgs),
}

impl crate::cli::commands::Command for Chess {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Pvp(cmd),
            Watch(cmd),
            CountPositions(cmd),
        }
    }
}
