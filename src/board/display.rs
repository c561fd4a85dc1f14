use std::fmt;

use super::square::NUM_TILES_PER_ROW;
use super::Board;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, tile) in self.tiles().iter().enumerate() {
            write!(f, "{:>3}", tile.to_string())?;
            if (index + 1) % NUM_TILES_PER_ROW == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Builds a `Board` from an 8x8 diagram, rank 8 first, with `.` for empty
/// squares. White moves first unless the diagram is prefixed with
/// `black_to_move:`. Panics if the diagram does not describe a legal setup,
/// so it is meant for tests and benchmarks.
#[macro_export]
macro_rules! chess_position {
    (black_to_move: $($piece:tt)*) => {{
        $crate::board::Builder::from_diagram(
            stringify!($($piece)*),
            $crate::board::Alliance::Black,
        )
        .and_then(|builder| builder.build())
        .unwrap()
    }};
    ($($piece:tt)*) => {{
        $crate::board::Builder::from_diagram(
            stringify!($($piece)*),
            $crate::board::Alliance::White,
        )
        .and_then(|builder| builder.build())
        .unwrap()
    }};
}
