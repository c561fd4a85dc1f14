//! Board geometry: square indices, file and rank membership tables, and the
//! mapping between indices and algebraic coordinates.
//!
//! Squares are numbered rank-major from the top of the board: `a8` is 0,
//! `h8` is 7 and `h1` is 63.

use std::fmt;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

pub const NUM_TILES: usize = 64;
pub const NUM_TILES_PER_ROW: usize = 8;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < NUM_TILES, "square index out of range");
        Self(index)
    }

    /// Returns the square at `coordinate`, or `None` when it lies off the board.
    pub fn from_coordinate(coordinate: i32) -> Option<Self> {
        if is_valid_tile_coordinate(coordinate) {
            Some(Self(coordinate as u8))
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn coordinate(self) -> i32 {
        self.0 as i32
    }

    /// The square `delta` indices away. File wraparound is not checked here;
    /// that is up to the caller's column exclusions.
    pub fn offset(self, delta: i32) -> Option<Self> {
        Self::from_coordinate(self.coordinate() + delta)
    }

    /// 0 for the a-file through 7 for the h-file.
    pub fn column(self) -> usize {
        self.index() % NUM_TILES_PER_ROW
    }

    /// 1 through 8, as in algebraic notation.
    pub fn rank(self) -> usize {
        NUM_TILES_PER_ROW - self.index() / NUM_TILES_PER_ROW
    }

    pub fn to_algebraic(self) -> &'static str {
        position_at_coordinate(self)
    }

    pub fn from_algebraic(position: &str) -> Option<Self> {
        coordinate_at_position(position)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

pub fn is_valid_tile_coordinate(coordinate: i32) -> bool {
    coordinate >= 0 && coordinate < NUM_TILES as i32
}

pub fn position_at_coordinate(square: Square) -> &'static str {
    tables::ALGEBRAIC_NOTATION[square.index()]
}

pub fn coordinate_at_position(position: &str) -> Option<Square> {
    POSITION_TO_COORDINATE.get(position).copied()
}

static POSITION_TO_COORDINATE: Lazy<FxHashMap<&'static str, Square>> = Lazy::new(|| {
    tables::ALGEBRAIC_NOTATION
        .iter()
        .enumerate()
        .map(|(index, &position)| (position, Square(index as u8)))
        .collect()
});

const fn init_column(column: usize) -> [bool; NUM_TILES] {
    let mut table = [false; NUM_TILES];
    let mut index = column;
    while index < NUM_TILES {
        table[index] = true;
        index += NUM_TILES_PER_ROW;
    }
    table
}

const fn init_rank(rank: usize) -> [bool; NUM_TILES] {
    let mut table = [false; NUM_TILES];
    let start = (NUM_TILES_PER_ROW - rank) * NUM_TILES_PER_ROW;
    let mut index = start;
    while index < start + NUM_TILES_PER_ROW {
        table[index] = true;
        index += 1;
    }
    table
}

pub const FIRST_COLUMN: [bool; NUM_TILES] = init_column(0);
pub const SECOND_COLUMN: [bool; NUM_TILES] = init_column(1);
pub const SEVENTH_COLUMN: [bool; NUM_TILES] = init_column(6);
pub const EIGHTH_COLUMN: [bool; NUM_TILES] = init_column(7);

pub const FIRST_RANK: [bool; NUM_TILES] = init_rank(1);
pub const SECOND_RANK: [bool; NUM_TILES] = init_rank(2);
pub const SEVENTH_RANK: [bool; NUM_TILES] = init_rank(7);
pub const EIGHTH_RANK: [bool; NUM_TILES] = init_rank(8);

pub const A8: Square = Square(0);
pub const B8: Square = Square(1);
pub const C8: Square = Square(2);
pub const D8: Square = Square(3);
pub const E8: Square = Square(4);
pub const F8: Square = Square(5);
pub const G8: Square = Square(6);
pub const H8: Square = Square(7);
pub const A7: Square = Square(8);
pub const B7: Square = Square(9);
pub const C7: Square = Square(10);
pub const D7: Square = Square(11);
pub const E7: Square = Square(12);
pub const F7: Square = Square(13);
pub const G7: Square = Square(14);
pub const H7: Square = Square(15);
pub const A6: Square = Square(16);
pub const B6: Square = Square(17);
pub const C6: Square = Square(18);
pub const D6: Square = Square(19);
pub const E6: Square = Square(20);
pub const F6: Square = Square(21);
pub const G6: Square = Square(22);
pub const H6: Square = Square(23);
pub const A5: Square = Square(24);
pub const B5: Square = Square(25);
pub const C5: Square = Square(26);
pub const D5: Square = Square(27);
pub const E5: Square = Square(28);
pub const F5: Square = Square(29);
pub const G5: Square = Square(30);
pub const H5: Square = Square(31);
pub const A4: Square = Square(32);
pub const B4: Square = Square(33);
pub const C4: Square = Square(34);
pub const D4: Square = Square(35);
pub const E4: Square = Square(36);
pub const F4: Square = Square(37);
pub const G4: Square = Square(38);
pub const H4: Square = Square(39);
pub const A3: Square = Square(40);
pub const B3: Square = Square(41);
pub const C3: Square = Square(42);
pub const D3: Square = Square(43);
pub const E3: Square = Square(44);
pub const F3: Square = Square(45);
pub const G3: Square = Square(46);
pub const H3: Square = Square(47);
pub const A2: Square = Square(48);
pub const B2: Square = Square(49);
pub const C2: Square = Square(50);
pub const D2: Square = Square(51);
pub const E2: Square = Square(52);
pub const F2: Square = Square(53);
pub const G2: Square = Square(54);
pub const H2: Square = Square(55);
pub const A1: Square = Square(56);
pub const B1: Square = Square(57);
pub const C1: Square = Square(58);
pub const D1: Square = Square(59);
pub const E1: Square = Square(60);
pub const F1: Square = Square(61);
pub const G1: Square = Square(62);
pub const H1: Square = Square(63);

pub const ORDERED: [Square; NUM_TILES] = tables::ORDERED;

#[rustfmt::skip]
mod tables {
    use super::*;

    pub const ORDERED: [Square; NUM_TILES] = [
        A8, B8, C8, D8, E8, F8, G8, H8,
        A7, B7, C7, D7, E7, F7, G7, H7,
        A6, B6, C6, D6, E6, F6, G6, H6,
        A5, B5, C5, D5, E5, F5, G5, H5,
        A4, B4, C4, D4, E4, F4, G4, H4,
        A3, B3, C3, D3, E3, F3, G3, H3,
        A2, B2, C2, D2, E2, F2, G2, H2,
        A1, B1, C1, D1, E1, F1, G1, H1,
    ];

    pub const ALGEBRAIC_NOTATION: [&str; NUM_TILES] = [
        "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8",
        "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7",
        "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6",
        "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5",
        "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4",
        "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3",
        "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2",
        "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1",
    ];
}
