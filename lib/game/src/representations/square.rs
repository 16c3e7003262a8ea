//! # square.rs
//!
//! Defines board coordinates.
//!
//! A `Square` is a `(file, rank)` pair inside the 8x8 grid. Ranks are literal
//! grid rows: row 0 is Black's back rank and row 7 is White's. Any attempt to
//! step off the grid yields `None`, which is how rays and offsets find the
//! board edge.
//!
//! # Date
//! 18/10/2026

use std::fmt;

use crate::constants::*;

#[macro_export]
macro_rules! square {
    ($file:expr, $rank:expr) => {
        {
            debug_assert!(
                ($file as u8) < $crate::constants::BOARD_SIZE &&
                ($rank as u8) < $crate::constants::BOARD_SIZE,
                "Square ({}, {}) is off the board.", $file, $rank
            );
            $crate::representations::square::Square {
                file: $file as u8,
                rank: $rank as u8,
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub file: u8,
    pub rank: u8,
}

impl Square {
    /// Bounds-checked constructor. Off-board coordinates are not an error.
    pub fn new(file: i8, rank: i8) -> Option<Square> {
        let size = BOARD_SIZE as i8;

        if (0..size).contains(&file) && (0..size).contains(&rank) {
            Some(Square { file: file as u8, rank: rank as u8 })
        } else {
            None
        }
    }

    pub fn from_index(index: u32) -> Option<Square> {
        if index as usize >= SQUARE_COUNT {
            return None;
        }

        Some(Square {
            file: (index % BOARD_SIZE as u32) as u8,
            rank: (index / BOARD_SIZE as u32) as u8,
        })
    }

    #[inline(always)]
    pub fn index(self) -> u32 {
        self.rank as u32 * BOARD_SIZE as u32 + self.file as u32
    }

    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        Square::new(
            (self.file as i8).checked_add(file_delta)?,
            (self.rank as i8).checked_add(rank_delta)?
        )
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARE_COUNT as u32).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.file, self.rank)
    }
}
