//! # move_list.rs
//!
//! Defines the candidate set produced by move generation.
//!
//! A `MoveList` keeps destinations in emission order alongside a square set
//! for constant-time membership tests. Pushing a square twice is a no-op, so
//! a list never holds duplicates.
//!
//! # Date
//! 18/10/2026

use std::slice::Iter;

use twiddling::{count_bits, get_bit, set_bit, SquareSet, EMPTY};

use crate::representations::square::Square;

#[derive(Debug, Clone, PartialEq)]
pub struct MoveList {
    squares: Vec<Square>,
    members: SquareSet,
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveList {
    pub fn new() -> Self {
        Self {
            squares: Vec::with_capacity(28),                                    /* Queen in the centre, empty board   */
            members: EMPTY,
        }
    }

    /// Appends `square` unless it is already present.
    pub fn push(&mut self, square: Square) -> bool {
        if self.contains(square) {
            return false;
        }

        set_bit(&mut self.members, square.index());
        self.squares.push(square);
        true
    }

    #[inline(always)]
    pub fn contains(&self, square: Square) -> bool {
        get_bit(&self.members, square.index())
    }

    pub fn len(&self) -> usize {
        debug_assert_eq!(count_bits(&self.members) as usize, self.squares.len());
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn as_slice(&self) -> &[Square] {
        &self.squares
    }

    pub fn iter(&self) -> Iter<'_, Square> {
        self.squares.iter()
    }

    /// The destinations as a square set, for highlighting.
    pub fn members(&self) -> &SquareSet {
        &self.members
    }
}

impl Extend<Square> for MoveList {
    fn extend<T: IntoIterator<Item = Square>>(&mut self, iter: T) {
        for square in iter {
            self.push(square);
        }
    }
}

impl FromIterator<Square> for MoveList {
    fn from_iter<T: IntoIterator<Item = Square>>(iter: T) -> Self {
        let mut result = MoveList::new();
        result.extend(iter);
        result
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Square;
    type IntoIter = Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.squares.iter()
    }
}
