//! # twiddling
//!
//! Bit manipulation helpers for square sets.
//!
//! A square set is a 64-bit unsigned integer where bit `i` stands for the
//! square with index `i` (`rank * 8 + file`). These helpers are shared by
//! the occupancy bitboards, the highlight overlay and the membership set of
//! a move list.
//!
//! # Date
//! 18/10/2026

use bnum::BUint;

/// One bit per square of an 8x8 board.
pub type SquareSet = BUint<1>;

pub const EMPTY: SquareSet = SquareSet::ZERO;

#[inline(always)]
pub fn set_bit(x: &mut SquareSet, i: u32) {
    x.set_bit(i, true);
}

#[inline(always)]
pub fn get_bit(x: &SquareSet, i: u32) -> bool {
    x.bit(i)
}

pub fn count_bits(x: &SquareSet) -> u32 {
    x.count_ones()
}

/// Indices of every set bit, lowest first.
pub fn bit_indices(x: &SquareSet) -> Vec<u32> {
    let count = x.count_ones();
    let mut bits = *x;
    let mut indices = Vec::with_capacity(count as usize);

    while !bits.is_zero() {
        indices.push(bits.trailing_zeros());
        bits &= bits - SquareSet::ONE;                                          /* Drop the lowest set bit            */
    }

    indices
}
