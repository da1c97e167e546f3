//! The historical order-10 Cayley table.

/// Damm's original weakly totally anti-symmetric quasigroup of order 10.
///
/// Supplied as a constant rather than rederived: no closed-form construction
/// covers orders congruent to 2 mod 4, and this table is the published one
/// used for decimal check digits. `mult(i, j)` is `table[i][j]`.
///
/// The diagonal is all zeros, which makes the check character of a string
/// equal to its folded checksum directly.
pub static ORDER10_CAYLEY_TABLE: &[[u32; 10]; 10] = &[
    [0, 3, 1, 7, 5, 9, 8, 6, 4, 2],
    [7, 0, 9, 2, 1, 5, 4, 8, 6, 3],
    [4, 2, 0, 6, 8, 7, 1, 3, 5, 9],
    [1, 7, 5, 0, 9, 8, 3, 4, 2, 6],
    [6, 1, 2, 3, 0, 4, 5, 9, 7, 8],
    [3, 6, 7, 4, 2, 0, 9, 5, 8, 1],
    [5, 8, 6, 9, 7, 2, 0, 1, 3, 4],
    [8, 9, 4, 5, 3, 6, 2, 0, 1, 7],
    [9, 4, 3, 8, 6, 1, 7, 2, 0, 5],
    [2, 5, 8, 1, 4, 3, 6, 7, 9, 0],
];
