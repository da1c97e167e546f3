//! Brute-force algebraic validators.
//!
//! This module certifies the two properties the checksum protocol depends
//! on: the Latin-square property (which makes a multiplication table a
//! genuine quasigroup and guarantees substitution-error detection) and weak
//! total anti-symmetry (which guarantees adjacent-transposition detection).
//!
//! The anti-symmetry scan is cubic in the order. No sub-cubic algorithm is
//! known to us; orders stay small enough (tens to low hundreds) that this
//! does not matter in practice.
//!
//! ## Example
//!
//! ```
//! use dammgen::oracle::{check_antisymmetry, is_latin_square};
//! use dammgen::quasigroup::Quasigroup;
//!
//! let q = Quasigroup::build(7).unwrap();
//! let table = q.cayley_table();
//!
//! assert!(is_latin_square(&table));
//! assert!(check_antisymmetry(&table).is_weakly_antisymmetric);
//! ```

use ndarray::{ArrayBase, Data, Ix2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of the anti-symmetry oracle on a multiplication table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AntisymmetryReport {
    /// Whether the table is a Latin square over `0..n` at all. The other
    /// fields are meaningless when this is false.
    pub is_latin_square: bool,
    /// Weak total anti-symmetry: `(i*j)*k != (i*k)*j` for all i and j != k.
    pub is_weakly_antisymmetric: bool,
    /// Strong total anti-symmetry: additionally `i*j != j*i` for i != j.
    /// Diagnostic only; the checksum guarantees need only the weak form.
    pub is_strongly_antisymmetric: bool,
    /// The first weak-anti-symmetry violation found, if any.
    pub counterexample: Option<WtaCounterexample>,
}

/// A witness that a table is not weakly totally anti-symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WtaCounterexample {
    /// Left operand of the outer products.
    pub i: u32,
    /// First of the two swapped operands.
    pub j: u32,
    /// Second of the two swapped operands (`j != k`).
    pub k: u32,
    /// The common value of `(i*j)*k` and `(i*k)*j`.
    pub value: u32,
}

/// Check that a matrix is a Latin square.
///
/// The matrix must be square, and every row and every column must be a
/// permutation of the same value set with each value occurring exactly once.
#[must_use]
pub fn is_latin_square<S>(matrix: &ArrayBase<S, Ix2>) -> bool
where
    S: Data<Elem = u32>,
{
    let (rows, cols) = matrix.dim();
    if rows != cols {
        return false;
    }
    let n = rows;
    if n == 0 {
        return false;
    }

    let mut reference: Vec<u32> = matrix.row(0).to_vec();
    reference.sort_unstable();
    if reference.windows(2).any(|w| w[0] == w[1]) {
        return false;
    }

    for i in 1..n {
        let mut row: Vec<u32> = matrix.row(i).to_vec();
        row.sort_unstable();
        if row != reference {
            return false;
        }
    }
    for j in 0..n {
        let mut col: Vec<u32> = matrix.column(j).to_vec();
        col.sort_unstable();
        if col != reference {
            return false;
        }
    }
    true
}

/// Check a multiplication table for weak and strong total anti-symmetry.
///
/// The table must be a Latin square over the symbols `0..n` (its values are
/// used as row indices); otherwise the report comes back with
/// `is_latin_square: false` and nothing else checked.
///
/// The weak scan stops at the first counterexample and records it. The
/// strong property is reported separately as a diagnostic: constructions
/// exist that are weakly but not strongly anti-symmetric, and the folding
/// scheme only requires the weak form.
#[must_use]
pub fn check_antisymmetry<S>(matrix: &ArrayBase<S, Ix2>) -> AntisymmetryReport
where
    S: Data<Elem = u32>,
{
    let invalid = AntisymmetryReport {
        is_latin_square: false,
        is_weakly_antisymmetric: false,
        is_strongly_antisymmetric: false,
        counterexample: None,
    };

    let (rows, cols) = matrix.dim();
    if rows != cols || rows == 0 {
        return invalid;
    }
    let n = rows;

    // Values index back into the table, so they must lie in 0..n.
    if matrix.iter().any(|&v| v as usize >= n) {
        return invalid;
    }
    if !is_latin_square(matrix) {
        return invalid;
    }

    let at = |i: usize, j: usize| matrix[[i, j]] as usize;

    let mut counterexample = None;
    'weak: for i in 0..n {
        for j in 0..n {
            let ij = at(i, j);
            for k in 0..n {
                if j == k {
                    continue;
                }
                let ik = at(i, k);
                if matrix[[ij, k]] == matrix[[ik, j]] {
                    counterexample = Some(WtaCounterexample {
                        i: i as u32,
                        j: j as u32,
                        k: k as u32,
                        value: matrix[[ij, k]],
                    });
                    break 'weak;
                }
            }
        }
    }

    let mut strong = true;
    'strong: for i in 0..n {
        for j in 0..i {
            if matrix[[i, j]] == matrix[[j, i]] {
                strong = false;
                break 'strong;
            }
        }
    }

    AntisymmetryReport {
        is_latin_square: true,
        is_weakly_antisymmetric: counterexample.is_none(),
        is_strongly_antisymmetric: strong,
        counterexample,
    }
}

/// Convenience wrapper: Latin square and weakly totally anti-symmetric.
#[must_use]
pub fn is_weakly_totally_antisymmetric<S>(matrix: &ArrayBase<S, Ix2>) -> bool
where
    S: Data<Elem = u32>,
{
    check_antisymmetry(matrix).is_weakly_antisymmetric
}

/// Parallel weak-anti-symmetry check over the outer loop.
///
/// Behaves like [`is_weakly_totally_antisymmetric`] but splits the cubic
/// scan across threads with rayon. Worth it only for orders in the
/// hundreds; below that the sequential scan wins.
#[cfg(feature = "parallel")]
#[must_use]
pub fn par_is_weakly_totally_antisymmetric<S>(matrix: &ArrayBase<S, Ix2>) -> bool
where
    S: Data<Elem = u32> + Sync,
{
    use rayon::prelude::*;

    let (rows, cols) = matrix.dim();
    if rows != cols || rows == 0 {
        return false;
    }
    let n = rows;
    if matrix.iter().any(|&v| v as usize >= n) {
        return false;
    }
    if !is_latin_square(matrix) {
        return false;
    }

    (0..n).into_par_iter().all(|i| {
        for j in 0..n {
            let ij = matrix[[i, j]] as usize;
            for k in 0..n {
                if j == k {
                    continue;
                }
                let ik = matrix[[i, k]] as usize;
                if matrix[[ij, k]] == matrix[[ik, j]] {
                    return false;
                }
            }
        }
        true
    })
}
