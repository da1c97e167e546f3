//! Weakly totally anti-symmetric quasigroup construction.
//!
//! A quasigroup is a set with a binary operation whose multiplication table
//! is a Latin square. Weak total anti-symmetry (WTA) is the extra property
//! `(i*j)*k != (i*k)*j` for `j != k`, which is exactly what the Damm folding
//! protocol needs to detect adjacent transpositions.
//!
//! [`Quasigroup::build`] selects one of four construction strategies by case
//! analysis on the order n:
//!
//! | Order | Strategy |
//! |-------|----------|
//! | n <= 2, n = 6 | fail, proven impossibility |
//! | n = 10 | the historical fixed Cayley table |
//! | n odd | cyclic difference `(j - i) mod n` |
//! | n = 2 (mod 4), n != 10 | fail, no construction for this residue class |
//! | n = 2^d, d >= 2 | GF(2^d) field doubling: `2*i + j` |
//! | n = 2^d * m, m odd > 1 | coordinate-wise product of the two rules |
//!
//! ## Example
//!
//! ```
//! use dammgen::quasigroup::Quasigroup;
//!
//! let q = Quasigroup::build(5).unwrap();
//! assert_eq!(q.mult(1, 3).unwrap(), 2); // (3 - 1) mod 5
//!
//! // Left-inverse: the unique p with p * k = 0.
//! let p = q.inv(3).unwrap();
//! assert_eq!(q.mult(p, 3).unwrap(), 0);
//!
//! assert!(Quasigroup::build(6).is_err());
//! ```

mod table;

pub use table::ORDER10_CAYLEY_TABLE;

use std::fmt;

use ndarray::Array2;

use crate::error::{Error, Result};
use crate::gf::BinaryGaloisField;
use crate::oracle::check_antisymmetry;
use crate::utils::split_power_of_two;

/// The construction strategy selected for an order, each variant carrying
/// only the state its multiplication rule needs.
#[derive(Debug, Clone)]
enum Strategy {
    /// Order 10: look up the historical Cayley table.
    FixedTable(&'static [[u32; 10]; 10]),
    /// Odd orders: `(j - i) mod n`.
    OddCyclic,
    /// Orders 2^d: `2*i + j` in GF(2^d). The field-doubling term breaks
    /// the symmetry that plain XOR addition would have.
    BinaryPower(BinaryGaloisField),
    /// Orders 2^d * m with m odd > 1: power-of-two rule on `k div m`,
    /// odd rule on `k mod m`, recombined as `c1 * m + c2`.
    Composite {
        field: BinaryGaloisField,
        odd_part: u32,
    },
}

/// A quasigroup with the weak total anti-symmetry property.
///
/// Immutable once built; safe to share across threads for concurrent
/// checksum computations.
#[derive(Debug, Clone)]
pub struct Quasigroup {
    order: u32,
    strategy: Strategy,
}

impl Quasigroup {
    /// Build a WTA quasigroup of the given order.
    ///
    /// For the composite strategy the transposition-detection guarantee has
    /// no published proof, so the constructed table is certified by the
    /// brute-force oracle before it is returned. The other strategies are
    /// proven classes and are not re-checked here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOrder`] for orders 0, 1, 2 and 6 (no WTA
    /// quasigroup exists) and for orders congruent to 2 mod 4 other than 10
    /// (no construction is known). Propagates field-construction and
    /// certification failures.
    pub fn build(order: u32) -> Result<Self> {
        if order <= 2 {
            return Err(Error::UnsupportedOrder {
                order,
                reason: "orders below 3 admit no weakly totally anti-symmetric quasigroup",
            });
        }
        if order == 6 {
            return Err(Error::UnsupportedOrder {
                order,
                reason: "proven impossibility",
            });
        }

        let strategy = if order == 10 {
            Strategy::FixedTable(ORDER10_CAYLEY_TABLE)
        } else if order % 2 == 1 {
            Strategy::OddCyclic
        } else if order % 4 == 2 {
            return Err(Error::UnsupportedOrder {
                order,
                reason: "no construction is known for orders congruent to 2 mod 4",
            });
        } else {
            let (degree, odd_part) = split_power_of_two(order);
            let field = BinaryGaloisField::new(degree)?;
            if odd_part == 1 {
                Strategy::BinaryPower(field)
            } else {
                Strategy::Composite { field, odd_part }
            }
        };

        let quasigroup = Self { order, strategy };
        if matches!(quasigroup.strategy, Strategy::Composite { .. }) {
            quasigroup.certify()?;
        }
        Ok(quasigroup)
    }

    /// Get the order n.
    #[must_use]
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Get the name of the construction strategy in use.
    #[must_use]
    pub fn strategy(&self) -> &'static str {
        match self.strategy {
            Strategy::FixedTable(_) => "fixed-table",
            Strategy::OddCyclic => "odd-cyclic",
            Strategy::BinaryPower(_) => "binary-power",
            Strategy::Composite { .. } => "composite",
        }
    }

    /// Quasigroup multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementOutOfRange`] if either operand is outside
    /// `0..order`.
    pub fn mult(&self, i: u32, j: u32) -> Result<u32> {
        self.check_element(i)?;
        self.check_element(j)?;
        Ok(self.mult_unchecked(i, j))
    }

    /// Left inverse: the unique `p` with `mult(p, k) == 0`.
    ///
    /// Uniqueness and existence follow from the Latin-square invariant:
    /// column k of the table is a permutation, so exactly one row maps k
    /// to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementOutOfRange`] for an invalid `k`. An
    /// exhausted search returns [`Error::NoInverse`]; that cannot happen
    /// unless the Latin-square invariant is broken, and is surfaced rather
    /// than papered over.
    pub fn inv(&self, k: u32) -> Result<u32> {
        self.check_element(k)?;
        (0..self.order)
            .find(|&p| self.mult_unchecked(p, k) == 0)
            .ok_or(Error::NoInverse {
                value: k,
                order: self.order,
            })
    }

    /// Right inverse: the unique `j` with `mult(k, j) == 0`.
    ///
    /// Row k of the table is a permutation, so exactly one symbol
    /// completes k to zero. This is the inverse a check character needs:
    /// the checksum fold multiplies the accumulator on the right, so the
    /// appended symbol must close the row, not the column. The two
    /// inverses coincide only when the table's zero pattern is symmetric,
    /// which holds for the fixed-table and odd-cyclic strategies but not
    /// for the field-based ones.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementOutOfRange`] for an invalid `k`, or
    /// [`Error::NoInverse`] on an exhausted search as in [`Self::inv`].
    pub fn right_inv(&self, k: u32) -> Result<u32> {
        self.check_element(k)?;
        (0..self.order)
            .find(|&j| self.mult_unchecked(k, j) == 0)
            .ok_or(Error::NoInverse {
                value: k,
                order: self.order,
            })
    }

    /// Build the full Cayley table of the operation.
    #[must_use]
    pub fn cayley_table(&self) -> Array2<u32> {
        let n = self.order as usize;
        Array2::from_shape_fn((n, n), |(i, j)| self.mult_unchecked(i as u32, j as u32))
    }

    /// Certify the Latin-square and WTA invariants with the oracle.
    ///
    /// Cubic in the order; intended for tests and for one-off checks at
    /// construction, not for the checksum path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VerificationFailed`] naming the violated property,
    /// including the witness triple for an anti-symmetry violation.
    pub fn certify(&self) -> Result<()> {
        let report = check_antisymmetry(&self.cayley_table());
        if !report.is_latin_square {
            return Err(Error::verification_failed(format!(
                "{self} multiplication table is not a Latin square"
            )));
        }
        if let Some(w) = report.counterexample {
            return Err(Error::verification_failed(format!(
                "{self} is not weakly totally anti-symmetric: \
                 ({} * {}) * {} = ({} * {}) * {} = {}",
                w.i, w.j, w.k, w.i, w.k, w.j, w.value
            )));
        }
        Ok(())
    }

    /// Dispatch to the strategy's rule. Operands must already be validated.
    fn mult_unchecked(&self, i: u32, j: u32) -> u32 {
        match &self.strategy {
            Strategy::FixedTable(t) => t[i as usize][j as usize],
            Strategy::OddCyclic => (self.order + j - i) % self.order,
            // add is XOR in characteristic 2
            Strategy::BinaryPower(field) => field.mult_unchecked(2, i) ^ j,
            Strategy::Composite { field, odd_part } => {
                let m = *odd_part;
                let (q1, r1) = (i / m, i % m);
                let (q2, r2) = (j / m, j % m);
                let c1 = field.mult_unchecked(2, q1) ^ q2;
                let c2 = (m + r2 - r1) % m;
                c1 * m + c2
            }
        }
    }

    fn check_element(&self, k: u32) -> Result<()> {
        if k < self.order {
            Ok(())
        } else {
            Err(Error::ElementOutOfRange {
                value: k,
                order: self.order,
            })
        }
    }
}

impl fmt::Display for Quasigroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "quasigroup of order {} ({})", self.order, self.strategy())
    }
}
