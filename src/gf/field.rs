//! Binary Galois field arithmetic.
//!
//! This module implements GF(2^d) with elements represented as bit patterns:
//! bit i of an element is the coefficient of x^i in its polynomial form.
//! Addition is XOR; multiplication is a carry-less product reduced modulo a
//! fixed irreducible polynomial taken from [`super::poly`].
//!
//! ## Example
//!
//! ```
//! use dammgen::gf::BinaryGaloisField;
//!
//! // GF(16) with modulus x^4 + x + 1
//! let gf16 = BinaryGaloisField::new(4).unwrap();
//!
//! assert_eq!(gf16.add(0b1010, 0b0110).unwrap(), 0b1100);
//! assert_eq!(gf16.mult(2, 8).unwrap(), 0b0011); // x * x^3 = x^4 = x + 1
//! ```

use std::fmt;

use ndarray::{s, Array2};

use super::poly::get_irreducible_poly;
use crate::error::{Error, Result};
use crate::oracle::is_latin_square;

/// A binary Galois field GF(2^d).
///
/// Immutable once constructed: the degree, order and reduction polynomial
/// are fixed, so a field value can be freely shared between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryGaloisField {
    /// The extension degree d.
    degree: u32,
    /// The field order 2^d.
    order: u32,
    /// The irreducible polynomial, bit-pattern encoded, bit length d + 1.
    polynomial: u32,
}

impl BinaryGaloisField {
    /// Create the field GF(2^degree).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoIrreduciblePolynomial`] if the polynomial table
    /// has no entry for the degree (supported degrees are 1..=16).
    ///
    /// # Example
    ///
    /// ```
    /// use dammgen::gf::BinaryGaloisField;
    ///
    /// let gf256 = BinaryGaloisField::new(8).unwrap();
    /// assert_eq!(gf256.order(), 256);
    ///
    /// assert!(BinaryGaloisField::new(40).is_err());
    /// ```
    pub fn new(degree: u32) -> Result<Self> {
        let polynomial =
            get_irreducible_poly(degree).ok_or(Error::NoIrreduciblePolynomial(degree))?;

        Ok(Self {
            degree,
            order: 1 << degree,
            polynomial,
        })
    }

    /// Get the extension degree d.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Get the field order 2^d.
    #[must_use]
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Get the reduction polynomial as a bit pattern.
    #[must_use]
    pub fn polynomial(&self) -> u32 {
        self.polynomial
    }

    /// Reduce an arbitrary bit pattern to a field element.
    ///
    /// Performs polynomial long-division remainder over GF(2): while the
    /// pattern has degree >= d, XOR in the modulus shifted so its top bit
    /// lines up with the pattern's top bit.
    #[must_use]
    pub fn reduce(&self, mut bits: u64) -> u32 {
        let modulus = u64::from(self.polynomial);
        while bits >= u64::from(self.order) {
            let top = 63 - bits.leading_zeros();
            bits ^= modulus << (top - self.degree);
        }
        bits as u32
    }

    /// Field addition: XOR of the bit patterns.
    ///
    /// In characteristic 2 every element is its own additive inverse, so
    /// this operation doubles as subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementOutOfRange`] if either operand is not a
    /// field element.
    pub fn add(&self, i: u32, j: u32) -> Result<u32> {
        self.check_element(i)?;
        self.check_element(j)?;
        Ok(i ^ j)
    }

    /// Field multiplication: carry-less product reduced by the modulus.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementOutOfRange`] if either operand is not a
    /// field element.
    pub fn mult(&self, i: u32, j: u32) -> Result<u32> {
        self.check_element(i)?;
        self.check_element(j)?;
        Ok(self.mult_unchecked(i, j))
    }

    /// Multiplicative inverse, by linear search over the field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementOutOfRange`] if `k` is not a field element,
    /// or [`Error::NoInverse`] if no element multiplies with `k` to one.
    /// The latter is reachable: zero has no multiplicative inverse.
    pub fn inv(&self, k: u32) -> Result<u32> {
        self.check_element(k)?;
        (0..self.order)
            .find(|&p| self.mult_unchecked(p, k) == 1)
            .ok_or(Error::NoInverse {
                value: k,
                order: self.order,
            })
    }

    /// Field division: `a * b^(-1)`.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::NoInverse`] when `b` is zero, and
    /// [`Error::ElementOutOfRange`] for invalid operands.
    pub fn div(&self, a: u32, b: u32) -> Result<u32> {
        let b_inv = self.inv(b)?;
        self.mult(a, b_inv)
    }

    /// Build the full order-by-order multiplication table.
    #[must_use]
    pub fn multiplication_table(&self) -> Array2<u32> {
        let n = self.order as usize;
        Array2::from_shape_fn((n, n), |(i, j)| self.mult_unchecked(i as u32, j as u32))
    }

    /// Certify the field axioms by brute force.
    ///
    /// Checks that the multiplication table restricted to nonzero elements
    /// is a Latin square (every unit has a unique inverse) and that the
    /// full table is symmetric (multiplication commutes). Addition is XOR
    /// and therefore commutative by construction. Verification only; never
    /// on the arithmetic path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VerificationFailed`] if either property is violated,
    /// which would indicate a reducible modulus polynomial.
    pub fn certify(&self) -> Result<()> {
        let table = self.multiplication_table();

        let units = table.slice(s![1.., 1..]);
        if !is_latin_square(&units) {
            return Err(Error::verification_failed(format!(
                "unit multiplication table of {self} is not a Latin square"
            )));
        }

        let n = self.order as usize;
        for i in 0..n {
            for j in 0..i {
                if table[[i, j]] != table[[j, i]] {
                    return Err(Error::verification_failed(format!(
                        "multiplication in {self} is not commutative: {i} * {j} != {j} * {i}"
                    )));
                }
            }
        }

        Ok(())
    }

    /// Carry-less multiply then reduce. Operands must already be validated.
    pub(crate) fn mult_unchecked(&self, i: u32, j: u32) -> u32 {
        let mut acc = 0u64;
        for p in 0..self.degree {
            if (j >> p) & 1 == 1 {
                acc ^= u64::from(i) << p;
            }
        }
        self.reduce(acc)
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

impl fmt::Display for BinaryGaloisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF(2^{})", self.degree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_creation() {
        let gf4 = BinaryGaloisField::new(2).unwrap();
        assert_eq!(gf4.degree(), 2);
        assert_eq!(gf4.order(), 4);
        assert_eq!(gf4.polynomial(), 0b111);

        assert!(BinaryGaloisField::new(0).is_err());
        assert!(BinaryGaloisField::new(40).is_err());
    }

    #[test]
    fn test_add_is_xor() {
        let gf8 = BinaryGaloisField::new(3).unwrap();
        assert_eq!(gf8.add(0b101, 0b011).unwrap(), 0b110);
        // Every element is its own additive inverse.
        for k in 0..8 {
            assert_eq!(gf8.add(k, k).unwrap(), 0);
        }
    }

    #[test]
    fn test_mult_gf4() {
        // GF(4) with modulus x^2 + x + 1: 2 * 2 = x^2 = x + 1 = 3.
        let gf4 = BinaryGaloisField::new(2).unwrap();
        assert_eq!(gf4.mult(2, 2).unwrap(), 3);
        assert_eq!(gf4.mult(2, 3).unwrap(), 1);
        assert_eq!(gf4.mult(3, 3).unwrap(), 2);
    }

    #[test]
    fn test_mult_gf8() {
        // GF(8) with modulus x^3 + x + 1.
        let gf8 = BinaryGaloisField::new(3).unwrap();
        // (x + 1)^2 = x^2 + 1
        assert_eq!(gf8.mult(3, 3).unwrap(), 5);
        // (x^2 + 1)^2 = x^4 + 1 -> x^2 + x + 1
        assert_eq!(gf8.mult(5, 5).unwrap(), 7);
        // Multiplying by one and zero.
        for k in 0..8 {
            assert_eq!(gf8.mult(k, 1).unwrap(), k);
            assert_eq!(gf8.mult(k, 0).unwrap(), 0);
        }
    }

    #[test]
    fn test_reduce_identity_below_order() {
        let gf16 = BinaryGaloisField::new(4).unwrap();
        for bits in 0..16u64 {
            assert_eq!(gf16.reduce(bits), bits as u32);
        }
        // x^4 reduces to x + 1 under x^4 + x + 1.
        assert_eq!(gf16.reduce(0b1_0000), 0b0011);
    }

    #[test]
    fn test_element_out_of_range() {
        let gf4 = BinaryGaloisField::new(2).unwrap();
        assert!(matches!(
            gf4.mult(4, 1),
            Err(Error::ElementOutOfRange { value: 4, order: 4 })
        ));
        assert!(gf4.add(1, 7).is_err());
        assert!(gf4.inv(9).is_err());
    }

    #[test]
    fn test_inverse() {
        let gf8 = BinaryGaloisField::new(3).unwrap();
        for k in 1..8 {
            let k_inv = gf8.inv(k).unwrap();
            assert_eq!(gf8.mult(k, k_inv).unwrap(), 1, "k={k}");
        }
        // Zero has no multiplicative inverse.
        assert!(matches!(
            gf8.inv(0),
            Err(Error::NoInverse { value: 0, order: 8 })
        ));
    }

    #[test]
    fn test_division() {
        let gf16 = BinaryGaloisField::new(4).unwrap();
        for a in 0..16 {
            for b in 1..16 {
                let q = gf16.div(a, b).unwrap();
                assert_eq!(gf16.mult(q, b).unwrap(), a, "a={a}, b={b}");
            }
        }
        assert!(gf16.div(5, 0).is_err());
    }

    #[test]
    fn test_certify_all_degrees() {
        for degree in 1..=8 {
            let gf = BinaryGaloisField::new(degree).unwrap();
            gf.certify()
                .unwrap_or_else(|e| panic!("GF(2^{degree}) failed certification: {e}"));
        }
    }

    #[test]
    fn test_display() {
        let gf8 = BinaryGaloisField::new(3).unwrap();
        assert_eq!(format!("{gf8}"), "GF(2^3)");
    }
}
