//! Binary Galois field (finite field) arithmetic.
//!
//! This module implements GF(2^d), the characteristic-2 finite fields used
//! by the power-of-two and composite quasigroup constructions. Elements are
//! integers in `0..2^d` read as polynomials over GF(2) via their bit
//! patterns, reduced modulo a fixed irreducible polynomial looked up from a
//! reference table.
//!
//! ## Overview
//!
//! - [`BinaryGaloisField`]: the field value with add/mult/inv/div
//! - [`IRREDUCIBLE_BINARY_POLYS`]: per-degree modulus polynomials
//!
//! ## Example
//!
//! ```
//! use dammgen::gf::BinaryGaloisField;
//!
//! let gf4 = BinaryGaloisField::new(2).unwrap();
//!
//! // Addition is XOR
//! assert_eq!(gf4.add(2, 3).unwrap(), 1);
//!
//! // x * x = x + 1 under the modulus x^2 + x + 1
//! assert_eq!(gf4.mult(2, 2).unwrap(), 3);
//! ```

mod field;
mod poly;

pub use field::BinaryGaloisField;
pub use poly::{
    available_degrees, get_irreducible_poly, has_irreducible_poly, IRREDUCIBLE_BINARY_POLYS,
};
