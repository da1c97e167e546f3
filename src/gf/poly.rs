//! Irreducible binary polynomials for field construction.
//!
//! This module provides a database of irreducible polynomials over GF(2),
//! one per supported degree. An irreducible polynomial of degree d is
//! required to construct GF(2^d): it defines the reduction rule for
//! polynomial multiplication.
//!
//! Polynomials are encoded as bit patterns: bit i is the coefficient of x^i.
//! For example x^4 + x + 1 is `0b1_0011`. Every entry has its top bit at
//! position d, so the pattern has bit length d + 1.

/// Lookup table of irreducible polynomials over GF(2), indexed by degree.
///
/// Entries are `(degree, bits)` pairs. These are the standard primitive
/// polynomials for each degree; the degree-8 entry is the AES polynomial
/// x^8 + x^4 + x^3 + x + 1.
pub static IRREDUCIBLE_BINARY_POLYS: &[(u32, u32)] = &[
    // x + 1
    (1, 0b11),
    // x^2 + x + 1
    (2, 0b111),
    // x^3 + x + 1
    (3, 0b1011),
    // x^4 + x + 1
    (4, 0b1_0011),
    // x^5 + x^2 + 1
    (5, 0b10_0101),
    // x^6 + x + 1
    (6, 0b100_0011),
    // x^7 + x^3 + 1
    (7, 0b1000_1001),
    // x^8 + x^4 + x^3 + x + 1 (AES polynomial)
    (8, 0b1_0001_1011),
    // x^9 + x^4 + 1
    (9, 0b10_0001_0001),
    // x^10 + x^3 + 1
    (10, 0b100_0000_1001),
    // x^11 + x^2 + 1
    (11, 0b1000_0000_0101),
    // x^12 + x^6 + x^4 + x + 1
    (12, 0b1_0000_0101_0011),
    // x^13 + x^4 + x^3 + x + 1
    (13, 0b10_0000_0001_1011),
    // x^14 + x^10 + x^6 + x + 1
    (14, 0b100_0100_0100_0011),
    // x^15 + x + 1
    (15, 0b1000_0000_0000_0011),
    // x^16 + x^12 + x^3 + x + 1
    (16, 0b1_0001_0000_0000_1011),
];

/// Get the irreducible polynomial for GF(2^degree) as a bit pattern.
///
/// Returns `None` if no polynomial is available for the given degree.
#[must_use]
pub fn get_irreducible_poly(degree: u32) -> Option<u32> {
    IRREDUCIBLE_BINARY_POLYS
        .iter()
        .find(|&&(d, _)| d == degree)
        .map(|&(_, bits)| bits)
}

/// Check if an irreducible polynomial is available for GF(2^degree).
#[must_use]
pub fn has_irreducible_poly(degree: u32) -> bool {
    get_irreducible_poly(degree).is_some()
}

/// Get all degrees for which a field can be constructed.
#[must_use]
pub fn available_degrees() -> Vec<u32> {
    IRREDUCIBLE_BINARY_POLYS.iter().map(|&(d, _)| d).collect()
}
